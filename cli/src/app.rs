//! Top-level dispatcher.
//!
//! [`Cli`] picks the subcommand named by the second token of the argument
//! vector, parses the remaining tokens into it and runs its handler. A
//! missing or unknown subcommand prints the top-level help; a help flag
//! followed by a subcommand name prints that subcommand's help.

use std::io::Write;
use std::process::ExitCode;

use anyhow::Context;
use flagset_core::{FlagError, ParserConfig, Strictness};
use tracing::{debug, info};

use crate::Subcommand;

/// What a call to [`Cli::run`] did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Help text was printed.
    Help,
    /// The named subcommand's handler ran to completion.
    Ran(String),
    /// Strict mode refused to run the subcommand.
    Rejected {
        subcommand: String,
        problems: Vec<String>,
    },
}

impl Outcome {
    /// Process exit status for this outcome.
    pub fn status(&self) -> u8 {
        match self {
            Outcome::Help | Outcome::Ran(_) => 0,
            Outcome::Rejected { .. } => 2,
        }
    }

    pub fn exit_code(&self) -> ExitCode {
        ExitCode::from(self.status())
    }

    /// Writes a strict-mode rejection as a heading line followed by one
    /// indented line per problem. Other outcomes write nothing.
    ///
    /// # Errors
    ///
    /// Fails when writing to `err` fails.
    pub fn report_rejection(&self, err: &mut dyn Write) -> std::io::Result<()> {
        if let Outcome::Rejected {
            subcommand,
            problems,
        } = self
        {
            writeln!(err, "{subcommand}: invalid arguments")?;
            for problem in problems {
                writeln!(err, "  {problem}")?;
            }
        }
        Ok(())
    }
}

/// A command-line application made of subcommands.
///
/// # Examples
///
/// ```
/// use flagset_cli::{Cli, Outcome, Subcommand};
///
/// let mut echo = Subcommand::new("echo", "Echo a string.").unwrap();
/// echo.add_str_arg(&["s", "text"], "A string to echo").unwrap();
/// echo.handle(|sub, out| {
///     writeln!(out, "{}", sub.get_str("s")?)?;
///     Ok(())
/// });
///
/// let mut cli = Cli::new("latest", "A simple echo command line tool.");
/// cli.subcommand(echo).unwrap();
///
/// let mut out = Vec::new();
/// let outcome = cli.run(["simpleecho", "echo", "--text", "hi"], &mut out).unwrap();
/// assert_eq!(outcome, Outcome::Ran("echo".to_string()));
/// assert_eq!(out, b"hi\n");
/// ```
#[derive(Debug)]
pub struct Cli {
    doc: String,
    version: String,
    config: ParserConfig,
    subcommands: Vec<Subcommand>,
}

impl Cli {
    /// Creates an application with no subcommands.
    ///
    /// `version` describes the release, e.g. `"2.1.3"`, `"beta"` or
    /// `"latest"`; `doc` is a short description printed atop the help.
    pub fn new(version: &str, doc: &str) -> Self {
        Self {
            doc: doc.to_string(),
            version: version.to_string(),
            config: ParserConfig::default(),
            subcommands: Vec::new(),
        }
    }

    /// Replaces the dispatcher configuration.
    pub fn with_config(mut self, config: ParserConfig) -> Self {
        self.config = config;
        self
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    pub fn subcommands(&self) -> &[Subcommand] {
        &self.subcommands
    }

    /// Adds a subcommand.
    ///
    /// # Errors
    ///
    /// Returns [`FlagError::DuplicateSubcommand`] if the name is taken or is
    /// one of the configured help flags.
    pub fn subcommand(&mut self, sub: Subcommand) -> Result<(), FlagError> {
        let name = sub.name();
        if self.config.is_help_flag(name) || self.find(name).is_some() {
            return Err(FlagError::DuplicateSubcommand(name.to_string()));
        }
        self.subcommands.push(sub);
        Ok(())
    }

    fn find(&self, name: &str) -> Option<&Subcommand> {
        self.subcommands.iter().find(|sub| sub.name() == name)
    }

    /// Top-level help: description and the list of subcommands.
    pub fn help_text(&self) -> String {
        let mut out = format!("{}\n\nSUBCOMMANDS\n", self.doc);
        for sub in &self.subcommands {
            out.push_str(&format!("  {}\t{}\n", sub.name(), sub.doc()));
        }
        out.push_str("  help\tthis help message\n\n");
        out.push_str(
            "Get help with a subcommand by passing it as an argument to the 'help' subcommand.\n",
        );
        out
    }

    /// Help for `topic` if it names a subcommand, otherwise the top-level
    /// help.
    pub fn help_for(&self, topic: Option<&str>) -> String {
        match topic.and_then(|name| self.find(name)) {
            Some(sub) => sub.help_text(),
            None => self.help_text(),
        }
    }

    /// Dispatches one invocation.
    ///
    /// `argv` is the full argument vector: program name, subcommand name,
    /// then flag tokens. Help and handler output go to `out`.
    ///
    /// Values parsed into a subcommand stay bound after the call returns.
    /// A later `run` of the same subcommand overwrites only the groups its
    /// tokens name, so a flag omitted the second time keeps the earlier
    /// value and does not count as missing.
    ///
    /// # Errors
    ///
    /// Fails when writing to `out` fails or the selected handler returns an
    /// error.
    pub fn run<I, S>(&mut self, argv: I, out: &mut dyn Write) -> anyhow::Result<Outcome>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let argv: Vec<String> = argv.into_iter().map(Into::into).collect();
        let Some(command) = argv.get(1) else {
            debug!("No subcommand given");
            out.write_all(self.help_text().as_bytes())?;
            return Ok(Outcome::Help);
        };

        if self.config.is_help_flag(command) {
            let topic = argv.get(2).map(String::as_str);
            debug!(topic = ?topic, "Printing help");
            out.write_all(self.help_for(topic).as_bytes())?;
            return Ok(Outcome::Help);
        }

        let strict = self.config.strictness == Strictness::Strict;
        let Some(sub) = self.subcommands.iter_mut().find(|sub| sub.name() == command.as_str()) else {
            info!(command = %command, "Unknown subcommand");
            out.write_all(self.help_text().as_bytes())?;
            return Ok(Outcome::Help);
        };

        let report = sub.parse(&argv[2..]);
        let sub: &Subcommand = sub;
        if strict {
            let problems = sub.strict_problems(&report);
            if !problems.is_empty() {
                info!(subcommand = sub.name(), problems = problems.len(), "Rejected invocation");
                return Ok(Outcome::Rejected {
                    subcommand: sub.name().to_string(),
                    problems,
                });
            }
        }

        info!(subcommand = sub.name(), "Running subcommand");
        sub.run(out)
            .with_context(|| format!("subcommand '{}' failed", sub.name()))?;
        Ok(Outcome::Ran(sub.name().to_string()))
    }

    /// Runs against the process arguments, writing to stdout. Strict-mode
    /// rejections are reported on stderr.
    ///
    /// # Errors
    ///
    /// Same as [`run`](Self::run).
    pub fn run_env(&mut self) -> anyhow::Result<ExitCode> {
        let stdout = std::io::stdout();
        let outcome = self.run(std::env::args(), &mut stdout.lock())?;
        outcome.report_rejection(&mut std::io::stderr().lock())?;
        Ok(outcome.exit_code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn calculator() -> Cli {
        let mut cli = Cli::new("latest", "A simple calculator CLI app.");
        for (name, doc) in [("add", "Add two numbers together."), ("multiply", "Multiply two numbers.")] {
            let mut sub = Subcommand::new(name, doc).unwrap();
            sub.add_int_arg(&["first", "f"], "first integer argument")
                .unwrap();
            sub.add_int_arg(&["second", "s"], "second integer argument")
                .unwrap();
            let multiply = name == "multiply";
            sub.handle(move |sub, out| {
                let (a, b) = (sub.get_int("f")?, sub.get_int("s")?);
                writeln!(out, "{}", if multiply { a * b } else { a + b })?;
                Ok(())
            });
            cli.subcommand(sub).unwrap();
        }
        cli
    }

    fn run(cli: &mut Cli, argv: &[&str]) -> (Outcome, String) {
        let mut out = Vec::new();
        let outcome = cli.run(argv.iter().copied(), &mut out).unwrap();
        (outcome, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_runs_selected_subcommand() {
        let mut cli = calculator();
        let (outcome, out) = run(&mut cli, &["calculator", "multiply", "-f=6", "--s", "7"]);
        assert_eq!(outcome, Outcome::Ran("multiply".to_string()));
        assert_eq!(out, "42\n");
    }

    #[test]
    fn test_no_arguments_prints_top_help() {
        let mut cli = calculator();
        let (outcome, out) = run(&mut cli, &["calculator"]);
        assert_eq!(outcome, Outcome::Help);
        assert!(out.starts_with("A simple calculator CLI app.\n\nSUBCOMMANDS\n"));
        assert!(out.contains("  add\tAdd two numbers together.\n"));
        assert!(out.contains("  help\tthis help message\n"));
    }

    #[test]
    fn test_help_flags_and_topics() {
        let mut cli = calculator();
        for flag in ["help", "--help", "-h"] {
            let (outcome, out) = run(&mut cli, &["calculator", flag]);
            assert_eq!(outcome, Outcome::Help);
            assert!(out.contains("SUBCOMMANDS"));
        }

        let (_, out) = run(&mut cli, &["calculator", "help", "add"]);
        assert!(out.starts_with("Add two numbers together.\n\nARGUMENTS\n"));

        let (_, out) = run(&mut cli, &["calculator", "-h", "nonexistent"]);
        assert!(out.contains("SUBCOMMANDS"));
    }

    #[test]
    fn test_unknown_subcommand_prints_top_help() {
        let mut cli = calculator();
        let (outcome, out) = run(&mut cli, &["calculator", "power", "-f", "2"]);
        assert_eq!(outcome, Outcome::Help);
        assert!(out.contains("SUBCOMMANDS"));
    }

    #[test]
    fn test_handler_error_is_propagated_with_context() {
        let mut cli = calculator();
        let err = cli
            .run(["calculator", "add", "-f", "1"], &mut Vec::new())
            .unwrap_err();
        assert_eq!(err.to_string(), "subcommand 'add' failed");
        assert_eq!(
            err.root_cause().to_string(),
            "key not available: s"
        );
    }

    #[test]
    fn test_strict_mode_rejects_bad_values() {
        let config = ParserConfig {
            strictness: Strictness::Strict,
            ..ParserConfig::default()
        };
        let mut cli = calculator().with_config(config);
        let (outcome, out) = run(&mut cli, &["calculator", "add", "-f", "x", "-s", "1"]);
        assert!(out.is_empty());
        match outcome {
            Outcome::Rejected {
                subcommand,
                problems,
            } => {
                assert_eq!(subcommand, "add");
                assert_eq!(problems.len(), 2);
            }
            other => panic!("expected rejection, got {other:?}"),
        }
    }

    #[test]
    fn test_subcommand_names_are_unique() {
        let mut cli = calculator();
        let dup = Subcommand::new("add", "again").unwrap();
        assert_eq!(
            cli.subcommand(dup).unwrap_err(),
            FlagError::DuplicateSubcommand("add".to_string())
        );
        let reserved = Subcommand::new("help", "reserved").unwrap();
        assert!(cli.subcommand(reserved).is_err());
        assert_eq!(cli.subcommands().len(), 2);
        assert_eq!(cli.version(), "latest");
    }

    #[test]
    fn test_values_persist_across_runs() {
        let mut cli = calculator();
        let (_, out) = run(&mut cli, &["calculator", "add", "-f", "1", "-s", "2"]);
        assert_eq!(out, "3\n");
        let (outcome, out) = run(&mut cli, &["calculator", "add", "-f", "5"]);
        assert_eq!(outcome, Outcome::Ran("add".to_string()));
        assert_eq!(out, "7\n");
    }

    #[test]
    fn test_report_rejection_text() {
        let outcome = Outcome::Rejected {
            subcommand: "add".to_string(),
            problems: vec![
                "invalid integer value for f: \"x\"".to_string(),
                "missing required argument: --second, --s".to_string(),
            ],
        };
        let mut err = Vec::new();
        outcome.report_rejection(&mut err).unwrap();
        assert_eq!(
            String::from_utf8(err).unwrap(),
            "add: invalid arguments\n  invalid integer value for f: \"x\"\n  missing required argument: --second, --s\n"
        );

        let mut err = Vec::new();
        Outcome::Help.report_rejection(&mut err).unwrap();
        assert!(err.is_empty());
    }

    #[test]
    fn test_exit_status() {
        assert_eq!(Outcome::Help.status(), 0);
        assert_eq!(Outcome::Ran("add".to_string()).status(), 0);
        assert_eq!(
            Outcome::Rejected {
                subcommand: "add".to_string(),
                problems: vec![],
            }
            .status(),
            2
        );
    }
}
