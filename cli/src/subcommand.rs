//! Subcommand handler.
//!
//! A [`Subcommand`] couples a name and description with an
//! [`ArgumentSet`], usage [`Example`]s and the function that runs when the
//! subcommand is selected.

use std::fmt;
use std::io::Write;

use flagset_core::{ArgumentSet, ParseReport, Result, Value, ValueType, validate_alias};

use crate::Example;

/// Function run when a subcommand is selected. It reads its flags from the
/// subcommand and writes its output to the given writer.
pub type Handler = Box<dyn Fn(&Subcommand, &mut dyn Write) -> anyhow::Result<()>>;

/// One subcommand of a [`Cli`](crate::Cli).
///
/// # Examples
///
/// ```
/// use flagset_cli::Subcommand;
///
/// let mut add = Subcommand::new("add", "Add two numbers together.").unwrap();
/// add.add_int_arg(&["first", "f"], "first integer argument").unwrap();
/// add.add_int_arg(&["second", "s"], "second integer argument").unwrap();
/// add.handle(|sub, out| {
///     writeln!(out, "{}", sub.get_int("f")? + sub.get_int("s")?)?;
///     Ok(())
/// });
///
/// add.parse(&["-f", "1", "--second=34"]);
/// let mut out = Vec::new();
/// add.run(&mut out).unwrap();
/// assert_eq!(out, b"35\n");
/// ```
pub struct Subcommand {
    name: String,
    doc: String,
    examples: Vec<Example>,
    handler: Handler,
    args: ArgumentSet,
}

fn noop(_: &Subcommand, _: &mut dyn Write) -> anyhow::Result<()> {
    Ok(())
}

impl fmt::Debug for Subcommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subcommand")
            .field("name", &self.name)
            .field("doc", &self.doc)
            .field("examples", &self.examples)
            .field("args", &self.args)
            .finish_non_exhaustive()
    }
}

impl Subcommand {
    /// Creates a subcommand with no flags and a handler that does nothing.
    ///
    /// # Errors
    ///
    /// Returns [`FlagError::InvalidAliasName`] if `name` breaks the alias
    /// naming rule.
    ///
    /// [`FlagError::InvalidAliasName`]: flagset_core::FlagError::InvalidAliasName
    pub fn new(name: &str, doc: &str) -> Result<Self> {
        validate_alias(name)?;
        Ok(Self {
            name: name.to_string(),
            doc: doc.to_string(),
            examples: Vec::new(),
            handler: Box::new(noop),
            args: ArgumentSet::new(),
        })
    }

    /// Name that selects this subcommand on the command line.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn doc(&self) -> &str {
        &self.doc
    }

    /// Usage examples in the order they were added.
    pub fn examples(&self) -> &[Example] {
        &self.examples
    }

    pub fn args(&self) -> &ArgumentSet {
        &self.args
    }

    /// Adds a required argument of the given type.
    pub fn add_arg<S: AsRef<str>>(
        &mut self,
        aliases: &[S],
        doc: &str,
        value_type: ValueType,
    ) -> Result<()> {
        self.args.add_required(aliases, doc, value_type)
    }

    /// Adds a parameter seeded with `default`.
    pub fn add_param<S: AsRef<str>>(
        &mut self,
        aliases: &[S],
        doc: &str,
        default: impl Into<Value>,
    ) -> Result<()> {
        self.args.add_parameter_with_default(aliases, doc, default)
    }

    /// Adds a required integer argument.
    pub fn add_int_arg<S: AsRef<str>>(&mut self, aliases: &[S], doc: &str) -> Result<()> {
        self.args.add_int_arg(aliases, doc)
    }

    /// Adds a required float argument.
    pub fn add_float_arg<S: AsRef<str>>(&mut self, aliases: &[S], doc: &str) -> Result<()> {
        self.args.add_float_arg(aliases, doc)
    }

    /// Adds a required string argument.
    pub fn add_str_arg<S: AsRef<str>>(&mut self, aliases: &[S], doc: &str) -> Result<()> {
        self.args.add_str_arg(aliases, doc)
    }

    /// Adds a required boolean argument.
    pub fn add_bool_arg<S: AsRef<str>>(&mut self, aliases: &[S], doc: &str) -> Result<()> {
        self.args.add_bool_arg(aliases, doc)
    }

    /// Adds a integer parameter seeded with `default`.
    pub fn add_int_param<S: AsRef<str>>(
        &mut self,
        aliases: &[S],
        doc: &str,
        default: i64,
    ) -> Result<()> {
        self.args.add_int_param(aliases, doc, default)
    }

    /// Adds a float parameter seeded with `default`.
    pub fn add_float_param<S: AsRef<str>>(
        &mut self,
        aliases: &[S],
        doc: &str,
        default: f64,
    ) -> Result<()> {
        self.args.add_float_param(aliases, doc, default)
    }

    /// Adds a string parameter seeded with `default`.
    pub fn add_str_param<S: AsRef<str>>(
        &mut self,
        aliases: &[S],
        doc: &str,
        default: &str,
    ) -> Result<()> {
        self.args.add_str_param(aliases, doc, default)
    }

    /// Adds a boolean parameter seeded with `default`.
    pub fn add_bool_param<S: AsRef<str>>(
        &mut self,
        aliases: &[S],
        doc: &str,
        default: bool,
    ) -> Result<()> {
        self.args.add_bool_param(aliases, doc, default)
    }

    /// Appends a usage example shown under `EXAMPLES` in the help text.
    pub fn example(&mut self, doc: &str, command: &str, output: &str) {
        self.examples.push(Example::new(doc, command, output));
    }

    /// Sets the function run when this subcommand is selected.
    pub fn handle<F>(&mut self, f: F)
    where
        F: Fn(&Subcommand, &mut dyn Write) -> anyhow::Result<()> + 'static,
    {
        self.handler = Box::new(f);
    }

    /// Parses the flag tokens that follow the subcommand name.
    pub fn parse<S: AsRef<str>>(&mut self, tokens: &[S]) -> ParseReport {
        self.args.parse(tokens)
    }

    /// Runs the handler against the values parsed so far.
    pub fn run(&self, out: &mut dyn Write) -> anyhow::Result<()> {
        (self.handler)(self, out)
    }

    /// Integer value of `alias`, looked up in required arguments first.
    pub fn get_int(&self, alias: &str) -> Result<i64> {
        self.args.get_int(alias)
    }

    /// Float value of `alias`.
    pub fn get_float(&self, alias: &str) -> Result<f64> {
        self.args.get_float(alias)
    }

    /// String value of `alias`.
    pub fn get_str(&self, alias: &str) -> Result<&str> {
        self.args.get_str(alias)
    }

    /// Boolean value of `alias`.
    pub fn get_bool(&self, alias: &str) -> Result<bool> {
        self.args.get_bool(alias)
    }

    /// Problems that keep a strict dispatcher from running the handler:
    /// values that failed to coerce and required arguments left unset.
    pub fn strict_problems(&self, report: &ParseReport) -> Vec<String> {
        let mut problems: Vec<String> = report.invalid_values().map(ToString::to_string).collect();
        problems.extend(self.args.missing_required().into_iter().map(|group| {
            format!("missing required argument:{}", group.flag_list())
        }));
        problems
    }

    /// Full help: description, `ARGUMENTS`, `OPTIONS` and `EXAMPLES`.
    pub fn help_text(&self) -> String {
        let mut out = format!("{}\n\n", self.doc);
        out.push_str(&self.args.help_text());
        if !self.examples.is_empty() {
            out.push_str("EXAMPLES\n");
            for example in &self.examples {
                out.push_str(&example.help_message());
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use flagset_core::FlagError;

    use super::*;

    fn adder() -> Subcommand {
        let mut sub = Subcommand::new("add", "Add two numbers together.").unwrap();
        sub.add_int_arg(&["first", "f"], "first integer argument")
            .unwrap();
        sub.add_int_arg(&["second", "s"], "second integer argument")
            .unwrap();
        sub.example("with mixed arguments", "calculator add -f 1 -second 34", "35");
        sub.handle(|sub, out| {
            let a = sub.get_int("f")?;
            let b = sub.get_int("s")?;
            writeln!(out, "{}", a + b)?;
            Ok(())
        });
        sub
    }

    #[test]
    fn test_new_rejects_invalid_name() {
        assert_eq!(
            Subcommand::new("-add", "doc").unwrap_err(),
            FlagError::InvalidAliasName("-add".to_string())
        );
        assert!(Subcommand::new("add", "doc").is_ok());
    }

    #[test]
    fn test_default_handler_does_nothing() {
        let sub = Subcommand::new("noop", "Does nothing.").unwrap();
        let mut out = Vec::new();
        sub.run(&mut out).unwrap();
        assert!(out.is_empty());
    }

    #[test]
    fn test_run_uses_parsed_values() {
        let mut sub = adder();
        sub.parse(&["-f", "1", "-second", "34"]);
        let mut out = Vec::new();
        sub.run(&mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "35\n");
    }

    #[test]
    fn test_run_propagates_missing_argument() {
        let mut sub = adder();
        sub.parse(&["-f", "1"]);
        let err = sub.run(&mut Vec::new()).unwrap_err();
        assert_eq!(
            err.downcast_ref::<FlagError>(),
            Some(&FlagError::KeyNotFound("s".to_string()))
        );
    }

    #[test]
    fn test_strict_problems() {
        let mut sub = adder();
        let report = sub.parse(&["-f", "one"]);
        let problems = sub.strict_problems(&report);
        assert_eq!(problems.len(), 3);
        assert_eq!(problems[0], "invalid integer value for f: \"one\"");
        assert!(problems[1].contains("--first, --f"));
        assert!(problems[2].contains("--second, --s"));
    }

    #[test]
    fn test_help_text_sections() {
        let mut sub = adder();
        sub.add_bool_param(&["verbose"], "show the working", false)
            .unwrap();
        let help = sub.help_text();
        assert!(help.starts_with("Add two numbers together.\n\nARGUMENTS\n"));
        assert!(help.contains("OPTIONS\n --verbose\tshow the working\n"));
        assert!(help.ends_with("EXAMPLES\n$ # with mixed arguments\n$ calculator add -f 1 -second 34\n35\n\n"));
    }

    #[test]
    fn test_generic_registration() {
        let mut sub = Subcommand::new("echo", "Echo a string.").unwrap();
        sub.add_arg(&["s", "text"], "A string to echo", ValueType::String)
            .unwrap();
        sub.add_param(&["times"], "repetitions", 2_i64).unwrap();
        sub.parse(&["--text", "hello"]);
        assert_eq!(sub.get_str("s").unwrap(), "hello");
        assert_eq!(sub.get_int("times").unwrap(), 2);
    }
}
