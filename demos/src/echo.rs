//! String echo tool.

use flagset_cli::{Cli, Subcommand};
use flagset_core::Result;

/// The `echo` subcommand: prints `--s|--text`.
pub fn echo() -> Result<Subcommand> {
    let mut sub = Subcommand::new("echo", "Echo a string.")?;
    sub.add_str_arg(&["s", "text"], "A string to echo")?;
    sub.example("Echo a string", "simpleecho echo -s=example_string", "example_string");
    sub.example("Echo a string", "simpleecho echo --s \"example string\"", "example string");
    sub.handle(|sub, out| {
        match sub.get_str("s") {
            Ok(text) => writeln!(out, "{text}")?,
            Err(_) => writeln!(out, "No string found!")?,
        }
        Ok(())
    });
    Ok(sub)
}

/// The whole echo application.
pub fn app() -> Result<Cli> {
    let mut cli = Cli::new(env!("CARGO_PKG_VERSION"), "A simple echo command line tool.");
    cli.subcommand(echo()?)?;
    Ok(cli)
}
