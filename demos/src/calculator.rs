//! Four-operation integer calculator.

use anyhow::{Context, anyhow, bail};
use flagset_cli::{Cli, Subcommand};
use flagset_core::Result;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operation {
    /// Applies the operation, failing on overflow and division by zero.
    pub fn apply(self, a: i64, b: i64) -> anyhow::Result<i64> {
        let result = match self {
            Operation::Add => a.checked_add(b),
            Operation::Subtract => a.checked_sub(b),
            Operation::Multiply => a.checked_mul(b),
            Operation::Divide => {
                if b == 0 {
                    bail!("division by zero");
                }
                a.checked_div(b)
            }
        };
        result.ok_or_else(|| anyhow!("integer overflow"))
    }

    fn name(self) -> &'static str {
        match self {
            Operation::Add => "add",
            Operation::Subtract => "subtract",
            Operation::Multiply => "multiply",
            Operation::Divide => "divide",
        }
    }

    fn doc(self) -> &'static str {
        match self {
            Operation::Add => "Add two numbers together.",
            Operation::Subtract => "Subtract two numbers.",
            Operation::Multiply => "Multiply two numbers together.",
            Operation::Divide => "Divide two numbers.",
        }
    }
}

/// Builds the subcommand for one operation, taking `--first|-f` and
/// `--second|-s`.
pub fn operation(op: Operation) -> Result<Subcommand> {
    let mut sub = Subcommand::new(op.name(), op.doc())?;
    sub.add_int_arg(&["first", "f"], "first integer argument")?;
    sub.add_int_arg(&["second", "s"], "second integer argument")?;

    let name = op.name();
    let (mixed, flags) = match op {
        Operation::Add => ("35", "35"),
        Operation::Subtract => ("-33", "-33"),
        Operation::Multiply => ("34", "34"),
        Operation::Divide => ("0", "2"),
    };
    sub.example(
        "with mixed arguments",
        &format!("calculator {name} -f 1 -second 34"),
        mixed,
    );
    let flags_cmd = if op == Operation::Divide {
        "calculator divide -f=4 --second=2".to_string()
    } else {
        format!("calculator {name} -f=1 --second=34")
    };
    sub.example("again with flags", &flags_cmd, flags);

    sub.handle(move |sub, out| {
        let a = sub.get_int("f").context("missing --first")?;
        let b = sub.get_int("s").context("missing --second")?;
        writeln!(out, "{}", op.apply(a, b)?)?;
        Ok(())
    });
    Ok(sub)
}

/// The whole calculator application.
pub fn app() -> Result<Cli> {
    let mut cli = Cli::new(env!("CARGO_PKG_VERSION"), "A simple calculator CLI app.");
    for op in [
        Operation::Add,
        Operation::Subtract,
        Operation::Multiply,
        Operation::Divide,
    ] {
        cli.subcommand(operation(op)?)?;
    }
    Ok(cli)
}
