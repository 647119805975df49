//! Subcommand dispatch for `flagset`.
//!
//! - [`Subcommand`] — a named command with its own
//!   [`ArgumentSet`](flagset_core::ArgumentSet), examples and handler.
//! - [`Example`] — a usage transcript rendered into subcommand help.
//! - [`Cli`] — picks a subcommand from the argument vector, prints help and
//!   runs handlers.
//!
//! # Example
//!
//! ```
//! use flagset_cli::{Cli, Subcommand};
//!
//! let mut greet = Subcommand::new("greet", "Say hello.").unwrap();
//! greet.add_str_param(&["name", "n"], "who to greet", "world").unwrap();
//! greet.example("", "hello greet -n=ferris", "hello, ferris");
//! greet.handle(|sub, out| {
//!     writeln!(out, "hello, {}", sub.get_str("name")?)?;
//!     Ok(())
//! });
//!
//! let mut cli = Cli::new("0.1.0", "Greets people.");
//! cli.subcommand(greet).unwrap();
//!
//! let mut out = Vec::new();
//! cli.run(["hello", "greet"], &mut out).unwrap();
//! assert_eq!(String::from_utf8(out).unwrap(), "hello, world\n");
//!
//! let mut help = Vec::new();
//! cli.run(["hello", "help", "greet"], &mut help).unwrap();
//! assert!(String::from_utf8(help).unwrap().contains("OPTIONS\n --name, --n\twho to greet\n"));
//! ```

mod app;
mod example;
mod subcommand;

pub use app::{Cli, Outcome};
pub use example::Example;
pub use subcommand::{Handler, Subcommand};
