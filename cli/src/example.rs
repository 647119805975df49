//! Usage examples shown in subcommand help.

/// A sample invocation of a subcommand with optional context and output.
///
/// # Examples
///
/// ```
/// use flagset_cli::Example;
///
/// let ex = Example::new("Echo a string", "simpleecho echo -s=hi", "hi");
/// assert_eq!(ex.help_message(), "$ # Echo a string\n$ simpleecho echo -s=hi\nhi\n\n");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Example {
    /// Context or explanation, e.g. "search recursively".
    pub doc: String,
    /// The command text, e.g. `grep -r "hello world" .`.
    pub command: String,
    /// Plausible output of the command; may be made up.
    pub output: String,
}

impl Example {
    pub fn new(doc: &str, command: &str, output: &str) -> Self {
        Self {
            doc: doc.to_string(),
            command: command.to_string(),
            output: output.to_string(),
        }
    }

    /// Renders the example as shell-transcript lines. The `# doc` line and
    /// the output block are omitted when empty.
    pub fn help_message(&self) -> String {
        let mut out = String::new();
        if !self.doc.is_empty() {
            out.push_str(&format!("$ # {}\n", self.doc));
        }
        out.push_str(&format!("$ {}\n", self.command));
        if !self.output.is_empty() {
            out.push_str(&format!("{}\n\n", self.output));
        }
        out
    }
}
