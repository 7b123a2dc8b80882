use relay_common::traits::CommandSource;

/// One request to run the root command: who is asking, and the argument tokens
/// that followed the root name.
pub struct Invocation<'a> {
    pub source: &'a dyn CommandSource,
    pub arguments: Vec<String>,
}

impl<'a> Invocation<'a> {
    pub fn new(source: &'a dyn CommandSource, arguments: Vec<String>) -> Self {
        Self { source, arguments }
    }

    /// Whitespace-split tokens of a command line (without the root name).
    pub fn parse(source: &'a dyn CommandSource, line: &str) -> Self {
        let arguments = line.split_whitespace().map(str::to_string).collect();
        Self { source, arguments }
    }

    /// Like [`Invocation::parse`], but a line ending in whitespace gets a
    /// trailing empty token: the user has finished the previous word and is
    /// now completing the next one.
    pub fn for_completion(source: &'a dyn CommandSource, line: &str) -> Self {
        let mut invocation = Self::parse(source, line);
        if !invocation.arguments.is_empty() && line.ends_with(char::is_whitespace) {
            invocation.arguments.push(String::new());
        }
        invocation
    }
}
