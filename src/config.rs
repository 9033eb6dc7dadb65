use crate::tokenizer::MAX_ARGUMENTS;

/// Prompt shown before every line read.
pub const DEFAULT_PROMPT: &str = "FOS> ";

/// Printed once when the prompt session starts.
pub const BANNER: &str = "\nWelcome to the FOS kernel command prompt!\nType 'help' for a list of commands.\n";

/// Settings of a prompt session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptConfig {
    pub prompt: String,
    pub show_banner: bool,
    /// Maximum arguments per command, command name included.
    pub max_arguments: usize,
    /// Maximum `&`-separated commands per line.
    pub max_commands: usize,
}

impl Default for PromptConfig {
    fn default() -> Self {
        Self {
            prompt: DEFAULT_PROMPT.to_string(),
            show_banner: true,
            max_arguments: MAX_ARGUMENTS,
            max_commands: MAX_ARGUMENTS,
        }
    }
}
