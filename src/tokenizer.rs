//! Splitting of raw command lines into segments and argument vectors.
//!
//! A line is split twice: first on [`COMMAND_SEPARATORS`] into compound-command
//! segments, then every segment on [`WHITESPACE`] into an [`ArgumentVector`].
//! Tokens are views into the input line and cannot outlive it.

use crate::error::TokenizeError;
use std::ops::Index;

/// Separates the commands of a compound command line.
pub const COMMAND_SEPARATORS: &[char] = &['&'];

/// Separates the arguments of a single command.
pub const WHITESPACE: &[char] = &['\t', '\r', '\n', ' '];

/// Default number of arguments (command name included) a segment may hold.
pub const MAX_ARGUMENTS: usize = 16;

/// Split `input` on any run of `separators`.
///
/// Leading and trailing separator runs produce no empty tokens, so an empty
/// input or one made only of separators yields no tokens at all.
///
/// # Errors
/// Returns [`TokenizeError::TooManyTokens`] when more than `capacity` tokens are
/// found. Nothing is truncated: the caller gets either every token or none.
pub fn split<'a>(
    input: &'a str,
    separators: &[char],
    capacity: usize,
) -> Result<Vec<&'a str>, TokenizeError> {
    let mut tokens = Vec::new();
    for token in input
        .split(|c: char| separators.contains(&c))
        .filter(|token| !token.is_empty())
    {
        if tokens.len() == capacity {
            return Err(TokenizeError::TooManyTokens { capacity });
        }
        tokens.push(token);
    }
    Ok(tokens)
}

/// Split a line into its `&`-separated command segments.
pub fn split_commands(line: &str, capacity: usize) -> Result<Vec<&str>, TokenizeError> {
    split(line, COMMAND_SEPARATORS, capacity)
}

/// Split one command segment into its arguments.
pub fn split_arguments(segment: &str, capacity: usize) -> Result<ArgumentVector<'_>, TokenizeError> {
    split(segment, WHITESPACE, capacity).map(ArgumentVector::new)
}

/// Arguments of one command invocation; `argv[0]` is the command name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArgumentVector<'a> {
    args: Vec<&'a str>,
}

impl<'a> ArgumentVector<'a> {
    pub fn new(args: Vec<&'a str>) -> Self {
        Self { args }
    }

    /// Number of arguments including the command name.
    pub fn argc(&self) -> usize {
        self.args.len()
    }

    pub fn is_empty(&self) -> bool {
        self.args.is_empty()
    }

    /// The command name, absent when the segment held only whitespace.
    pub fn name(&self) -> Option<&'a str> {
        self.args.first().copied()
    }

    pub fn get(&self, index: usize) -> Option<&'a str> {
        self.args.get(index).copied()
    }

    pub fn as_slice(&self) -> &[&'a str] {
        &self.args
    }
}

impl<'a> Index<usize> for ArgumentVector<'a> {
    type Output = &'a str;

    fn index(&self, index: usize) -> &Self::Output {
        &self.args[index]
    }
}
