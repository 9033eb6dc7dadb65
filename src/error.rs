use thiserror::Error;

/// Errors produced while splitting a line into tokens.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TokenizeError {
    /// More tokens were found than the caller's capacity allows.
    #[error("too many tokens (max {capacity})")]
    TooManyTokens { capacity: usize },
}

/// Errors produced while building a [`KernelLayout`](crate::layout::KernelLayout).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LayoutError {
    #[error("symbol {name} ({addr:#010x}) lies below the kernel base {base:#010x}")]
    BelowBase {
        name: &'static str,
        addr: usize,
        base: usize,
    },
    #[error("symbol {name} ({addr:#010x}) precedes {previous} ({previous_addr:#010x})")]
    OutOfOrder {
        name: &'static str,
        addr: usize,
        previous: &'static str,
        previous_addr: usize,
    },
}
