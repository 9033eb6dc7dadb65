use crate::layout::KernelLayout;
use crate::registry::Registry;
use crate::tokenizer::ArgumentVector;
use anyhow::Result;
use std::io::Write;

/// Signal returned by every handler and by the dispatcher.
///
/// Any negative value asks the prompt to end the session; zero or positive
/// means "keep going". Wrong arguments and similar operator mistakes are
/// reported on the output and still return a non-negative status.
pub type Status = i32;

/// Status of a handler that finished and wants the session to continue.
pub const CONTINUE: Status = 0;

/// Status of a handler that wants the session to end.
pub const TERMINATE: Status = -1;

/// Whether `status` asks the prompt loop to stop.
pub fn is_terminate(status: Status) -> bool {
    status < 0
}

/// Read-only state a handler may consult while it runs.
pub struct CommandContext<'a> {
    /// Every registered command, in registration order.
    pub registry: &'a Registry,
    /// Addresses of the kernel image symbols.
    pub layout: &'a KernelLayout,
}

/// Object-safe contract implemented by everything the registry can invoke.
///
/// Handlers validate their own argument count. `argv[0]` is the name the
/// handler was invoked under. Output goes to `out`; an `Err` is reserved for
/// failures of the output itself, never for bad operator input.
pub trait CommandHandler {
    fn execute(
        &self,
        argv: &ArgumentVector<'_>,
        out: &mut dyn Write,
        ctx: &CommandContext<'_>,
    ) -> Result<Status>;
}

/// What a [`LineSource`] produced for one prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReadOutcome {
    /// A line of input, without its trailing newline.
    Line(String),
    /// Nothing this time (e.g. the operator pressed Ctrl-C); ask again.
    NoInput,
    /// The source is exhausted and will never produce another line.
    Closed,
}

/// Where the prompt loop gets its command lines from.
pub trait LineSource {
    /// Show `prompt` (if the source is interactive) and read one line.
    fn read_line(&mut self, prompt: &str) -> Result<ReadOutcome>;
}
