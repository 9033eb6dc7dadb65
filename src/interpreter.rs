use crate::command::{CommandContext, LineSource, ReadOutcome, Status, CONTINUE, is_terminate};
use crate::config::{BANNER, PromptConfig};
use crate::io_adapters::EditorSource;
use crate::layout::KernelLayout;
use crate::registry::{Registry, builtin_registry};
use crate::tokenizer::{self, ArgumentVector};
use anyhow::Result;
use log::{debug, info, trace};
use std::io::Write;

/// The kernel command prompt: dispatcher and read-dispatch loop.
///
/// An interpreter owns an immutable [`Registry`], the [`KernelLayout`] the
/// builtins report on, and its [`PromptConfig`]. All output is written to the
/// sink passed in by the caller.
///
/// Example
/// ```
/// use fos_prompt::Interpreter;
/// let sh = Interpreter::default();
/// let mut out = Vec::new();
/// let status = sh.execute("rep hi 2 & bogus", &mut out).unwrap();
/// assert_eq!(status, 0);
/// assert_eq!(String::from_utf8(out).unwrap(), "hi\nhi\nUnknown command 'bogus'\n");
/// ```
pub struct Interpreter {
    registry: Registry,
    layout: KernelLayout,
    config: PromptConfig,
}

impl Interpreter {
    pub fn new(registry: Registry, layout: KernelLayout, config: PromptConfig) -> Self {
        Self {
            registry,
            layout,
            config,
        }
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Execute one command line, which may hold several `&`-separated commands.
    ///
    /// Commands run left to right. The first negative status is returned at
    /// once and the rest of the line is not executed. Unknown commands and
    /// oversized lines are reported on `out` and do not stop the line.
    pub fn execute(&self, line: &str, out: &mut dyn Write) -> Result<Status> {
        let segments = match tokenizer::split_commands(line, self.config.max_commands) {
            Ok(segments) => segments,
            Err(err) => {
                debug!("dropping line: {err}");
                writeln!(out, "too many commands (max {})", self.config.max_commands)?;
                return Ok(CONTINUE);
            }
        };

        for segment in segments {
            let argv = match tokenizer::split_arguments(segment, self.config.max_arguments) {
                Ok(argv) => argv,
                Err(err) => {
                    debug!("skipping {segment:?}: {err}");
                    writeln!(out, "too many arguments (max {})", self.config.max_arguments)?;
                    continue;
                }
            };
            trace!("argv = {:?}", argv.as_slice());

            let status = self.invoke(&argv, out)?;
            if is_terminate(status) {
                debug!("{:?} requested termination ({status})", argv.name());
                return Ok(status);
            }
        }
        Ok(CONTINUE)
    }

    /// Look up `argv[0]` and run the matching handler.
    ///
    /// An empty argument vector is a no-op.
    pub fn invoke(&self, argv: &ArgumentVector<'_>, out: &mut dyn Write) -> Result<Status> {
        let Some(name) = argv.name() else {
            return Ok(CONTINUE);
        };

        match self.registry.lookup(name) {
            Some(spec) => {
                debug!("dispatching {name} with {} argument(s)", argv.argc());
                let ctx = CommandContext {
                    registry: &self.registry,
                    layout: &self.layout,
                };
                spec.handler().execute(argv, out, &ctx)
            }
            None => {
                debug!("unknown command {name:?}");
                writeln!(out, "Unknown command '{name}'")?;
                Ok(CONTINUE)
            }
        }
    }

    /// Run the prompt loop until a command asks to stop or `source` closes.
    ///
    /// Prints the banner once (unless disabled), then reads and executes lines.
    /// [`ReadOutcome::NoInput`] is skipped and the source is asked again.
    /// Returns the session result, which is 0 for every normal ending.
    pub fn run(&self, source: &mut dyn LineSource, out: &mut dyn Write) -> Result<i32> {
        if self.config.show_banner {
            write!(out, "{BANNER}")?;
        }
        info!("prompt session started");

        loop {
            out.flush()?;
            match source.read_line(&self.config.prompt)? {
                ReadOutcome::Line(line) => {
                    let status = self.execute(&line, out)?;
                    if is_terminate(status) {
                        info!("prompt session halted");
                        break;
                    }
                }
                ReadOutcome::NoInput => continue,
                ReadOutcome::Closed => {
                    info!("line source closed, ending prompt session");
                    break;
                }
            }
        }
        out.flush()?;
        Ok(0)
    }

    /// Interactive session on the terminal, using a `rustyline` editor.
    pub fn repl(&self) -> Result<i32> {
        let mut source = EditorSource::new()?;
        self.run(&mut source, &mut std::io::stdout())
    }
}

impl Default for Interpreter {
    /// An interpreter with the builtin commands, the stock kernel layout and
    /// default settings.
    fn default() -> Self {
        Self::new(
            builtin_registry(),
            KernelLayout::default(),
            PromptConfig::default(),
        )
    }
}
