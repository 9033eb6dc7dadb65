use crate::command::{CommandContext, CommandHandler, Status, CONTINUE, TERMINATE};
use crate::numeric::parse_long;
use crate::tokenizer::ArgumentVector;
use anyhow::Result;
use log::warn;
use std::io::Write;

/// Printed when a command is invoked with an argument count it does not accept.
pub const INVALID_ARGUMENTS: &str = "invalid number of arguments";

/// Commands shipped with the prompt.
///
/// A builtin declares its name, description and accepted argument count; the
/// blanket [`CommandHandler`] impl rejects other counts with
/// [`INVALID_ARGUMENTS`] before [`BuiltinCommand::run`] is reached.
pub trait BuiltinCommand {
    /// Name the command is registered under, e.g. "help".
    const NAME: &'static str;

    /// One-line description shown by `help`.
    const DESCRIPTION: &'static str;

    /// Whether `argc` (command name included) is a valid argument count.
    fn accepts(argc: usize) -> bool {
        argc <= 1
    }

    fn run(
        &self,
        argv: &ArgumentVector<'_>,
        out: &mut dyn Write,
        ctx: &CommandContext<'_>,
    ) -> Result<Status>;
}

impl<T: BuiltinCommand> CommandHandler for T {
    fn execute(
        &self,
        argv: &ArgumentVector<'_>,
        out: &mut dyn Write,
        ctx: &CommandContext<'_>,
    ) -> Result<Status> {
        if !T::accepts(argv.argc()) {
            writeln!(out, "{INVALID_ARGUMENTS}")?;
            return Ok(CONTINUE);
        }
        self.run(argv, out, ctx)
    }
}

/// Print every registered command with its description.
#[derive(Debug, Default)]
pub struct Help;

impl BuiltinCommand for Help {
    const NAME: &'static str = "help";
    const DESCRIPTION: &'static str = "Display this list of commands";

    fn run(
        &self,
        _argv: &ArgumentVector<'_>,
        out: &mut dyn Write,
        ctx: &CommandContext<'_>,
    ) -> Result<Status> {
        for spec in ctx.registry.iter() {
            writeln!(out, "{} - {}", spec.name(), spec.description())?;
        }
        Ok(CONTINUE)
    }
}

/// Print the kernel image symbols and its memory footprint.
#[derive(Debug, Default)]
pub struct KernelInfo;

impl BuiltinCommand for KernelInfo {
    const NAME: &'static str = "kernel_info";
    const DESCRIPTION: &'static str = "Display information about the kernel";

    fn run(
        &self,
        _argv: &ArgumentVector<'_>,
        out: &mut dyn Write,
        ctx: &CommandContext<'_>,
    ) -> Result<Status> {
        writeln!(out, "Special kernel symbols:")?;
        for symbol in ctx.layout.symbols() {
            writeln!(
                out,
                "  {}{:08x} (virt)  {:08x} (phys)",
                symbol.label, symbol.virt, symbol.phys
            )?;
        }
        writeln!(
            out,
            "Kernel executable memory footprint: {} KB",
            ctx.layout.footprint_kb()
        )?;
        Ok(CONTINUE)
    }
}

/// `rep <text> <n>`: print `text` on its own line `n` times.
#[derive(Debug, Default)]
pub struct Rep;

impl BuiltinCommand for Rep {
    const NAME: &'static str = "rep";
    const DESCRIPTION: &'static str = "Echo the given string N times -- usage:rep string n";

    fn accepts(argc: usize) -> bool {
        argc == 3
    }

    fn run(
        &self,
        argv: &ArgumentVector<'_>,
        out: &mut dyn Write,
        _ctx: &CommandContext<'_>,
    ) -> Result<Status> {
        let count = parse_long(argv[2], 10);
        if !count.clean {
            // strtol semantics: no leading digits means a count of 0.
            warn!("rep: count {:?} is not an integer, using {}", argv[2], count.value);
        }
        for _ in 0..count.value.max(0) {
            writeln!(out, "{}", argv[1])?;
        }
        Ok(CONTINUE)
    }
}

/// End the prompt session.
#[derive(Debug, Default)]
pub struct Halt;

impl BuiltinCommand for Halt {
    const NAME: &'static str = "halt";
    const DESCRIPTION: &'static str = "exit the kernel";

    fn run(
        &self,
        _argv: &ArgumentVector<'_>,
        _out: &mut dyn Write,
        _ctx: &CommandContext<'_>,
    ) -> Result<Status> {
        Ok(TERMINATE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::KernelLayout;
    use crate::registry::builtin_registry;

    fn run_builtin(handler: &dyn CommandHandler, args: &[&str]) -> (Status, String) {
        let registry = builtin_registry();
        let layout = KernelLayout::default();
        let ctx = CommandContext {
            registry: &registry,
            layout: &layout,
        };
        let argv = ArgumentVector::new(args.to_vec());
        let mut out = Vec::new();
        let status = handler.execute(&argv, &mut out, &ctx).unwrap();
        (status, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_help_lists_commands_in_order() {
        let (status, out) = run_builtin(&Help, &["help"]);
        assert_eq!(status, CONTINUE);
        assert_eq!(
            out,
            "help - Display this list of commands\n\
             kernel_info - Display information about the kernel\n\
             rep - Echo the given string N times -- usage:rep string n\n\
             halt - exit the kernel\n"
        );
    }

    #[test]
    fn test_help_rejects_arguments() {
        let (status, out) = run_builtin(&Help, &["help", "extra_arg"]);
        assert_eq!(status, CONTINUE);
        assert_eq!(out, "invalid number of arguments\n");
    }

    #[test]
    fn test_kernel_info_output() {
        let (status, out) = run_builtin(&KernelInfo, &["kernel_info"]);
        assert_eq!(status, CONTINUE);
        let lines: Vec<_> = out.lines().collect();
        assert_eq!(lines.len(), 6);
        assert_eq!(lines[0], "Special kernel symbols:");
        assert_eq!(
            lines[1],
            "  Start Address of the kernel \t\t\tf010000c (virt)  0010000c (phys)"
        );
        assert!(lines[4].contains("f0118a50 (virt)  00118a50 (phys)"));
        assert_eq!(lines[5], "Kernel executable memory footprint: 99 KB");
    }

    #[test]
    fn test_rep_prints_n_times() {
        let (status, out) = run_builtin(&Rep, &["rep", "X", "3"]);
        assert_eq!(status, CONTINUE);
        assert_eq!(out, "X\nX\nX\n");
    }

    #[test]
    fn test_rep_non_positive_and_garbage_counts_print_nothing() {
        for count in ["0", "-1", "abc"] {
            let (status, out) = run_builtin(&Rep, &["rep", "X", count]);
            assert_eq!(status, CONTINUE);
            assert_eq!(out, "", "count {count:?}");
        }
    }

    #[test]
    fn test_rep_uses_numeric_prefix() {
        let (_, out) = run_builtin(&Rep, &["rep", "ab", "2x"]);
        assert_eq!(out, "ab\nab\n");
    }

    #[test]
    fn test_rep_requires_exactly_two_arguments() {
        for args in [&["rep"][..], &["rep", "X"], &["rep", "X", "1", "2"]] {
            let (status, out) = run_builtin(&Rep, args);
            assert_eq!(status, CONTINUE);
            assert_eq!(out, "invalid number of arguments\n");
        }
    }

    #[test]
    fn test_halt_terminates_unless_given_arguments() {
        assert_eq!(run_builtin(&Halt, &["halt"]), (TERMINATE, String::new()));
        assert_eq!(
            run_builtin(&Halt, &["halt", "now"]),
            (CONTINUE, "invalid number of arguments\n".to_string())
        );
    }
}
