use argh::FromArgs;
use fos_prompt::Interpreter;
use fos_prompt::config::PromptConfig;
use fos_prompt::io_adapters::ScriptSource;
use fos_prompt::layout::KernelLayout;
use fos_prompt::registry::builtin_registry;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(FromArgs)]
/// Interactive FOS kernel command prompt.
struct Args {
    #[argh(option, default = "String::from(fos_prompt::config::DEFAULT_PROMPT)")]
    /// prompt shown before every line.
    prompt: String,

    #[argh(switch)]
    /// do not print the welcome banner.
    no_banner: bool,

    #[argh(option)]
    /// read command lines from this file instead of the terminal.
    script: Option<PathBuf>,

    #[argh(option, short = 'c')]
    /// execute this command line; may be repeated. The prompt exits afterwards.
    command: Vec<String>,
}

fn session(args: Args) -> anyhow::Result<i32> {
    let config = PromptConfig {
        prompt: args.prompt,
        show_banner: !args.no_banner,
        ..PromptConfig::default()
    };
    let sh = Interpreter::new(builtin_registry(), KernelLayout::default(), config);
    let mut stdout = std::io::stdout();

    if !args.command.is_empty() {
        sh.run(&mut ScriptSource::new(args.command), &mut stdout)
    } else if let Some(path) = args.script {
        sh.run(&mut ScriptSource::from_file(&path)?, &mut stdout)
    } else {
        sh.repl()
    }
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    match session(argh::from_env()) {
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!("{err:#}");
            ExitCode::FAILURE
        }
    }
}
