use argh::FromArgs;
use fastshell::{EditorReader, Interpreter, PlainReader};
use std::io::{self, IsTerminal};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(FromArgs)]
/// A minimal interactive command shell.
struct Cli {
    #[argh(switch)]
    /// read commands from standard input without line editing, even on a terminal
    plain: bool,

    #[argh(option)]
    /// file to load the line editor history from and save it to on exit
    history: Option<PathBuf>,
}

fn main() -> ExitCode {
    let cli: Cli = argh::from_env();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("fastshell: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let mut sh = Interpreter::default();
    if cli.plain || !io::stdin().is_terminal() {
        let mut reader = PlainReader::new(io::stdin().lock(), io::stdout());
        return sh.repl(&mut reader);
    }

    let mut reader = EditorReader::new(cli.history)?;
    let session = sh.repl(&mut reader);
    let saved = reader.save_history();
    session.and(saved)
}
