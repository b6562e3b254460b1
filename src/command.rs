use std::io::Write;

/// Continuation signal returned by every command the shell executes.
///
/// The read-eval loop keeps prompting while commands return [`Status::Continue`]
/// and stops after the first [`Status::Stop`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// Prompt for the next line.
    Continue,
    /// Leave the loop after the current iteration.
    Stop,
}

impl Status {
    /// Integer form of the signal: non-zero keeps the loop running, zero ends it.
    pub fn code(self) -> i32 {
        match self {
            Status::Continue => 1,
            Status::Stop => 0,
        }
    }

    pub fn is_continue(self) -> bool {
        self == Status::Continue
    }
}

/// Output streams and shell state handed to a command while it runs.
///
/// Builtins write through `stdout`/`stderr` instead of the process handles so
/// the interpreter can be driven against in-memory buffers.
pub struct Context<'a> {
    pub stdout: &'a mut dyn Write,
    pub stderr: &'a mut dyn Write,
    /// Names of the registered builtins, in registration order.
    pub builtins: &'a [&'static str],
}

/// Object-safe trait for any command that can be executed by the shell.
///
/// This is implemented by builtins via a blanket impl and by external commands.
pub trait ExecutableCommand {
    /// Executes the command and reports whether the loop should go on.
    fn execute(self: Box<Self>, ctx: &mut Context<'_>) -> Status;
}

/// Factory that creates a command from its argument vector.
///
/// Each factory answers to exactly one name; the registry uses [`name`](Self::name)
/// for lookup and for the `help` listing.
pub trait CommandFactory {
    /// Name the command is invoked by.
    fn name(&self) -> &'static str;

    /// Build the command for `args`, where `args[0]` is the command name.
    fn create(&self, args: &[&str]) -> Box<dyn ExecutableCommand>;
}

/// Render `err` as a single diagnostic line on `stderr`.
///
/// Write failures are ignored.
pub(crate) fn report(stderr: &mut dyn Write, err: &anyhow::Error) {
    let _ = writeln!(stderr, "fastshell: {:#}", err);
    let _ = stderr.flush();
}
