use crate::command::{Context, ExecutableCommand, Status};
use crate::env::Environment;
use crate::external::ExternalCommand;
use crate::lexer;
use crate::prompt;
use crate::reader::LineSource;
use crate::registry::Registry;
use anyhow::Result;
use std::io::{self, Write};

/// A minimal interactive shell: builtins run in-process, everything else is
/// launched as a child process.
///
/// Example
/// ```
/// use fastshell::{Interpreter, Status};
/// let mut sh = Interpreter::default();
/// let mut out = Vec::new();
/// let mut err = Vec::new();
/// assert_eq!(sh.run(&["help"], &mut out, &mut err), Status::Continue);
/// assert_eq!(sh.run(&["exit"], &mut out, &mut err), Status::Stop);
/// ```
pub struct Interpreter {
    env: Environment,
    builtins: Registry,
}

impl Interpreter {
    /// Create an interpreter with a custom builtin table.
    pub fn new(env: Environment, builtins: Registry) -> Self {
        Self { env, builtins }
    }

    /// Dispatch one argument vector.
    ///
    /// A builtin named `args[0]` wins; otherwise the command is launched as an
    /// external program. An empty vector is a no-op.
    pub fn run(&mut self, args: &[&str], stdout: &mut dyn Write, stderr: &mut dyn Write) -> Status {
        let Some(name) = args.first() else {
            return Status::Continue;
        };

        let names = self.builtins.names();
        let mut ctx = Context {
            stdout,
            stderr,
            builtins: &names,
        };
        match self.builtins.lookup(name) {
            Some(factory) => factory.create(args).execute(&mut ctx),
            None => Box::new(ExternalCommand::new(args)).execute(&mut ctx),
        }
    }

    /// Tokenize `line` and dispatch it.
    pub fn execute_line(
        &mut self,
        line: &str,
        stdout: &mut dyn Write,
        stderr: &mut dyn Write,
    ) -> Status {
        let args = lexer::split_into_tokens(line);
        self.run(&args, stdout, stderr)
    }

    /// Read-eval loop against the process's standard output and error.
    ///
    /// Returns when a command asks to stop or `source` runs out of input.
    pub fn repl<S: LineSource>(&mut self, source: &mut S) -> Result<()> {
        self.repl_with_output(source, &mut io::stdout(), &mut io::stderr())
    }

    fn repl_with_output<S: LineSource>(
        &mut self,
        source: &mut S,
        stdout: &mut dyn Write,
        stderr: &mut dyn Write,
    ) -> Result<()> {
        loop {
            let prompt = prompt::render(&self.env);
            let Some(line) = source.read_line(&prompt)? else {
                return Ok(());
            };
            if !self.execute_line(&line, stdout, stderr).is_continue() {
                return Ok(());
            }
        }
    }
}

impl Default for Interpreter {
    /// Interpreter over the live process environment with the default builtins.
    fn default() -> Self {
        Self::new(Environment::new(), Registry::default())
    }
}
