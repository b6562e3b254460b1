use crate::command::{CommandFactory, Context, ExecutableCommand, Status, report};
use crate::registry::Factory;
use anyhow::{Result, anyhow};
use nix::unistd::chdir;

/// Built-in commands known to the shell at compile time.
///
/// Builtins run in-process; they never fork.
pub(crate) trait BuiltinCommand: Sized {
    /// Canonical name of the command, e.g. "cd".
    fn name() -> &'static str;

    /// Build the command from its arguments (the command name excluded).
    ///
    /// An error here is a usage error: it is reported and nothing runs.
    fn from_args(args: &[&str]) -> Result<Self>;

    /// Executes the command.
    ///
    /// Errors are reported on the error stream by the caller; they never end
    /// the shell session.
    fn execute(self, ctx: &mut Context<'_>) -> Result<Status>;
}

impl<T: BuiltinCommand> ExecutableCommand for T {
    fn execute(self: Box<Self>, ctx: &mut Context<'_>) -> Status {
        match <T as BuiltinCommand>::execute(*self, ctx) {
            Ok(status) => status,
            Err(e) => {
                report(ctx.stderr, &e);
                Status::Continue
            }
        }
    }
}

/// Stand-in for a builtin whose arguments were rejected.
struct InvalidArgs {
    error: anyhow::Error,
}

impl ExecutableCommand for InvalidArgs {
    fn execute(self: Box<Self>, ctx: &mut Context<'_>) -> Status {
        report(ctx.stderr, &self.error);
        Status::Continue
    }
}

impl<T: BuiltinCommand + 'static> CommandFactory for Factory<T> {
    fn name(&self) -> &'static str {
        T::name()
    }

    fn create(&self, args: &[&str]) -> Box<dyn ExecutableCommand> {
        let rest = args.get(1..).unwrap_or_default();
        match T::from_args(rest) {
            Ok(cmd) => Box::new(cmd),
            Err(error) => Box::new(InvalidArgs { error }),
        }
    }
}

/// Change the working directory of the shell process.
pub struct Cd {
    /// Directory to switch to; absolute or relative to the current directory.
    pub target: String,
}

impl BuiltinCommand for Cd {
    fn name() -> &'static str {
        "cd"
    }

    fn from_args(args: &[&str]) -> Result<Self> {
        // Anything past the first argument is ignored.
        match args.first() {
            Some(target) => Ok(Cd {
                target: target.to_string(),
            }),
            None => Err(anyhow!("expected argument to \"cd\"")),
        }
    }

    fn execute(self, _ctx: &mut Context<'_>) -> Result<Status> {
        chdir(self.target.as_str())
            .map_err(|errno| anyhow!("cd: {}: {}", self.target, errno.desc()))?;
        Ok(Status::Continue)
    }
}

/// Print a short banner and the names of all builtins.
pub struct Help;

impl BuiltinCommand for Help {
    fn name() -> &'static str {
        "help"
    }

    fn from_args(_args: &[&str]) -> Result<Self> {
        Ok(Help)
    }

    fn execute(self, ctx: &mut Context<'_>) -> Result<Status> {
        writeln!(ctx.stdout, "Welcome to fastshell builtin help")?;
        writeln!(
            ctx.stdout,
            "This is a list of currently implemented builtin commands:"
        )?;
        for name in ctx.builtins {
            writeln!(ctx.stdout, "  {}", name)?;
        }
        writeln!(
            ctx.stdout,
            "Use the man command for more information on other programs."
        )?;
        ctx.stdout.flush()?;
        Ok(Status::Continue)
    }
}

/// Leave the shell. Arguments are accepted and ignored.
pub struct Exit;

impl BuiltinCommand for Exit {
    fn name() -> &'static str {
        "exit"
    }

    fn from_args(_args: &[&str]) -> Result<Self> {
        Ok(Exit)
    }

    fn execute(self, _ctx: &mut Context<'_>) -> Result<Status> {
        Ok(Status::Stop)
    }
}
