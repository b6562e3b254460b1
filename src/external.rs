use crate::command::{Context, ExecutableCommand, Status, report};
use anyhow::{Context as _, Result};
use nix::errno::Errno;
use nix::sys::signal::Signal;
use nix::sys::wait::{WaitPidFlag, WaitStatus, waitpid};
use nix::unistd::{ForkResult, Pid, fork};
use std::ffi::CString;
use std::ptr;

/// Exit status of a child whose program image could not be replaced.
pub const EXEC_FAILURE: i32 = 1;

/// Command that is not a builtin: a program looked up in `PATH` and run in a
/// child process.
pub struct ExternalCommand {
    argv: Vec<String>,
}

impl ExternalCommand {
    pub fn new(args: &[&str]) -> Self {
        Self {
            argv: args.iter().map(|arg| arg.to_string()).collect(),
        }
    }
}

impl ExecutableCommand for ExternalCommand {
    /// Runs the program to completion. The shell goes on whatever the child's
    /// exit status was.
    fn execute(self: Box<Self>, ctx: &mut Context<'_>) -> Status {
        let args: Vec<&str> = self.argv.iter().map(String::as_str).collect();
        match launch(&args) {
            Ok(Outcome::Failed(errno)) => {
                report(ctx.stderr, &anyhow::anyhow!("{}", errno.desc()));
            }
            Ok(Outcome::Exited(_)) | Ok(Outcome::Signaled(_)) => {}
            Err(e) => report(ctx.stderr, &e),
        }
        Status::Continue
    }
}

/// How a launched command ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// No child could be created, or it could not be waited for.
    Failed(Errno),
    /// The child exited with this code.
    Exited(i32),
    /// The child was terminated by this signal.
    Signaled(Signal),
}

/// Run `args[0]` with arguments `args` in a child process and wait for it.
///
/// The program is searched in `PATH` and inherits the shell's environment and
/// standard streams. If the program image cannot be replaced, the child prints
/// a diagnostic and exits with [`EXEC_FAILURE`]; the parent sees that as a
/// regular [`Outcome::Exited`].
///
/// Stopped and continued notifications are skipped: the call only returns once
/// the child has exited or was killed. There is no timeout.
pub fn launch(args: &[&str]) -> Result<Outcome> {
    // Everything the child needs is allocated before forking.
    let argv = args
        .iter()
        .map(|arg| CString::new(*arg).with_context(|| format!("{}: invalid argument", arg)))
        .collect::<Result<Vec<CString>>>()?;
    if argv.is_empty() {
        anyhow::bail!("no program to launch");
    }
    let mut argv_ptrs: Vec<*const libc::c_char> = argv.iter().map(|arg| arg.as_ptr()).collect();
    argv_ptrs.push(ptr::null());
    let exec_error_prefix = format!("fastshell: {}: ", args[0]);

    // SAFETY: the child does not allocate. It only calls execvp, write and
    // _exit, all on data prepared above.
    match unsafe { fork() } {
        Ok(ForkResult::Child) => {
            // SAFETY: argv_ptrs is NULL-terminated and points into `argv`,
            // which outlives the call. execvp only returns on failure.
            unsafe { libc::execvp(argv_ptrs[0], argv_ptrs.as_ptr()) };
            exec_failed(&exec_error_prefix, Errno::last())
        }
        Ok(ForkResult::Parent { child }) => Ok(wait_for_exit(child)),
        Err(errno) => Ok(Outcome::Failed(errno)),
    }
}

/// Report a failed exec from the child and terminate it without running any
/// of the parent's code, destructors or stdio flushes.
fn exec_failed(prefix: &str, errno: Errno) -> ! {
    for part in [prefix, errno.desc(), "\n"] {
        let _ = nix::unistd::write(std::io::stderr(), part.as_bytes());
    }
    // SAFETY: _exit is async-signal-safe and never returns.
    unsafe { libc::_exit(EXEC_FAILURE) }
}

/// Block until `child` reaches a terminal state.
fn wait_for_exit(child: Pid) -> Outcome {
    loop {
        match waitpid(child, Some(WaitPidFlag::WUNTRACED)) {
            Ok(WaitStatus::Exited(_, code)) => return Outcome::Exited(code),
            Ok(WaitStatus::Signaled(_, signal, _)) => return Outcome::Signaled(signal),
            // Stopped, continued and the like: keep waiting.
            Ok(_) => {}
            Err(Errno::EINTR) => {}
            Err(errno) => return Outcome::Failed(errno),
        }
    }
}
