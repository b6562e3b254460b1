use crate::env::Environment;

/// Shell name shown at the start of every prompt.
pub const SHELL_NAME: &str = "fastshell";

/// Render the prompt, e.g. `fastshell~ alice> `.
///
/// The user name comes from `USER` and is looked up on every call. When the
/// variable is unset the name is left out.
pub fn render(env: &Environment) -> String {
    format!("{}~ {}> ", SHELL_NAME, env.user().unwrap_or_default())
}
