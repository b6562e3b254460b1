//! A minimal interactive command shell.
//!
//! Each input line is split on whitespace into an argument vector. The first
//! word either names a builtin (`cd`, `help`, `exit`), which runs inside the
//! shell process, or a program that is started with fork and exec and waited
//! for before the next prompt. There are no pipelines, redirections, quoting
//! or variables.
//!
//! The main entry point is [`Interpreter`]; input comes from any
//! [`LineSource`], such as [`PlainReader`] for streams or [`EditorReader`] for
//! an interactive terminal.

mod builtin;
pub mod command;
pub mod env;
pub mod external;
mod interpreter;
pub mod lexer;
pub mod prompt;
pub mod reader;
pub mod registry;
#[cfg(test)]
mod test_util;

pub use command::Status;
pub use interpreter::Interpreter;
pub use reader::{EditorReader, LineSource, PlainReader};
pub use registry::Registry;
