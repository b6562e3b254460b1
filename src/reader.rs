//! Sources of input lines for the read-eval loop.

use anyhow::{Context, Result};
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;
use std::io::{BufRead, Write};
use std::path::PathBuf;

/// Initial size of a line buffer; it grows on demand.
const INITIAL_CAPACITY: usize = 1024;

/// Something the shell can read command lines from.
pub trait LineSource {
    /// Show `prompt` and read one line.
    ///
    /// The trailing newline is not part of the result. `None` means the input is
    /// exhausted and nothing was read; a last line without a newline is still
    /// returned, and the call after it yields `None`.
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>>;
}

/// Reads lines from any buffered reader and writes the prompt to `output`.
///
/// Used for non-interactive input, where line editing makes no sense.
pub struct PlainReader<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> PlainReader<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Give back the input and the prompt output.
    pub fn into_parts(self) -> (R, W) {
        (self.input, self.output)
    }
}

impl<R: BufRead, W: Write> LineSource for PlainReader<R, W> {
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut buf = Vec::with_capacity(INITIAL_CAPACITY);
        let read = self
            .input
            .read_until(b'\n', &mut buf)
            .context("failed to read input")?;
        if read == 0 {
            return Ok(None);
        }
        if buf.last() == Some(&b'\n') {
            buf.pop();
        }
        Ok(Some(String::from_utf8_lossy(&buf).into_owned()))
    }
}

/// Interactive reader backed by `rustyline`: line editing and history.
pub struct EditorReader {
    editor: DefaultEditor,
    history: Option<PathBuf>,
}

impl EditorReader {
    /// Create an editor, loading `history` when the file exists.
    pub fn new(history: Option<PathBuf>) -> Result<Self> {
        let mut editor = DefaultEditor::new().context("failed to set up line editor")?;
        if let Some(path) = &history {
            // A missing history file is normal on first start.
            if path.exists() {
                editor
                    .load_history(path)
                    .with_context(|| format!("failed to load history from {}", path.display()))?;
            }
        }
        Ok(Self { editor, history })
    }

    /// Write the session history back to the history file, if one was given.
    pub fn save_history(&mut self) -> Result<()> {
        if let Some(path) = &self.history {
            self.editor
                .save_history(path)
                .with_context(|| format!("failed to save history to {}", path.display()))?;
        }
        Ok(())
    }
}

impl LineSource for EditorReader {
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>> {
        let line = editor_line(self.editor.readline(prompt))?;
        if let Some(text) = &line {
            if !text.trim().is_empty() {
                self.editor.add_history_entry(text.as_str())?;
            }
        }
        Ok(line)
    }
}

/// Translate the editor's result into the `LineSource` contract.
///
/// Ctrl-C abandons the current line and yields an empty one, so the shell
/// prompts again instead of quitting.
fn editor_line(result: rustyline::Result<String>) -> Result<Option<String>> {
    match result {
        Ok(line) => Ok(Some(line)),
        Err(ReadlineError::Interrupted) => Ok(Some(String::new())),
        Err(ReadlineError::Eof) => Ok(None),
        Err(err) => Err(err).context("failed to read input"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn reader(input: &[u8]) -> PlainReader<Cursor<Vec<u8>>, Vec<u8>> {
        PlainReader::new(Cursor::new(input.to_vec()), Vec::new())
    }

    #[test]
    fn test_lines_without_newline() {
        let mut r = reader(b"ls -la\ncd /tmp\n");
        assert_eq!(r.read_line("").unwrap().as_deref(), Some("ls -la"));
        assert_eq!(r.read_line("").unwrap().as_deref(), Some("cd /tmp"));
        assert_eq!(r.read_line("").unwrap(), None);
    }

    #[test]
    fn test_empty_input_is_end_of_input() {
        let mut r = reader(b"");
        assert_eq!(r.read_line("> ").unwrap(), None);
    }

    #[test]
    fn test_blank_line_is_not_end_of_input() {
        let mut r = reader(b"\n");
        assert_eq!(r.read_line("").unwrap().as_deref(), Some(""));
        assert_eq!(r.read_line("").unwrap(), None);
    }

    #[test]
    fn test_unterminated_last_line_is_returned() {
        let mut r = reader(b"exit");
        assert_eq!(r.read_line("").unwrap().as_deref(), Some("exit"));
        assert_eq!(r.read_line("").unwrap(), None);
    }

    #[test]
    fn test_long_line_grows_buffer() {
        let long = "x".repeat(INITIAL_CAPACITY * 3 + 17);
        let mut r = reader(format!("{}\n", long).as_bytes());
        assert_eq!(r.read_line("").unwrap(), Some(long));
    }

    #[test]
    fn test_prompt_is_written_before_each_read() {
        let mut r = reader(b"a\n");
        r.read_line("p1> ").unwrap();
        r.read_line("p2> ").unwrap();
        assert_eq!(String::from_utf8(r.output).unwrap(), "p1> p2> ");
    }

    #[test]
    fn test_invalid_utf8_is_replaced() {
        let mut r = reader(b"echo \xff\n");
        assert_eq!(r.read_line("").unwrap().as_deref(), Some("echo \u{fffd}"));
    }

    #[test]
    fn test_editor_results_map_to_lines() {
        assert_eq!(
            editor_line(Ok("ls".to_string())).unwrap().as_deref(),
            Some("ls")
        );
        assert_eq!(
            editor_line(Err(ReadlineError::Interrupted)).unwrap().as_deref(),
            Some("")
        );
        assert_eq!(editor_line(Err(ReadlineError::Eof)).unwrap(), None);
    }
}
