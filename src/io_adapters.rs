use crate::command::{LineSource, ReadOutcome};
use anyhow::{Context, Result};
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;
use std::cell::RefCell;
use std::collections::VecDeque;
use std::fs;
use std::io::{Result as IoResult, Write};
use std::path::Path;
use std::rc::Rc;

/// Interactive line source backed by a `rustyline` editor.
///
/// Non-empty lines are added to the editor history. Ctrl-C yields
/// [`ReadOutcome::NoInput`], Ctrl-D yields [`ReadOutcome::Closed`].
pub struct EditorSource {
    editor: DefaultEditor,
}

impl EditorSource {
    pub fn new() -> Result<Self> {
        let editor = DefaultEditor::new().context("can't initialise the line editor")?;
        Ok(Self { editor })
    }
}

impl LineSource for EditorSource {
    fn read_line(&mut self, prompt: &str) -> Result<ReadOutcome> {
        match self.editor.readline(prompt) {
            Ok(line) => {
                if !line.trim().is_empty() {
                    self.editor.add_history_entry(line.as_str())?;
                }
                Ok(ReadOutcome::Line(line))
            }
            Err(ReadlineError::Interrupted) => Ok(ReadOutcome::NoInput),
            Err(ReadlineError::Eof) => Ok(ReadOutcome::Closed),
            Err(err) => Err(err).context("can't read a line"),
        }
    }
}

/// Non-interactive line source replaying a fixed list of lines.
///
/// Used for `--script` files, `-c` commands and tests. Once the lines run out
/// every read returns [`ReadOutcome::Closed`].
#[derive(Debug, Default)]
pub struct ScriptSource {
    lines: VecDeque<String>,
    reads: usize,
}

impl ScriptSource {
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
            reads: 0,
        }
    }

    /// Load one command line per line of the file at `path`.
    pub fn from_file(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("can't read script {}", path.display()))?;
        Ok(Self::new(text.lines()))
    }

    /// How many times [`LineSource::read_line`] has been called.
    pub fn reads(&self) -> usize {
        self.reads
    }

    /// Lines not read yet.
    pub fn remaining(&self) -> usize {
        self.lines.len()
    }
}

impl LineSource for ScriptSource {
    fn read_line(&mut self, _prompt: &str) -> Result<ReadOutcome> {
        self.reads += 1;
        Ok(match self.lines.pop_front() {
            Some(line) => ReadOutcome::Line(line),
            None => ReadOutcome::Closed,
        })
    }
}

/// Memory-backed writer for capturing command output.
#[derive(Debug, Default, Clone)]
pub struct MemWriter {
    buf: Rc<RefCell<Vec<u8>>>,
}

impl MemWriter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a writer and a handle to read what it collects.
    pub fn with_handle() -> (Self, Rc<RefCell<Vec<u8>>>) {
        let mw = MemWriter::new();
        let rc = mw.buf.clone();
        (mw, rc)
    }

    /// Everything written so far, lossily decoded as UTF-8.
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.buf.borrow()).into_owned()
    }
}

impl Write for MemWriter {
    fn write(&mut self, data: &[u8]) -> IoResult<usize> {
        self.buf.borrow_mut().extend_from_slice(data);
        Ok(data.len())
    }

    fn flush(&mut self) -> IoResult<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env as stdenv;

    #[test]
    fn test_script_source_replays_then_closes() {
        let mut source = ScriptSource::new(["help", "halt"]);
        assert_eq!(source.read_line("> ").unwrap(), ReadOutcome::Line("help".into()));
        assert_eq!(source.read_line("> ").unwrap(), ReadOutcome::Line("halt".into()));
        assert_eq!(source.read_line("> ").unwrap(), ReadOutcome::Closed);
        assert_eq!(source.read_line("> ").unwrap(), ReadOutcome::Closed);
        assert_eq!(source.reads(), 4);
    }

    #[test]
    fn test_script_source_from_file() -> Result<()> {
        let mut path = stdenv::temp_dir();
        path.push(format!("fos_prompt_script_{}", std::process::id()));
        fs::write(&path, "rep a 1\nhalt\n")?;

        let source = ScriptSource::from_file(&path);
        let _ = fs::remove_file(&path);

        let source = source?;
        assert_eq!(source.remaining(), 2);
        Ok(())
    }

    #[test]
    fn test_script_source_missing_file_errors() {
        let err = ScriptSource::from_file(Path::new("/nonexistent/fos_prompt/script")).unwrap_err();
        assert!(err.to_string().contains("can't read script"));
    }

    #[test]
    fn test_mem_writer_shares_buffer() {
        let (mut writer, handle) = MemWriter::with_handle();
        write!(writer, "abc").unwrap();
        assert_eq!(handle.borrow().as_slice(), b"abc");
        assert_eq!(writer.contents(), "abc");
    }
}
