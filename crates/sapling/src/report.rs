//! Output and diagnostic side channels
//!
//! The evaluator never writes to a stream directly: `print` goes to an
//! [`OutputSink`] and reported errors go to a [`DiagnosticSink`]. Both are
//! injected into the [`Interpreter`](crate::Interpreter).

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use crate::error::Diagnostic;

/// Receives the lines produced by `print`.
pub trait OutputSink {
    /// Write one complete line (without the trailing newline).
    fn write_line(&mut self, line: &str);
}

/// Receives reported errors.
pub trait DiagnosticSink {
    /// Report one diagnostic.
    fn report(&mut self, diagnostic: &Diagnostic);
}

/// Writes `print` output to standard output.
#[derive(Debug, Default, Clone, Copy)]
pub struct StdoutSink;

impl OutputSink for StdoutSink {
    fn write_line(&mut self, line: &str) {
        println!("{}", line);
    }
}

/// Writes diagnostics to standard error as `<line>: error: <message>`.
#[derive(Debug, Default, Clone, Copy)]
pub struct StderrSink;

impl DiagnosticSink for StderrSink {
    fn report(&mut self, diagnostic: &Diagnostic) {
        eprintln!("{}", diagnostic);
    }
}

/// In-memory sink whose clones share one buffer.
///
/// Hand one clone to the interpreter and keep another to inspect what was
/// written.
///
/// # Example
///
/// ```
/// use sapling::{Builtin, Capture, Interpreter, Node};
///
/// let output = Capture::<String>::new();
/// let mut interp = Interpreter::new().with_output(output.clone());
///
/// interp.eval(&Node::builtin(Builtin::Print, Node::number(2.0)));
/// assert_eq!(output.lines(), vec!["=    2".to_string()]);
/// ```
#[derive(Debug)]
pub struct Capture<T> {
    items: Rc<RefCell<Vec<T>>>,
}

impl<T> Clone for Capture<T> {
    fn clone(&self) -> Self {
        Self {
            items: Rc::clone(&self.items),
        }
    }
}

impl<T> Default for Capture<T> {
    fn default() -> Self {
        Self {
            items: Rc::new(RefCell::new(Vec::new())),
        }
    }
}

impl<T: Clone> Capture<T> {
    /// Create an empty capture buffer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything captured so far.
    pub fn snapshot(&self) -> Vec<T> {
        self.items.borrow().clone()
    }

    /// Remove and return everything captured so far.
    pub fn take(&self) -> Vec<T> {
        std::mem::take(&mut *self.items.borrow_mut())
    }

    /// Number of captured items.
    pub fn len(&self) -> usize {
        self.items.borrow().len()
    }

    /// Whether nothing was captured.
    pub fn is_empty(&self) -> bool {
        self.items.borrow().is_empty()
    }
}

impl Capture<String> {
    /// Captured output lines.
    pub fn lines(&self) -> Vec<String> {
        self.snapshot()
    }
}

impl Capture<Diagnostic> {
    /// Captured diagnostics rendered as they would appear on stderr.
    pub fn rendered(&self) -> Vec<String> {
        self.items.borrow().iter().map(|d| d.to_string()).collect()
    }
}

impl OutputSink for Capture<String> {
    fn write_line(&mut self, line: &str) {
        self.items.borrow_mut().push(line.to_string());
    }
}

impl DiagnosticSink for Capture<Diagnostic> {
    fn report(&mut self, diagnostic: &Diagnostic) {
        self.items.borrow_mut().push(diagnostic.clone());
    }
}

/// Shared handle to the lexer's current line number.
///
/// The lexer owns the updates; the core only reads the value when it
/// builds a [`Diagnostic`].
#[derive(Debug, Clone, Default)]
pub struct SourceLine(Rc<Cell<u32>>);

impl SourceLine {
    /// Create a counter starting at `line`.
    pub fn new(line: u32) -> Self {
        Self(Rc::new(Cell::new(line)))
    }

    /// Current line.
    pub fn get(&self) -> u32 {
        self.0.get()
    }

    /// Set the current line.
    pub fn set(&self, line: u32) {
        self.0.set(line);
    }

    /// Advance by one line.
    pub fn bump(&self) {
        self.0.set(self.0.get() + 1);
    }
}
