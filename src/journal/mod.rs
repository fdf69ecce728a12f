// Message journal for the game session

/// How a journal line should be presented
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Info,
    Success,
    Warning,
    Refused,
}

/// A line of journal output with the turn that produced it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JournalLine {
    pub text: String,
    pub severity: Severity,
    pub turn: usize,
}

/// Append-only record of every message the game produced
#[derive(Debug, Clone)]
pub struct Journal {
    lines: Vec<JournalLine>,
    turn: usize,
}

impl Journal {
    pub fn new() -> Self {
        Journal {
            lines: Vec::new(),
            turn: 0,
        }
    }

    /// Append a line for the current turn
    pub fn record(&mut self, severity: Severity, text: impl Into<String>) {
        self.lines.push(JournalLine {
            text: text.into(),
            severity,
            turn: self.turn,
        });
    }

    /// Start a new turn; later lines are tagged with it
    pub fn next_turn(&mut self) -> usize {
        self.turn += 1;
        self.turn
    }

    pub fn turn(&self) -> usize {
        self.turn
    }

    pub fn lines(&self) -> &[JournalLine] {
        &self.lines
    }

    /// Lines recorded at or after position `start`
    pub fn since(&self, start: usize) -> &[JournalLine] {
        self.lines.get(start..).unwrap_or(&[])
    }

    pub fn last(&self) -> Option<&JournalLine> {
        self.lines.last()
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Get all lines as plain strings
    pub fn get_output(&self) -> Vec<String> {
        self.lines.iter().map(|line| line.text.clone()).collect()
    }
}

impl Default for Journal {
    fn default() -> Self {
        Self::new()
    }
}
