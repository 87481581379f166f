/// Running column used to align diagnostics with the original line.
///
/// Counts characters, not bytes. The lexer advances it for skipped blanks; the
/// recognizer advances it for every lexeme it accepts or reports.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Cursor {
    position: usize,
}

impl Cursor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn advance(&mut self, width: usize) {
        self.position += width;
    }
}
