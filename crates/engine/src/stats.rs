/// Totals accumulated over one walk.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunTotals {
    pub lines: usize,
    pub files: usize,
}

impl RunTotals {
    #[must_use]
    pub const fn new() -> Self {
        Self { lines: 0, files: 0 }
    }

    /// Record one counted file.
    pub const fn add_file(&mut self, lines: usize) {
        self.lines += lines;
        self.files += 1;
    }
}
