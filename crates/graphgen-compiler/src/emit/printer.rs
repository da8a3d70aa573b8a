//! Indentation-aware line buffer.

const INDENT: &str = "    ";

#[derive(Debug, Default)]
pub(crate) struct Printer {
    output: String,
    depth: usize,
}

impl Printer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Write one line at the current depth. Empty text writes a bare newline.
    pub fn line(&mut self, text: impl AsRef<str>) {
        let text = text.as_ref();
        if !text.is_empty() {
            for _ in 0..self.depth {
                self.output.push_str(INDENT);
            }
            self.output.push_str(text);
        }
        self.output.push('\n');
    }

    /// Write `text` and indent what follows.
    pub fn open(&mut self, text: impl AsRef<str>) {
        self.line(text);
        self.depth += 1;
    }

    /// Dedent, then write `text`.
    pub fn close(&mut self, text: impl AsRef<str>) {
        self.depth = self.depth.saturating_sub(1);
        self.line(text);
    }

    /// Separator line. Never leading, never doubled.
    pub fn blank(&mut self) {
        if self.output.is_empty() || self.output.ends_with("\n\n") {
            return;
        }
        self.output.push('\n');
    }

    /// The buffered text with exactly one trailing newline.
    pub fn finish(mut self) -> String {
        self.output.truncate(self.output.trim_end().len());
        self.output.push('\n');
        self.output
    }
}
