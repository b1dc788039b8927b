//! Output sinks for composed board lines.
//!
//! The render grid never writes to the process output itself. It pushes
//! cell text and line breaks into a [`LineSink`], so the same render pass can
//! be captured in memory or flushed to a terminal.

/// Receiver of rendered text, one row at a time.
pub trait LineSink {
    /// Append text to the row being built.
    fn push_str(&mut self, s: &str);

    /// Finish the row being built.
    fn end_line(&mut self);
}

impl LineSink for String {
    fn push_str(&mut self, s: &str) {
        String::push_str(self, s);
    }

    fn end_line(&mut self) {
        self.push('\n');
    }
}

/// Completed rows of a render pass, kept in memory.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LineBuffer {
    lines: Vec<String>,
    current: String,
}

impl LineBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Finished rows, in order.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Number of finished rows.
    pub fn height(&self) -> usize {
        self.lines.len()
    }

    /// Character at column `x` of row `y`.
    pub fn get(&self, x: usize, y: usize) -> Option<char> {
        self.lines.get(y).and_then(|line| line.chars().nth(x))
    }

    /// Finished rows joined with line breaks, each row terminated.
    pub fn to_text(&self) -> String {
        let mut text = String::with_capacity(self.lines.iter().map(|l| l.len() + 1).sum());
        for line in &self.lines {
            text.push_str(line);
            text.push('\n');
        }
        text
    }

    pub fn clear(&mut self) {
        self.lines.clear();
        self.current.clear();
    }
}

impl LineSink for LineBuffer {
    fn push_str(&mut self, s: &str) {
        self.current.push_str(s);
    }

    fn end_line(&mut self) {
        self.lines.push(std::mem::take(&mut self.current));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn line_buffer_collects_rows() {
        let mut buf = LineBuffer::new();
        buf.push_str("ab");
        buf.push_str("c");
        buf.end_line();
        buf.end_line();
        buf.push_str("unfinished");

        assert_eq!(buf.lines(), &["abc".to_string(), String::new()]);
        assert_eq!(buf.get(2, 0), Some('c'));
        assert_eq!(buf.get(0, 1), None);
        assert_eq!(buf.to_text(), "abc\n\n");
    }

    #[test]
    fn string_sink_appends_newlines() {
        let mut out = String::new();
        LineSink::push_str(&mut out, "x");
        out.end_line();
        assert_eq!(out, "x\n");
    }
}
