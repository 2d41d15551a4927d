//! Document model for the pager.
//!
//! A document is the tab-expanded display lines of a UTF-8 text source plus
//! a name for the status bar. Line count doubles as document height: the
//! scroll engine measures offsets in lines.

/// Tab stop width used when expanding tabs for display
const TAB_STOP: usize = 4;

#[derive(Debug, Clone)]
pub struct Document {
    /// Display name (file name or "stdin")
    name: String,
    /// Tab-expanded display lines
    lines: Vec<String>,
}

impl Document {
    pub fn new(name: impl Into<String>, text: &str) -> Self {
        let lines = text.lines().map(expand_tabs).collect();
        Self {
            name: name.into(),
            lines,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn line(&self, index: usize) -> Option<&str> {
        self.lines.get(index).map(String::as_str)
    }

    /// Total document height in lines
    pub fn height(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

/// Expand tabs to spaces at fixed tab stops
fn expand_tabs(line: &str) -> String {
    if !line.contains('\t') {
        return line.to_string();
    }

    let mut out = String::with_capacity(line.len());
    let mut col = 0;
    for ch in line.chars() {
        if ch == '\t' {
            let pad = TAB_STOP - (col % TAB_STOP);
            out.extend(std::iter::repeat(' ').take(pad));
            col += pad;
        } else {
            out.push(ch);
            col += 1;
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_height_counts_lines() {
        let doc = Document::new("test", "one\ntwo\nthree");
        assert_eq!(doc.height(), 3);
        assert_eq!(doc.line(1), Some("two"));
    }

    #[test]
    fn test_empty_document() {
        let doc = Document::new("empty", "");
        assert_eq!(doc.height(), 0);
        assert!(doc.is_empty());
    }

    #[test]
    fn test_tab_expansion() {
        let doc = Document::new("tabs", "\tx\na\tb");
        assert_eq!(doc.line(0), Some("    x"));
        assert_eq!(doc.line(1), Some("a   b"));
    }

    #[test]
    fn test_trailing_newline_not_counted() {
        let doc = Document::new("test", "one\ntwo\n");
        assert_eq!(doc.height(), 2);
    }
}
