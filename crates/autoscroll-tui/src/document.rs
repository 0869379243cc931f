use std::path::Path;

use anyhow::{Context, Result};
use unicode_width::UnicodeWidthChar;

/// A plain-text document shown by the terminal host
#[derive(Debug, Clone)]
pub struct Document {
    pub title: String,
    lines: Vec<String>,
    /// Wrapped rows for `wrap_width`
    wrapped: Vec<String>,
    wrap_width: u16,
}

impl Document {
    /// Load a UTF-8 text file, titled after its file name
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        let title = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        Ok(Self::from_text(title, &text))
    }

    pub fn from_text(title: impl Into<String>, text: &str) -> Self {
        Self {
            title: title.into(),
            lines: text.lines().map(|l| l.replace('\t', "    ")).collect(),
            wrapped: Vec::new(),
            wrap_width: 0,
        }
    }

    /// Source line count (before wrapping)
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Rows wrapped to `width`, recomputed only when the width changes
    pub fn wrapped(&mut self, width: u16) -> &[String] {
        if width != self.wrap_width || (self.wrapped.is_empty() && !self.lines.is_empty()) {
            self.wrapped = self
                .lines
                .iter()
                .flat_map(|line| wrap_line(line, width as usize))
                .collect();
            self.wrap_width = width;
        }
        &self.wrapped
    }
}

/// Greedy wrap on display width, breaking after the last space when possible
fn wrap_line(line: &str, width: usize) -> Vec<String> {
    if width == 0 || line.is_empty() {
        return vec![line.to_string()];
    }

    let mut rows = Vec::new();
    let mut current = String::new();
    let mut current_width = 0usize;

    for ch in line.chars() {
        let ch_width = ch.width().unwrap_or(0);
        while current_width + ch_width > width && !current.is_empty() {
            match current.rfind(' ') {
                Some(idx) if idx + 1 < current.len() => {
                    let rest = current.split_off(idx + 1);
                    rows.push(current.trim_end().to_string());
                    current_width = display_width(&rest);
                    current = rest;
                }
                _ => {
                    rows.push(std::mem::take(&mut current).trim_end().to_string());
                    current_width = 0;
                }
            }
        }
        if current.is_empty() && ch == ' ' && !rows.is_empty() {
            // Leading space of a continuation row
            continue;
        }
        current.push(ch);
        current_width += ch_width;
    }
    rows.push(current);
    rows
}

fn display_width(s: &str) -> usize {
    s.chars().map(|c| c.width().unwrap_or(0)).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_lines_untouched() {
        assert_eq!(wrap_line("hello", 10), vec!["hello"]);
        assert_eq!(wrap_line("", 10), vec![""]);
    }

    #[test]
    fn test_wraps_at_spaces() {
        assert_eq!(
            wrap_line("the quick brown fox", 10),
            vec!["the quick", "brown fox"]
        );
    }

    #[test]
    fn test_hard_break_without_spaces() {
        assert_eq!(wrap_line("abcdefghij", 4), vec!["abcd", "efgh", "ij"]);
    }

    #[test]
    fn test_wide_characters() {
        // Each CJK char is two columns wide
        assert_eq!(wrap_line("你好世界", 4), vec!["你好", "世界"]);
    }

    #[test]
    fn test_wrapped_rows_follow_width() {
        let mut doc = Document::from_text("invite", "one two three\n\nfour");
        assert_eq!(doc.line_count(), 3);
        assert_eq!(doc.wrapped(80).len(), 3);
        assert_eq!(doc.wrapped(5), &["one", "two", "three", "", "four"]);
    }
}
