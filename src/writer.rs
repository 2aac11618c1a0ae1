//! Text output writer with separator collapsing.
//!
//! Block separators are written eagerly but never stacked: the number of
//! trailing newlines is tracked so every request only tops the buffer up to
//! the requested count. Spaces and indentation are held back until content
//! follows, so neither can end up in front of a newline.

use memchr::memchr;

/// Default literal indentation unit for plain text output.
pub const DEFAULT_INDENT: &str = "    ";

/// Output buffer that lays out blocks, lines and collapsed whitespace.
///
/// # Example
/// ```
/// use htmlconvert::TextWriter;
///
/// let mut writer = TextWriter::new();
/// writer.start_block(2, 0);
/// writer.write("  Hello \n  world ");
/// writer.end_block(2);
/// writer.start_block(2, 0);
/// writer.write("again");
///
/// assert_eq!(writer.finish(), "Hello world\n\nagain");
/// ```
#[derive(Debug, Clone)]
pub struct TextWriter {
    out: String,
    /// Number of `\n` at the end of `out`.
    trailing_newlines: usize,
    /// A collapsed whitespace run waiting for the next content.
    pending_space: bool,
    /// `out` ends with a collapsed space that no content has followed yet.
    trailing_space: bool,
    /// Indentation units waiting for the first content of the line.
    pending_indent: usize,
    indent_text: &'static str,
}

impl TextWriter {
    /// Create a new writer with default capacity and indentation.
    #[inline]
    pub fn new() -> Self {
        Self::with_indent(DEFAULT_INDENT, 1024)
    }

    /// Create with a literal indentation unit and initial capacity.
    #[inline]
    pub fn with_indent(indent_text: &'static str, capacity: usize) -> Self {
        Self {
            out: String::with_capacity(capacity),
            trailing_newlines: 0,
            pending_space: false,
            trailing_space: false,
            pending_indent: 0,
            indent_text,
        }
    }

    /// Begin a block: make sure at least `prefix_newlines` newlines end the
    /// buffer, then indent the next line by `indent_count` units.
    ///
    /// Nothing is written at the start of the document, and repeated calls
    /// never add more newlines than requested.
    pub fn start_block(&mut self, prefix_newlines: usize, indent_count: usize) {
        self.ensure_newlines(prefix_newlines);
        self.pending_indent = if self.at_line_start() { indent_count } else { 0 };
    }

    /// End a block: make sure at least `suffix_newlines` newlines end the buffer.
    pub fn end_block(&mut self, suffix_newlines: usize) {
        self.ensure_newlines(suffix_newlines);
        self.pending_indent = 0;
    }

    /// Force a single line break, collapsing against existing newlines.
    pub fn write_line_break(&mut self) {
        self.ensure_newlines(1);
        self.pending_indent = 0;
    }

    /// Write text, collapsing every whitespace run to one space.
    ///
    /// Whitespace at the start of a line or after a space is dropped.
    pub fn write(&mut self, text: &str) {
        for (i, word) in text.split(is_html_whitespace).enumerate() {
            if i > 0 {
                self.request_space();
            }
            if !word.is_empty() {
                self.push_content(word);
            }
        }
    }

    /// Write text verbatim.
    ///
    /// Newlines at the end of the run count toward later block separators.
    pub fn write_preformatted(&mut self, text: &str) {
        if text.is_empty() {
            return;
        }
        self.flush_pending();
        self.out.push_str(text);
        self.trailing_space = false;
        if memchr(b'\n', text.as_bytes()).is_none() {
            self.trailing_newlines = 0;
            return;
        }
        let body = text.trim_end_matches('\n');
        let newlines = text.len() - body.len();
        if body.is_empty() {
            self.trailing_newlines += newlines;
        } else {
            self.trailing_newlines = newlines;
        }
    }

    /// Offset at which the next inline content will start.
    ///
    /// Commits a pending collapsed space first, so a style opened here
    /// begins after the space separating it from the previous word. The
    /// space is taken back if a block separator or the end of the document
    /// follows before any content.
    pub fn content_offset(&mut self) -> usize {
        if self.pending_space {
            self.out.push(' ');
            self.pending_space = false;
            self.trailing_space = true;
        }
        self.out.len()
    }

    /// Current output length in bytes, excluding held-back whitespace.
    #[inline]
    pub fn len(&self) -> usize {
        self.out.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.out.is_empty()
    }

    /// Number of newlines currently ending the buffer.
    #[inline]
    pub fn trailing_newlines(&self) -> usize {
        self.trailing_newlines
    }

    /// Output written so far.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.out
    }

    /// Take the output, dropping separator newlines left at the end.
    pub fn finish(mut self) -> String {
        self.drop_trailing_space();
        let len = self.out.len() - self.trailing_newlines;
        self.out.truncate(len);
        self.out
    }

    #[inline]
    fn at_line_start(&self) -> bool {
        self.out.is_empty() || self.trailing_newlines > 0
    }

    fn ensure_newlines(&mut self, count: usize) {
        self.pending_space = false;
        if self.out.is_empty() {
            return;
        }
        if count > 0 {
            self.drop_trailing_space();
        }
        while self.trailing_newlines < count {
            self.out.push('\n');
            self.trailing_newlines += 1;
        }
    }

    fn drop_trailing_space(&mut self) {
        if self.trailing_space {
            self.out.pop();
            self.trailing_space = false;
        }
    }

    #[inline]
    fn request_space(&mut self) {
        if !self.at_line_start() && !self.out.ends_with(' ') {
            self.pending_space = true;
        }
    }

    fn flush_pending(&mut self) {
        for _ in 0..self.pending_indent {
            self.out.push_str(self.indent_text);
        }
        self.pending_indent = 0;
        if self.pending_space {
            self.out.push(' ');
            self.pending_space = false;
        }
    }

    #[inline]
    fn push_content(&mut self, content: &str) {
        self.flush_pending();
        self.out.push_str(content);
        self.trailing_newlines = 0;
        self.trailing_space = false;
    }
}

/// HTML inter-element whitespace (space, tab, LF, FF, CR).
///
/// Non-breaking spaces are content and are kept.
#[inline]
fn is_html_whitespace(c: char) -> bool {
    c.is_ascii_whitespace()
}

impl Default for TextWriter {
    fn default() -> Self {
        Self::new()
    }
}
