//! Event-driven layout and styling state machine.
//!
//! A [`Converter`] consumes open-tag, close-tag and text events and lays the
//! text out through a [`TextWriter`]. Block separators, list numbering,
//! preformatted runs and skipped subtrees are handled here for both output
//! flavours; the [`Styler`] parameter receives paragraph boundaries and
//! inline styles.

use crate::style::{FontWeight, SpanStyle};
use crate::styler::{Annotations, PlainText, Styler};
use crate::tag::{tag_kind, ListKind, TagKind, HEADING_SIZES, MONOSPACE};
use crate::trace::trace_event;
use crate::writer::TextWriter;
use crate::Options;
use smallvec::SmallVec;

/// Attribute lookup for an open tag.
pub trait Attributes {
    /// Raw value of the named attribute, if present.
    fn attribute(&self, name: &str) -> Option<&str>;
}

impl<K: AsRef<str>, V: AsRef<str>> Attributes for [(K, V)] {
    fn attribute(&self, name: &str) -> Option<&str> {
        self.iter()
            .find(|(key, _)| key.as_ref() == name)
            .map(|(_, value)| value.as_ref())
    }
}

impl<K: AsRef<str>, V: AsRef<str>> Attributes for Vec<(K, V)> {
    fn attribute(&self, name: &str) -> Option<&str> {
        self.as_slice().attribute(name)
    }
}

impl<K: AsRef<str>, V: AsRef<str>, const N: usize> Attributes for [(K, V); N] {
    fn attribute(&self, name: &str) -> Option<&str> {
        self.as_slice().attribute(name)
    }
}

/// A tag without attributes.
impl Attributes for () {
    fn attribute(&self, _name: &str) -> Option<&str> {
        None
    }
}

/// Consumer side of a tokenizer.
///
/// The tokenizer guarantees lowercase tag names and balanced, correctly
/// nested open/close pairs. Text may arrive in several runs per node.
pub trait HtmlHandler {
    type Error;

    fn on_open_tag(&mut self, name: &str, attributes: &dyn Attributes);

    fn on_close_tag(&mut self, name: &str) -> Result<(), Self::Error>;

    fn on_text(&mut self, text: &str);
}

/// Marker of the items at one list level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ListMarker {
    Bullet,
    /// Number of the next item.
    Number(u32),
}

/// Plain text converter.
pub type TextConverter = Converter<PlainText>;

/// Annotated text converter.
pub type AnnotatedConverter = Converter<Annotations>;

/// Layout state of one conversion pass.
#[derive(Debug, Clone)]
pub struct Converter<S> {
    writer: TextWriter,
    styler: S,
    options: Options,
    list_level: usize,
    /// Marker per list level; slot `n` belongs to level `n + 1`.
    list_markers: SmallVec<[ListMarker; 8]>,
    preformatted_level: u32,
    skipped_level: u32,
    bold_level: u32,
    block_indent_level: u32,
}

impl TextConverter {
    pub fn plain(options: Options) -> Self {
        Self::with_styler(PlainText, options)
    }
}

impl AnnotatedConverter {
    pub fn annotated(options: Options) -> Self {
        let styler = Annotations::new(options.indent_unit);
        Self::with_styler(styler, options)
    }
}

impl<S: Styler> Converter<S> {
    pub fn with_styler(styler: S, options: Options) -> Self {
        Self {
            writer: TextWriter::with_indent(options.indent_text, 1024),
            styler,
            options,
            list_level: 0,
            list_markers: SmallVec::new(),
            preformatted_level: 0,
            skipped_level: 0,
            bold_level: 0,
            block_indent_level: 0,
        }
    }

    /// Output written so far.
    #[inline]
    pub fn text(&self) -> &str {
        self.writer.as_str()
    }

    /// Handle an open tag.
    pub fn open_tag(&mut self, name: &str, attributes: &dyn Attributes) {
        let Some(kind) = tag_kind(name) else {
            return;
        };
        if self.skipped_level > 0 && kind != TagKind::Skip {
            return;
        }
        trace_event!(tag = name, offset = self.writer.len(), "open");

        match kind {
            TagKind::LineBreak => {}
            TagKind::Block { newlines, indents } => self.block_start(newlines, 0, indents),
            TagKind::List(list) => self.list_start(list),
            TagKind::ListItem => self.list_item_start(),
            TagKind::DefinitionTerm => {
                self.block_start(1, self.list_level.saturating_sub(1), false)
            }
            TagKind::DefinitionDetail => self.block_start(1, self.list_level, true),
            TagKind::Preformatted => {
                self.block_start(2, 0, false);
                self.push_span(MONOSPACE);
                self.preformatted_level += 1;
            }
            TagKind::Heading(level) => {
                self.block_start(2, 0, false);
                let style = SpanStyle::new()
                    .font_size(HEADING_SIZES[usize::from(level - 1)])
                    .font_weight(self.enter_bold());
                self.push_span(style);
            }
            TagKind::Bold => {
                let style = SpanStyle::new().font_weight(self.enter_bold());
                self.push_span(style);
            }
            TagKind::Span(style) => self.push_span(style),
            TagKind::Anchor => {
                let offset = self.writer.content_offset();
                self.styler.push_link(offset, attributes.attribute("href").unwrap_or(""));
                if let Some(style) = self.options.link_style {
                    self.push_span(style);
                }
            }
            TagKind::Skip => self.skipped_level += 1,
        }
    }

    /// Handle a close tag.
    ///
    /// Fails only when the styler's stack has nothing to pop, which means the
    /// events were not balanced.
    pub fn close_tag(&mut self, name: &str) -> Result<(), S::Error> {
        let Some(kind) = tag_kind(name) else {
            return Ok(());
        };
        if self.skipped_level > 0 && kind != TagKind::Skip {
            return Ok(());
        }
        trace_event!(tag = name, offset = self.writer.len(), "close");

        match kind {
            TagKind::LineBreak => self.writer.write_line_break(),
            TagKind::Block { newlines, indents } => self.block_end(newlines, indents),
            TagKind::List(_) => {
                self.list_level = self.list_level.saturating_sub(1);
                let newlines = if self.list_level == 0 { 2 } else { 1 };
                self.block_end(newlines, false);
            }
            TagKind::ListItem => self.block_end(1, self.list_level > 1),
            TagKind::DefinitionTerm => self.block_end(1, false),
            TagKind::DefinitionDetail => self.block_end(1, true),
            TagKind::Preformatted => {
                self.preformatted_level = self.preformatted_level.saturating_sub(1);
                self.pop(name)?;
                self.block_end(2, false);
            }
            TagKind::Heading(_) => {
                self.pop(name)?;
                self.leave_bold();
                self.block_end(1, false);
            }
            TagKind::Bold => {
                self.pop(name)?;
                self.leave_bold();
            }
            TagKind::Span(_) => self.pop(name)?,
            TagKind::Anchor => {
                if self.options.link_style.is_some() {
                    self.pop(name)?;
                }
                self.pop(name)?;
            }
            TagKind::Skip => self.skipped_level = self.skipped_level.saturating_sub(1),
        }
        Ok(())
    }

    /// Handle a run of character data.
    pub fn text_run(&mut self, text: &str) {
        if self.skipped_level > 0 {
            return;
        }
        if self.preformatted_level == 0 {
            self.writer.write(text);
        } else {
            self.writer.write_preformatted(text);
        }
    }

    /// End the pass: flush the pending paragraph and hand over the output.
    pub fn finish(mut self) -> Result<S::Output, S::Error> {
        self.styler
            .close_pending_paragraph(self.writer.len(), self.block_indent_level);
        let text = self.writer.finish();
        self.styler.finish(text)
    }

    fn separator(&self, newlines: usize) -> usize {
        if self.options.compact_mode { 1 } else { newlines }
    }

    fn block_start(&mut self, newlines: usize, indent_count: usize, indents: bool) {
        self.styler
            .begin_paragraph(self.writer.len(), self.block_indent_level);
        if indents {
            self.block_indent_level += 1;
        }
        let indent_count = if S::LITERAL_INDENT { indent_count } else { 0 };
        let newlines = self.separator(newlines);
        self.writer.start_block(newlines, indent_count);
    }

    fn block_end(&mut self, newlines: usize, indents: bool) {
        let newlines = self.separator(newlines);
        self.writer.end_block(newlines);
        self.styler
            .close_pending_paragraph(self.writer.len(), self.block_indent_level);
        if indents {
            self.block_indent_level = self.block_indent_level.saturating_sub(1);
        }
    }

    fn list_start(&mut self, list: ListKind) {
        let level = self.list_level;
        self.block_start(if level == 0 { 2 } else { 1 }, 0, false);
        let marker = match list {
            ListKind::Unordered => ListMarker::Bullet,
            ListKind::Ordered => ListMarker::Number(1),
        };
        self.list_markers.truncate(level);
        self.list_markers.push(marker);
        self.list_level = level + 1;
    }

    fn list_item_start(&mut self) {
        let level = self.list_level;
        self.block_start(1, level.saturating_sub(1), level > 1);
        let marker = match level {
            0 => None,
            _ => self.list_markers.get_mut(level - 1),
        };
        match marker {
            Some(ListMarker::Number(next)) => {
                let number = *next;
                *next += 1;
                self.writer.write(&number.to_string());
                self.writer.write(". ");
            }
            Some(ListMarker::Bullet) | None => self.writer.write("• "),
        }
    }

    fn push_span(&mut self, style: SpanStyle) {
        let offset = self.writer.content_offset();
        self.styler.push_span(offset, style);
    }

    fn pop(&mut self, tag: &str) -> Result<(), S::Error> {
        self.styler.pop(self.writer.len(), tag)
    }

    fn enter_bold(&mut self) -> FontWeight {
        self.bold_level += 1;
        FontWeight::for_bold_depth(self.bold_level)
    }

    fn leave_bold(&mut self) {
        self.bold_level = self.bold_level.saturating_sub(1);
    }
}

impl<S: Styler> HtmlHandler for Converter<S> {
    type Error = S::Error;

    fn on_open_tag(&mut self, name: &str, attributes: &dyn Attributes) {
        self.open_tag(name, attributes);
    }

    fn on_close_tag(&mut self, name: &str) -> Result<(), S::Error> {
        self.close_tag(name)
    }

    fn on_text(&mut self, text: &str) {
        self.text_run(text);
    }
}
