//! Output flavours of the converter.
//!
//! The layout state machine in [`crate::Converter`] is shared; a [`Styler`]
//! decides what happens to paragraph boundaries and inline styles. Plain
//! text drops them, annotated text records them as ranges over the buffer.

use crate::annotated::{AnnotatedText, Annotation, AnnotationKind};
use crate::error::Error;
use crate::style::{Em, ParagraphStyle, SpanStyle, TextIndent};
use crate::trace::debug_event;
use crate::Range;
use smallvec::SmallVec;
use std::convert::Infallible;

/// Capability interface for attaching styles to converted text.
///
/// Offsets are byte offsets into the writer's buffer at the time of the call.
pub trait Styler {
    /// Final product of a conversion.
    type Output;
    type Error;

    /// Whether block indentation is written into the text as characters.
    const LITERAL_INDENT: bool;

    /// Finalize the open paragraph, if any, then open a new one at `offset`.
    fn begin_paragraph(&mut self, offset: usize, indent_depth: u32);

    /// Finalize the open paragraph, if any, ending it at `offset`.
    fn close_pending_paragraph(&mut self, offset: usize, indent_depth: u32);

    fn push_span(&mut self, offset: usize, style: SpanStyle);

    fn push_link(&mut self, offset: usize, url: &str);

    /// Close the innermost open style or link at `offset`.
    fn pop(&mut self, offset: usize, tag: &str) -> Result<(), Self::Error>;

    fn finish(self, text: String) -> Result<Self::Output, Self::Error>;
}

/// Plain text: every style operation is a no-op.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainText;

impl Styler for PlainText {
    type Output = String;
    type Error = Infallible;

    const LITERAL_INDENT: bool = true;

    #[inline]
    fn begin_paragraph(&mut self, _offset: usize, _indent_depth: u32) {}

    #[inline]
    fn close_pending_paragraph(&mut self, _offset: usize, _indent_depth: u32) {}

    #[inline]
    fn push_span(&mut self, _offset: usize, _style: SpanStyle) {}

    #[inline]
    fn push_link(&mut self, _offset: usize, _url: &str) {}

    #[inline]
    fn pop(&mut self, _offset: usize, _tag: &str) -> Result<(), Infallible> {
        Ok(())
    }

    #[inline]
    fn finish(self, text: String) -> Result<String, Infallible> {
        Ok(text)
    }
}

/// Annotated text: a style stack plus one deferred paragraph.
#[derive(Debug, Clone)]
pub struct Annotations {
    annotations: Vec<Annotation>,
    /// Indices into `annotations` of styles and links still open.
    open: SmallVec<[usize; 8]>,
    /// Start of the paragraph whose end is not known yet.
    pending_paragraph: Option<usize>,
    indent_unit: Em,
}

impl Annotations {
    pub fn new(indent_unit: Em) -> Self {
        Self {
            annotations: Vec::new(),
            open: SmallVec::new(),
            pending_paragraph: None,
            indent_unit,
        }
    }

    fn push(&mut self, offset: usize, kind: AnnotationKind) {
        self.open.push(self.annotations.len());
        self.annotations.push(Annotation {
            range: Range::from_usize(offset, offset),
            kind,
        });
    }
}

impl Styler for Annotations {
    type Output = AnnotatedText;
    type Error = Error;

    const LITERAL_INDENT: bool = false;

    fn begin_paragraph(&mut self, offset: usize, indent_depth: u32) {
        self.close_pending_paragraph(offset, indent_depth);
        self.pending_paragraph = Some(offset);
    }

    fn close_pending_paragraph(&mut self, offset: usize, indent_depth: u32) {
        if let Some(start) = self.pending_paragraph.take().filter(|&start| start < offset) {
            let indent = self.indent_unit.times(indent_depth);
            self.annotations.push(Annotation {
                range: Range::from_usize(start, offset),
                kind: AnnotationKind::Paragraph(ParagraphStyle {
                    text_indent: TextIndent::uniform(indent),
                }),
            });
        }
    }

    fn push_span(&mut self, offset: usize, style: SpanStyle) {
        self.push(offset, AnnotationKind::Span(style));
    }

    fn push_link(&mut self, offset: usize, url: &str) {
        self.push(offset, AnnotationKind::Link(url.to_owned()));
    }

    fn pop(&mut self, offset: usize, tag: &str) -> Result<(), Error> {
        let Some(index) = self.open.pop() else {
            debug_event!(tag, offset, "style stack underflow");
            return Err(Error::StyleStackUnderflow {
                tag: tag.to_owned(),
            });
        };
        self.annotations[index].range.extend_to(offset);
        Ok(())
    }

    fn finish(self, text: String) -> Result<AnnotatedText, Error> {
        if !self.open.is_empty() {
            debug_event!(open = self.open.len(), "styles left open at end of document");
            return Err(Error::UnclosedStyles {
                open: self.open.len(),
            });
        }
        Ok(AnnotatedText::new(text, self.annotations))
    }
}
