//! Annotated text output.

use crate::style::{ParagraphStyle, SpanStyle};
use crate::Range;

/// What an annotation attaches to its range.
#[derive(Debug, Clone, PartialEq)]
pub enum AnnotationKind {
    /// Paragraph indentation of a block.
    Paragraph(ParagraphStyle),
    /// Character style.
    Span(SpanStyle),
    /// Link target, the raw `href` value.
    Link(String),
}

/// A style or link over a range of the output text.
#[derive(Debug, Clone, PartialEq)]
pub struct Annotation {
    pub range: Range,
    pub kind: AnnotationKind,
}

/// Converted text with its annotations.
///
/// Annotations are sorted by start offset; annotations sharing a start keep
/// the order in which they were opened. Ranges may nest and may be empty.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AnnotatedText {
    text: String,
    annotations: Vec<Annotation>,
}

impl AnnotatedText {
    /// Assemble from text and annotations, clamping ranges to the text.
    pub(crate) fn new(text: String, mut annotations: Vec<Annotation>) -> Self {
        let len = text.len() as u32;
        for annotation in &mut annotations {
            annotation.range.clamp_to(len);
        }
        annotations.sort_by_key(|a| a.range.start);
        Self { text, annotations }
    }

    #[inline]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[inline]
    pub fn annotations(&self) -> &[Annotation] {
        &self.annotations
    }

    /// Character styles with their ranges.
    pub fn spans(&self) -> impl Iterator<Item = (Range, &SpanStyle)> + '_ {
        self.annotations.iter().filter_map(|a| match &a.kind {
            AnnotationKind::Span(style) => Some((a.range, style)),
            _ => None,
        })
    }

    /// Link targets with their ranges.
    pub fn links(&self) -> impl Iterator<Item = (Range, &str)> + '_ {
        self.annotations.iter().filter_map(|a| match &a.kind {
            AnnotationKind::Link(url) => Some((a.range, url.as_str())),
            _ => None,
        })
    }

    /// Paragraph styles with their ranges.
    pub fn paragraphs(&self) -> impl Iterator<Item = (Range, &ParagraphStyle)> + '_ {
        self.annotations.iter().filter_map(|a| match &a.kind {
            AnnotationKind::Paragraph(style) => Some((a.range, style)),
            _ => None,
        })
    }

    /// Annotations covering a byte offset.
    pub fn annotations_at(&self, offset: u32) -> impl Iterator<Item = &Annotation> + '_ {
        self.annotations
            .iter()
            .take_while(move |a| a.range.start <= offset)
            .filter(move |a| a.range.contains(offset))
    }

    /// Split into text and annotations.
    pub fn into_parts(self) -> (String, Vec<Annotation>) {
        (self.text, self.annotations)
    }
}
