//! htmlconvert: HTML event streams to plain text or annotated rich text
//!
//! An upstream tokenizer reports open tags, close tags and text runs; this
//! crate lays them out as text. Blocks get newline separators, lists get
//! bullets or numbers, preformatted runs stay verbatim, and `script`-like
//! subtrees are dropped. The annotated flavour also records character
//! styles, links and paragraph indentation as ranges over the text.
//!
//! # Design Principles
//! - Single pass: every event is handled once, in order
//! - No tree: only counters and a style stack are kept
//! - Deterministic separators: block breaks never stack or lead the output
//! - Tokenizer-agnostic: anything that yields [`HtmlEvent`]s or drives an
//!   [`HtmlHandler`] can feed a conversion
//!
//! # Example
//! ```
//! use htmlconvert::{to_text, HtmlEvent};
//!
//! let events = [
//!     HtmlEvent::open("p"),
//!     HtmlEvent::Text("Hello,   world"),
//!     HtmlEvent::Close("p"),
//!     HtmlEvent::open("ul"),
//!     HtmlEvent::open("li"),
//!     HtmlEvent::Text("item"),
//!     HtmlEvent::Close("li"),
//!     HtmlEvent::Close("ul"),
//! ];
//! assert_eq!(to_text(events), "Hello, world\n\n• item");
//! ```

pub mod annotated;
pub mod convert;
pub mod error;
pub mod range;
pub mod style;
pub mod styler;
pub mod tag;
mod trace;
pub mod writer;

// Re-export primary types
pub use annotated::{AnnotatedText, Annotation, AnnotationKind};
pub use convert::{AnnotatedConverter, Attributes, Converter, HtmlHandler, TextConverter};
pub use error::{Error, Result};
pub use range::Range;
pub use style::{
    BaselineShift, Em, FontFamily, FontStyle, FontWeight, ParagraphStyle, SpanStyle,
    TextDecoration, TextIndent,
};
pub use styler::{Annotations, PlainText, Styler};
pub use tag::{tag_kind, ListKind, TagKind};
pub use writer::TextWriter;

/// Conversion options.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Options {
    /// Separate every block by exactly one newline instead of blank lines.
    pub compact_mode: bool,
    /// Literal indentation unit of plain text, repeated per nesting level.
    pub indent_text: &'static str,
    /// Paragraph indentation per nesting level in annotated text.
    pub indent_unit: Em,
    /// Style applied to link text in annotated text.
    pub link_style: Option<SpanStyle>,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            compact_mode: false,
            indent_text: writer::DEFAULT_INDENT,
            indent_unit: Em(2.0),
            link_style: Some(SpanStyle::new().text_decoration(TextDecoration::Underline)),
        }
    }
}

impl Options {
    /// Default options with compact separators.
    pub fn compact() -> Self {
        Self {
            compact_mode: true,
            ..Self::default()
        }
    }
}

/// One tokenizer event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HtmlEvent<'a> {
    /// Start tag with lowercase name and raw attribute values.
    Open {
        name: &'a str,
        attributes: Vec<(&'a str, &'a str)>,
    },
    /// End tag with lowercase name.
    Close(&'a str),
    /// Character data, entities already decoded.
    Text(&'a str),
}

impl<'a> HtmlEvent<'a> {
    /// Start tag without attributes.
    #[inline]
    pub fn open(name: &'a str) -> Self {
        HtmlEvent::Open {
            name,
            attributes: Vec::new(),
        }
    }

    /// Start tag with attributes.
    #[inline]
    pub fn open_with(name: &'a str, attributes: Vec<(&'a str, &'a str)>) -> Self {
        HtmlEvent::Open { name, attributes }
    }
}

/// Drive a handler with a sequence of events.
///
/// Stops at the first close tag the handler rejects.
pub fn feed<'a, H, I>(handler: &mut H, events: I) -> std::result::Result<(), H::Error>
where
    H: HtmlHandler + ?Sized,
    I: IntoIterator<Item = HtmlEvent<'a>>,
{
    for event in events {
        match event {
            HtmlEvent::Open { name, attributes } => handler.on_open_tag(name, &attributes),
            HtmlEvent::Close(name) => handler.on_close_tag(name)?,
            HtmlEvent::Text(text) => handler.on_text(text),
        }
    }
    Ok(())
}

/// Convert events to plain text.
///
/// This is the primary API for simple use cases.
pub fn to_text<'a, I>(events: I) -> String
where
    I: IntoIterator<Item = HtmlEvent<'a>>,
{
    to_text_with_options(events, &Options::default())
}

/// Convert events to plain text with options.
pub fn to_text_with_options<'a, I>(events: I, options: &Options) -> String
where
    I: IntoIterator<Item = HtmlEvent<'a>>,
{
    let mut converter = TextConverter::plain(*options);
    let fed = feed(&mut converter, events).and_then(|()| converter.finish());
    match fed {
        Ok(text) => text,
        Err(never) => match never {},
    }
}

/// Convert events to annotated text.
///
/// Fails when the events close more styles than they open, or leave styles
/// open at the end.
///
/// # Example
/// ```
/// use htmlconvert::{to_annotated, FontWeight, HtmlEvent};
///
/// let text = to_annotated([
///     HtmlEvent::Text("a "),
///     HtmlEvent::open("b"),
///     HtmlEvent::Text("bold"),
///     HtmlEvent::Close("b"),
///     HtmlEvent::Text(" word"),
/// ])
/// .unwrap();
///
/// assert_eq!(text.text(), "a bold word");
/// let (range, style) = text.spans().next().unwrap();
/// assert_eq!(range.slice(text.text()), "bold");
/// assert_eq!(style.font_weight, Some(FontWeight::BOLD));
/// ```
pub fn to_annotated<'a, I>(events: I) -> Result<AnnotatedText>
where
    I: IntoIterator<Item = HtmlEvent<'a>>,
{
    to_annotated_with_options(events, &Options::default())
}

/// Convert events to annotated text with options.
pub fn to_annotated_with_options<'a, I>(events: I, options: &Options) -> Result<AnnotatedText>
where
    I: IntoIterator<Item = HtmlEvent<'a>>,
{
    let mut converter = AnnotatedConverter::annotated(*options);
    feed(&mut converter, events)?;
    converter.finish()
}
