//! Tag categories.
//!
//! Every recognised tag name maps to one [`TagKind`] carrying the parameters
//! its open and close handlers need. Names are expected in lowercase.

use crate::style::{BaselineShift, Em, FontFamily, FontStyle, SpanStyle, TextDecoration};
use rustc_hash::FxHashMap;
use std::sync::LazyLock;

/// List flavour, which decides the item marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListKind {
    /// `ul`, `dl`: bullet markers.
    Unordered,
    /// `ol`: 1-based numbers.
    Ordered,
}

/// Layout and styling behaviour of a tag.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TagKind {
    /// `br`: forced line break, acts on close.
    LineBreak,
    /// Block separated by `newlines` from its siblings. `indents` blocks
    /// raise the paragraph indentation depth of annotated output.
    Block { newlines: usize, indents: bool },
    List(ListKind),
    ListItem,
    DefinitionTerm,
    DefinitionDetail,
    Preformatted,
    /// `h1`..`h6`, level 1-based.
    Heading(u8),
    /// `strong`, `b`: bold that intensifies when nested.
    Bold,
    /// Other inline styles.
    Span(SpanStyle),
    Anchor,
    /// Tags whose whole subtree is dropped.
    Skip,
}

/// Relative font size of each heading level, `h1` first.
pub const HEADING_SIZES: [Em; 6] = [Em(1.5), Em(1.4), Em(1.3), Em(1.2), Em(1.1), Em(1.0)];

pub const MONOSPACE: SpanStyle = SpanStyle::new().font_family(FontFamily::Monospace);

const ITALIC: SpanStyle = SpanStyle::new().font_style(FontStyle::Italic);
const BIG: SpanStyle = SpanStyle::new().font_size(Em(1.25));
const SMALL: SpanStyle = SpanStyle::new().font_size(Em(0.8));
const UNDERLINE: SpanStyle = SpanStyle::new().text_decoration(TextDecoration::Underline);
const LINE_THROUGH: SpanStyle = SpanStyle::new().text_decoration(TextDecoration::LineThrough);
const SUPERSCRIPT: SpanStyle = SpanStyle::new().baseline_shift(BaselineShift::Superscript);
const SUBSCRIPT: SpanStyle = SpanStyle::new().baseline_shift(BaselineShift::Subscript);

const GENERIC_BLOCKS: &[&str] = &[
    "div", "header", "footer", "main", "nav", "aside", "section", "article", "address", "figure",
    "figcaption", "video", "audio",
];

const SKIPPED: &[&str] = &["script", "head", "table", "form", "fieldset"];

static TAGS: LazyLock<FxHashMap<&'static str, TagKind>> = LazyLock::new(build_table);

fn build_table() -> FxHashMap<&'static str, TagKind> {
    let mut table = FxHashMap::default();
    let mut add = |names: &[&'static str], kind: TagKind| {
        for &name in names {
            table.insert(name, kind);
        }
    };

    add(&["br"], TagKind::LineBreak);
    add(&["p"], TagKind::Block { newlines: 2, indents: false });
    add(&["blockquote"], TagKind::Block { newlines: 2, indents: true });
    add(GENERIC_BLOCKS, TagKind::Block { newlines: 1, indents: false });
    add(&["ul", "dl"], TagKind::List(ListKind::Unordered));
    add(&["ol"], TagKind::List(ListKind::Ordered));
    add(&["li"], TagKind::ListItem);
    add(&["dt"], TagKind::DefinitionTerm);
    add(&["dd"], TagKind::DefinitionDetail);
    add(&["pre"], TagKind::Preformatted);
    add(&["strong", "b"], TagKind::Bold);
    add(&["em", "cite", "dfn", "i"], TagKind::Span(ITALIC));
    add(&["big"], TagKind::Span(BIG));
    add(&["small"], TagKind::Span(SMALL));
    add(&["tt", "code"], TagKind::Span(MONOSPACE));
    add(&["u"], TagKind::Span(UNDERLINE));
    add(&["del", "s", "strike"], TagKind::Span(LINE_THROUGH));
    add(&["sup"], TagKind::Span(SUPERSCRIPT));
    add(&["sub"], TagKind::Span(SUBSCRIPT));
    add(&["a"], TagKind::Anchor);
    add(SKIPPED, TagKind::Skip);
    for (level, name) in ["h1", "h2", "h3", "h4", "h5", "h6"].into_iter().enumerate() {
        add(&[name], TagKind::Heading(level as u8 + 1));
    }

    table
}

/// Look up the category of a lowercase tag name.
///
/// Returns `None` for tags the converter ignores; their children are still
/// converted.
#[inline]
pub fn tag_kind(name: &str) -> Option<TagKind> {
    TAGS.get(name).copied()
}
