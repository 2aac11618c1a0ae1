//! Rich text value types carried by annotations.
//!
//! These are plain descriptors: the converter only attaches them to ranges
//! of the output, it never interprets them.

/// A length relative to the current font size.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct Em(pub f32);

impl Em {
    pub const ZERO: Em = Em(0.0);

    /// Scale by an integer nesting depth.
    #[inline]
    pub fn times(self, depth: u32) -> Em {
        Em(self.0 * depth as f32)
    }
}

/// Font weight on the usual 100-900 scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FontWeight(pub u16);

impl FontWeight {
    /// Weight of a single bold context.
    pub const BOLD: FontWeight = FontWeight(700);
    /// Weight of nested bold contexts.
    pub const BLACK: FontWeight = FontWeight(900);

    /// Weight for a bold context at nesting `depth` (1-based).
    #[inline]
    pub const fn for_bold_depth(depth: u32) -> FontWeight {
        if depth <= 1 { Self::BOLD } else { Self::BLACK }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FontStyle {
    Italic,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FontFamily {
    Monospace,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextDecoration {
    Underline,
    LineThrough,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BaselineShift {
    Superscript,
    Subscript,
}

/// Character-level style. Unset fields inherit from the enclosing text.
///
/// Built in `const` context so tag tables can hold ready-made styles:
/// ```
/// use htmlconvert::{FontStyle, SpanStyle};
///
/// const ITALIC: SpanStyle = SpanStyle::new().font_style(FontStyle::Italic);
/// assert_eq!(ITALIC.font_style, Some(FontStyle::Italic));
/// assert!(ITALIC.font_weight.is_none());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SpanStyle {
    pub font_weight: Option<FontWeight>,
    pub font_style: Option<FontStyle>,
    /// Font size relative to the surrounding text.
    pub font_size: Option<Em>,
    pub font_family: Option<FontFamily>,
    pub text_decoration: Option<TextDecoration>,
    pub baseline_shift: Option<BaselineShift>,
}

impl SpanStyle {
    pub const fn new() -> Self {
        Self {
            font_weight: None,
            font_style: None,
            font_size: None,
            font_family: None,
            text_decoration: None,
            baseline_shift: None,
        }
    }

    pub const fn font_weight(self, weight: FontWeight) -> Self {
        Self {
            font_weight: Some(weight),
            ..self
        }
    }

    pub const fn font_style(self, style: FontStyle) -> Self {
        Self {
            font_style: Some(style),
            ..self
        }
    }

    pub const fn font_size(self, size: Em) -> Self {
        Self {
            font_size: Some(size),
            ..self
        }
    }

    pub const fn font_family(self, family: FontFamily) -> Self {
        Self {
            font_family: Some(family),
            ..self
        }
    }

    pub const fn text_decoration(self, decoration: TextDecoration) -> Self {
        Self {
            text_decoration: Some(decoration),
            ..self
        }
    }

    pub const fn baseline_shift(self, shift: BaselineShift) -> Self {
        Self {
            baseline_shift: Some(shift),
            ..self
        }
    }
}

/// First-line and continuation-line indentation of a paragraph.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TextIndent {
    pub first_line: Em,
    pub rest_line: Em,
}

impl TextIndent {
    /// Same indentation for every line.
    #[inline]
    pub const fn uniform(size: Em) -> Self {
        Self {
            first_line: size,
            rest_line: size,
        }
    }
}

/// Paragraph-level style.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ParagraphStyle {
    pub text_indent: TextIndent,
}
