//! Style definitions for the Unicode mathematical alphanumeric blocks
//!
//! Each style is described as data: a constant offset per character class and a
//! small table of literal overrides for letters whose glyph predates the block
//! (those slots are reserved in the block and the glyph lives in Letterlike Symbols).

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::TypographyError;

/// A typographic style. Variant order is the display order of candidates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Style {
    Bold,
    Italic,
    BoldItalic,
    Script,
    BoldScript,
    Fraktur,
    DoubleStruck,
    BoldFraktur,
    SansSerif,
    SansSerifBold,
    SansSerifItalic,
    SansSerifBoldItalic,
    Monospace,
}

/// Per-style mapping table.
#[derive(Debug)]
pub struct StyleDef {
    /// Offset added to `A`..=`Z`
    pub upper: u32,
    /// Offset added to `a`..=`z`
    pub lower: u32,
    /// Offset added to `0`..=`9`, `None` if the block has no digits
    pub digit: Option<u32>,
    /// Literal replacements checked before the offset is applied
    pub overrides: &'static [(char, char)],
}

/// Offset that moves `from` onto `to`.
const fn shift(from: char, to: char) -> u32 {
    to as u32 - from as u32
}

const BOLD: StyleDef = StyleDef {
    upper: shift('A', '\u{1D400}'),
    lower: shift('a', '\u{1D41A}'),
    digit: Some(shift('0', '\u{1D7CE}')),
    overrides: &[],
};

const ITALIC: StyleDef = StyleDef {
    upper: shift('A', '\u{1D434}'),
    lower: shift('a', '\u{1D44E}'),
    digit: None,
    overrides: &[('h', '\u{210E}')],
};

const BOLD_ITALIC: StyleDef = StyleDef {
    upper: shift('A', '\u{1D468}'),
    lower: shift('a', '\u{1D482}'),
    digit: None,
    overrides: &[],
};

const SCRIPT: StyleDef = StyleDef {
    upper: shift('A', '\u{1D49C}'),
    lower: shift('a', '\u{1D4B6}'),
    digit: None,
    overrides: &[
        ('B', '\u{212C}'),
        ('E', '\u{2130}'),
        ('F', '\u{2131}'),
        ('H', '\u{210B}'),
        ('I', '\u{2110}'),
        ('L', '\u{2112}'),
        ('M', '\u{2133}'),
        ('R', '\u{211B}'),
        ('e', '\u{212F}'),
        ('g', '\u{210A}'),
        ('o', '\u{2134}'),
    ],
};

const BOLD_SCRIPT: StyleDef = StyleDef {
    upper: shift('A', '\u{1D4D0}'),
    lower: shift('a', '\u{1D4EA}'),
    digit: None,
    overrides: &[],
};

const FRAKTUR: StyleDef = StyleDef {
    upper: shift('A', '\u{1D504}'),
    lower: shift('a', '\u{1D51E}'),
    digit: None,
    overrides: &[
        ('C', '\u{212D}'),
        ('H', '\u{210C}'),
        ('I', '\u{2111}'),
        ('R', '\u{211C}'),
        ('Z', '\u{2128}'),
    ],
};

const DOUBLE_STRUCK: StyleDef = StyleDef {
    upper: shift('A', '\u{1D538}'),
    lower: shift('a', '\u{1D552}'),
    digit: Some(shift('0', '\u{1D7D8}')),
    overrides: &[
        ('C', '\u{2102}'),
        ('H', '\u{210D}'),
        ('N', '\u{2115}'),
        ('P', '\u{2119}'),
        ('Q', '\u{211A}'),
        ('R', '\u{211D}'),
        ('Z', '\u{2124}'),
    ],
};

const BOLD_FRAKTUR: StyleDef = StyleDef {
    upper: shift('A', '\u{1D56C}'),
    lower: shift('a', '\u{1D586}'),
    digit: None,
    overrides: &[],
};

const SANS_SERIF: StyleDef = StyleDef {
    upper: shift('A', '\u{1D5A0}'),
    lower: shift('a', '\u{1D5BA}'),
    digit: Some(shift('0', '\u{1D7E2}')),
    overrides: &[],
};

const SANS_SERIF_BOLD: StyleDef = StyleDef {
    upper: shift('A', '\u{1D5D4}'),
    lower: shift('a', '\u{1D5EE}'),
    digit: Some(shift('0', '\u{1D7EC}')),
    overrides: &[],
};

const SANS_SERIF_ITALIC: StyleDef = StyleDef {
    upper: shift('A', '\u{1D608}'),
    lower: shift('a', '\u{1D622}'),
    digit: None,
    overrides: &[],
};

const SANS_SERIF_BOLD_ITALIC: StyleDef = StyleDef {
    upper: shift('A', '\u{1D63C}'),
    lower: shift('a', '\u{1D656}'),
    digit: None,
    overrides: &[],
};

const MONOSPACE: StyleDef = StyleDef {
    upper: shift('A', '\u{1D670}'),
    lower: shift('a', '\u{1D68A}'),
    digit: Some(shift('0', '\u{1D7F6}')),
    overrides: &[],
};

impl Style {
    /// All styles in candidate order.
    pub const ALL: [Style; 13] = [
        Style::Bold,
        Style::Italic,
        Style::BoldItalic,
        Style::Script,
        Style::BoldScript,
        Style::Fraktur,
        Style::DoubleStruck,
        Style::BoldFraktur,
        Style::SansSerif,
        Style::SansSerifBold,
        Style::SansSerifItalic,
        Style::SansSerifBoldItalic,
        Style::Monospace,
    ];

    /// Get the mapping table for this style
    pub const fn definition(self) -> &'static StyleDef {
        match self {
            Style::Bold => &BOLD,
            Style::Italic => &ITALIC,
            Style::BoldItalic => &BOLD_ITALIC,
            Style::Script => &SCRIPT,
            Style::BoldScript => &BOLD_SCRIPT,
            Style::Fraktur => &FRAKTUR,
            Style::DoubleStruck => &DOUBLE_STRUCK,
            Style::BoldFraktur => &BOLD_FRAKTUR,
            Style::SansSerif => &SANS_SERIF,
            Style::SansSerifBold => &SANS_SERIF_BOLD,
            Style::SansSerifItalic => &SANS_SERIF_ITALIC,
            Style::SansSerifBoldItalic => &SANS_SERIF_BOLD_ITALIC,
            Style::Monospace => &MONOSPACE,
        }
    }

    /// Stable identifier, also used by serde
    pub const fn id(self) -> &'static str {
        match self {
            Style::Bold => "bold",
            Style::Italic => "italic",
            Style::BoldItalic => "bold-italic",
            Style::Script => "script",
            Style::BoldScript => "bold-script",
            Style::Fraktur => "fraktur",
            Style::DoubleStruck => "double-struck",
            Style::BoldFraktur => "bold-fraktur",
            Style::SansSerif => "sans-serif",
            Style::SansSerifBold => "sans-serif-bold",
            Style::SansSerifItalic => "sans-serif-italic",
            Style::SansSerifBoldItalic => "sans-serif-bold-italic",
            Style::Monospace => "monospace",
        }
    }

    /// Human readable name shown next to candidates
    pub const fn display_name(self) -> &'static str {
        match self {
            Style::Bold => "Bold",
            Style::Italic => "Italic",
            Style::BoldItalic => "Bold Italic",
            Style::Script => "Script",
            Style::BoldScript => "Bold Script",
            Style::Fraktur => "Fraktur",
            Style::DoubleStruck => "Double-Struck",
            Style::BoldFraktur => "Bold Fraktur",
            Style::SansSerif => "Sans Serif",
            Style::SansSerifBold => "Sans Serif Bold",
            Style::SansSerifItalic => "Sans Serif Italic",
            Style::SansSerifBoldItalic => "Sans Serif Bold Italic",
            Style::Monospace => "Monospace",
        }
    }
}

impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Style {
    type Err = TypographyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Style::ALL
            .into_iter()
            .find(|style| style.id() == s)
            .ok_or_else(|| TypographyError::UnknownStyle(s.to_string()))
    }
}

/// True if `base + offset` is a Unicode scalar value for every `base` in `first..=last`.
const fn range_is_valid(first: char, last: char, offset: u32) -> bool {
    let lo = first as u32 + offset;
    let hi = last as u32 + offset;
    let below_surrogates = hi < 0xD800;
    let above_surrogates = lo > 0xDFFF && hi <= 0x10FFFF;
    below_surrogates || above_surrogates
}

const fn tables_are_valid() -> bool {
    let mut i = 0;
    while i < Style::ALL.len() {
        let def = Style::ALL[i].definition();
        if !range_is_valid('A', 'Z', def.upper) || !range_is_valid('a', 'z', def.lower) {
            return false;
        }
        if let Some(digit) = def.digit
            && !range_is_valid('0', '9', digit)
        {
            return false;
        }
        i += 1;
    }
    true
}

const _: () = assert!(tables_are_valid(), "style offsets must map into valid scalar values");
