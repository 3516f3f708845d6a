//! Per-character style mapping
//!
//! Every character is classified first. Only `A`-`Z`, `a`-`z` and `0`-`9` are
//! ever rewritten; everything else passes through untouched, so rendering is
//! total over arbitrary input.

use crate::error::{Result, TypographyError};
use crate::style::Style;

/// Character class as seen by the style tables
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharClass {
    /// `A`..=`Z`
    Upper,
    /// `a`..=`z`
    Lower,
    /// `0`..=`9`
    Digit,
    /// Anything else, never transformed
    Other,
}

impl CharClass {
    pub fn of(c: char) -> Self {
        match c {
            'A'..='Z' => CharClass::Upper,
            'a'..='z' => CharClass::Lower,
            '0'..='9' => CharClass::Digit,
            _ => CharClass::Other,
        }
    }
}

impl Style {
    /// Offset applied to characters of `class`, if the style covers that class.
    pub fn offset(self, class: CharClass) -> Option<u32> {
        let def = self.definition();
        match class {
            CharClass::Upper => Some(def.upper),
            CharClass::Lower => Some(def.lower),
            CharClass::Digit => def.digit,
            CharClass::Other => None,
        }
    }

    /// Literal override glyph for `c`, if any.
    pub fn override_for(self, c: char) -> Option<char> {
        self.definition()
            .overrides
            .iter()
            .find(|(from, _)| *from == c)
            .map(|(_, to)| *to)
    }

    /// Map a single character into this style.
    pub fn map_char(self, c: char) -> Result<char> {
        let class = CharClass::of(c);
        if class == CharClass::Other {
            return Ok(c);
        }
        if let Some(glyph) = self.override_for(c) {
            return Ok(glyph);
        }
        let Some(offset) = self.offset(class) else {
            return Ok(c);
        };
        let value = c as u32 + offset;
        char::from_u32(value).ok_or(TypographyError::InvalidCodePoint {
            style: self,
            ch: c,
            value,
        })
    }
}

/// Render `text` in `style`, reporting a table defect as an error.
pub fn try_render(text: &str, style: Style) -> Result<String> {
    text.chars().map(|c| style.map_char(c)).collect()
}

/// Render `text` in `style`.
///
/// The style tables are checked at compile time, so a failure here is a bug in
/// the tables rather than in the input.
pub fn render(text: &str, style: Style) -> String {
    match try_render(text, style) {
        Ok(rendered) => rendered,
        Err(e) => panic!("corrupt style table: {}", e),
    }
}

/// Render `text` in every style, in [`Style::ALL`] order.
pub fn render_all(text: &str) -> Vec<String> {
    Style::ALL
        .into_iter()
        .map(|style| render(text, style))
        .collect()
}
