//! typut-engine: typographic transliteration of Latin text
//!
//! Maps Latin letters and ASCII digits into the Unicode mathematical alphanumeric
//! styles (bold, italic, script, fraktur, ...) and builds the candidate list an
//! input method offers for a composition.

pub mod candidates;
pub mod error;
pub mod style;
pub mod typography;

pub use candidates::{CandidateKind, StyledCandidate, build_candidates, build_candidates_annotated};
pub use error::TypographyError;
pub use style::{Style, StyleDef};
pub use typography::{CharClass, render, render_all, try_render};
