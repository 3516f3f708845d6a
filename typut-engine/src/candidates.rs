//! Candidate list construction
//!
//! The list starts with the raw composition, followed by its case variants
//! (only those that differ from the raw text) and one rendering per style.

use crate::style::Style;
use crate::typography::render;

/// Where a candidate came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CandidateKind {
    /// The composition as typed
    Raw,
    /// First letter of every word uppercased, the rest lowercased
    TitleCase,
    Lowercase,
    Uppercase,
    /// Rendering in a typographic style
    Styled(Style),
}

impl CandidateKind {
    /// Short label for candidate annotations. `None` for the raw text.
    pub fn label(&self) -> Option<&'static str> {
        match self {
            CandidateKind::Raw => None,
            CandidateKind::TitleCase => Some("Title Case"),
            CandidateKind::Lowercase => Some("lowercase"),
            CandidateKind::Uppercase => Some("UPPERCASE"),
            CandidateKind::Styled(style) => Some(style.display_name()),
        }
    }
}

/// A candidate string with its origin
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyledCandidate {
    pub text: String,
    pub kind: CandidateKind,
}

impl StyledCandidate {
    fn new(text: String, kind: CandidateKind) -> Self {
        Self { text, kind }
    }
}

/// Capitalize every whitespace-delimited word.
pub fn title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut word_start = true;
    for c in text.chars() {
        if c.is_whitespace() {
            out.push(c);
            word_start = true;
        } else if word_start {
            out.extend(c.to_uppercase());
            word_start = false;
        } else {
            out.extend(c.to_lowercase());
        }
    }
    out
}

/// Build the annotated candidate list for `raw`.
///
/// Case variants equal to `raw` are dropped. Styled renderings are always
/// appended, one per style, even when they repeat the raw text.
pub fn build_candidates_annotated(raw: &str) -> Vec<StyledCandidate> {
    let mut candidates = Vec::with_capacity(4 + Style::ALL.len());
    candidates.push(StyledCandidate::new(raw.to_string(), CandidateKind::Raw));

    let variants = [
        (title_case(raw), CandidateKind::TitleCase),
        (raw.to_lowercase(), CandidateKind::Lowercase),
        (raw.to_uppercase(), CandidateKind::Uppercase),
    ];
    candidates.extend(
        variants
            .into_iter()
            .filter(|(text, _)| text != raw)
            .map(|(text, kind)| StyledCandidate::new(text, kind)),
    );

    candidates.extend(
        Style::ALL
            .into_iter()
            .map(|style| StyledCandidate::new(render(raw, style), CandidateKind::Styled(style))),
    );

    tracing::trace!("built {} candidates for {:?}", candidates.len(), raw);
    candidates
}

/// Build the candidate strings for `raw`, in display order.
pub fn build_candidates(raw: &str) -> Vec<String> {
    build_candidates_annotated(raw)
        .into_iter()
        .map(|c| c.text)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_case() {
        assert_eq!(title_case("hello world"), "Hello World");
        assert_eq!(title_case("hELLO"), "Hello");
        assert_eq!(title_case("  two  spaces"), "  Two  Spaces");
        assert_eq!(title_case("x-ray"), "X-ray");
        assert_eq!(title_case(""), "");
    }

    #[test]
    fn test_dedup_against_raw() {
        let candidates = build_candidates("abc");
        assert_eq!(candidates[0], "abc");
        assert_eq!(candidates[1], "Abc");
        assert_eq!(candidates[2], "ABC");
        assert_eq!(candidates.iter().filter(|c| *c == "abc").count(), 1);
        assert_eq!(candidates.iter().filter(|c| *c == "ABC").count(), 1);
        assert_eq!(candidates.len(), 3 + Style::ALL.len());
    }

    #[test]
    fn test_all_variants_kept_for_mixed_case() {
        let kinds: Vec<_> = build_candidates_annotated("hELLO")
            .into_iter()
            .map(|c| c.kind)
            .take(4)
            .collect();
        assert_eq!(
            kinds,
            vec![
                CandidateKind::Raw,
                CandidateKind::TitleCase,
                CandidateKind::Lowercase,
                CandidateKind::Uppercase,
            ]
        );
    }

    #[test]
    fn test_variants_not_deduplicated_among_themselves() {
        // Title case and uppercase coincide for a single letter, both stay
        let candidates = build_candidates("a");
        assert_eq!(&candidates[..3], &["a", "A", "A"]);
    }

    #[test]
    fn test_styled_kept_when_equal_to_raw() {
        let candidates = build_candidates("!?");
        assert_eq!(candidates.len(), 1 + Style::ALL.len());
        assert!(candidates.iter().all(|c| c == "!?"));
    }

    #[test]
    fn test_empty_composition() {
        let candidates = build_candidates("");
        assert_eq!(candidates.len(), 1 + Style::ALL.len());
        assert_eq!(candidates[0], "");
        assert!(candidates[1..].iter().all(|c| c.is_empty()));
    }

    #[test]
    fn test_labels() {
        let annotated = build_candidates_annotated("Ab");
        assert_eq!(annotated[0].kind.label(), None);
        let last = annotated.last().unwrap();
        assert_eq!(last.kind, CandidateKind::Styled(Style::Monospace));
        assert_eq!(last.kind.label(), Some("Monospace"));
    }
}
