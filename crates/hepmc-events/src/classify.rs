//! Line classification for HepMC listings.
//!
//! Every input line is categorized by its leading whitespace-delimited token.
//! Unrecognized tags (comments, unit declarations, the `HepMC::` framing
//! lines) are not errors; they classify as [`LineTag::Ignored`] and are
//! skipped by the stream driver.

/// Tag of one input line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineTag {
    /// `E` record: begins a new event.
    EventStart,
    /// `V` record: an interaction vertex.
    Vertex,
    /// `P` record: a particle leaving the current vertex.
    Particle,
    /// Anything else, including blank lines.
    Ignored,
}

/// Classifies a single line by its leading token.
///
/// Tolerates arbitrary trailing fields; only the first token is inspected.
pub fn classify(line: &str) -> LineTag {
    match line.split_whitespace().next() {
        Some("E") => LineTag::EventStart,
        Some("V") => LineTag::Vertex,
        Some("P") => LineTag::Particle,
        _ => LineTag::Ignored,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_known_tags() {
        assert_eq!(classify("E 29 -1 0"), LineTag::EventStart);
        assert_eq!(classify("V -200648 1121 9.5e+02"), LineTag::Vertex);
        assert_eq!(classify("P 200386 2112 -2.5e+02"), LineTag::Particle);
    }

    #[test]
    fn test_classify_ignores_other_tags() {
        assert_eq!(classify("U GEV MM"), LineTag::Ignored);
        assert_eq!(classify("N 1 \"0\""), LineTag::Ignored);
        assert_eq!(classify("HepMC::Version 2.06.09"), LineTag::Ignored);
        assert_eq!(
            classify("HepMC::IO_GenEvent-START_EVENT_LISTING"),
            LineTag::Ignored
        );
    }

    #[test]
    fn test_classify_blank_and_whitespace_lines() {
        assert_eq!(classify(""), LineTag::Ignored);
        assert_eq!(classify("   \t  "), LineTag::Ignored);
    }

    #[test]
    fn test_classify_tag_must_match_exactly() {
        assert_eq!(classify("EV 1 2"), LineTag::Ignored);
        assert_eq!(classify("e 29"), LineTag::Ignored);
        assert_eq!(classify("Particle 1"), LineTag::Ignored);
    }

    #[test]
    fn test_classify_tolerates_leading_whitespace() {
        assert_eq!(classify("  E 29"), LineTag::EventStart);
    }

    #[test]
    fn test_classify_bare_tag() {
        // A lone tag still classifies; field extraction fails later.
        assert_eq!(classify("E"), LineTag::EventStart);
    }
}
