/*!
 * Text translation and annotation.
 *
 * - `core`: the `Translator`, which detects the language of a text and
 *   translates it into the other configured language
 * - `formatting`: the `AnnotationFormatter`, which appends a translation
 *   under a marker and recognizes that marker on later runs
 */

pub use self::core::Translator;
pub use self::formatting::{AnnotationFormatter, TITLE_SEPARATOR};

pub mod core;
pub mod formatting;

/// The two configured languages; text in one is translated into the other
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguagePair {
    /// Also the fallback target when detection is inconclusive
    pub first: String,
    pub second: String,
}

impl LanguagePair {
    pub fn new(first: impl Into<String>, second: impl Into<String>) -> Self {
        Self {
            first: first.into(),
            second: second.into(),
        }
    }
}

impl std::fmt::Display for LanguagePair {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} <-> {}", self.first, self.second)
    }
}
