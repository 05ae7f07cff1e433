/*!
 * Annotation formatting.
 *
 * A translated body is the original text, a marker block and the translation,
 * separated by blank lines. The marker block carries a hidden token with the
 * id of the annotated object, which is how a later run recognizes text it has
 * already annotated. Titles are single-line and use the `||` separator.
 */

/// Separator between an original title and its translation
pub const TITLE_SEPARATOR: &str = "||";

const MARKER_PREFIX: &str = "<!-- gh-translator:";
const MARKER_SUFFIX: &str = " -->";
const LABEL: &str = "*Translation*";

/// Builds and recognizes translation annotations
#[derive(Debug, Clone)]
pub struct AnnotationFormatter {
    icon: String,
}

impl AnnotationFormatter {
    pub fn new(icon: impl Into<String>) -> Self {
        Self { icon: icon.into() }
    }

    /// The hidden token identifying the annotation of object `id`
    pub fn marker_token(id: u64) -> String {
        format!("{}{}{}", MARKER_PREFIX, id, MARKER_SUFFIX)
    }

    /// The full marker line: hidden token, icon and label
    pub fn marker(&self, id: u64) -> String {
        format!("{}{} {}", Self::marker_token(id), self.icon, LABEL)
    }

    /// Whether `body` already carries the annotation for object `id`.
    /// Only the token is matched, so a changed icon does not re-annotate.
    pub fn already_annotated(body: &str, id: u64) -> bool {
        body.contains(&Self::marker_token(id))
    }

    /// Append `translated` to `original` under the marker for `id`
    pub fn format(&self, original: &str, translated: &str, id: u64) -> String {
        format!("{}\n\n{}\n\n{}", original, self.marker(id), translated)
    }

    pub fn title_already_annotated(title: &str) -> bool {
        title.contains(TITLE_SEPARATOR)
    }

    pub fn format_title(original: &str, translated: &str) -> String {
        format!("{} {} {}", original, TITLE_SEPARATOR, translated)
    }
}
