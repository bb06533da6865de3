// src/extractors/section.rs

use crate::utils::error::ExtractError;
use once_cell::sync::Lazy;
use regex::Regex;

// --- Regex Patterns (Lazy Static) ---
// Start of the next version section. Multiline so `^` anchors at every line.
static NEXT_HEADING_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?m)^## ").expect("Failed to compile NEXT_HEADING_RE"));

// --- Data Structures ---
/// One version's release notes pulled out of the changelog.
#[derive(Debug, Clone)]
pub struct ReleaseNotes {
    /// The identifier as supplied, trimmed (e.g. "v1.2.3").
    pub tag: String,
    /// The tag with any leading 'v' stripped (e.g. "1.2.3").
    pub version: String,
    /// Section text between the matched heading and the next one, trimmed.
    pub body: String,
}

// --- Main Extractor Structure ---
pub struct SectionExtractor;

impl SectionExtractor {
    pub fn new() -> Self {
        Self {}
    }

    /// Finds the changelog section belonging to `identifier`.
    ///
    /// The heading may carry the raw tag or the bare version, with or without
    /// surrounding brackets; trailing heading text (dates etc.) is ignored.
    /// Returns `Ok(None)` when no heading matches or the section body is
    /// empty after trimming.
    pub fn extract(
        &self,
        document: &str,
        identifier: &str,
    ) -> Result<Option<ReleaseNotes>, ExtractError> {
        let tag = identifier.trim();
        let version = tag.strip_prefix('v').unwrap_or(tag).trim();

        if document.is_empty() {
            tracing::debug!("Changelog document is empty, nothing to extract");
            return Ok(None);
        }

        let heading = self.heading_pattern(tag, version)?;
        let heading_match = match heading.find(document) {
            Some(m) => m,
            None => {
                tracing::debug!("No heading found for tag '{}' (version '{}')", tag, version);
                return Ok(None);
            }
        };
        tracing::debug!(
            "Matched heading at byte {}: '{}'",
            heading_match.start(),
            heading_match.as_str()
        );

        // Body runs from just past the heading line to the next `## ` line,
        // or to the end of the document.
        let remainder = &document[heading_match.end()..];
        let body = match NEXT_HEADING_RE.find(remainder) {
            Some(next) => &remainder[..next.start()],
            None => remainder,
        };
        let body = body.trim();

        if body.is_empty() {
            tracing::debug!("Section for '{}' is empty after trimming, treating as absent", tag);
            return Ok(None);
        }

        Ok(Some(ReleaseNotes {
            tag: tag.to_string(),
            version: version.to_string(),
            body: body.to_string(),
        }))
    }

    /// Builds the line-anchored heading pattern for one identifier.
    ///
    /// Accepts `## tag`, `## [tag]`, `## version`, or `## [version]`; when
    /// tag and version differ the tag alternative comes first, and the first
    /// heading in document order wins either way.
    fn heading_pattern(&self, tag: &str, version: &str) -> Result<Regex, ExtractError> {
        let alternatives = if tag == version {
            regex::escape(version)
        } else {
            format!("(?:{}|{})", regex::escape(tag), regex::escape(version))
        };
        // After the identifier: end of line, or a separator that cannot
        // extend the version token, so "1.2" never matches "## [1.2.3]".
        let pattern = format!(r"(?m)^## \[?{alternatives}\]?(?:$|[^0-9A-Za-z.].*$)");
        Regex::new(&pattern).map_err(|e| ExtractError::Pattern(e.to_string()))
    }
}
