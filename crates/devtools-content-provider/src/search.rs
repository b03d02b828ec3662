//! Line-oriented search over text content

use regex::{Regex, RegexBuilder};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur while searching content
#[derive(Error, Debug)]
pub enum SearchError {
    #[error("Invalid search pattern '{pattern}': {source}")]
    InvalidRegex {
        pattern: String,
        #[source]
        source: regex::Error,
    },
}

/// A line that matched a search
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchMatch {
    /// Zero-based line index
    pub line_number: usize,
    /// Full text of the line, without its line ending
    pub line_content: String,
}

impl SearchMatch {
    pub fn new(line_number: usize, line_content: impl Into<String>) -> Self {
        Self {
            line_number,
            line_content: line_content.into(),
        }
    }
}

/// Compile the pattern used to search content
///
/// Plain queries are escaped and matched literally. Matching ignores case
/// unless `case_sensitive` is set.
pub fn create_search_regex(
    query: &str,
    case_sensitive: bool,
    is_regex: bool,
) -> Result<Regex, SearchError> {
    let pattern = if is_regex {
        query.to_string()
    } else {
        regex::escape(query)
    };

    RegexBuilder::new(&pattern)
        .case_insensitive(!case_sensitive)
        .build()
        .map_err(|source| SearchError::InvalidRegex {
            pattern: query.to_string(),
            source,
        })
}

fn split_lines(content: &str) -> impl Iterator<Item = &str> {
    // Empty content has no lines, not a single empty one
    let lines = (!content.is_empty()).then(|| content.split('\n'));
    lines
        .into_iter()
        .flatten()
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
}

/// Find every line of `content` that matches `query`
///
/// Lines end at `\n` or `\r\n`, and text after the last line break counts as
/// a line even when it is empty. Matches are returned in ascending line order;
/// empty content yields no matches.
///
/// # Example
///
/// ```
/// # use devtools_content_provider::perform_search_in_content;
/// let matches = perform_search_in_content("a\nb\na\n", "a", true, false)?;
/// let lines: Vec<usize> = matches.iter().map(|m| m.line_number).collect();
/// assert_eq!(lines, vec![0, 2]);
/// # Ok::<(), devtools_content_provider::SearchError>(())
/// ```
pub fn perform_search_in_content(
    content: &str,
    query: &str,
    case_sensitive: bool,
    is_regex: bool,
) -> Result<Vec<SearchMatch>, SearchError> {
    let regex = create_search_regex(query, case_sensitive, is_regex)?;

    let matches: Vec<SearchMatch> = split_lines(content)
        .enumerate()
        .filter(|(_, line)| regex.is_match(line))
        .map(|(line_number, line)| SearchMatch::new(line_number, line))
        .collect();

    log::trace!("Search for '{}' matched {} lines", query, matches.len());

    Ok(matches)
}
