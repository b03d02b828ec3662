//! The content provider capability

use std::future::Future;

use crate::search::{SearchError, SearchMatch, perform_search_in_content};
use crate::types::ResourceType;

/// A unit of text content that can be fetched and searched
///
/// Content sources (network resources, scripts, stylesheets, ...) implement
/// the first three methods; searching comes for free.
pub trait ContentProvider: Send + Sync {
    fn content_url(&self) -> &str;

    fn content_type(&self) -> ResourceType;

    /// Fetch the content once; `None` if it is unavailable
    fn request_content(&self) -> impl Future<Output = Option<String>> + Send;

    /// Search the content line by line
    ///
    /// Unavailable content yields no matches.
    fn search_in_content(
        &self,
        query: &str,
        case_sensitive: bool,
        is_regex: bool,
    ) -> impl Future<Output = Result<Vec<SearchMatch>, SearchError>> + Send {
        async move {
            match self.request_content().await {
                Some(content) => perform_search_in_content(&content, query, case_sensitive, is_regex),
                None => {
                    log::debug!("No content to search for {}", self.content_url());
                    Ok(Vec::new())
                }
            }
        }
    }
}

/// Content provider over text that is already in memory
#[derive(Debug, Clone)]
pub struct StaticContentProvider {
    content_url: String,
    content_type: ResourceType,
    content: Option<String>,
}

impl StaticContentProvider {
    pub fn new(
        content_url: impl Into<String>,
        content_type: ResourceType,
        content: impl Into<String>,
    ) -> Self {
        Self {
            content_url: content_url.into(),
            content_type,
            content: Some(content.into()),
        }
    }

    /// Provider whose content could not be loaded
    pub fn unavailable(content_url: impl Into<String>, content_type: ResourceType) -> Self {
        Self {
            content_url: content_url.into(),
            content_type,
            content: None,
        }
    }
}

impl ContentProvider for StaticContentProvider {
    fn content_url(&self) -> &str {
        &self.content_url
    }

    fn content_type(&self) -> ResourceType {
        self.content_type
    }

    fn request_content(&self) -> impl Future<Output = Option<String>> + Send {
        let content = self.content.clone();
        async move { content }
    }
}
