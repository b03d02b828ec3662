//! Content providers for developer tools
//!
//! A content provider is a unit of text content (a script, a stylesheet, a
//! network response, ...) that can be fetched and searched line by line.
//! This crate holds the provider capability together with the helpers
//! every source shares: literal / regex line search and `data:` URL
//! conversion.
//!
//! # Example
//!
//! ```
//! use devtools_content_provider::{content_as_data_url, perform_search_in_content};
//!
//! let matches = perform_search_in_content("Hello\nworld\n", "hello", false, false)?;
//! assert_eq!(matches[0].line_number, 0);
//!
//! let url = content_as_data_url(Some("abc"), "text/plain", false, Some("utf-8"));
//! assert_eq!(url.as_deref(), Some("data:text/plain;charset=utf-8,abc"));
//! # Ok::<(), devtools_content_provider::SearchError>(())
//! ```

mod data_url;
mod provider;
mod search;
mod types;

pub use data_url::{MAX_DATA_URL_SIZE, bytes_as_data_url, content_as_data_url};
pub use provider::{ContentProvider, StaticContentProvider};
pub use search::{SearchError, SearchMatch, create_search_regex, perform_search_in_content};
pub use types::ResourceType;
