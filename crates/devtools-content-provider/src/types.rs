//! Resource type definitions

use serde::{Deserialize, Serialize};

/// Kind of resource a content provider serves
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ResourceType {
    Document,
    Stylesheet,
    Script,
    Image,
    Font,
    Media,
    Xhr,
    Fetch,
    Manifest,
    TextTrack,
    Other,
}

impl ResourceType {
    /// Machine-readable name
    pub fn name(self) -> &'static str {
        match self {
            Self::Document => "document",
            Self::Stylesheet => "stylesheet",
            Self::Script => "script",
            Self::Image => "image",
            Self::Font => "font",
            Self::Media => "media",
            Self::Xhr => "xhr",
            Self::Fetch => "fetch",
            Self::Manifest => "manifest",
            Self::TextTrack => "text-track",
            Self::Other => "other",
        }
    }

    /// Human-readable title
    pub fn title(self) -> &'static str {
        match self {
            Self::Document => "Document",
            Self::Stylesheet => "Stylesheet",
            Self::Script => "Script",
            Self::Image => "Image",
            Self::Font => "Font",
            Self::Media => "Media",
            Self::Xhr => "XHR",
            Self::Fetch => "Fetch",
            Self::Manifest => "Manifest",
            Self::TextTrack => "TextTrack",
            Self::Other => "Other",
        }
    }

    /// Whether content of this type is text and can be searched
    pub fn is_text_type(self) -> bool {
        matches!(
            self,
            Self::Document
                | Self::Stylesheet
                | Self::Script
                | Self::Xhr
                | Self::Fetch
                | Self::Manifest
                | Self::TextTrack
        )
    }

    /// MIME type used when the server does not report one
    pub fn canonical_mime_type(self) -> &'static str {
        match self {
            Self::Document => "text/html",
            Self::Stylesheet => "text/css",
            Self::Script => "text/javascript",
            Self::Manifest => "application/manifest+json",
            Self::TextTrack => "text/vtt",
            _ => "",
        }
    }
}

impl std::fmt::Display for ResourceType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
