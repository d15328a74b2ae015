//! Error category classification.
//!
//! Categories let callers decide how loudly to surface a failure without
//! matching on every concrete variant.

use std::fmt;

/// High-level categorization of board errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    /// Feed transport failures (timeout, connection, HTTP status).
    Network,

    /// A response arrived but its content was unusable: malformed feed
    /// payloads, undecodable images, placeholder images.
    Content,

    /// The unit of work was cancelled by the board itself.
    Cancelled,

    /// Invalid configuration values.
    Configuration,
}

impl ErrorCategory {
    /// Returns a short label for the category suitable for logging.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCategory::Network => "network",
            ErrorCategory::Content => "content",
            ErrorCategory::Cancelled => "cancelled",
            ErrorCategory::Configuration => "configuration",
        }
    }

    /// Returns a user-friendly description of the category.
    pub fn description(&self) -> &'static str {
        match self {
            ErrorCategory::Network => "Network connectivity issue",
            ErrorCategory::Content => "Unusable content",
            ErrorCategory::Cancelled => "Request cancelled",
            ErrorCategory::Configuration => "Configuration problem",
        }
    }
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_as_str() {
        assert_eq!(ErrorCategory::Network.as_str(), "network");
        assert_eq!(ErrorCategory::Content.as_str(), "content");
        assert_eq!(ErrorCategory::Cancelled.as_str(), "cancelled");
        assert_eq!(ErrorCategory::Configuration.as_str(), "configuration");
    }

    #[test]
    fn test_category_display_matches_as_str() {
        assert_eq!(ErrorCategory::Network.to_string(), "network");
    }
}
