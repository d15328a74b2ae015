//! Channel resolution trait abstraction.

/// Derives the channel set from an external location indicator (for example
/// a URL fragment).
///
/// An empty result means "use the configured default channels".
pub trait ChannelResolver {
    /// Resolve channels from `location`.
    fn resolve(&self, location: &str) -> Vec<String>;
}
