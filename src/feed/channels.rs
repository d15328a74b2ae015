//! Channel names from a location fragment.

use crate::traits::ChannelResolver;

/// Resolves channels from a location fragment such as `#pics+aww` or
/// `#/r/pics+aww`.
#[derive(Debug, Clone, Copy, Default)]
pub struct FragmentChannelResolver;

impl ChannelResolver for FragmentChannelResolver {
    fn resolve(&self, location: &str) -> Vec<String> {
        let Some((_, fragment)) = location.rsplit_once('#') else {
            return Vec::new();
        };
        let fragment = fragment.trim_start_matches('/');
        let fragment = fragment.strip_prefix("r/").unwrap_or(fragment);

        fragment
            .split(['+', ',', '/'])
            .map(str::trim)
            .filter(|c| !c.is_empty())
            .filter(|c| c.chars().all(|ch| ch.is_ascii_alphanumeric() || ch == '_'))
            .map(str::to_string)
            .collect()
    }
}
