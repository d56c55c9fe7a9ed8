//! Name-based ignore matching.

use globset::{Glob, GlobSet, GlobSetBuilder};
use std::collections::HashSet;
#[cfg(feature = "logging")]
use tracing;

const WILDCARDS: &[char] = &['*', '?', '['];

/// Decides whether a single entry name is ignored.
///
/// A pattern matches either by exact equality with the name or, when it
/// contains a wildcard, as a shell glob. Matching is a union over all
/// patterns; there is no negation.
#[derive(Debug, Clone)]
pub struct IgnoreMatcher {
    exact: HashSet<String>,
    globs: Option<GlobSet>,
}
impl IgnoreMatcher {
    pub fn new<S: AsRef<str>>(patterns: &[S]) -> Self {
        let mut exact = HashSet::new();
        let mut builder = GlobSetBuilder::new();
        let mut glob_count = 0usize;
        for pattern in patterns {
            let pattern = pattern.as_ref().trim();
            if pattern.is_empty() {
                continue;
            }
            exact.insert(pattern.to_string());
            if !pattern.contains(WILDCARDS) {
                continue;
            }
            match Glob::new(pattern) {
                Ok(glob) => {
                    builder.add(glob);
                    glob_count += 1;
                }
                Err(_e) => {
                    #[cfg(feature = "logging")]
                    tracing::warn!("Invalid glob pattern '{}', matching it literally: {}", pattern, _e);
                }
            }
        }
        let globs = if glob_count == 0 {
            None
        } else {
            match builder.build() {
                Ok(set) => Some(set),
                Err(_e) => {
                    #[cfg(feature = "logging")]
                    tracing::warn!("Failed to build glob set, wildcards disabled: {}", _e);
                    None
                }
            }
        };
        Self { exact, globs }
    }

    pub fn is_ignored(&self, name: &str) -> bool {
        self.exact.contains(name) || self.globs.as_ref().is_some_and(|set| set.is_match(name))
    }

    pub fn is_empty(&self) -> bool {
        self.exact.is_empty()
    }
}

/// One-shot form of [`IgnoreMatcher::is_ignored`].
pub fn should_ignore<S: AsRef<str>>(name: &str, patterns: &[S]) -> bool {
    IgnoreMatcher::new(patterns).is_ignored(name)
}
