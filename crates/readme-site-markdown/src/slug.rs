//! Heading anchor slugs.

use std::collections::{HashMap, HashSet};

/// Convert heading text to a URL-safe slug.
///
/// GitHub-style: lowercase, punctuation dropped, whitespace and `_` runs
/// become a single `-` (`"Hello World"` -> `hello-world`).
pub fn slugify(text: &str) -> String {
    text.to_lowercase()
        .chars()
        .map(|c| {
            if c.is_alphanumeric() {
                c
            } else if c.is_whitespace() || c == '-' || c == '_' {
                '-'
            } else {
                '\0'
            }
        })
        .filter(|c| *c != '\0')
        .collect::<String>()
        .split('-')
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join("-")
}

/// Hands out unique slugs for a single document.
///
/// Repeated headings get a numeric suffix: `usage`, `usage-1`, `usage-2`.
#[derive(Debug, Default)]
pub struct Slugger {
    counts: HashMap<String, usize>,
    used: HashSet<String>,
}

impl Slugger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Slug for `text`, or `None` when the text has no sluggable characters.
    pub fn slug(&mut self, text: &str) -> Option<String> {
        let base = slugify(text);
        if base.is_empty() {
            return None;
        }

        // A suffixed slug can collide with a literal heading like "Usage 1".
        let mut n = self.counts.get(&base).copied().unwrap_or(0);
        loop {
            let candidate = if n == 0 {
                base.clone()
            } else {
                format!("{}-{}", base, n)
            };
            n += 1;
            if self.used.insert(candidate.clone()) {
                self.counts.insert(base, n);
                return Some(candidate);
            }
        }
    }
}
