//! Placeholder substitution.

use std::borrow::Cow;

/// Placeholder used when none is configured.
pub const DEFAULT_PLACEHOLDER: &str = "{{content}}";

/// Result of substituting a fragment into a template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Substitution<'a> {
    /// Resulting document text
    pub text: Cow<'a, str>,

    /// Whether a placeholder was found and replaced
    pub replaced: bool,
}

/// Replace the first occurrence of `placeholder` in `template` with `fragment`.
///
/// Later occurrences are left untouched. A template without the placeholder
/// is returned as-is, borrowed.
pub fn substitute_first<'a>(
    template: &'a str,
    placeholder: &str,
    fragment: &str,
) -> Substitution<'a> {
    if placeholder.is_empty() {
        return Substitution {
            text: Cow::Borrowed(template),
            replaced: false,
        };
    }

    match template.find(placeholder) {
        Some(pos) => {
            let mut text =
                String::with_capacity(template.len() - placeholder.len() + fragment.len());
            text.push_str(&template[..pos]);
            text.push_str(fragment);
            text.push_str(&template[pos + placeholder.len()..]);

            Substitution {
                text: Cow::Owned(text),
                replaced: true,
            }
        }
        None => Substitution {
            text: Cow::Borrowed(template),
            replaced: false,
        },
    }
}
