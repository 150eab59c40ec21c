//! Code-based prompt templates with `{{variable}}` substitution.

use std::collections::HashMap;
use std::fmt;

/// A prompt template with `{{variable}}` placeholders.
///
/// Substitution is a single left-to-right pass over the template text. Values
/// are inserted verbatim: a value that itself contains `{{...}}` is never
/// expanded a second time. Unknown placeholders render as the empty string,
/// and an unterminated `{{` is kept literally.
///
/// # Examples
///
/// ```
/// use std::collections::HashMap;
/// use namegen_prompts::PromptTemplate;
///
/// let template = PromptTemplate::new("Name a {{kind}} for {{audience}}.");
///
/// let vars = HashMap::from([("kind", "bakery"), ("audience", "everyone")]);
/// assert_eq!(template.fill(&vars), "Name a bakery for everyone.");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PromptTemplate {
    template: String,
}

impl PromptTemplate {
    /// Creates a new template with the supplied text.
    #[must_use]
    pub fn new(template: impl Into<String>) -> Self {
        Self {
            template: template.into(),
        }
    }

    /// Renders the template, substituting the empty string for any
    /// placeholder missing from `vars`. Never fails.
    #[must_use]
    pub fn fill(&self, vars: &HashMap<&str, &str>) -> String {
        let mut out = String::with_capacity(self.template.len());
        let mut rest = self.template.as_str();

        while let Some((literal, name, tail)) = next_placeholder(rest) {
            out.push_str(literal);
            if let Some(value) = vars.get(name) {
                out.push_str(value);
            }
            rest = tail;
        }
        out.push_str(rest);
        out
    }

    /// Returns the placeholder names in order of appearance.
    #[must_use]
    pub fn placeholders(&self) -> Vec<&str> {
        let mut names = Vec::new();
        let mut rest = self.template.as_str();
        while let Some((_, name, tail)) = next_placeholder(rest) {
            names.push(name);
            rest = tail;
        }
        names
    }
}

impl fmt::Display for PromptTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.template)
    }
}

/// Splits off the next `{{name}}`, returning the literal text before it, the
/// trimmed name, and the remainder after the closing braces.
fn next_placeholder(input: &str) -> Option<(&str, &str, &str)> {
    let start = input.find("{{")?;
    let after_open = &input[start + 2..];
    let end = after_open.find("}}")?;
    Some((
        &input[..start],
        after_open[..end].trim(),
        &after_open[end + 2..],
    ))
}
