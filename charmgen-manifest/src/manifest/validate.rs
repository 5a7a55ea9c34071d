//! Post-decode checks on `config.options` and `requires` keys.

use miette::SourceSpan;

use crate::{Error, Result, error::Document};

/// A position in the document tree, e.g. `config.options`, used to word
/// and locate errors.
///
/// ```ignore
/// let doc = Document::new(src, "charmcraft.yaml");
/// let options = KeyPath::root(&doc).join("config").join("options");
/// options.check_key("user-defined-str", "option")?;
/// ```
#[derive(Debug, Clone)]
pub(crate) struct KeyPath<'a> {
    doc: &'a Document,
    segments: Vec<&'a str>,
}

impl<'a> KeyPath<'a> {
    pub fn root(doc: &'a Document) -> Self {
        Self {
            doc,
            segments: Vec::new(),
        }
    }

    pub fn join(&self, segment: &'a str) -> Self {
        let mut segments = self.segments.clone();
        segments.push(segment);
        Self {
            doc: self.doc,
            segments,
        }
    }

    pub fn dotted(&self) -> String {
        self.segments.join(".")
    }

    /// "option in 'config.options'", or just "option" at the root.
    pub fn describe(&self, kind: &str) -> String {
        match self.segments.as_slice() {
            [] => kind.to_string(),
            _ => format!("{} in '{}'", kind, self.dotted()),
        }
    }

    pub fn check_key(&self, key: &str, kind: &str) -> Result<()> {
        match key_problem(key) {
            None => Ok(()),
            Some(reason) => Err(self.doc.bad_key(
                key,
                self.describe(kind),
                reason,
                key_span(self.doc.text(), key),
            )),
        }
    }

    /// `<path>.<field>` is present but blank. Points at the innermost key.
    pub fn empty_field(&self, field: &str) -> Box<Error> {
        let span = self
            .segments
            .last()
            .and_then(|key| key_span(self.doc.text(), key));
        self.doc
            .invalid(format!("'{}.{}' must not be empty", self.dotted(), field), span)
    }
}

/// Span of the first line that starts with `key:` (bare or quoted).
/// Values are never matched.
pub(crate) fn key_span(src: &str, key: &str) -> Option<SourceSpan> {
    let quoted = [format!("\"{}\"", key), format!("'{}'", key)];
    let mut offset = 0;

    for line in src.split_inclusive('\n') {
        let body = line.trim_start();
        let start = offset + (line.len() - body.len());
        offset += line.len();

        let forms = std::iter::once((key, 0)).chain(quoted.iter().map(|q| (q.as_str(), 1)));
        for (form, quote) in forms {
            let followed_by_colon = body
                .strip_prefix(form)
                .is_some_and(|rest| rest.trim_start().starts_with(':'));
            if followed_by_colon {
                return Some(SourceSpan::from((start + quote, key.len())));
            }
        }
    }

    None
}

/// Why `key` cannot become a Go identifier and env var, if it cannot.
pub(crate) fn key_problem(key: &str) -> Option<String> {
    let first = match key.chars().next() {
        None => return Some("key cannot be empty".into()),
        Some(c) => c,
    };
    if !first.is_ascii_alphabetic() {
        return Some(format!("key must start with a letter, found '{}'", first));
    }
    if let Some(bad) = key
        .chars()
        .find(|c| !c.is_ascii_alphanumeric() && *c != '-' && *c != '_')
    {
        return Some(format!("key contains invalid character '{}'", bad));
    }
    if key.ends_with('-') {
        return Some("key cannot end with a hyphen".into());
    }
    None
}
