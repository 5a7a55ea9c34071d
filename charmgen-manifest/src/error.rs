use std::path::PathBuf;

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// Errors carry the whole document, hence the box.
pub type Result<T> = std::result::Result<T, Box<Error>>;

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("failed to read '{path}'")]
    #[diagnostic(help("pass the directory containing charmcraft.yaml with '-c <dir>'"))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse charmcraft.yaml")]
    #[diagnostic(code(charmgen::parse_error))]
    Parse {
        #[source_code]
        src: NamedSource<String>,
        #[label("YAML error here")]
        span: Option<SourceSpan>,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("{message}")]
    #[diagnostic(code(charmgen::validation_error))]
    Validation {
        #[source_code]
        src: NamedSource<String>,
        #[label("{message}")]
        span: Option<SourceSpan>,
        message: String,
    },

    #[error("invalid {context} key '{key}'")]
    #[diagnostic(
        code(charmgen::invalid_key),
        help(
            "{reason}. Use only letters, digits, hyphens and underscores, starting with a letter."
        )
    )]
    InvalidKey {
        #[source_code]
        src: NamedSource<String>,
        #[label("this key")]
        span: Option<SourceSpan>,
        key: String,
        context: String,
        reason: String,
    },
}

/// A named charmcraft.yaml document that errors can point into.
#[derive(Debug)]
pub(crate) struct Document {
    name: String,
    text: String,
}

impl Document {
    pub(crate) fn new(text: &str, name: &str) -> Self {
        Self {
            name: name.to_string(),
            text: text.to_string(),
        }
    }

    pub(crate) fn text(&self) -> &str {
        &self.text
    }

    fn source(&self) -> NamedSource<String> {
        NamedSource::new(&self.name, self.text.clone())
    }

    /// Points at the character where the YAML decoder gave up, if it says.
    pub(crate) fn yaml_error(&self, source: serde_yaml::Error) -> Box<Error> {
        let span = source.location().map(|at| SourceSpan::from((at.index(), 1)));
        Box::new(Error::Parse {
            src: self.source(),
            span,
            source,
        })
    }

    pub(crate) fn invalid(&self, message: String, span: Option<SourceSpan>) -> Box<Error> {
        Box::new(Error::Validation {
            src: self.source(),
            span,
            message,
        })
    }

    pub(crate) fn bad_key(
        &self,
        key: &str,
        context: String,
        reason: String,
        span: Option<SourceSpan>,
    ) -> Box<Error> {
        Box::new(Error::InvalidKey {
            src: self.source(),
            span,
            key: key.to_string(),
            context,
            reason,
        })
    }
}
