use std::io;

/// Errors raised while turning rendered source into the output file.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    /// The formatter rejected the generated source.
    #[error("{program} failed: {message}")]
    Format {
        program: &'static str,
        message: String,
    },

    #[error("cannot run {program}")]
    Io {
        program: &'static str,
        #[source]
        source: io::Error,
    },
}

pub type Result<T> = std::result::Result<T, RenderError>;
