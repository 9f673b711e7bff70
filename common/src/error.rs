//! Error types shared by the meme editor.

/// The two failure kinds the editor recovers from.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum MemeError {
    /// Network, status or decode failure while loading the template list.
    #[error("Template fetch error: {message}")]
    TemplateFetch { message: String },

    /// Capture or download-trigger failure while exporting the meme.
    #[error("Export error: {message}")]
    Export { message: String },
}

/// Result type alias using MemeError.
pub type MemeResult<T> = Result<T, MemeError>;

impl MemeError {
    pub fn template_fetch(msg: impl Into<String>) -> Self {
        Self::TemplateFetch {
            message: msg.into(),
        }
    }

    pub fn export(msg: impl Into<String>) -> Self {
        Self::Export {
            message: msg.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_kind_and_message() {
        let err = MemeError::template_fetch("status 503");
        assert_eq!(err.to_string(), "Template fetch error: status 503");

        let err = MemeError::export("canvas is tainted");
        assert_eq!(err.to_string(), "Export error: canvas is tainted");
    }
}
