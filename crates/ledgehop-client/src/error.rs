use std::path::PathBuf;

/// Fatal client failures. Any of these ends the process with a diagnostic.
#[derive(Debug)]
pub enum ClientError {
    /// A required image could not be loaded.
    Asset { name: String, message: String },
    /// The assets directory could not be created.
    AssetsDir {
        path: PathBuf,
        source: std::io::Error,
    },
}

impl std::fmt::Display for ClientError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Asset { name, message } => write!(f, "Cannot load image: {name} ({message})"),
            Self::AssetsDir { path, source } => {
                write!(f, "Cannot create assets directory {}: {source}", path.display())
            },
        }
    }
}

impl std::error::Error for ClientError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::AssetsDir { source, .. } => Some(source),
            Self::Asset { .. } => None,
        }
    }
}
