use serde::de::DeserializeOwned;
use std::path::Path;
use thiserror::Error;

/// Errors that can occur while reading a model artifact
#[derive(Debug, Error)]
pub enum ArtifactError {
    #[error("Failed to read artifact {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid JSON artifact: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid TOML artifact: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Unsupported artifact format: {0}")]
    UnsupportedFormat(String),
}

/// On-disk encodings of a model artifact, chosen by file extension
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArtifactFormat {
    Json,
    Toml,
}

impl ArtifactFormat {
    pub fn from_path(path: &Path) -> Result<Self, ArtifactError> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase())
            .unwrap_or_default();

        match ext.as_str() {
            "json" => Ok(Self::Json),
            "toml" => Ok(Self::Toml),
            other => Err(ArtifactError::UnsupportedFormat(format!(
                "{} (expected .json or .toml)",
                if other.is_empty() { "<none>" } else { other }
            ))),
        }
    }

    pub fn decode<T: DeserializeOwned>(&self, raw: &str) -> Result<T, ArtifactError> {
        match self {
            Self::Json => Ok(serde_json::from_str(raw)?),
            Self::Toml => Ok(toml::from_str(raw)?),
        }
    }
}

/// Read and decode an artifact from disk
///
/// Called once at startup, before the server accepts requests.
pub async fn load_artifact<T, P>(path: P) -> Result<T, ArtifactError>
where
    T: DeserializeOwned,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    let format = ArtifactFormat::from_path(path)?;

    let raw = tokio::fs::read_to_string(path)
        .await
        .map_err(|source| ArtifactError::Io {
            path: path.display().to_string(),
            source,
        })?;

    tracing::debug!("Read {} bytes from artifact {}", raw.len(), path.display());

    format.decode(&raw)
}
