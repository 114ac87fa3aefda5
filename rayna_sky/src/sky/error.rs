use crate::texture::TextureError;
use std::path::PathBuf;
use thiserror::Error;

/// Reasons a skymap could not be loaded.
///
/// None of these are fatal: the sky keeps whatever skymap it had before.
#[derive(Error, Debug)]
pub enum SkymapLoadError {
    /// Nothing exists at the given path
    #[error("skymap file `{}` does not exist", path.display())]
    NotFound { path: PathBuf },
    /// The file exists, but is corrupt or in a format we can't read
    #[error("could not decode skymap image `{}`", path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
    #[error("i/o error while reading skymap `{}`", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("unexpected image error while loading skymap `{}`", path.display())]
    Image {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
    #[error("skymap image `{}` is unusable", path.display())]
    Texture {
        path: PathBuf,
        #[source]
        source: TextureError,
    },
    #[error("image decoder panicked while loading skymap `{}`: {message}", path.display())]
    Panicked { path: PathBuf, message: String },
}

impl SkymapLoadError {
    /// Whether this is one of the expected failures (missing or undecodable file),
    /// as opposed to something going wrong that nobody planned for
    pub fn is_expected(&self) -> bool { matches!(self, Self::NotFound { .. } | Self::Decode { .. }) }
}

#[derive(Error, Debug)]
pub enum DocumentError {
    #[error("document is not valid json")]
    Json {
        #[from]
        source: serde_json::Error,
    },
    #[error("document root must be an object, found {found}")]
    NotAnObject { found: &'static str },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_missing_and_corrupt_files_are_expected() {
        let path = PathBuf::from("sky.png");
        let io = || std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");

        assert!(SkymapLoadError::NotFound { path: path.clone() }.is_expected());
        assert!(!SkymapLoadError::Io { path: path.clone(), source: io() }.is_expected());
        assert!(!SkymapLoadError::Image {
            path: path.clone(),
            source: image::ImageError::IoError(io()),
        }
        .is_expected());
        assert!(!SkymapLoadError::Texture {
            path: path.clone(),
            source: TextureError::EmptyImage { width: 0, height: 0 },
        }
        .is_expected());
        assert!(!SkymapLoadError::Panicked {
            path,
            message: "decoder exploded".to_owned(),
        }
        .is_expected());
    }
}
