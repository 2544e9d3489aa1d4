use std::fmt;
use std::path::PathBuf;

/// Mapping configuration error
///
/// Returned while reading mapping files or assembling a
/// [`ResourceTransformer`](super::ResourceTransformer).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MappingError {
    /// The file or directory could not be read
    Io {
        /// Path that failed
        path: PathBuf,
        /// Underlying I/O error message
        message: String,
    },
    /// The file is not a valid mapping document
    Parse {
        /// File being parsed
        path: PathBuf,
        /// Parser error message
        message: String,
    },
    /// The mapping has no `class` entry
    MissingClass {
        /// File being parsed
        path: PathBuf,
    },
    /// Two mappings were registered for the same class
    DuplicateClass {
        /// The class mapped twice
        class: String,
    },
}

impl fmt::Display for MappingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MappingError::Io { path, message } => {
                write!(f, "Could not read mapping {}: {}", path.display(), message)
            }
            MappingError::Parse { path, message } => {
                write!(f, "Invalid mapping file {}: {}", path.display(), message)
            }
            MappingError::MissingClass { path } => {
                write!(
                    f,
                    "Mapping file {} does not define the mapped class under `mapping.class`.",
                    path.display()
                )
            }
            MappingError::DuplicateClass { class } => {
                write!(f, "Class '{}' has been mapped more than once.", class)
            }
        }
    }
}

impl std::error::Error for MappingError {}
