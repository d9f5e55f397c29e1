//! Error taxonomy for definition resolution, loading and validation

use std::fmt;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Failure reading or parsing a single document
#[derive(Debug, Error)]
pub enum DocumentError {
    #[error("document not found: {}", path.display())]
    NotFound { path: PathBuf },
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed document {}: {source}", path.display())]
    Malformed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl DocumentError {
    pub fn path(&self) -> &Path {
        match self {
            Self::NotFound { path } | Self::Io { path, .. } | Self::Malformed { path, .. } => path,
        }
    }
}

/// Where a loader was reading from when it failed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DefinitionSource {
    Directory(PathBuf),
    Legacy(PathBuf),
}

impl fmt::Display for DefinitionSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Directory(dir) => write!(f, "DSL directory '{}'", dir.display()),
            Self::Legacy(path) => write!(f, "legacy file '{}'", path.display()),
        }
    }
}

/// Structural invariants checked on an assembled definition, in check order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Invariant {
    RequiredSections,
    SchemaShape,
    MachineShape,
    RootClassDefined,
    InitialStateDefined,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("definition must have id, schema, and machine properties (missing `{field}`)")]
    MissingSection { field: &'static str },
    #[error("definition schema must have root and classes properties (missing `{field}`)")]
    IncompleteSchema { field: &'static str },
    #[error("definition machine must have initial and states properties (missing `{field}`)")]
    IncompleteMachine { field: &'static str },
    #[error("definition schema root class '{root}' not found in classes")]
    UnknownRootClass { root: String },
    #[error("definition machine initial state '{initial}' not found in states")]
    UnknownInitialState { initial: String },
}

impl ValidationError {
    /// Dotted path of the field that failed
    pub fn field(&self) -> &'static str {
        match self {
            Self::MissingSection { field }
            | Self::IncompleteSchema { field }
            | Self::IncompleteMachine { field } => *field,
            Self::UnknownRootClass { .. } => "schema.root",
            Self::UnknownInitialState { .. } => "machine.initial",
        }
    }

    pub fn invariant(&self) -> Invariant {
        match self {
            Self::MissingSection { .. } => Invariant::RequiredSections,
            Self::IncompleteSchema { .. } => Invariant::SchemaShape,
            Self::IncompleteMachine { .. } => Invariant::MachineShape,
            Self::UnknownRootClass { .. } => Invariant::RootClassDefined,
            Self::UnknownInitialState { .. } => Invariant::InitialStateDefined,
        }
    }
}

/// Any failure of a resolution attempt. No partial definition accompanies it.
#[derive(Debug, Error)]
pub enum DefinitionError {
    #[error("definition slug mismatch: expected '{requested}', got '{declared}'")]
    IdentityMismatch { requested: String, declared: String },
    #[error("failed to load definition '{id}' from {origin}: {cause}")]
    Load {
        id: String,
        origin: DefinitionSource,
        #[source]
        cause: DocumentError,
    },
    #[error("invalid definition: {0}")]
    Validation(#[from] ValidationError),
}

impl DefinitionError {
    pub(crate) fn load(id: &str, origin: DefinitionSource, cause: DocumentError) -> Self {
        Self::Load {
            id: id.to_string(),
            origin,
            cause,
        }
    }
}
