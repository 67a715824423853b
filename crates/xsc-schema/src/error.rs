use thiserror::Error;
use xsc_reflect::ProviderError;

/// Failure while resolving a type or member.
///
/// Absence is not an error: resolution reports "not found" through `None` or
/// a fallback descriptor. The only failures are the collaborators' own,
/// passed through untouched.
#[derive(Debug, Error)]
pub enum ResolveError {
    #[error(transparent)]
    Provider(#[from] ProviderError),
}

/// Failure while loading `SchemaOptions`.
#[derive(Debug, Error)]
pub enum OptionsError {
    #[error("failed to read schema options from {path}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid schema options: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("markupExtensionSuffix must not be empty")]
    EmptySuffix,
}
