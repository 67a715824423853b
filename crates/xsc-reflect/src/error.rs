use crate::handles::{MethodHandle, PropertyHandle, TypeHandle};
use thiserror::Error;

/// Failure raised by a collaborator (type provider, property registry, or
/// the universe itself).
///
/// "Not found" is never an error: lookups return `Ok(None)` for that. These
/// variants describe conditions where the collaborator cannot give a
/// trustworthy answer at all.
#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("{0} is not registered in this universe")]
    UnknownType(TypeHandle),

    #[error("{0} is not registered in this universe")]
    UnknownProperty(PropertyHandle),

    #[error("{0} is not registered in this universe")]
    UnknownMethod(MethodHandle),

    #[error("type name `{namespace}.{name}` is ambiguous across assemblies: {}", .assemblies.join(", "))]
    Ambiguous {
        namespace: String,
        name: String,
        assemblies: Vec<String>,
    },

    #[error("cannot instantiate `{name}` with {given} type argument(s); it declares {expected}")]
    ArityMismatch {
        name: String,
        expected: usize,
        given: usize,
    },

    /// Failure reported by a host-supplied collaborator.
    #[error("{0}")]
    Host(String),
}
