//! Runtime type model for the xsc schema context.
//!
//! The schema context never walks assemblies or reads metadata itself. It
//! queries the collaborators defined here:
//! - `TypeUniverse`: the reflection store (types, properties, methods,
//!   custom attributes) addressed through `Copy` handles
//! - `TypeProvider`: namespace-qualified type lookup
//! - `PropertyRegistry`: the host's registered and attached properties
//!
//! In-memory implementations (`NamespaceTypeProvider`,
//! `InMemoryPropertyRegistry`) are provided for hosts that keep their type
//! index in process.

pub mod attributes;
pub use attributes::{AttributeKind, CustomAttribute};

pub mod error;
pub use error::ProviderError;

pub mod handles;
pub use handles::{MemberRef, MethodHandle, PropertyHandle, TypeHandle};

pub mod primitives;
pub use primitives::PrimitiveKind;

pub mod provider;
pub use provider::{ClrNamespace, NamespaceTypeProvider, TypeProvider};

pub mod registry;
pub use registry::{InMemoryPropertyRegistry, PropertyRegistration, PropertyRegistry, RegistrationId};

pub mod universe;
pub use universe::{
    MethodDef, MethodFlags, PropertyDef, PropertyFlags, TypeDef, TypeFlags, TypeUniverse,
};
