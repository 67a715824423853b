//! xsc: markup schema context.
//!
//! Resolves the type and member names a markup document uses against a host
//! object model, ahead of the markup engine's reflection-only defaults.
//!
//! - `reflect`: the runtime type model and its collaborators (type universe,
//!   type provider, property registry)
//! - `schema`: the schema context (type resolver, member resolver, attribute
//!   bridge, simple-type table)
//!
//! Hosts usually only need the prelude:
//!
//! ```
//! use xsc::prelude::*;
//!
//! let universe = TypeUniverse::new();
//! let provider = NamespaceTypeProvider::new();
//! let registry = InMemoryPropertyRegistry::new();
//! let ctx = SchemaContext::new(&universe, &provider, &registry);
//!
//! let double = ctx
//!     .resolve_type("clr-namespace:System;assembly=mscorlib", "Double", &[])
//!     .unwrap()
//!     .unwrap();
//! assert_eq!(double.namespace(), XAML_LANGUAGE_NAMESPACE);
//! ```

// Runtime type model
pub use xsc_reflect as reflect;

// Schema context
pub use xsc_schema as schema;

// Tracing configuration (text / tree / JSON output for debugging)
pub mod tracing_config;

pub mod prelude {
    pub use xsc_reflect::{
        ClrNamespace, CustomAttribute, InMemoryPropertyRegistry, MemberRef, MethodDef, MethodHandle,
        NamespaceTypeProvider, PrimitiveKind, PropertyDef, PropertyHandle, PropertyRegistry, ProviderError,
        TypeDef, TypeHandle, TypeProvider, TypeUniverse,
    };
    pub use xsc_schema::{
        AccessorPair, AttributeProvider, MarkupAttribute, MarkupAttributeKind, ResolveError, SchemaContext,
        SchemaOptions, XAML_LANGUAGE_NAMESPACE, XamlMember, XamlType, XamlTypeKind,
    };
}
