//! Schema context for the xsc markup engine.
//!
//! The markup engine resolves type and member names with reflection-only
//! rules. The host object model layers more on top: registered and attached
//! properties, markup extensions referenced without their suffix, depends-on
//! declarations, binding expressions. `SchemaContext` is the specialization
//! point the engine calls first; it answers or reports "not found" so the
//! engine can fall back.
//!
//! - **Type resolution** (`resolve_type`, `xaml_type_by_name`, `xaml_type`)
//! - **Member resolution** (`resolve_property`, `resolve_attached`)
//! - **Attribute bridge** (`attribute_provider_for_type`,
//!   `attribute_provider_for_member`)

pub mod attributes;
pub use attributes::{
    AttributeProvider, MarkupAttribute, MarkupAttributeKind, MemberAttributeProvider, TypeAttributeProvider,
};

mod context;
pub use context::{CacheStats, SchemaContext};

pub mod error;
pub use error::{OptionsError, ResolveError};

pub mod language;
pub use language::XAML_LANGUAGE_NAMESPACE;

mod member_resolver;

pub mod options;
pub use options::SchemaOptions;

mod resolve_trace;

pub mod simple_types;

mod type_resolver;

mod xaml_member;
pub use xaml_member::{AccessorPair, PropertyAccessor, ValueTarget, XamlMember};

mod xaml_type;
pub use xaml_type::{XamlType, XamlTypeKind};

#[cfg(test)]
#[path = "../tests/test_host.rs"]
mod test_host;
