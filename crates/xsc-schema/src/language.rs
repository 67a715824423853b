//! The markup language's own vocabulary.
//!
//! The language namespace (conventionally bound to the `x:` prefix) declares
//! built-in names for the primitive system types plus `x:Object`. This is
//! the engine's default lookup that runs after the schema context's own
//! resolution comes back empty.

use xsc_reflect::PrimitiveKind;

/// XML namespace of the markup language itself.
pub const XAML_LANGUAGE_NAMESPACE: &str = "http://schemas.microsoft.com/winfx/2006/xaml";

const OBJECT_NAME: &str = "Object";

/// A type the language namespace declares by name.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum LanguageType {
    Primitive(PrimitiveKind),
    Object,
}

/// Look up a built-in language type by local name.
pub fn language_type(local_name: &str) -> Option<LanguageType> {
    if local_name == OBJECT_NAME {
        return Some(LanguageType::Object);
    }
    PrimitiveKind::from_name(local_name).map(LanguageType::Primitive)
}

/// `clr-namespace:{namespace};assembly={assembly}`
pub fn clr_namespace_uri(namespace: &str, assembly: &str) -> String {
    format!("clr-namespace:{namespace};assembly={assembly}")
}
