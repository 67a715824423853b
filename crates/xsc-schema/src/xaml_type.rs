//! Type descriptors.

use crate::language::{XAML_LANGUAGE_NAMESPACE, clr_namespace_uri};
use crate::xaml_member::XamlMember;
use smallvec::SmallVec;
use std::sync::Arc;
use xsc_reflect::{PrimitiveKind, TypeDef, TypeHandle};

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum XamlTypeKind {
    /// Built by the engine's default construction.
    Default,
    /// A data-binding expression type.
    Binding,
    /// A primitive the markup language declares itself.
    Language(PrimitiveKind),
    /// A name nothing could resolve; there is no runtime type behind it.
    Unknown,
}

/// Engine-facing descriptor of a runtime type.
///
/// Descriptors are immutable and shared; the schema context hands out the
/// same `Arc` for the same runtime type for its whole lifetime.
#[derive(Debug)]
pub struct XamlType {
    kind: XamlTypeKind,
    underlying: Option<TypeHandle>,
    name: String,
    namespace: String,
    type_args: SmallVec<[TypeHandle; 2]>,
    markup_extension: bool,
    settable_members: Vec<Arc<XamlMember>>,
}

impl XamlType {
    pub(crate) fn from_def(handle: TypeHandle, def: &TypeDef, markup_extension: bool) -> Self {
        XamlType {
            kind: XamlTypeKind::Default,
            underlying: Some(handle),
            name: def.simple_name().to_string(),
            namespace: clr_namespace_uri(&def.namespace, &def.assembly),
            type_args: def.generic_args.clone(),
            markup_extension,
            settable_members: Vec::new(),
        }
    }

    pub(crate) fn binding(handle: TypeHandle, def: &TypeDef, settable_members: Vec<Arc<XamlMember>>) -> Self {
        XamlType {
            kind: XamlTypeKind::Binding,
            markup_extension: true,
            settable_members,
            ..Self::from_def(handle, def, true)
        }
    }

    pub(crate) fn language(kind: PrimitiveKind, handle: TypeHandle) -> Self {
        XamlType {
            kind: XamlTypeKind::Language(kind),
            underlying: Some(handle),
            name: kind.name().to_string(),
            namespace: XAML_LANGUAGE_NAMESPACE.to_string(),
            type_args: SmallVec::new(),
            markup_extension: false,
            settable_members: Vec::new(),
        }
    }

    pub(crate) fn unknown(namespace: &str, name: &str) -> Self {
        XamlType {
            kind: XamlTypeKind::Unknown,
            underlying: None,
            name: name.to_string(),
            namespace: namespace.to_string(),
            type_args: SmallVec::new(),
            markup_extension: false,
            settable_members: Vec::new(),
        }
    }

    pub fn kind(&self) -> XamlTypeKind {
        self.kind
    }

    /// The runtime type, or `None` for unresolved names.
    pub fn underlying_type(&self) -> Option<TypeHandle> {
        self.underlying
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Preferred XML namespace of the type.
    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    pub fn type_args(&self) -> &[TypeHandle] {
        &self.type_args
    }

    pub fn is_markup_extension(&self) -> bool {
        self.markup_extension
    }

    pub fn is_unknown(&self) -> bool {
        self.kind == XamlTypeKind::Unknown
    }

    /// Members a binding expression exposes to the construction pipeline.
    /// Empty for every kind but `Binding`.
    pub fn settable_members(&self) -> &[Arc<XamlMember>] {
        &self.settable_members
    }

    pub fn settable_member(&self, name: &str) -> Option<&Arc<XamlMember>> {
        self.settable_members
            .iter()
            .find(|member| member.name() == name)
    }
}
