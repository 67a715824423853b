//! Attribute bridge.
//!
//! The markup engine discovers markup-relevant annotations through its own
//! attribute vocabulary (`MarkupAttribute`). The host declares a different
//! one (`CustomAttribute`), and in one case at a different level: the host
//! marks the content *property* with `Content`, while the engine expects a
//! `ContentProperty(name)` on the *type*. Providers here translate on the
//! fly; they hold no state beyond the target and are built per request.

use crate::context::SchemaContext;
use xsc_reflect::{CustomAttribute, MemberRef, ProviderError, TypeHandle, TypeUniverse};

/// Attribute as the markup engine understands it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MarkupAttribute {
    ContentProperty(String),
    DependsOn(String),
    AssignBinding,
    TypeConverter(String),
    Other { type_name: String, args: Vec<String> },
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum MarkupAttributeKind {
    ContentProperty,
    DependsOn,
    AssignBinding,
    TypeConverter,
    Other,
}

impl MarkupAttribute {
    pub fn kind(&self) -> MarkupAttributeKind {
        match self {
            MarkupAttribute::ContentProperty(_) => MarkupAttributeKind::ContentProperty,
            MarkupAttribute::DependsOn(_) => MarkupAttributeKind::DependsOn,
            MarkupAttribute::AssignBinding => MarkupAttributeKind::AssignBinding,
            MarkupAttribute::TypeConverter(_) => MarkupAttributeKind::TypeConverter,
            MarkupAttribute::Other { .. } => MarkupAttributeKind::Other,
        }
    }
}

impl MarkupAttributeKind {
    /// At most one per target; a derived declaration hides the base one.
    pub fn is_single_use(self) -> bool {
        matches!(
            self,
            MarkupAttributeKind::ContentProperty | MarkupAttributeKind::AssignBinding | MarkupAttributeKind::TypeConverter
        )
    }
}

/// Attribute reader the markup engine queries generically.
pub trait AttributeProvider {
    fn custom_attributes(&self, inherit: bool) -> Result<Vec<MarkupAttribute>, ProviderError>;

    fn attributes_of_kind(
        &self,
        kind: MarkupAttributeKind,
        inherit: bool,
    ) -> Result<Vec<MarkupAttribute>, ProviderError> {
        let mut attributes = self.custom_attributes(inherit)?;
        attributes.retain(|attr| attr.kind() == kind);
        Ok(attributes)
    }

    fn is_defined(&self, kind: MarkupAttributeKind, inherit: bool) -> Result<bool, ProviderError> {
        Ok(self
            .custom_attributes(inherit)?
            .iter()
            .any(|attr| attr.kind() == kind))
    }
}

/// Host attributes that read the same at any level.
fn translate(attribute: &CustomAttribute) -> Option<MarkupAttribute> {
    match attribute {
        CustomAttribute::DependsOn { name } => Some(MarkupAttribute::DependsOn(name.clone())),
        CustomAttribute::AssignBinding => Some(MarkupAttribute::AssignBinding),
        CustomAttribute::TypeConverter { converter } => Some(MarkupAttribute::TypeConverter(converter.clone())),
        CustomAttribute::Named { type_name, args } => Some(MarkupAttribute::Other {
            type_name: type_name.clone(),
            args: args.clone(),
        }),
        CustomAttribute::Content => None,
    }
}

pub struct TypeAttributeProvider<'u> {
    universe: &'u TypeUniverse,
    ty: TypeHandle,
}

impl<'u> TypeAttributeProvider<'u> {
    pub fn new(universe: &'u TypeUniverse, ty: TypeHandle) -> Self {
        TypeAttributeProvider { universe, ty }
    }

    fn chain(&self, inherit: bool) -> Vec<TypeHandle> {
        if inherit {
            self.universe.base_chain(self.ty)
        } else {
            vec![self.ty]
        }
    }

    /// First property carrying `Content`, most derived type first.
    fn content_property(&self, chain: &[TypeHandle]) -> Result<Option<String>, ProviderError> {
        for &ty in chain {
            let def = self.universe.require_type(ty)?;
            for &property in &def.properties {
                let property = self.universe.require_property(property)?;
                if property.attributes.contains(&CustomAttribute::Content) {
                    return Ok(Some(property.name.clone()));
                }
            }
        }
        Ok(None)
    }
}

impl AttributeProvider for TypeAttributeProvider<'_> {
    fn custom_attributes(&self, inherit: bool) -> Result<Vec<MarkupAttribute>, ProviderError> {
        let chain = self.chain(inherit);
        let mut attributes: Vec<MarkupAttribute> = Vec::new();
        for &ty in &chain {
            let def = self.universe.require_type(ty)?;
            let declared_below = attributes.len();
            for attribute in def.attributes.iter().filter_map(translate) {
                let kind = attribute.kind();
                if kind.is_single_use() && attributes[..declared_below].iter().any(|a| a.kind() == kind) {
                    continue;
                }
                attributes.push(attribute);
            }
        }
        if let Some(name) = self.content_property(&chain)? {
            attributes.push(MarkupAttribute::ContentProperty(name));
        }
        Ok(attributes)
    }
}

/// Attributes of a single member. Member attributes are not inherited, so
/// `inherit` has no effect.
pub struct MemberAttributeProvider<'u> {
    universe: &'u TypeUniverse,
    member: MemberRef,
}

impl<'u> MemberAttributeProvider<'u> {
    pub fn new(universe: &'u TypeUniverse, member: MemberRef) -> Self {
        MemberAttributeProvider { universe, member }
    }
}

impl AttributeProvider for MemberAttributeProvider<'_> {
    fn custom_attributes(&self, _inherit: bool) -> Result<Vec<MarkupAttribute>, ProviderError> {
        Ok(self
            .universe
            .member_attributes(self.member)?
            .iter()
            .filter_map(translate)
            .collect())
    }
}

impl<'a> SchemaContext<'a> {
    pub fn attribute_provider_for_type(&self, ty: TypeHandle) -> TypeAttributeProvider<'a> {
        TypeAttributeProvider::new(self.universe, ty)
    }

    pub fn attribute_provider_for_member(&self, member: impl Into<MemberRef>) -> MemberAttributeProvider<'a> {
        MemberAttributeProvider::new(self.universe, member.into())
    }
}

#[cfg(test)]
#[path = "../tests/attributes_tests.rs"]
mod tests;
