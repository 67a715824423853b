//! Custom attributes as the host object model declares them.
//!
//! The host annotates types and members with a small, closed vocabulary of
//! markers. Anything else is carried as `Named` so it can be passed through
//! to the markup engine untouched.

/// A custom attribute attached to a type or member.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum CustomAttribute {
    /// Binding-expression values are assigned verbatim instead of being
    /// evaluated to their current value.
    AssignBinding,
    /// The member's effective value depends on the named member.
    DependsOn { name: String },
    /// The property receives the element's content.
    Content,
    /// The type or member converts text with the named converter type.
    TypeConverter { converter: String },
    /// Any other attribute, by fully qualified type name.
    Named { type_name: String, args: Vec<String> },
}

/// Discriminant of `CustomAttribute`, for kind-based queries.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum AttributeKind {
    AssignBinding,
    DependsOn,
    Content,
    TypeConverter,
    Named,
}

impl CustomAttribute {
    pub fn depends_on(name: impl Into<String>) -> Self {
        CustomAttribute::DependsOn { name: name.into() }
    }

    pub fn type_converter(converter: impl Into<String>) -> Self {
        CustomAttribute::TypeConverter {
            converter: converter.into(),
        }
    }

    pub fn named(type_name: impl Into<String>, args: &[&str]) -> Self {
        CustomAttribute::Named {
            type_name: type_name.into(),
            args: args.iter().map(|arg| (*arg).to_string()).collect(),
        }
    }

    pub const fn kind(&self) -> AttributeKind {
        match self {
            CustomAttribute::AssignBinding => AttributeKind::AssignBinding,
            CustomAttribute::DependsOn { .. } => AttributeKind::DependsOn,
            CustomAttribute::Content => AttributeKind::Content,
            CustomAttribute::TypeConverter { .. } => AttributeKind::TypeConverter,
            CustomAttribute::Named { .. } => AttributeKind::Named,
        }
    }
}

/// First attribute of the given kind, if any.
pub fn find_attribute(attributes: &[CustomAttribute], kind: AttributeKind) -> Option<&CustomAttribute> {
    attributes.iter().find(|attr| attr.kind() == kind)
}
