//! Member descriptors.
//!
//! A member descriptor is the engine-facing view of a settable member. The
//! set of behaviors is closed, so descriptors are a plain enum and the
//! engine's construction pipeline dispatches on it with `match`:
//!
//! | Variant | Source | Value storage |
//! |---------|--------|---------------|
//! | `RegisteredProperty` | accessor with a host registration | host property system |
//! | `AttachedProperty` | static accessor pair with an attached registration | host property system |
//! | `DependsOnAlias` | accessor marked `DependsOn` | raw accessor |
//! | `PlainProperty` | any other accessor | raw accessor |
//! | `Attachable` | static accessor pair without a registration | raw static setter |

use std::sync::Arc;
use xsc_reflect::{MethodHandle, PropertyDef, PropertyHandle, PropertyRegistration, RegistrationId, TypeHandle};

/// A reflection property accessor, captured at resolution time.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PropertyAccessor {
    pub handle: PropertyHandle,
    pub name: String,
    pub declaring_type: TypeHandle,
    pub property_type: TypeHandle,
    pub can_write: bool,
}

impl PropertyAccessor {
    pub(crate) fn from_def(handle: PropertyHandle, def: &PropertyDef) -> Self {
        PropertyAccessor {
            handle,
            name: def.name.clone(),
            declaring_type: def.declaring_type,
            property_type: def.property_type,
            can_write: def.can_write(),
        }
    }
}

/// Static accessor methods of an attachable member.
///
/// At least one accessor is always present.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum AccessorPair {
    Getter(MethodHandle),
    Setter(MethodHandle),
    Both {
        getter: MethodHandle,
        setter: MethodHandle,
    },
}

impl AccessorPair {
    /// Build a pair from optional accessors; `None` when both are missing.
    pub fn new(getter: Option<MethodHandle>, setter: Option<MethodHandle>) -> Option<Self> {
        match (getter, setter) {
            (Some(getter), Some(setter)) => Some(AccessorPair::Both { getter, setter }),
            (Some(getter), None) => Some(AccessorPair::Getter(getter)),
            (None, Some(setter)) => Some(AccessorPair::Setter(setter)),
            (None, None) => None,
        }
    }

    pub fn getter(self) -> Option<MethodHandle> {
        match self {
            AccessorPair::Getter(getter) | AccessorPair::Both { getter, .. } => Some(getter),
            AccessorPair::Setter(_) => None,
        }
    }

    pub fn setter(self) -> Option<MethodHandle> {
        match self {
            AccessorPair::Setter(setter) | AccessorPair::Both { setter, .. } => Some(setter),
            AccessorPair::Getter(_) => None,
        }
    }

    /// The accessor that determines the declaring type: the getter when
    /// present.
    pub fn primary(self) -> MethodHandle {
        match self {
            AccessorPair::Getter(getter) | AccessorPair::Both { getter, .. } => getter,
            AccessorPair::Setter(setter) => setter,
        }
    }
}

/// Key of the member cache.
///
/// Properties and accessor pairs share one cache; the enum keeps the two
/// shapes apart.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub(crate) enum MemberKey {
    Property(PropertyHandle),
    Accessors(Option<MethodHandle>, Option<MethodHandle>),
}

impl From<AccessorPair> for MemberKey {
    fn from(pair: AccessorPair) -> Self {
        MemberKey::Accessors(pair.getter(), pair.setter())
    }
}

/// Where an assigned value ends up.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ValueTarget {
    /// Stored through the host property system.
    Registered(RegistrationId),
    /// Written through the reflection accessor.
    Accessor(PropertyHandle),
    /// Written by calling the static setter with the target instance.
    StaticSetter(MethodHandle),
    /// Nothing can be assigned.
    ReadOnly,
}

#[derive(Debug)]
pub enum XamlMember {
    RegisteredProperty {
        property: PropertyAccessor,
        registration: Arc<PropertyRegistration>,
        /// Binding expressions are stored as-is instead of evaluated.
        assign_binding: bool,
    },
    AttachedProperty {
        name: String,
        declaring_type: TypeHandle,
        registration: Arc<PropertyRegistration>,
        accessors: AccessorPair,
    },
    DependsOnAlias {
        property: PropertyAccessor,
        /// Member whose changes invalidate this one.
        depends_on: String,
    },
    PlainProperty {
        property: PropertyAccessor,
    },
    Attachable {
        name: String,
        declaring_type: TypeHandle,
        accessors: AccessorPair,
    },
}

impl XamlMember {
    pub fn name(&self) -> &str {
        match self {
            XamlMember::RegisteredProperty { property, .. }
            | XamlMember::DependsOnAlias { property, .. }
            | XamlMember::PlainProperty { property } => &property.name,
            XamlMember::AttachedProperty { name, .. } | XamlMember::Attachable { name, .. } => name,
        }
    }

    pub fn declaring_type(&self) -> TypeHandle {
        match self {
            XamlMember::RegisteredProperty { property, .. }
            | XamlMember::DependsOnAlias { property, .. }
            | XamlMember::PlainProperty { property } => property.declaring_type,
            XamlMember::AttachedProperty { declaring_type, .. }
            | XamlMember::Attachable { declaring_type, .. } => *declaring_type,
        }
    }

    pub fn is_attachable(&self) -> bool {
        matches!(
            self,
            XamlMember::AttachedProperty { .. } | XamlMember::Attachable { .. }
        )
    }

    pub fn assign_binding(&self) -> bool {
        matches!(
            self,
            XamlMember::RegisteredProperty {
                assign_binding: true,
                ..
            }
        )
    }

    pub fn depends_on(&self) -> Option<&str> {
        match self {
            XamlMember::DependsOnAlias { depends_on, .. } => Some(depends_on),
            _ => None,
        }
    }

    pub fn registration(&self) -> Option<&Arc<PropertyRegistration>> {
        match self {
            XamlMember::RegisteredProperty { registration, .. }
            | XamlMember::AttachedProperty { registration, .. } => Some(registration),
            _ => None,
        }
    }

    /// Whether the host property system propagates the value down the
    /// element tree. Only registered members can inherit.
    pub fn inherits_value(&self) -> bool {
        self.registration().is_some_and(|registration| registration.inherits)
    }

    pub fn property(&self) -> Option<&PropertyAccessor> {
        match self {
            XamlMember::RegisteredProperty { property, .. }
            | XamlMember::DependsOnAlias { property, .. }
            | XamlMember::PlainProperty { property } => Some(property),
            _ => None,
        }
    }

    pub fn accessors(&self) -> Option<AccessorPair> {
        match self {
            XamlMember::AttachedProperty { accessors, .. } | XamlMember::Attachable { accessors, .. } => {
                Some(*accessors)
            }
            _ => None,
        }
    }

    pub fn value_target(&self) -> ValueTarget {
        match self {
            XamlMember::RegisteredProperty { registration, .. }
            | XamlMember::AttachedProperty { registration, .. } => ValueTarget::Registered(registration.id),
            XamlMember::DependsOnAlias { property, .. } | XamlMember::PlainProperty { property } => {
                if property.can_write {
                    ValueTarget::Accessor(property.handle)
                } else {
                    ValueTarget::ReadOnly
                }
            }
            XamlMember::Attachable { accessors, .. } => match accessors.setter() {
                Some(setter) => ValueTarget::StaticSetter(setter),
                None => ValueTarget::ReadOnly,
            },
        }
    }
}
