//! Host property registry.
//!
//! The host object model registers properties in its own index on top of
//! plain reflection accessors. A registration is either *declared* (owned by
//! a type and visible on it and its subclasses) or *attached* (declared on
//! one type, settable on any target through static `Get`/`Set` accessors).

use crate::error::ProviderError;
use crate::handles::TypeHandle;
use crate::universe::TypeUniverse;
use indexmap::IndexMap;
use std::sync::Arc;
use tracing::trace;

/// Stable identity of a registration.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RegistrationId(pub u32);

/// A property known to the host property system.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PropertyRegistration {
    pub id: RegistrationId,
    pub name: String,
    pub owner: TypeHandle,
    pub property_type: TypeHandle,
    pub attached: bool,
    pub inherits: bool,
}

/// Queries into the host's property index.
pub trait PropertyRegistry {
    /// Find a declared (non-attached) property named `name` visible on
    /// `owner`.
    fn find_registered(
        &self,
        universe: &TypeUniverse,
        owner: TypeHandle,
        name: &str,
    ) -> Result<Option<Arc<PropertyRegistration>>, ProviderError>;

    /// Attached properties declared on `owner`, in registration order.
    fn attached(
        &self,
        universe: &TypeUniverse,
        owner: TypeHandle,
    ) -> Result<Vec<Arc<PropertyRegistration>>, ProviderError>;
}

/// Registry held in memory, keyed by owner type in registration order.
#[derive(Debug, Default)]
pub struct InMemoryPropertyRegistry {
    declared: IndexMap<TypeHandle, Vec<Arc<PropertyRegistration>>>,
    attached: IndexMap<TypeHandle, Vec<Arc<PropertyRegistration>>>,
    next_id: u32,
}

impl InMemoryPropertyRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    fn allocate(&mut self) -> RegistrationId {
        self.next_id += 1;
        RegistrationId(self.next_id)
    }

    /// Register a declared property owned by `owner`.
    pub fn register(
        &mut self,
        owner: TypeHandle,
        name: impl Into<String>,
        property_type: TypeHandle,
    ) -> Arc<PropertyRegistration> {
        let registration = Arc::new(PropertyRegistration {
            id: self.allocate(),
            name: name.into(),
            owner,
            property_type,
            attached: false,
            inherits: false,
        });
        trace!(owner = owner.0, name = %registration.name, "InMemoryPropertyRegistry::register");
        self.declared
            .entry(owner)
            .or_default()
            .push(Arc::clone(&registration));
        registration
    }

    /// Register an attached property declared on `owner`.
    pub fn register_attached(
        &mut self,
        owner: TypeHandle,
        name: impl Into<String>,
        property_type: TypeHandle,
        inherits: bool,
    ) -> Arc<PropertyRegistration> {
        let registration = Arc::new(PropertyRegistration {
            id: self.allocate(),
            name: name.into(),
            owner,
            property_type,
            attached: true,
            inherits,
        });
        trace!(owner = owner.0, name = %registration.name, "InMemoryPropertyRegistry::register_attached");
        self.attached
            .entry(owner)
            .or_default()
            .push(Arc::clone(&registration));
        registration
    }

    pub fn len(&self) -> usize {
        self.declared.values().map(Vec::len).sum::<usize>() + self.attached.values().map(Vec::len).sum::<usize>()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl PropertyRegistry for InMemoryPropertyRegistry {
    fn find_registered(
        &self,
        universe: &TypeUniverse,
        owner: TypeHandle,
        name: &str,
    ) -> Result<Option<Arc<PropertyRegistration>>, ProviderError> {
        universe.require_type(owner)?;
        // Declared properties are inherited: search the owner, then its bases.
        for ty in universe.base_chain(owner) {
            let hit = self
                .declared
                .get(&ty)
                .and_then(|props| props.iter().find(|prop| prop.name == name));
            if let Some(prop) = hit {
                return Ok(Some(Arc::clone(prop)));
            }
        }
        Ok(None)
    }

    fn attached(
        &self,
        universe: &TypeUniverse,
        owner: TypeHandle,
    ) -> Result<Vec<Arc<PropertyRegistration>>, ProviderError> {
        universe.require_type(owner)?;
        Ok(self.attached.get(&owner).cloned().unwrap_or_default())
    }
}

#[cfg(test)]
#[path = "../tests/registry_tests.rs"]
mod tests;
