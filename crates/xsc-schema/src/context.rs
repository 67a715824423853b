//! The resolution context.
//!
//! One `SchemaContext` serves one markup-processing session. It owns the
//! type and member caches and borrows the host collaborators. Runtime types
//! and members are assumed immutable for the session, so cache entries are
//! never invalidated; dropping the context drops them.
//!
//! Caches sit behind `RefCell` so every resolution entry point takes `&self`
//! and may re-enter the context (binding specialization resolves members
//! while a type is being built). No cache borrow is held across a call into
//! a collaborator. The context is `!Sync`; concurrent sessions each create
//! their own.

use crate::options::SchemaOptions;
use crate::xaml_member::{MemberKey, XamlMember};
use crate::xaml_type::XamlType;
use rustc_hash::FxHashMap;
use std::cell::RefCell;
use std::sync::Arc;
use tracing::debug;
use xsc_reflect::{PropertyRegistry, TypeHandle, TypeProvider, TypeUniverse};

/// Entry counts of the context caches.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct CacheStats {
    pub types: usize,
    pub members: usize,
}

pub struct SchemaContext<'a> {
    pub(crate) universe: &'a TypeUniverse,
    pub(crate) provider: &'a dyn TypeProvider,
    pub(crate) registry: &'a dyn PropertyRegistry,
    pub(crate) options: SchemaOptions,
    types: RefCell<FxHashMap<TypeHandle, Arc<XamlType>>>,
    members: RefCell<FxHashMap<MemberKey, Arc<XamlMember>>>,
}

impl<'a> SchemaContext<'a> {
    pub fn new(
        universe: &'a TypeUniverse,
        provider: &'a dyn TypeProvider,
        registry: &'a dyn PropertyRegistry,
    ) -> Self {
        Self::with_options(universe, provider, registry, SchemaOptions::default())
    }

    pub fn with_options(
        universe: &'a TypeUniverse,
        provider: &'a dyn TypeProvider,
        registry: &'a dyn PropertyRegistry,
        options: SchemaOptions,
    ) -> Self {
        debug!(
            universe = universe.instance_id(),
            simple_type_workaround = options.simple_type_workaround,
            binding_specialization = options.binding_specialization,
            "SchemaContext::new"
        );
        SchemaContext {
            universe,
            provider,
            registry,
            options,
            types: RefCell::new(FxHashMap::default()),
            members: RefCell::new(FxHashMap::default()),
        }
    }

    pub fn universe(&self) -> &'a TypeUniverse {
        self.universe
    }

    pub fn options(&self) -> &SchemaOptions {
        &self.options
    }

    pub fn cache_stats(&self) -> CacheStats {
        CacheStats {
            types: self.types.borrow().len(),
            members: self.members.borrow().len(),
        }
    }

    /// Descriptor for a name nothing could resolve.
    ///
    /// Unknown descriptors have no runtime type and are not cached; using
    /// one as a generic argument makes type resolution fail.
    pub fn unknown_type(&self, namespace: &str, name: &str) -> Arc<XamlType> {
        Arc::new(XamlType::unknown(namespace, name))
    }

    pub(crate) fn cached_type(&self, handle: TypeHandle) -> Option<Arc<XamlType>> {
        self.types.borrow().get(&handle).cloned()
    }

    /// Cache `built` under `handle` unless an entry appeared while it was
    /// being built; the first entry always wins.
    pub(crate) fn insert_type(&self, handle: TypeHandle, built: XamlType) -> Arc<XamlType> {
        Arc::clone(
            self.types
                .borrow_mut()
                .entry(handle)
                .or_insert_with(|| Arc::new(built)),
        )
    }

    pub(crate) fn cached_member(&self, key: MemberKey) -> Option<Arc<XamlMember>> {
        self.members.borrow().get(&key).cloned()
    }

    pub(crate) fn insert_member(&self, key: MemberKey, built: XamlMember) -> Arc<XamlMember> {
        Arc::clone(
            self.members
                .borrow_mut()
                .entry(key)
                .or_insert_with(|| Arc::new(built)),
        )
    }
}
