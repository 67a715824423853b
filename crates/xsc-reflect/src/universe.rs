//! Type universe: the reflection store behind every handle.
//!
//! The universe owns type, property and method definitions and hands out
//! handles for them. It is the in-process stand-in for the runtime's
//! reflection facilities:
//!
//! - **Registration**: hosts declare types, then attach properties and
//!   methods to them. Registration takes `&self`, so a universe can be
//!   shared while generic instantiations are still being created.
//! - **Lookup**: by `(namespace, name)` with an optional assembly filter.
//! - **Introspection**: base-type chains, interface checks, custom
//!   attributes on types and members.
//!
//! Every universe starts with `System.Object` and the primitive system types
//! (`PrimitiveKind`) registered.

use crate::attributes::CustomAttribute;
use crate::error::ProviderError;
use crate::handles::{MemberRef, MethodHandle, PropertyHandle, TypeHandle};
use crate::primitives::PrimitiveKind;
use bitflags::bitflags;
use dashmap::DashMap;
use rustc_hash::FxHashMap;
use smallvec::SmallVec;
use std::sync::atomic::{AtomicU32, AtomicU64, Ordering};
use std::sync::{Arc, OnceLock};
use tracing::trace;

/// Global counter for assigning unique instance IDs to `TypeUniverse` instances.
static NEXT_INSTANCE_ID: AtomicU64 = AtomicU64::new(1);

/// Separator between a generic type's simple name and its arity.
const ARITY_SEPARATOR: char = '`';

bitflags! {
    #[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
    pub struct TypeFlags: u16 {
        const INTERFACE = 1 << 0;
        const ABSTRACT = 1 << 1;
        const VALUE_TYPE = 1 << 2;
        /// Open generic definition (`List`1`); never instantiated directly.
        const GENERIC_DEFINITION = 1 << 3;
    }
}

bitflags! {
    #[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
    pub struct PropertyFlags: u8 {
        const CAN_READ = 1 << 0;
        const CAN_WRITE = 1 << 1;
        const STATIC = 1 << 2;
    }
}

bitflags! {
    #[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
    pub struct MethodFlags: u8 {
        const STATIC = 1 << 0;
    }
}

// =============================================================================
// Definitions
// =============================================================================

/// A runtime type as seen through reflection.
#[derive(Clone, Debug)]
pub struct TypeDef {
    /// Metadata name; generic definitions carry their arity (`List`1`).
    pub name: String,
    pub namespace: String,
    pub assembly: String,
    pub flags: TypeFlags,
    pub base: Option<TypeHandle>,
    pub interfaces: Vec<TypeHandle>,
    /// For closed instantiations: the open definition they were built from.
    pub generic_definition: Option<TypeHandle>,
    pub generic_args: SmallVec<[TypeHandle; 2]>,
    pub properties: Vec<PropertyHandle>,
    pub methods: Vec<MethodHandle>,
    pub attributes: Vec<CustomAttribute>,
}

impl TypeDef {
    pub fn class(namespace: impl Into<String>, name: impl Into<String>, assembly: impl Into<String>) -> Self {
        TypeDef {
            name: name.into(),
            namespace: namespace.into(),
            assembly: assembly.into(),
            flags: TypeFlags::empty(),
            base: None,
            interfaces: Vec::new(),
            generic_definition: None,
            generic_args: SmallVec::new(),
            properties: Vec::new(),
            methods: Vec::new(),
            attributes: Vec::new(),
        }
    }

    pub fn interface(
        namespace: impl Into<String>,
        name: impl Into<String>,
        assembly: impl Into<String>,
    ) -> Self {
        Self::class(namespace, name, assembly).with_flags(TypeFlags::INTERFACE | TypeFlags::ABSTRACT)
    }

    /// An open generic definition; `name` is the simple name, the arity
    /// suffix is appended here.
    pub fn generic_class(
        namespace: impl Into<String>,
        name: &str,
        assembly: impl Into<String>,
        arity: usize,
    ) -> Self {
        Self::class(namespace, format!("{name}{ARITY_SEPARATOR}{arity}"), assembly)
            .with_flags(TypeFlags::GENERIC_DEFINITION)
    }

    pub fn with_base(mut self, base: TypeHandle) -> Self {
        self.base = Some(base);
        self
    }

    pub fn with_interface(mut self, interface: TypeHandle) -> Self {
        self.interfaces.push(interface);
        self
    }

    pub fn with_attribute(mut self, attribute: CustomAttribute) -> Self {
        self.attributes.push(attribute);
        self
    }

    pub fn with_flags(mut self, flags: TypeFlags) -> Self {
        self.flags |= flags;
        self
    }

    /// Name without the generic arity suffix.
    pub fn simple_name(&self) -> &str {
        match self.name.split_once(ARITY_SEPARATOR) {
            Some((simple, _)) => simple,
            None => &self.name,
        }
    }

    /// Number of generic parameters declared by the (open) definition.
    pub fn generic_arity(&self) -> usize {
        self.name
            .split_once(ARITY_SEPARATOR)
            .and_then(|(_, arity)| arity.parse().ok())
            .unwrap_or(0)
    }

    pub fn full_name(&self) -> String {
        if self.namespace.is_empty() {
            self.name.clone()
        } else {
            format!("{}.{}", self.namespace, self.name)
        }
    }

    pub fn is_interface(&self) -> bool {
        self.flags.contains(TypeFlags::INTERFACE)
    }

    pub fn is_generic_definition(&self) -> bool {
        self.flags.contains(TypeFlags::GENERIC_DEFINITION)
    }
}

/// A declared property accessor.
#[derive(Clone, Debug)]
pub struct PropertyDef {
    pub declaring_type: TypeHandle,
    pub name: String,
    pub property_type: TypeHandle,
    pub flags: PropertyFlags,
    pub attributes: Vec<CustomAttribute>,
}

impl PropertyDef {
    pub fn read_write(declaring_type: TypeHandle, name: impl Into<String>, property_type: TypeHandle) -> Self {
        PropertyDef {
            declaring_type,
            name: name.into(),
            property_type,
            flags: PropertyFlags::CAN_READ | PropertyFlags::CAN_WRITE,
            attributes: Vec::new(),
        }
    }

    pub fn read_only(declaring_type: TypeHandle, name: impl Into<String>, property_type: TypeHandle) -> Self {
        PropertyDef {
            flags: PropertyFlags::CAN_READ,
            ..Self::read_write(declaring_type, name, property_type)
        }
    }

    pub fn with_attribute(mut self, attribute: CustomAttribute) -> Self {
        self.attributes.push(attribute);
        self
    }

    pub fn can_write(&self) -> bool {
        self.flags.contains(PropertyFlags::CAN_WRITE)
    }

    pub fn is_static(&self) -> bool {
        self.flags.contains(PropertyFlags::STATIC)
    }
}

/// A declared method.
#[derive(Clone, Debug)]
pub struct MethodDef {
    pub declaring_type: TypeHandle,
    pub name: String,
    pub return_type: Option<TypeHandle>,
    pub parameters: SmallVec<[TypeHandle; 2]>,
    pub flags: MethodFlags,
    pub attributes: Vec<CustomAttribute>,
}

impl MethodDef {
    pub fn new(declaring_type: TypeHandle, name: impl Into<String>) -> Self {
        MethodDef {
            declaring_type,
            name: name.into(),
            return_type: None,
            parameters: SmallVec::new(),
            flags: MethodFlags::empty(),
            attributes: Vec::new(),
        }
    }

    /// `static TValue Get{Name}(TTarget target)`
    pub fn static_getter(
        declaring_type: TypeHandle,
        name: impl Into<String>,
        target: TypeHandle,
        value: TypeHandle,
    ) -> Self {
        let mut method = Self::new(declaring_type, name);
        method.flags |= MethodFlags::STATIC;
        method.return_type = Some(value);
        method.parameters.push(target);
        method
    }

    /// `static void Set{Name}(TTarget target, TValue value)`
    pub fn static_setter(
        declaring_type: TypeHandle,
        name: impl Into<String>,
        target: TypeHandle,
        value: TypeHandle,
    ) -> Self {
        let mut method = Self::new(declaring_type, name);
        method.flags |= MethodFlags::STATIC;
        method.parameters.push(target);
        method.parameters.push(value);
        method
    }

    pub fn with_attribute(mut self, attribute: CustomAttribute) -> Self {
        self.attributes.push(attribute);
        self
    }

    pub fn is_static(&self) -> bool {
        self.flags.contains(MethodFlags::STATIC)
    }
}

// =============================================================================
// TypeUniverse
// =============================================================================

/// Storage for runtime type definitions.
///
/// Thread-safe: registration and lookup both take `&self`.
pub struct TypeUniverse {
    /// Unique instance ID for debugging (tracks which universe a handle came from)
    instance_id: u64,

    types: DashMap<TypeHandle, Arc<TypeDef>>,
    properties: DashMap<PropertyHandle, Arc<PropertyDef>>,
    methods: DashMap<MethodHandle, Arc<MethodDef>>,

    /// `(namespace, metadata name)` -> every type declared under it.
    by_name: DashMap<(String, String), SmallVec<[TypeHandle; 1]>>,

    /// `(open definition, arguments)` -> closed instantiation.
    instantiations: DashMap<(TypeHandle, SmallVec<[TypeHandle; 2]>), TypeHandle>,

    object_type: TypeHandle,
    primitives: FxHashMap<PrimitiveKind, TypeHandle>,
    primitive_kinds: FxHashMap<TypeHandle, PrimitiveKind>,

    /// Host capability marking data-binding expressions.
    binding_interface: OnceLock<TypeHandle>,
    /// Host base class of markup extensions.
    markup_extension_base: OnceLock<TypeHandle>,

    next_type: AtomicU32,
    next_property: AtomicU32,
    next_method: AtomicU32,
}

impl Default for TypeUniverse {
    fn default() -> Self {
        Self::new()
    }
}

impl TypeUniverse {
    /// Create a universe holding `System.Object` and the primitive system types.
    pub fn new() -> Self {
        let instance_id = NEXT_INSTANCE_ID.fetch_add(1, Ordering::SeqCst);
        trace!(instance_id, "TypeUniverse::new - creating new instance");

        let mut universe = TypeUniverse {
            instance_id,
            types: DashMap::new(),
            properties: DashMap::new(),
            methods: DashMap::new(),
            by_name: DashMap::new(),
            instantiations: DashMap::new(),
            object_type: TypeHandle::INVALID,
            primitives: FxHashMap::default(),
            primitive_kinds: FxHashMap::default(),
            binding_interface: OnceLock::new(),
            markup_extension_base: OnceLock::new(),
            next_type: AtomicU32::new(TypeHandle::FIRST_VALID),
            next_property: AtomicU32::new(1),
            next_method: AtomicU32::new(1),
        };

        let object = universe.register_type(TypeDef::class("System", "Object", "mscorlib"));
        universe.object_type = object;

        for kind in PrimitiveKind::ALL {
            let mut def = TypeDef::class(kind.namespace(), kind.name(), kind.assembly()).with_base(object);
            if kind.is_value_type() {
                def.flags |= TypeFlags::VALUE_TYPE;
            }
            let handle = universe.register_type(def);
            universe.primitives.insert(kind, handle);
            universe.primitive_kinds.insert(handle, kind);
        }

        universe
    }

    pub fn instance_id(&self) -> u64 {
        self.instance_id
    }

    /// Register a new type and return its handle.
    pub fn register_type(&self, def: TypeDef) -> TypeHandle {
        let handle = TypeHandle(self.next_type.fetch_add(1, Ordering::SeqCst));
        trace!(
            instance_id = self.instance_id,
            handle = handle.0,
            name = %def.full_name(),
            assembly = %def.assembly,
            "TypeUniverse::register_type"
        );
        if def.generic_definition.is_none() {
            self.by_name
                .entry((def.namespace.clone(), def.name.clone()))
                .or_default()
                .push(handle);
        }
        self.types.insert(handle, Arc::new(def));
        handle
    }

    /// Declare a property on its declaring type.
    pub fn define_property(&self, def: PropertyDef) -> Result<PropertyHandle, ProviderError> {
        let owner = def.declaring_type;
        let handle = PropertyHandle(self.next_property.fetch_add(1, Ordering::SeqCst));
        {
            let mut entry = self
                .types
                .get_mut(&owner)
                .ok_or(ProviderError::UnknownType(owner))?;
            Arc::make_mut(entry.value_mut()).properties.push(handle);
        }
        trace!(
            instance_id = self.instance_id,
            owner = owner.0,
            property = %def.name,
            "TypeUniverse::define_property"
        );
        self.properties.insert(handle, Arc::new(def));
        Ok(handle)
    }

    /// Declare a method on its declaring type.
    pub fn define_method(&self, def: MethodDef) -> Result<MethodHandle, ProviderError> {
        let owner = def.declaring_type;
        let handle = MethodHandle(self.next_method.fetch_add(1, Ordering::SeqCst));
        {
            let mut entry = self
                .types
                .get_mut(&owner)
                .ok_or(ProviderError::UnknownType(owner))?;
            Arc::make_mut(entry.value_mut()).methods.push(handle);
        }
        self.methods.insert(handle, Arc::new(def));
        Ok(handle)
    }

    pub fn type_def(&self, handle: TypeHandle) -> Option<Arc<TypeDef>> {
        self.types.get(&handle).map(|r| Arc::clone(r.value()))
    }

    pub fn property(&self, handle: PropertyHandle) -> Option<Arc<PropertyDef>> {
        self.properties.get(&handle).map(|r| Arc::clone(r.value()))
    }

    pub fn method(&self, handle: MethodHandle) -> Option<Arc<MethodDef>> {
        self.methods.get(&handle).map(|r| Arc::clone(r.value()))
    }

    pub fn require_type(&self, handle: TypeHandle) -> Result<Arc<TypeDef>, ProviderError> {
        self.type_def(handle).ok_or(ProviderError::UnknownType(handle))
    }

    pub fn require_property(&self, handle: PropertyHandle) -> Result<Arc<PropertyDef>, ProviderError> {
        self.property(handle)
            .ok_or(ProviderError::UnknownProperty(handle))
    }

    pub fn require_method(&self, handle: MethodHandle) -> Result<Arc<MethodDef>, ProviderError> {
        self.method(handle).ok_or(ProviderError::UnknownMethod(handle))
    }

    /// Number of registered types (including instantiations).
    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    // -------------------------------------------------------------------------
    // Lookup
    // -------------------------------------------------------------------------

    /// Find a type by namespace and metadata name.
    ///
    /// With no assembly filter, a name declared in more than one assembly is
    /// reported as ambiguous rather than picking one.
    pub fn find(
        &self,
        namespace: &str,
        name: &str,
        assembly: Option<&str>,
    ) -> Result<Option<TypeHandle>, ProviderError> {
        let key = (namespace.to_string(), name.to_string());
        let Some(candidates) = self.by_name.get(&key) else {
            return Ok(None);
        };

        let matching: SmallVec<[TypeHandle; 1]> = candidates
            .iter()
            .copied()
            .filter(|&handle| match assembly {
                Some(assembly) => self
                    .types
                    .get(&handle)
                    .is_some_and(|def| def.assembly == assembly),
                None => true,
            })
            .collect();

        match matching.as_slice() {
            [] => Ok(None),
            [single] => Ok(Some(*single)),
            many => Err(ProviderError::Ambiguous {
                namespace: namespace.to_string(),
                name: name.to_string(),
                assemblies: many
                    .iter()
                    .filter_map(|handle| self.type_def(*handle))
                    .map(|def| def.assembly.clone())
                    .collect(),
            }),
        }
    }

    /// Close an open generic definition over `args`.
    ///
    /// Instantiations are interned: the same arguments always produce the
    /// same handle.
    pub fn instantiate(&self, definition: TypeHandle, args: &[TypeHandle]) -> Result<TypeHandle, ProviderError> {
        let key = (definition, SmallVec::from_slice(args));
        if let Some(existing) = self.instantiations.get(&key) {
            return Ok(*existing);
        }

        let open = self.require_type(definition)?;
        let expected = open.generic_arity();
        if !open.is_generic_definition() || expected != args.len() {
            return Err(ProviderError::ArityMismatch {
                name: open.full_name(),
                expected,
                given: args.len(),
            });
        }
        for &arg in args {
            self.require_type(arg)?;
        }

        let mut closed = TypeDef::clone(&open);
        closed.flags.remove(TypeFlags::GENERIC_DEFINITION);
        closed.generic_definition = Some(definition);
        closed.generic_args = key.1.clone();

        // Registration happens under the entry lock so racing callers share one type.
        // `register_type` only touches `types` (instantiations skip `by_name`).
        let handle = *self
            .instantiations
            .entry(key)
            .or_insert_with(|| self.register_type(closed));
        Ok(handle)
    }

    // -------------------------------------------------------------------------
    // Introspection
    // -------------------------------------------------------------------------

    /// The type followed by each of its base types, most derived first.
    pub fn base_chain(&self, handle: TypeHandle) -> Vec<TypeHandle> {
        let mut chain = Vec::new();
        let mut current = Some(handle);
        while let Some(ty) = current {
            // A malformed universe could declare a base cycle; stop at the first repeat.
            if chain.contains(&ty) {
                break;
            }
            chain.push(ty);
            current = self.types.get(&ty).and_then(|def| def.base);
        }
        chain
    }

    /// Whether `handle` is `target`, derives from it, or implements it
    /// (directly, through a base type, or through an inherited interface).
    pub fn is_assignable_to(&self, handle: TypeHandle, target: TypeHandle) -> bool {
        let mut pending: Vec<TypeHandle> = self.base_chain(handle);
        let mut seen: Vec<TypeHandle> = Vec::new();
        while let Some(ty) = pending.pop() {
            if ty == target {
                return true;
            }
            if seen.contains(&ty) {
                continue;
            }
            seen.push(ty);
            if let Some(def) = self.type_def(ty) {
                pending.extend(def.interfaces.iter().copied());
            }
        }
        false
    }

    /// Custom attributes declared on a member.
    pub fn member_attributes(&self, member: MemberRef) -> Result<Vec<CustomAttribute>, ProviderError> {
        match member {
            MemberRef::Property(handle) => Ok(self.require_property(handle)?.attributes.clone()),
            MemberRef::Method(handle) => Ok(self.require_method(handle)?.attributes.clone()),
        }
    }

    // -------------------------------------------------------------------------
    // Well-known types
    // -------------------------------------------------------------------------

    pub fn object_type(&self) -> TypeHandle {
        self.object_type
    }

    pub fn primitive(&self, kind: PrimitiveKind) -> TypeHandle {
        self.primitives
            .get(&kind)
            .copied()
            .unwrap_or(TypeHandle::INVALID)
    }

    pub fn primitive_kind(&self, handle: TypeHandle) -> Option<PrimitiveKind> {
        self.primitive_kinds.get(&handle).copied()
    }

    /// Declare the host interface implemented by data-binding expressions.
    ///
    /// Returns `false` if a binding interface was already declared.
    pub fn set_binding_interface(&self, handle: TypeHandle) -> bool {
        self.binding_interface.set(handle).is_ok()
    }

    pub fn binding_interface(&self) -> Option<TypeHandle> {
        self.binding_interface.get().copied()
    }

    /// Declare the host base class of markup extensions.
    ///
    /// Returns `false` if a base was already declared.
    pub fn set_markup_extension_base(&self, handle: TypeHandle) -> bool {
        self.markup_extension_base.set(handle).is_ok()
    }

    pub fn markup_extension_base(&self) -> Option<TypeHandle> {
        self.markup_extension_base.get().copied()
    }
}

#[cfg(test)]
#[path = "../tests/universe_tests.rs"]
mod tests;
