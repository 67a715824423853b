//! Type resolution.
//!
//! Name lookup is an ordered chain; the first step that answers wins:
//!
//! 1. the type provider, with the literal local name
//! 2. the type provider, with the markup-extension suffix appended
//! 3. the simple-type table (`clr-namespace:System` primitives)
//!
//! Provider hits are wrapped through the type cache (`xaml_type`), which
//! applies binding specialization before default construction.

use crate::context::SchemaContext;
use crate::error::ResolveError;
use crate::language::{LanguageType, XAML_LANGUAGE_NAMESPACE, language_type};
use crate::resolve_trace::{self, Outcome};
use crate::simple_types;
use crate::xaml_member::XamlMember;
use crate::xaml_type::XamlType;
use rustc_hash::FxHashSet;
use smallvec::SmallVec;
use std::sync::Arc;
use tracing::{debug, trace, warn};
use xsc_reflect::{PrimitiveKind, TypeDef, TypeHandle};

impl<'a> SchemaContext<'a> {
    /// Resolve a namespace-qualified type name.
    ///
    /// `Ok(None)` means "not found here"; the caller applies its own default
    /// lookup (see `xaml_type_by_name`). Collaborator failures propagate
    /// unchanged.
    pub fn resolve_type(
        &self,
        namespace: &str,
        local_name: &str,
        type_args: &[Arc<XamlType>],
    ) -> Result<Option<Arc<XamlType>>, ResolveError> {
        let trace_enabled = resolve_trace::enabled();
        let query_id = if trace_enabled {
            let query_id = resolve_trace::next_query_id();
            resolve_trace::type_start(query_id, namespace, local_name, type_args.len());
            query_id
        } else {
            0
        };

        let result = self.resolve_type_chain(namespace, local_name, type_args);

        match &result {
            Ok((_, outcome)) => {
                if trace_enabled {
                    resolve_trace::end(query_id, "resolve_type", *outcome);
                }
            }
            Err(err) => {
                warn!(namespace, local_name, error = %err, "type resolution failed");
                if trace_enabled {
                    resolve_trace::end(query_id, "resolve_type", Outcome::Failed);
                }
            }
        }

        result.map(|(resolved, _)| resolved)
    }

    fn resolve_type_chain(
        &self,
        namespace: &str,
        local_name: &str,
        type_args: &[Arc<XamlType>],
    ) -> Result<(Option<Arc<XamlType>>, Outcome), ResolveError> {
        let mut generic_args: SmallVec<[TypeHandle; 2]> = SmallVec::with_capacity(type_args.len());
        for arg in type_args {
            match arg.underlying_type() {
                Some(handle) => generic_args.push(handle),
                None => {
                    debug!(
                        namespace,
                        local_name,
                        argument = arg.name(),
                        "generic argument is unresolved; skipping lookup"
                    );
                    return Ok((None, Outcome::MalformedArgs));
                }
            }
        }

        if let Some(found) = self
            .provider
            .find_type(self.universe, namespace, local_name, &generic_args)?
        {
            return self.wrap_found(found, Outcome::Provider);
        }

        // Markup extensions may be referenced without their suffix.
        let suffix = self.options.markup_extension_suffix.as_str();
        if !local_name.ends_with(suffix) {
            let suffixed = format!("{local_name}{suffix}");
            if let Some(found) = self
                .provider
                .find_type(self.universe, namespace, &suffixed, &generic_args)?
            {
                return self.wrap_found(found, Outcome::ProviderSuffixed);
            }
        }

        if self.options.simple_type_workaround {
            if let Some(kind) = simple_types::lookup(namespace, local_name) {
                let handle = self.universe.primitive(kind);
                if let Some(cached) = self.cached_type(handle) {
                    return Ok((Some(cached), Outcome::Cached));
                }
                return Ok((Some(self.language_type(kind)), Outcome::SimpleType));
            }
        }

        trace!(namespace, local_name, "type not found");
        Ok((None, Outcome::NotFound))
    }

    /// Descriptor for a provider hit; `Cached` when it was already built.
    fn wrap_found(
        &self,
        found: TypeHandle,
        built: Outcome,
    ) -> Result<(Option<Arc<XamlType>>, Outcome), ResolveError> {
        if let Some(cached) = self.cached_type(found) {
            return Ok((Some(cached), Outcome::Cached));
        }
        Ok((Some(self.xaml_type(found)?), built))
    }

    /// Resolve a type name the way the markup engine does: schema resolution
    /// first, then the engine's own language namespace.
    pub fn xaml_type_by_name(
        &self,
        namespace: &str,
        local_name: &str,
        type_args: &[Arc<XamlType>],
    ) -> Result<Option<Arc<XamlType>>, ResolveError> {
        if let Some(resolved) = self.resolve_type(namespace, local_name, type_args)? {
            return Ok(Some(resolved));
        }
        if namespace != XAML_LANGUAGE_NAMESPACE || !type_args.is_empty() {
            return Ok(None);
        }
        match language_type(local_name) {
            Some(LanguageType::Primitive(kind)) => Ok(Some(self.language_type(kind))),
            Some(LanguageType::Object) => self.xaml_type(self.universe.object_type()).map(Some),
            None => Ok(None),
        }
    }

    /// Descriptor for a runtime type, through the type cache.
    pub fn xaml_type(&self, handle: TypeHandle) -> Result<Arc<XamlType>, ResolveError> {
        if let Some(cached) = self.cached_type(handle) {
            return Ok(cached);
        }

        let def = self.universe.require_type(handle)?;
        let built = match self.specialized_type(handle, &def)? {
            Some(specialized) => specialized,
            None => self.default_type(handle, &def),
        };
        Ok(self.insert_type(handle, built))
    }

    /// Language descriptor of a primitive, constructed directly rather than
    /// through default construction.
    pub(crate) fn language_type(&self, kind: PrimitiveKind) -> Arc<XamlType> {
        let handle = self.universe.primitive(kind);
        if let Some(cached) = self.cached_type(handle) {
            return cached;
        }
        self.insert_type(handle, XamlType::language(kind, handle))
    }

    /// Binding specialization: a capability check against the host binding
    /// interface, never a naming convention.
    fn specialized_type(&self, handle: TypeHandle, def: &TypeDef) -> Result<Option<XamlType>, ResolveError> {
        if !self.options.binding_specialization {
            return Ok(None);
        }
        let Some(binding) = self.universe.binding_interface() else {
            return Ok(None);
        };
        if !self.universe.is_assignable_to(handle, binding) {
            return Ok(None);
        }

        let members = self.binding_members(handle)?;
        debug!(
            ty = %def.full_name(),
            members = members.len(),
            "binding type specialized"
        );
        Ok(Some(XamlType::binding(handle, def, members)))
    }

    /// Writable instance properties of a binding type and its bases, most
    /// derived first; a base property hidden by a derived one is skipped.
    fn binding_members(&self, handle: TypeHandle) -> Result<Vec<Arc<XamlMember>>, ResolveError> {
        let mut members = Vec::new();
        let mut seen: FxHashSet<String> = FxHashSet::default();
        for ty in self.universe.base_chain(handle) {
            let def = self.universe.require_type(ty)?;
            for &property in &def.properties {
                let property_def = self.universe.require_property(property)?;
                if !seen.insert(property_def.name.clone()) {
                    continue;
                }
                if !property_def.can_write() || property_def.is_static() {
                    continue;
                }
                members.push(self.resolve_property(property)?);
            }
        }
        Ok(members)
    }

    fn default_type(&self, handle: TypeHandle, def: &TypeDef) -> XamlType {
        if let Some(kind) = self.universe.primitive_kind(handle) {
            return XamlType::language(kind, handle);
        }
        let markup_extension = self
            .universe
            .markup_extension_base()
            .is_some_and(|base| base != handle && self.universe.is_assignable_to(handle, base));
        XamlType::from_def(handle, def, markup_extension)
    }
}

#[cfg(test)]
#[path = "../tests/type_resolver_tests.rs"]
mod tests;
