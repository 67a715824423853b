//! Namespace-qualified type lookup.
//!
//! Markup documents name types as `prefix:Name`, where the prefix maps to an
//! XML namespace URI. A URI is either a `clr-namespace:` reference naming a
//! runtime namespace (and optionally an assembly) directly, or an opaque URI
//! the host maps onto one or more runtime namespaces.

use crate::error::ProviderError;
use crate::handles::TypeHandle;
use crate::universe::TypeUniverse;
use rustc_hash::{FxHashMap, FxHashSet};
use tracing::trace;

const CLR_NAMESPACE_PREFIX: &str = "clr-namespace:";
const ASSEMBLY_KEY: &str = "assembly=";

/// Finds runtime types by XML namespace and local name.
pub trait TypeProvider {
    /// Look up `local_name` in `namespace`, closed over `generic_args` when
    /// non-empty.
    ///
    /// Returns `Ok(None)` when nothing matches; errors are reserved for
    /// failures of the lookup itself.
    fn find_type(
        &self,
        universe: &TypeUniverse,
        namespace: &str,
        local_name: &str,
        generic_args: &[TypeHandle],
    ) -> Result<Option<TypeHandle>, ProviderError>;
}

/// A runtime namespace, optionally pinned to one assembly.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ClrNamespace {
    pub namespace: String,
    pub assembly: Option<String>,
}

impl ClrNamespace {
    pub fn new(namespace: impl Into<String>, assembly: Option<&str>) -> Self {
        ClrNamespace {
            namespace: namespace.into(),
            assembly: assembly.map(str::to_string),
        }
    }

    /// Parse `clr-namespace:Some.Namespace;assembly=Some.Assembly`.
    ///
    /// The assembly part is optional; anything that is not a `clr-namespace`
    /// URI yields `None`.
    pub fn parse_uri(uri: &str) -> Option<Self> {
        let rest = uri.strip_prefix(CLR_NAMESPACE_PREFIX)?;
        let (namespace, assembly) = match rest.split_once(';') {
            Some((namespace, tail)) => (namespace, tail.trim().strip_prefix(ASSEMBLY_KEY)),
            None => (rest, None),
        };
        let namespace = namespace.trim();
        if namespace.is_empty() {
            return None;
        }
        Some(ClrNamespace::new(
            namespace,
            assembly.map(str::trim).filter(|assembly| !assembly.is_empty()),
        ))
    }
}

/// `TypeProvider` over a `TypeUniverse` and a set of referenced assemblies.
///
/// Only referenced assemblies are searched. A `clr-namespace` URI naming an
/// assembly that is not referenced does not resolve, which matches how a
/// host that scans only its own assemblies behaves.
#[derive(Debug, Default)]
pub struct NamespaceTypeProvider {
    referenced_assemblies: FxHashSet<String>,
    mappings: FxHashMap<String, Vec<ClrNamespace>>,
}

impl NamespaceTypeProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reference_assembly(&mut self, assembly: impl Into<String>) -> &mut Self {
        self.referenced_assemblies.insert(assembly.into());
        self
    }

    /// Map an XML namespace URI onto a runtime namespace. A URI may be mapped
    /// several times; candidates are searched in mapping order.
    pub fn map_namespace(&mut self, xml_namespace: impl Into<String>, target: ClrNamespace) -> &mut Self {
        self.mappings
            .entry(xml_namespace.into())
            .or_default()
            .push(target);
        self
    }

    fn candidates(&self, xml_namespace: &str) -> Vec<ClrNamespace> {
        match self.mappings.get(xml_namespace) {
            Some(mapped) => mapped.clone(),
            None => ClrNamespace::parse_uri(xml_namespace).into_iter().collect(),
        }
    }

    fn find_in(
        &self,
        universe: &TypeUniverse,
        target: &ClrNamespace,
        name: &str,
    ) -> Result<Option<TypeHandle>, ProviderError> {
        match &target.assembly {
            Some(assembly) if !self.referenced_assemblies.contains(assembly) => Ok(None),
            Some(assembly) => universe.find(&target.namespace, name, Some(assembly)),
            None => {
                let mut hits: Vec<(&String, TypeHandle)> = Vec::new();
                for assembly in &self.referenced_assemblies {
                    if let Some(handle) = universe.find(&target.namespace, name, Some(assembly))? {
                        hits.push((assembly, handle));
                    }
                }
                match hits.as_slice() {
                    [] => Ok(None),
                    [(_, handle)] => Ok(Some(*handle)),
                    _ => {
                        let mut assemblies: Vec<String> =
                            hits.iter().map(|(assembly, _)| (*assembly).clone()).collect();
                        assemblies.sort();
                        Err(ProviderError::Ambiguous {
                            namespace: target.namespace.clone(),
                            name: name.to_string(),
                            assemblies,
                        })
                    }
                }
            }
        }
    }
}

impl TypeProvider for NamespaceTypeProvider {
    fn find_type(
        &self,
        universe: &TypeUniverse,
        namespace: &str,
        local_name: &str,
        generic_args: &[TypeHandle],
    ) -> Result<Option<TypeHandle>, ProviderError> {
        let metadata_name = if generic_args.is_empty() {
            local_name.to_string()
        } else {
            format!("{local_name}`{}", generic_args.len())
        };

        for target in self.candidates(namespace) {
            let Some(handle) = self.find_in(universe, &target, &metadata_name)? else {
                continue;
            };
            trace!(
                namespace,
                local_name,
                clr_namespace = %target.namespace,
                handle = handle.0,
                "NamespaceTypeProvider::find_type - hit"
            );
            if generic_args.is_empty() {
                return Ok(Some(handle));
            }
            return universe.instantiate(handle, generic_args).map(Some);
        }

        Ok(None)
    }
}

#[cfg(test)]
#[path = "../tests/provider_tests.rs"]
mod tests;
