//! Primitive names under `clr-namespace:System` URIs.
//!
//! Documents may declare `xmlns:sys="clr-namespace:System;assembly=mscorlib"`
//! and write `sys:Double`. Hosts typically do not reference the core library
//! in their type provider, so these names would not resolve. This table maps
//! them straight to the language's primitive descriptors.
//!
//! The table is process-wide: built on first lookup, never torn down, and
//! read-only afterwards, so concurrent sessions share it freely.

use crate::language::clr_namespace_uri;
use once_cell::sync::Lazy;
use rustc_hash::FxHashMap;
use xsc_reflect::PrimitiveKind;

/// namespace URI -> local name -> primitive
static SIMPLE_TYPES: Lazy<FxHashMap<String, FxHashMap<&'static str, PrimitiveKind>>> = Lazy::new(|| {
    let mut table: FxHashMap<String, FxHashMap<&'static str, PrimitiveKind>> = FxHashMap::default();
    for kind in PrimitiveKind::ALL {
        table
            .entry(clr_namespace_uri(kind.namespace(), kind.assembly()))
            .or_default()
            .insert(kind.name(), kind);
    }
    tracing::debug!(namespaces = table.len(), "simple type table built");
    table
});

/// Look up `(namespace, local_name)` exactly; no case folding or URI
/// normalization.
pub fn lookup(namespace: &str, local_name: &str) -> Option<PrimitiveKind> {
    SIMPLE_TYPES.get(namespace)?.get(local_name).copied()
}

/// Every `(namespace, local_name, primitive)` entry, in no particular order.
pub fn entries() -> impl Iterator<Item = (&'static str, &'static str, PrimitiveKind)> {
    SIMPLE_TYPES.iter().flat_map(|(namespace, names)| {
        names
            .iter()
            .map(move |(name, kind)| (namespace.as_str(), *name, *kind))
    })
}

#[cfg(test)]
#[path = "../tests/simple_types_tests.rs"]
mod tests;
