//! Handles into the `TypeUniverse`.
//!
//! Handles are plain indices: cheap to copy, hashable, and stable for the
//! lifetime of the universe that allocated them. They play the role that
//! `System.Type` / `PropertyInfo` / `MethodInfo` identity plays in a managed
//! runtime, so they double as cache keys in the schema context.

use std::fmt;

/// Identifies a runtime type (including closed generic instantiations).
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TypeHandle(pub u32);

impl TypeHandle {
    /// Sentinel value for an invalid handle.
    pub const INVALID: Self = Self(0);

    /// First valid handle value.
    pub const FIRST_VALID: u32 = 1;

    /// Check if this handle was allocated by a universe.
    pub const fn is_valid(self) -> bool {
        self.0 >= Self::FIRST_VALID
    }
}

impl fmt::Display for TypeHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "type#{}", self.0)
    }
}

/// Identifies a declared property accessor.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PropertyHandle(pub u32);

impl fmt::Display for PropertyHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "property#{}", self.0)
    }
}

/// Identifies a declared method (used for attached-property accessors).
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MethodHandle(pub u32);

impl fmt::Display for MethodHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "method#{}", self.0)
    }
}

/// Any member that can carry custom attributes.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum MemberRef {
    Property(PropertyHandle),
    Method(MethodHandle),
}

impl From<PropertyHandle> for MemberRef {
    fn from(handle: PropertyHandle) -> Self {
        MemberRef::Property(handle)
    }
}

impl From<MethodHandle> for MemberRef {
    fn from(handle: MethodHandle) -> Self {
        MemberRef::Method(handle)
    }
}
