//! Member resolution.
//!
//! Two lookup shapes reach the context:
//!
//! - a declared property accessor (`resolve_property`): registered property,
//!   then depends-on alias, then plain property
//! - a static accessor pair for an attachable member (`resolve_attached`):
//!   attached registration on the declaring type, then the engine's default
//!   attachable member
//!
//! Both shapes are cached in the member cache, fallbacks included, so the
//! registry is consulted at most once per key.

use crate::context::SchemaContext;
use crate::error::ResolveError;
use crate::resolve_trace::{self, Outcome};
use crate::xaml_member::{AccessorPair, MemberKey, PropertyAccessor, XamlMember};
use std::sync::Arc;
use tracing::{trace, warn};
use xsc_reflect::attributes::find_attribute;
use xsc_reflect::{AttributeKind, CustomAttribute, PropertyDef, PropertyHandle, TypeHandle};

impl<'a> SchemaContext<'a> {
    /// Member descriptor for a declared property accessor.
    pub fn resolve_property(&self, property: PropertyHandle) -> Result<Arc<XamlMember>, ResolveError> {
        self.cached_or_build(
            "resolve_property",
            MemberKey::Property(property),
            || property.to_string(),
            || {
                let def = self.universe.require_property(property)?;
                self.property_member(property, &def)
            },
        )
    }

    /// Member descriptor for an attachable member named `name` with the
    /// given static accessors.
    pub fn resolve_attached(&self, name: &str, accessors: AccessorPair) -> Result<Arc<XamlMember>, ResolveError> {
        self.cached_or_build(
            "resolve_attached",
            MemberKey::from(accessors),
            || name.to_string(),
            || {
                let declaring_type = self
                    .universe
                    .require_method(accessors.primary())?
                    .declaring_type;
                self.attached_member(name, declaring_type, accessors)
            },
        )
    }

    fn cached_or_build(
        &self,
        op: &'static str,
        key: MemberKey,
        subject: impl FnOnce() -> String,
        build: impl FnOnce() -> Result<(XamlMember, Outcome), ResolveError>,
    ) -> Result<Arc<XamlMember>, ResolveError> {
        let trace_enabled = resolve_trace::enabled();
        let query_id = if trace_enabled {
            let query_id = resolve_trace::next_query_id();
            resolve_trace::member_start(query_id, op, &subject());
            query_id
        } else {
            0
        };

        if let Some(cached) = self.cached_member(key) {
            if trace_enabled {
                resolve_trace::end(query_id, op, Outcome::Cached);
            }
            return Ok(cached);
        }

        match build() {
            Ok((member, outcome)) => {
                if trace_enabled {
                    resolve_trace::end(query_id, op, outcome);
                }
                Ok(self.insert_member(key, member))
            }
            Err(err) => {
                warn!(op, ?key, error = %err, "member resolution failed");
                if trace_enabled {
                    resolve_trace::end(query_id, op, Outcome::Failed);
                }
                Err(err)
            }
        }
    }

    fn property_member(
        &self,
        handle: PropertyHandle,
        def: &PropertyDef,
    ) -> Result<(XamlMember, Outcome), ResolveError> {
        let property = PropertyAccessor::from_def(handle, def);

        if let Some(registration) = self
            .registry
            .find_registered(self.universe, def.declaring_type, &def.name)?
        {
            let assign_binding = find_attribute(&def.attributes, AttributeKind::AssignBinding).is_some();
            trace!(property = %def.name, assign_binding, "registered property");
            return Ok((
                XamlMember::RegisteredProperty {
                    property,
                    registration,
                    assign_binding,
                },
                Outcome::Registered,
            ));
        }

        if let Some(CustomAttribute::DependsOn { name }) = find_attribute(&def.attributes, AttributeKind::DependsOn) {
            trace!(property = %def.name, depends_on = %name, "depends-on alias");
            return Ok((
                XamlMember::DependsOnAlias {
                    property,
                    depends_on: name.clone(),
                },
                Outcome::DependsOn,
            ));
        }

        Ok((XamlMember::PlainProperty { property }, Outcome::Plain))
    }

    fn attached_member(
        &self,
        name: &str,
        declaring_type: TypeHandle,
        accessors: AccessorPair,
    ) -> Result<(XamlMember, Outcome), ResolveError> {
        // Registry order decides between duplicate names.
        let registration = self
            .registry
            .attached(self.universe, declaring_type)?
            .into_iter()
            .find(|registration| registration.name == name);

        match registration {
            Some(registration) => Ok((
                XamlMember::AttachedProperty {
                    name: name.to_string(),
                    declaring_type,
                    registration,
                    accessors,
                },
                Outcome::Attached,
            )),
            None => {
                trace!(name, declaring_type = declaring_type.0, "no attached registration");
                Ok((
                    XamlMember::Attachable {
                        name: name.to_string(),
                        declaring_type,
                        accessors,
                    },
                    Outcome::Fallback,
                ))
            }
        }
    }
}

#[cfg(test)]
#[path = "../tests/member_resolver_tests.rs"]
mod tests;
