//! Memoizing field resolution for event payloads.
//!
//! Each [`FieldResolver`] represents one call site in the processor: a fixed
//! point that extracts one specific field from every payload of a given event
//! kind. Because the payload shape is fixed for the lifetime of the process
//! (it only varies across host-framework versions, not across requests), the
//! resolver probes the candidate aliases once, memoizes the alias that was
//! present, and reads it directly on every subsequent call.
//!
//! The memoized name lives in a [`OnceCell`], so concurrent first calls may
//! probe in parallel; this is safe because probing the same payload shape is
//! idempotent and the cell admits exactly one winner. A failed probe memoizes
//! nothing: the call site is left untouched and a later call against a
//! compatible payload will probe again.

use crate::error::ConfigurationError;
use crate::payload::EventPayload;
use once_cell::sync::OnceCell;
use std::any::Any;

/// A single field-extraction call site with a process-lifetime alias cache.
#[derive(Debug)]
pub struct FieldResolver {
    /// Logical name of the field, used in error messages.
    property: &'static str,
    /// Candidate aliases, probed in order on first use.
    aliases: &'static [&'static str],
    /// The alias found present on the first successful probe.
    resolved: OnceCell<&'static str>,
}

impl FieldResolver {
    /// Create a resolver for the given field and its candidate aliases.
    pub const fn new(property: &'static str, aliases: &'static [&'static str]) -> Self {
        Self {
            property,
            aliases,
            resolved: OnceCell::new(),
        }
    }

    /// Resolve the field from the payload, probing aliases on first use.
    ///
    /// Fails with [`ConfigurationError::PropertyNotFound`] if no alias is
    /// present: either the first probe found none (incompatible host-framework
    /// version) or the memoized alias is missing from this payload (payload
    /// shape changed mid-process, which the contract rules out).
    pub fn resolve<'p>(
        &self,
        payload: &'p dyn EventPayload,
    ) -> Result<&'p dyn Any, ConfigurationError> {
        let name = *self.resolved.get_or_try_init(|| {
            self.aliases
                .iter()
                .copied()
                .find(|alias| payload.has_field(alias))
                .ok_or(ConfigurationError::PropertyNotFound {
                    property: self.property,
                    aliases: self.aliases,
                })
        })?;

        payload
            .field(name)
            .ok_or(ConfigurationError::PropertyNotFound {
                property: self.property,
                aliases: self.aliases,
            })
    }

    /// Resolve the field and downcast it to the expected type.
    pub fn resolve_as<'p, T: 'static>(
        &self,
        payload: &'p dyn EventPayload,
    ) -> Result<&'p T, ConfigurationError> {
        self.resolve(payload)?
            .downcast_ref::<T>()
            .ok_or(ConfigurationError::PropertyType {
                property: self.property,
                expected: std::any::type_name::<T>(),
            })
    }

    /// The alias memoized for this call site, if resolution has succeeded.
    pub fn resolved_alias(&self) -> Option<&'static str> {
        self.resolved.get().copied()
    }
}
