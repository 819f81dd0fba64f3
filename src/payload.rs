//! Loosely-typed access to diagnostic event payloads.
//!
//! The host pipeline attaches an opaque, immutable snapshot of state to every
//! diagnostic event. Its shape is not part of any static contract and varies
//! across host-framework versions, so the processor reads it through the
//! [`EventPayload`] capability rather than a concrete type: a read-only,
//! structural field lookup whose values are surfaced as `&dyn Any` and
//! downcast at the call site that knows what to expect.
//!
//! [`Payload`] is the map-backed implementation used by hosts that assemble
//! snapshots dynamically, and by tests. Hosts with their own payload types can
//! implement [`EventPayload`] directly instead of copying fields into a map.
//!
//! # Example
//!
//! ```
//! use mvc_otel_events::{EventPayload, Payload};
//!
//! let payload = Payload::new().with_field("statusCode", 200_i64);
//!
//! assert!(payload.has_field("statusCode"));
//! let status = payload.field("statusCode").and_then(|v| v.downcast_ref::<i64>());
//! assert_eq!(status, Some(&200));
//! ```

use std::any::Any;
use std::collections::HashMap;

/// Structural, read-only access to an event payload.
///
/// Field names are matched exactly (case-sensitive); casing differences across
/// host versions are handled by the field resolver probing multiple aliases,
/// not by the payload.
pub trait EventPayload {
    /// Look up a field by exact name.
    fn field(&self, name: &str) -> Option<&dyn Any>;

    /// Whether a field with the given exact name is present.
    fn has_field(&self, name: &str) -> bool {
        self.field(name).is_some()
    }
}

/// A map-backed [`EventPayload`] snapshot.
#[derive(Default)]
pub struct Payload {
    fields: HashMap<String, Box<dyn Any + Send + Sync>>,
}

impl Payload {
    /// Create an empty payload.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a field, consuming and returning the payload for chaining.
    pub fn with_field(mut self, name: impl Into<String>, value: impl Any + Send + Sync) -> Self {
        self.fields.insert(name.into(), Box::new(value));
        self
    }
}

impl EventPayload for Payload {
    fn field(&self, name: &str) -> Option<&dyn Any> {
        self.fields.get(name).map(|value| value.as_ref() as &dyn Any)
    }
}

impl std::fmt::Debug for Payload {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Payload")
            .field("fields", &self.fields.keys().collect::<Vec<_>>())
            .finish()
    }
}
