//! OpenTelemetry span instrumentation for MVC-style diagnostic events.
//!
//! This crate listens to lifecycle notifications emitted by a web-request
//! pipeline (action selection and execution, result selection and execution)
//! and converts them into a nested tree of OpenTelemetry spans. It owns the
//! event-to-span mapping only: span export, sampling, and serialization stay
//! with whatever tracer provider the host configures.
//!
//! # Features
//!
//! - **Loosely-typed payloads**: event payloads are read through a structural
//!   accessor, with per-call-site alias memoization, so casing differences
//!   across host-framework versions are absorbed without a static contract
//! - **Explicit span nesting**: each request threads its own [`ScopeStack`]
//!   through event handling, keeping active-span bookkeeping auditable instead
//!   of hidden in a thread-local
//! - **Pluggable naming**: operation names and `component` tags are
//!   overridable, and enrichment callbacks can decorate each started span
//! - **Fail-loud integration errors**: a missing payload field surfaces as a
//!   [`ConfigurationError`] on the first relevant event rather than as
//!   silently missing spans
//!
//! # Architecture
//!
//! The crate is organized into several modules, each handling one aspect of
//! the mapping:
//!
//! - `processor`: the event dispatcher and span lifecycle state machine
//! - `scope`: the per-request active-span stack
//! - `fields`: memoizing field resolution from opaque payloads
//! - `payload`: the structural payload capability and a map-backed snapshot
//! - [`policy`]: default span naming and tagging
//! - `options`: the configuration surface
//! - [`constants`]: event names, field aliases, and tag keys
//!
//! # Quick Start
//!
//! ```no_run
//! use mvc_otel_events::{
//!     constants::event_names, ActionDescriptor, MvcEventProcessor, MvcOptions, Payload,
//!     ScopeStack,
//! };
//!
//! let processor = MvcEventProcessor::new(opentelemetry::global::tracer("mvc"), MvcOptions::new());
//!
//! // The host creates one stack per in-flight request and forwards each
//! // diagnostic event together with its payload snapshot.
//! let mut scope = ScopeStack::new();
//!
//! let payload = Payload::new().with_field(
//!     "actionDescriptor",
//!     ActionDescriptor::controller("Bar.Baz", "Foo.BarController", "Baz"),
//! );
//! let handled = processor.process_event(&mut scope, event_names::BEFORE_ACTION, &payload)?;
//! assert!(handled);
//!
//! // ... the action runs ...
//!
//! processor.process_event(&mut scope, event_names::AFTER_ACTION, &Payload::new())?;
//! # Ok::<(), mvc_otel_events::ConfigurationError>(())
//! ```
//!
//! # Event Contract
//!
//! Four event names are recognized, matched exactly on the full qualified
//! name (see [`constants::event_names`]). `BeforeAction` payloads must expose
//! an [`ActionDescriptor`] under the `actionDescriptor` / `ActionDescriptor`
//! aliases; `BeforeActionResult` payloads must expose a
//! `Box<dyn ResultObject>` under `result` / `Result`. The "after" payloads are
//! never inspected. Any other event name leaves the stack untouched and
//! returns `Ok(false)` so the host can route it elsewhere.
//!
//! # Error Handling
//!
//! All errors are configuration-class defects and propagate unmodified: an
//! absent field alias means an incompatible host-framework version, and an
//! empty component name is rejected when the options are built. An "after"
//! event with no active span is not an error; it is ignored. Panics raised by
//! enrichment callbacks are never suppressed.

pub mod constants;
mod descriptor;
mod error;
mod fields;
mod options;
mod payload;
pub mod policy;
mod processor;
mod scope;

pub use descriptor::{ActionDescriptor, ControllerAction, ResultObject};
pub use error::ConfigurationError;
pub use fields::FieldResolver;
pub use options::{
    ActionOperationNameResolver, MvcOptions, OnAction, OnResult, ResultOperationNameResolver,
};
pub use payload::{EventPayload, Payload};
pub use processor::MvcEventProcessor;
pub use scope::ScopeStack;
