//! The event-to-span state machine.
//!
//! [`MvcEventProcessor`] maps each diagnostic event emitted by the host's MVC
//! pipeline to exactly one action on a request's [`ScopeStack`]:
//!
//! | Event                    | Action                                          |
//! |--------------------------|-------------------------------------------------|
//! | `Mvc.BeforeAction`       | start an action span, push it as active         |
//! | `Mvc.AfterAction`        | end the currently active span                   |
//! | `Mvc.BeforeActionResult` | start a result span, push it as active          |
//! | `Mvc.AfterActionResult`  | end the currently active span                   |
//! | anything else            | none; reported as unhandled                     |
//!
//! The processor never stores a handle to the span it must close. It always
//! ends "whatever is currently active", which keeps it stateless with respect
//! to span identity and lets it compose with other instrumentation pushing and
//! popping the same stack, as long as every participant respects strict LIFO
//! discipline. An "after" event arriving with no active span is tolerated as a
//! no-op: some hosts omit pairing data and pipelines may short-circuit.
//!
//! One processor instance serves all in-flight requests concurrently; the only
//! shared mutable state is the pair of write-once field-resolution caches,
//! which are safe under concurrent first use.
//!
//! # Example
//!
//! ```no_run
//! use mvc_otel_events::{constants::event_names, MvcEventProcessor, MvcOptions, Payload, ScopeStack};
//! use mvc_otel_events::ActionDescriptor;
//!
//! let tracer = opentelemetry::global::tracer("mvc");
//! let processor = MvcEventProcessor::new(tracer, MvcOptions::new());
//!
//! // One stack per in-flight request, threaded through event handling.
//! let mut scope = ScopeStack::new();
//!
//! let payload = Payload::new().with_field(
//!     "actionDescriptor",
//!     ActionDescriptor::controller("Bar.Baz", "Foo.BarController", "Baz"),
//! );
//! processor.process_event(&mut scope, event_names::BEFORE_ACTION, &payload)?;
//! processor.process_event(&mut scope, event_names::AFTER_ACTION, &Payload::new())?;
//! # Ok::<(), mvc_otel_events::ConfigurationError>(())
//! ```

use crate::constants::{event_names, fields};
use crate::descriptor::{ActionDescriptor, ResultObject};
use crate::error::ConfigurationError;
use crate::fields::FieldResolver;
use crate::options::MvcOptions;
use crate::payload::EventPayload;
use crate::policy;
use crate::scope::ScopeStack;
use opentelemetry::trace::{TraceContextExt, Tracer};
use tracing::debug;

/// Converts MVC diagnostic events into nested OpenTelemetry spans.
pub struct MvcEventProcessor<T: Tracer> {
    tracer: T,
    options: MvcOptions,
    /// Call site resolving the action descriptor on `BeforeAction` payloads.
    action_descriptor: FieldResolver,
    /// Call site resolving the result object on `BeforeActionResult` payloads.
    result: FieldResolver,
}

impl<T> MvcEventProcessor<T>
where
    T: Tracer,
    T::Span: Send + Sync + 'static,
{
    /// Create a processor that starts spans with the given tracer.
    pub fn new(tracer: T, options: MvcOptions) -> Self {
        Self {
            tracer,
            options,
            action_descriptor: FieldResolver::new("ActionDescriptor", fields::ACTION_DESCRIPTOR),
            result: FieldResolver::new("Result", fields::RESULT),
        }
    }

    /// The options this processor was built with.
    pub fn options(&self) -> &MvcOptions {
        &self.options
    }

    /// Process one diagnostic event against the given request's scope stack.
    ///
    /// Returns `Ok(true)` when the event was recognized (even when it resulted
    /// in a no-op) and `Ok(false)` when it was not, so the caller can route
    /// the event to another processor. Resolution failures indicate an
    /// incompatible host-framework version and propagate unmodified.
    pub fn process_event(
        &self,
        scope: &mut ScopeStack,
        event_name: &str,
        payload: &dyn EventPayload,
    ) -> Result<bool, ConfigurationError> {
        match event_name {
            event_names::BEFORE_ACTION => {
                // The action has been selected and routed, but no filters have
                // run and model binding has not occurred.
                let descriptor = self
                    .action_descriptor
                    .resolve_as::<ActionDescriptor>(payload)?;

                let operation_name = self.options.action_operation_name(descriptor);
                let attributes =
                    policy::action_tags(self.options.action_component_name(), descriptor);

                let builder = self
                    .tracer
                    .span_builder(operation_name)
                    .with_attributes(attributes);
                let span = self
                    .tracer
                    .build_with_context(builder, scope.active_context());

                let cx = scope.push(span);
                if let Some(on_action) = self.options.on_action() {
                    on_action(&cx.span(), descriptor);
                }
                Ok(true)
            }

            event_names::BEFORE_ACTION_RESULT => {
                // The action has executed; the result has not yet run.
                let result = self.result.resolve_as::<Box<dyn ResultObject>>(payload)?;
                let result = result.as_ref();

                let operation_name = self.options.result_operation_name(result);
                let attributes = policy::result_tags(self.options.result_component_name(), result);

                let builder = self
                    .tracer
                    .span_builder(operation_name)
                    .with_attributes(attributes);
                let span = self
                    .tracer
                    .build_with_context(builder, scope.active_context());

                let cx = scope.push(span);
                if let Some(on_result) = self.options.on_result() {
                    on_result(&cx.span(), result);
                }
                Ok(true)
            }

            event_names::AFTER_ACTION | event_names::AFTER_ACTION_RESULT => {
                // Payload is not inspected; end whatever is currently active.
                if !scope.end_active() {
                    debug!(event = event_name, "no active span to end, ignoring");
                }
                Ok(true)
            }

            _ => Ok(false),
        }
    }
}
