//! Explicit per-request active-span stack.
//!
//! Instead of relying on an ambient thread-local "current span", each in-flight
//! request owns one [`ScopeStack`] and threads it through event processing.
//! This keeps span nesting auditable and testable without simulating a full
//! host pipeline, and makes the ownership rule visible in the types: the stack
//! is `&mut` everywhere it changes, so one request's spans cannot interleave
//! with another's.
//!
//! The stack stores [`Context`] values rather than spans directly: pushing
//! wraps the new span in a child context of the current active context, so the
//! parent/child relationship between spans falls out of stack order. Ending
//! always ends "whatever is currently active" and reveals the previously
//! active span, or the base context when the stack empties.

use opentelemetry::trace::{Span, SpanRef, TraceContextExt};
use opentelemetry::Context;

/// Stack of active spans for one logical request context.
pub struct ScopeStack {
    /// Context active when the stack is empty. Spans pushed at depth zero
    /// become children of whatever span this context carries, if any.
    base: Context,
    stack: Vec<Context>,
}

impl Default for ScopeStack {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for ScopeStack {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScopeStack").field("depth", &self.depth()).finish()
    }
}

impl ScopeStack {
    /// An empty stack whose root spans have no parent.
    pub fn new() -> Self {
        Self {
            base: Context::new(),
            stack: Vec::new(),
        }
    }

    /// An empty stack whose root spans are parented under the given context,
    /// e.g. a server span the host has already started for this request.
    pub fn with_parent(parent: Context) -> Self {
        Self {
            base: parent,
            stack: Vec::new(),
        }
    }

    /// The context of the currently active span, or the base context.
    pub fn active_context(&self) -> &Context {
        self.stack.last().unwrap_or(&self.base)
    }

    /// The currently active span, if any span is active.
    pub fn active(&self) -> Option<SpanRef<'_>> {
        self.stack.last().map(|cx| cx.span())
    }

    /// Push a started span, making it the active span.
    ///
    /// Returns the context now considered active, for callers that need to
    /// hand the span to enrichment code.
    pub fn push<S>(&mut self, span: S) -> Context
    where
        S: Span + Send + Sync + 'static,
    {
        let cx = self.active_context().with_span(span);
        self.stack.push(cx.clone());
        cx
    }

    /// End the currently active span and reveal the previous one.
    ///
    /// Returns `false` without any state change when no span is active.
    pub fn end_active(&mut self) -> bool {
        match self.stack.pop() {
            Some(cx) => {
                cx.span().end();
                true
            }
            None => false,
        }
    }

    /// Number of currently active spans.
    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    /// Whether no span is currently active.
    pub fn is_empty(&self) -> bool {
        self.stack.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use opentelemetry::trace::{Tracer, TracerProvider};
    use opentelemetry_sdk::trace::{InMemorySpanExporter, SdkTracerProvider, Tracer as SdkTracer};

    fn test_tracer() -> (SdkTracer, InMemorySpanExporter) {
        let exporter = InMemorySpanExporter::default();
        let provider = SdkTracerProvider::builder()
            .with_simple_exporter(exporter.clone())
            .build();
        (provider.tracer("scope-test"), exporter)
    }

    fn start_child(tracer: &SdkTracer, scope: &ScopeStack, name: &'static str) -> opentelemetry_sdk::trace::Span {
        let builder = tracer.span_builder(name);
        tracer.build_with_context(builder, scope.active_context())
    }

    #[test]
    fn test_push_and_end_restores_depth() {
        let (tracer, exporter) = test_tracer();
        let mut scope = ScopeStack::new();
        assert!(scope.is_empty());

        scope.push(tracer.start("outer"));
        scope.push(tracer.start("inner"));
        assert_eq!(scope.depth(), 2);

        assert!(scope.end_active());
        assert_eq!(scope.depth(), 1);
        assert!(scope.end_active());
        assert!(scope.is_empty());

        // LIFO: inner finishes before outer.
        let spans = exporter.get_finished_spans().unwrap();
        assert_eq!(spans.len(), 2);
        assert_eq!(spans[0].name, "inner");
        assert_eq!(spans[1].name, "outer");
    }

    #[test]
    fn test_end_active_on_empty_stack_is_noop() {
        let mut scope = ScopeStack::new();
        assert!(!scope.end_active());
        assert!(scope.is_empty());
    }

    #[test]
    fn test_pushed_span_is_child_of_active() {
        let (tracer, _exporter) = test_tracer();
        let mut scope = ScopeStack::new();

        let outer_cx = scope.push(tracer.start("outer"));
        let outer_id = outer_cx.span().span_context().span_id();

        let inner_span = start_child(&tracer, &scope, "inner");
        scope.push(inner_span);
        let inner = scope.active().expect("inner span is active");
        assert_ne!(inner.span_context().span_id(), outer_id);
        assert_eq!(
            inner.span_context().trace_id(),
            outer_cx.span().span_context().trace_id(),
            "child must share its parent's trace"
        );
    }

    #[test]
    fn test_with_parent_base_context() {
        let (tracer, _exporter) = test_tracer();
        let parent_cx = Context::new().with_span(tracer.start("server"));
        let trace_id = parent_cx.span().span_context().trace_id();

        let mut scope = ScopeStack::with_parent(parent_cx);
        let action_span = start_child(&tracer, &scope, "action");
        scope.push(action_span);

        let active = scope.active().expect("action span is active");
        assert_eq!(active.span_context().trace_id(), trace_id);

        // Ending the action span must not end the host's server span.
        assert!(scope.end_active());
        assert!(!scope.end_active());
    }
}
