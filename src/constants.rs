//! Constants for the mvc-otel-events package.
//!
//! This file centralizes all constants to ensure consistency across the codebase
//! and provide a single source of truth for event names, payload field aliases,
//! and span tag keys.

/// Fully qualified diagnostic event names recognized by the processor.
///
/// Matching is exact and case-sensitive on the full name, including the host
/// prefix. Any other event name is reported as unhandled.
pub mod event_names {
    /// Namespace prefix applied by the host pipeline to all MVC events.
    pub const PREFIX: &str = "Mvc.";

    /// Start of the action pipeline: the action has been selected but not run.
    pub const BEFORE_ACTION: &str = "Mvc.BeforeAction";

    /// End of the action pipeline.
    pub const AFTER_ACTION: &str = "Mvc.AfterAction";

    /// Start of the result pipeline: the action has executed, the result has not.
    pub const BEFORE_ACTION_RESULT: &str = "Mvc.BeforeActionResult";

    /// End of the result pipeline.
    pub const AFTER_ACTION_RESULT: &str = "Mvc.AfterActionResult";
}

/// Payload field aliases, probed in declaration order.
///
/// Host-framework versions differ only in the casing of payload fields, so each
/// field carries one lower-camel-case and one upper-camel-case alias.
pub mod fields {
    /// Aliases for the action descriptor on `BeforeAction` payloads.
    pub const ACTION_DESCRIPTOR: &[&str] = &["actionDescriptor", "ActionDescriptor"];

    /// Aliases for the result object on `BeforeActionResult` payloads.
    pub const RESULT: &[&str] = &["result", "Result"];
}

/// Span tag keys used on action and result spans.
pub mod tags {
    /// Tag identifying the instrumentation component that produced the span.
    pub const COMPONENT: &str = "component";

    /// Full type name of the controller handling the action, if any.
    pub const CONTROLLER: &str = "controller";

    /// Name of the action method on the controller, if any.
    pub const ACTION: &str = "action";

    /// Runtime type name of the action result.
    pub const RESULT_TYPE: &str = "result.type";
}

/// Default values for configuration parameters.
pub mod defaults {
    /// Default `component` tag for action spans.
    pub const ACTION_COMPONENT: &str = "mvc.action";

    /// Default `component` tag for result spans.
    pub const RESULT_COMPONENT: &str = "mvc.result";
}
