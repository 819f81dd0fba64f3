//! Configuration surface for the event processor.
//!
//! [`MvcOptions`] holds everything a host may override: the `component` tag
//! values, the operation-name resolvers, and the optional enrichment callbacks
//! invoked after a span is started. Defaults come from
//! [`constants::defaults`](crate::constants::defaults) and
//! [`policy`](crate::policy).
//!
//! Validation happens at configuration time, not at event time: an empty
//! component name is rejected by the setter, and the resolver setters take the
//! replacement function by value, so an absent replacement cannot be expressed
//! at all.
//!
//! # Example
//!
//! ```
//! use mvc_otel_events::MvcOptions;
//!
//! let options = MvcOptions::new()
//!     .with_action_component_name("api.action")?
//!     .with_action_operation_name(|descriptor| {
//!         format!("HTTP {}", descriptor.display_name())
//!     })
//!     .with_on_action(|span, _descriptor| {
//!         span.set_attribute(opentelemetry::KeyValue::new("custom", "value"));
//!     });
//! # Ok::<(), mvc_otel_events::ConfigurationError>(())
//! ```

use crate::constants::defaults;
use crate::descriptor::{ActionDescriptor, ResultObject};
use crate::error::ConfigurationError;
use crate::policy;
use opentelemetry::trace::SpanRef;
use std::fmt;
use std::sync::Arc;

/// Computes the operation name for an action span.
pub type ActionOperationNameResolver = Arc<dyn Fn(&ActionDescriptor) -> String + Send + Sync>;

/// Computes the operation name for a result span.
pub type ResultOperationNameResolver = Arc<dyn Fn(&dyn ResultObject) -> String + Send + Sync>;

/// Enrichment callback invoked with each freshly started action span.
pub type OnAction = Arc<dyn Fn(&SpanRef<'_>, &ActionDescriptor) + Send + Sync>;

/// Enrichment callback invoked with each freshly started result span.
pub type OnResult = Arc<dyn Fn(&SpanRef<'_>, &dyn ResultObject) + Send + Sync>;

/// Options controlling span naming, tagging, and enrichment.
#[derive(Clone)]
pub struct MvcOptions {
    action_component_name: String,
    result_component_name: String,
    action_operation_name: ActionOperationNameResolver,
    result_operation_name: ResultOperationNameResolver,
    on_action: Option<OnAction>,
    on_result: Option<OnResult>,
}

impl Default for MvcOptions {
    fn default() -> Self {
        Self {
            action_component_name: defaults::ACTION_COMPONENT.to_string(),
            result_component_name: defaults::RESULT_COMPONENT.to_string(),
            action_operation_name: Arc::new(policy::action_operation_name),
            result_operation_name: Arc::new(policy::result_operation_name),
            on_action: None,
            on_result: None,
        }
    }
}

impl MvcOptions {
    /// Options with default naming, default components, and no callbacks.
    pub fn new() -> Self {
        Self::default()
    }

    /// Override the `component` tag of action spans.
    ///
    /// Rejects an empty value synchronously, before any event is processed.
    pub fn with_action_component_name(
        mut self,
        name: impl Into<String>,
    ) -> Result<Self, ConfigurationError> {
        let name = name.into();
        if name.is_empty() {
            return Err(ConfigurationError::EmptyValue {
                setting: "action_component_name",
            });
        }
        self.action_component_name = name;
        Ok(self)
    }

    /// Override the `component` tag of result spans.
    ///
    /// Rejects an empty value synchronously, before any event is processed.
    pub fn with_result_component_name(
        mut self,
        name: impl Into<String>,
    ) -> Result<Self, ConfigurationError> {
        let name = name.into();
        if name.is_empty() {
            return Err(ConfigurationError::EmptyValue {
                setting: "result_component_name",
            });
        }
        self.result_component_name = name;
        Ok(self)
    }

    /// Replace the operation-name resolver for action spans.
    pub fn with_action_operation_name(
        mut self,
        resolver: impl Fn(&ActionDescriptor) -> String + Send + Sync + 'static,
    ) -> Self {
        self.action_operation_name = Arc::new(resolver);
        self
    }

    /// Replace the operation-name resolver for result spans.
    pub fn with_result_operation_name(
        mut self,
        resolver: impl Fn(&dyn ResultObject) -> String + Send + Sync + 'static,
    ) -> Self {
        self.result_operation_name = Arc::new(resolver);
        self
    }

    /// Set a callback that can add further tags to each started action span.
    ///
    /// A panicking callback is an integration bug; the processor does not
    /// suppress it.
    pub fn with_on_action(
        mut self,
        callback: impl Fn(&SpanRef<'_>, &ActionDescriptor) + Send + Sync + 'static,
    ) -> Self {
        self.on_action = Some(Arc::new(callback));
        self
    }

    /// Set a callback that can add further tags to each started result span.
    pub fn with_on_result(
        mut self,
        callback: impl Fn(&SpanRef<'_>, &dyn ResultObject) + Send + Sync + 'static,
    ) -> Self {
        self.on_result = Some(Arc::new(callback));
        self
    }

    /// The `component` tag value for action spans.
    pub fn action_component_name(&self) -> &str {
        &self.action_component_name
    }

    /// The `component` tag value for result spans.
    pub fn result_component_name(&self) -> &str {
        &self.result_component_name
    }

    /// Compute the operation name for an action span.
    pub fn action_operation_name(&self, descriptor: &ActionDescriptor) -> String {
        (self.action_operation_name)(descriptor)
    }

    /// Compute the operation name for a result span.
    pub fn result_operation_name(&self, result: &dyn ResultObject) -> String {
        (self.result_operation_name)(result)
    }

    pub(crate) fn on_action(&self) -> Option<&OnAction> {
        self.on_action.as_ref()
    }

    pub(crate) fn on_result(&self) -> Option<&OnResult> {
        self.on_result.as_ref()
    }
}

impl fmt::Debug for MvcOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MvcOptions")
            .field("action_component_name", &self.action_component_name)
            .field("result_component_name", &self.result_component_name)
            .field("on_action", &self.on_action.is_some())
            .field("on_result", &self.on_result.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct JsonResult;

    impl ResultObject for JsonResult {
        fn type_name(&self) -> &str {
            "JsonResult"
        }
    }

    #[test]
    fn test_defaults() {
        let options = MvcOptions::new();
        assert_eq!(options.action_component_name(), "mvc.action");
        assert_eq!(options.result_component_name(), "mvc.result");
        assert_eq!(
            options.action_operation_name(&ActionDescriptor::named("Endpoint X")),
            "Action Endpoint X"
        );
        assert_eq!(options.result_operation_name(&JsonResult), "Result JsonResult");
    }

    #[test]
    fn test_empty_component_name_rejected_at_set_time() {
        let err = MvcOptions::new().with_action_component_name("").unwrap_err();
        assert_eq!(
            err,
            ConfigurationError::EmptyValue {
                setting: "action_component_name"
            }
        );

        let err = MvcOptions::new().with_result_component_name("").unwrap_err();
        assert_eq!(
            err,
            ConfigurationError::EmptyValue {
                setting: "result_component_name"
            }
        );
    }

    #[test]
    fn test_component_name_override() {
        let options = MvcOptions::new()
            .with_action_component_name("api.action")
            .unwrap()
            .with_result_component_name("api.result")
            .unwrap();
        assert_eq!(options.action_component_name(), "api.action");
        assert_eq!(options.result_component_name(), "api.result");
    }

    #[test]
    fn test_operation_name_override() {
        let options = MvcOptions::new()
            .with_action_operation_name(|d| format!("custom {}", d.display_name()))
            .with_result_operation_name(|r| format!("custom {}", r.type_name()));

        assert_eq!(
            options.action_operation_name(&ActionDescriptor::named("Endpoint X")),
            "custom Endpoint X"
        );
        assert_eq!(options.result_operation_name(&JsonResult), "custom JsonResult");
    }
}
