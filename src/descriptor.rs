//! Domain objects extracted from diagnostic event payloads.

/// Describes the handler selected for the current request.
///
/// Every descriptor carries a display name. Actions routed to a controller
/// method additionally carry the controller type and method names, which the
/// default naming policy prefers over the display name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionDescriptor {
    display_name: String,
    controller: Option<ControllerAction>,
}

/// The controller-specific part of an [`ActionDescriptor`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ControllerAction {
    /// Full type name of the controller, e.g. `Foo.BarController`.
    pub controller_type: String,
    /// Name of the action method on the controller, e.g. `Baz`.
    pub action_name: String,
}

impl ActionDescriptor {
    /// Descriptor for a handler that is not a controller action.
    pub fn named(display_name: impl Into<String>) -> Self {
        Self {
            display_name: display_name.into(),
            controller: None,
        }
    }

    /// Descriptor for an action routed to a controller method.
    pub fn controller(
        display_name: impl Into<String>,
        controller_type: impl Into<String>,
        action_name: impl Into<String>,
    ) -> Self {
        Self {
            display_name: display_name.into(),
            controller: Some(ControllerAction {
                controller_type: controller_type.into(),
                action_name: action_name.into(),
            }),
        }
    }

    /// The human-readable display name of the handler.
    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    /// Controller details, if this descriptor is a controller action.
    pub fn controller_action(&self) -> Option<&ControllerAction> {
        self.controller.as_ref()
    }
}

/// An arbitrary action result.
///
/// The only capability the instrumentation requires of a result is exposing
/// its own runtime type name, e.g. `JsonResult`. Hosts store results on
/// `BeforeActionResult` payloads as `Box<dyn ResultObject>`.
pub trait ResultObject: Send + Sync {
    /// Short runtime type name of the result.
    fn type_name(&self) -> &str;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_named_descriptor_has_no_controller() {
        let descriptor = ActionDescriptor::named("Endpoint X");
        assert_eq!(descriptor.display_name(), "Endpoint X");
        assert!(descriptor.controller_action().is_none());
    }

    #[test]
    fn test_controller_descriptor() {
        let descriptor = ActionDescriptor::controller("Bar.Baz", "Foo.BarController", "Baz");
        let controller = descriptor.controller_action().expect("controller action");
        assert_eq!(controller.controller_type, "Foo.BarController");
        assert_eq!(controller.action_name, "Baz");
    }
}
