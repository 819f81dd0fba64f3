//! Default span naming and tagging policy.
//!
//! Pure functions that turn a resolved domain object into an operation name
//! and an initial tag set. The naming functions are the defaults wired into
//! [`MvcOptions`](crate::MvcOptions) and can be replaced there; the tag sets
//! are fixed.

use crate::constants::tags;
use crate::descriptor::{ActionDescriptor, ResultObject};
use opentelemetry::KeyValue;

/// Default operation name for an action span.
///
/// Controller actions are named `Action {ControllerTypeFullName}/{ActionName}`;
/// everything else falls back to `Action {DisplayName}`.
pub fn action_operation_name(descriptor: &ActionDescriptor) -> String {
    match descriptor.controller_action() {
        Some(controller) => format!(
            "Action {}/{}",
            controller.controller_type, controller.action_name
        ),
        None => format!("Action {}", descriptor.display_name()),
    }
}

/// Default operation name for a result span: `Result {RuntimeTypeName}`.
pub fn result_operation_name(result: &dyn ResultObject) -> String {
    format!("Result {}", result.type_name())
}

/// Initial tags for an action span.
///
/// Always carries the `component` tag; `controller` and `action` are attached
/// only for controller actions and are absent otherwise.
pub fn action_tags(component: &str, descriptor: &ActionDescriptor) -> Vec<KeyValue> {
    let mut attributes = vec![KeyValue::new(tags::COMPONENT, component.to_string())];
    if let Some(controller) = descriptor.controller_action() {
        attributes.push(KeyValue::new(
            tags::CONTROLLER,
            controller.controller_type.clone(),
        ));
        attributes.push(KeyValue::new(tags::ACTION, controller.action_name.clone()));
    }
    attributes
}

/// Initial tags for a result span: `component` plus `result.type`.
pub fn result_tags(component: &str, result: &dyn ResultObject) -> Vec<KeyValue> {
    vec![
        KeyValue::new(tags::COMPONENT, component.to_string()),
        KeyValue::new(tags::RESULT_TYPE, result.type_name().to_string()),
    ]
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
    fn test_controller_action_operation_name() {
        let descriptor = ActionDescriptor::controller("ignored", "Foo.BarController", "Baz");
        assert_eq!(
            action_operation_name(&descriptor),
            "Action Foo.BarController/Baz"
        );
    }

    #[test]
    fn test_display_name_fallback() {
        let descriptor = ActionDescriptor::named("Endpoint X");
        assert_eq!(action_operation_name(&descriptor), "Action Endpoint X");
    }

    #[test]
    fn test_result_operation_name() {
        assert_eq!(result_operation_name(&JsonResult), "Result JsonResult");
    }

    #[test]
    fn test_action_tags_for_controller() {
        let descriptor = ActionDescriptor::controller("ignored", "Foo.BarController", "Baz");
        let attributes = action_tags("mvc.action", &descriptor);

        assert_eq!(attributes.len(), 3);
        assert_eq!(attributes[0], KeyValue::new("component", "mvc.action"));
        assert_eq!(attributes[1], KeyValue::new("controller", "Foo.BarController"));
        assert_eq!(attributes[2], KeyValue::new("action", "Baz"));
    }

    #[test]
    fn test_action_tags_without_controller_are_absent() {
        let descriptor = ActionDescriptor::named("Endpoint X");
        let attributes = action_tags("mvc.action", &descriptor);

        assert_eq!(attributes, vec![KeyValue::new("component", "mvc.action")]);
    }

    #[test]
    fn test_result_tags() {
        let attributes = result_tags("mvc.result", &JsonResult);
        assert_eq!(
            attributes,
            vec![
                KeyValue::new("component", "mvc.result"),
                KeyValue::new("result.type", "JsonResult"),
            ]
        );
    }
}
