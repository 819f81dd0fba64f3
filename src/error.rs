//! Error types for event payload resolution and configuration.
//!
//! Every error this crate produces indicates a programming or
//! version-compatibility defect, never a transient runtime condition. Errors
//! propagate to the caller unmodified: there is no local recovery and no retry,
//! so an incompatible host framework fails loudly on the very first relevant
//! event instead of silently dropping spans.

use thiserror::Error;

/// A defect in the integration between the host pipeline and this crate.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigurationError {
    /// None of the candidate aliases for a required field was present on the
    /// event payload. Indicates an incompatible host-framework version; fatal
    /// for the affected call site.
    #[error("expected property '{property}' not found on event payload (tried aliases {aliases:?})")]
    PropertyNotFound {
        /// Logical name of the field being resolved.
        property: &'static str,
        /// Aliases that were probed, in order.
        aliases: &'static [&'static str],
    },

    /// A field alias was present but its value was not of the expected type.
    #[error("property '{property}' on event payload is not of the expected type {expected}")]
    PropertyType {
        /// Logical name of the field being resolved.
        property: &'static str,
        /// The Rust type the value was expected to downcast to.
        expected: &'static str,
    },

    /// An empty value was supplied for a required configuration setting.
    /// Rejected synchronously at set-time, before any event is processed.
    #[error("configuration value '{setting}' must not be empty")]
    EmptyValue {
        /// Name of the rejected setting.
        setting: &'static str,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = ConfigurationError::PropertyNotFound {
            property: "ActionDescriptor",
            aliases: &["actionDescriptor", "ActionDescriptor"],
        };
        assert!(err.to_string().contains("expected property 'ActionDescriptor' not found"));
        assert!(err.to_string().contains("actionDescriptor"));

        let err = ConfigurationError::EmptyValue {
            setting: "action_component_name",
        };
        assert_eq!(
            err.to_string(),
            "configuration value 'action_component_name' must not be empty"
        );
    }
}
