//! Newtype key identifiers.
//!
//! The gateway assigns a 64-bit key to every entity it creates (deployments,
//! workflows, workflow instances, jobs, incidents, element instances). On the
//! wire every key is a bare `i64`; on the client side each kind of key is a
//! distinct newtype so a [`JobKey`] can never be passed where a
//! [`WorkflowInstanceKey`] is expected.
//!
//! Request messages keep the raw `i64` fields of the data contract. Command
//! setters accept the typed keys (or a raw `i64` through [`From`]) and unwrap
//! them when writing the field.

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Macro for i64-wrapped newtypes (gateway-assigned keys).
// Generates: struct (Copy), new(), as_i64(), From<i64>, Display.
// ---------------------------------------------------------------------------
macro_rules! key_id {
    (
        $(#[$attr:meta])*
        $name:ident
    ) => {
        $(#[$attr])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(i64);

        impl $name {
            /// Creates a new key from the raw value assigned by the gateway.
            pub fn new(value: i64) -> Self {
                Self(value)
            }

            /// Returns the underlying wire value.
            pub fn as_i64(self) -> i64 {
                self.0
            }
        }

        impl From<i64> for $name {
            fn from(value: i64) -> Self {
                Self(value)
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

// ---------------------------------------------------------------------------
// Deployment and workflow definitions
// ---------------------------------------------------------------------------

key_id! {
    /// Identifies one deployment: a batch of resources accepted together.
    DeploymentKey
}

key_id! {
    /// Identifies one deployed version of a workflow definition.
    ///
    /// Each redeployment of a changed BPMN resource yields a new key; the
    /// `bpmn_process_id` stays the same across versions.
    WorkflowKey
}

// ---------------------------------------------------------------------------
// Runtime entities
// ---------------------------------------------------------------------------

key_id! {
    /// Identifies a running (or completed) instance of a workflow.
    WorkflowInstanceKey
}

key_id! {
    /// Identifies a flow element instance within a workflow instance.
    ///
    /// The workflow instance itself is also an element instance, so a
    /// [`WorkflowInstanceKey`] value is a valid scope for variable updates.
    ElementInstanceKey
}

impl From<WorkflowInstanceKey> for ElementInstanceKey {
    fn from(key: WorkflowInstanceKey) -> Self {
        Self(key.as_i64())
    }
}

key_id! {
    /// Identifies a job created for a service task.
    JobKey
}

key_id! {
    /// Identifies an incident raised while executing a workflow instance.
    IncidentKey
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys_round_trip_their_wire_value() {
        assert_eq!(WorkflowKey::new(2_251_799_813_685_249).as_i64(), 2_251_799_813_685_249);
        assert_eq!(JobKey::from(-1).as_i64(), -1);
    }

    #[test]
    fn workflow_instance_key_is_an_element_instance_scope() {
        let instance = WorkflowInstanceKey::new(42);
        assert_eq!(ElementInstanceKey::from(instance), ElementInstanceKey::new(42));
    }

    #[test]
    fn keys_serialize_as_bare_integers() {
        let json = serde_json::to_string(&IncidentKey::new(7)).unwrap();
        assert_eq!(json, "7");
    }

    #[test]
    fn display_renders_the_raw_value() {
        assert_eq!(DeploymentKey::new(99).to_string(), "99");
    }
}
