//! Request and response messages, one pair per gateway operation.
//!
//! Field names, types, and zero values follow the versioned gateway data
//! contract. Messages are plain values: `Default` gives the empty request,
//! fields are public, and equality is field-wise.
//!
//! Workflow variables travel as a JSON document rendered to a string. An
//! empty string means "no variables".

use serde::{Deserialize, Serialize};

use crate::types::{BrokerInfo, WorkflowMetadata, WorkflowRequestObject};

// ---------------------------------------------------------------------------
// Topology
// ---------------------------------------------------------------------------

/// Requests the current cluster topology.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopologyRequest {}

/// Brokers and partition layout known to the gateway.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopologyResponse {
    pub brokers: Vec<BrokerInfo>,
    pub cluster_size: i32,
    pub partitions_count: i32,
    pub replication_factor: i32,
}

// ---------------------------------------------------------------------------
// Workflow definitions
// ---------------------------------------------------------------------------

/// Lists deployed workflows, optionally filtered by process id.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListWorkflowsRequest {
    /// Only list versions of this process; empty lists every workflow.
    pub bpmn_process_id: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListWorkflowsResponse {
    pub workflows: Vec<WorkflowMetadata>,
}

/// Fetches one deployed workflow including its BPMN XML.
///
/// The gateway resolves by `workflow_key` when it is non-zero, otherwise by
/// `bpmn_process_id` and `version`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GetWorkflowRequest {
    pub workflow_key: i64,
    pub version: i32,
    pub bpmn_process_id: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GetWorkflowResponse {
    pub workflow_key: i64,
    pub version: i32,
    pub bpmn_process_id: String,
    pub resource_name: String,
    pub bpmn_xml: String,
}

/// Deploys one or more workflow resources in a single deployment.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeployWorkflowRequest {
    pub workflows: Vec<WorkflowRequestObject>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeployWorkflowResponse {
    /// Deployment key.
    pub key: i64,
    pub workflows: Vec<WorkflowMetadata>,
}

// ---------------------------------------------------------------------------
// Workflow instances
// ---------------------------------------------------------------------------

/// Starts a new workflow instance.
///
/// Either `workflow_key` or `bpmn_process_id` (with `version`) selects the
/// workflow to instantiate.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateWorkflowInstanceRequest {
    pub workflow_key: i64,
    pub bpmn_process_id: String,
    pub version: i32,
    pub variables: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateWorkflowInstanceResponse {
    pub workflow_key: i64,
    pub bpmn_process_id: String,
    pub version: i32,
    pub workflow_instance_key: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CancelWorkflowInstanceRequest {
    pub workflow_instance_key: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CancelWorkflowInstanceResponse {}

/// Merges variables into the scope of an element instance.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SetVariablesRequest {
    pub element_instance_key: i64,
    pub variables: String,
    /// When `true`, variables are written to this scope only and do not
    /// propagate to parent scopes.
    pub local: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SetVariablesResponse {}

// ---------------------------------------------------------------------------
// Messages
// ---------------------------------------------------------------------------

/// Publishes a message for correlation with waiting workflow instances.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublishMessageRequest {
    pub name: String,
    pub correlation_key: String,
    /// Buffer lifetime of the message in milliseconds.
    pub time_to_live: i64,
    /// Optional uniqueness id; duplicates within the TTL are rejected.
    pub message_id: String,
    pub variables: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublishMessageResponse {}

// ---------------------------------------------------------------------------
// Jobs
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompleteJobRequest {
    pub job_key: i64,
    pub variables: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompleteJobResponse {}

/// Marks a job as failed; with zero remaining retries an incident is raised.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FailJobRequest {
    pub job_key: i64,
    pub retries: i32,
    pub error_message: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FailJobResponse {}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateJobRetriesRequest {
    pub job_key: i64,
    pub retries: i32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateJobRetriesResponse {}

// ---------------------------------------------------------------------------
// Incidents
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolveIncidentRequest {
    pub incident_key: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolveIncidentResponse {}
