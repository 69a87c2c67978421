//! Shared value types embedded in several gateway messages.
//!
//! These mirror sub-messages and enumerations of the gateway data contract.
//! Like the top-level messages in [`crate::messages`], every type here is
//! `Default`-constructible with each field at its zero value.

use serde::{Deserialize, Serialize};

/// Version selector meaning "the most recently deployed version".
///
/// Sent in the `version` field of workflow lookups and instance creation
/// when the caller does not pin a specific version.
pub const LATEST_VERSION: i32 = -1;

// ---------------------------------------------------------------------------
// Cluster topology
// ---------------------------------------------------------------------------

/// Role a broker plays for one partition.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PartitionBrokerRole {
    /// The broker accepts writes for the partition.
    #[default]
    Leader,
    /// The broker replicates the partition from its leader.
    Follower,
}

/// One partition hosted by a broker.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Partition {
    /// Cluster-wide partition number.
    pub partition_id: i32,
    /// Role of the reporting broker for this partition.
    pub role: PartitionBrokerRole,
}

/// A broker as reported by the topology operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BrokerInfo {
    /// Unique node id of the broker within the cluster.
    pub node_id: i32,
    /// Hostname the broker advertises.
    pub host: String,
    /// Port the broker advertises.
    pub port: i32,
    /// Partitions this broker participates in.
    pub partitions: Vec<Partition>,
}

// ---------------------------------------------------------------------------
// Workflow definitions
// ---------------------------------------------------------------------------

/// How the gateway should interpret a deployed resource.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResourceType {
    /// Infer the type from the resource name's file extension.
    #[default]
    File,
    /// BPMN 2.0 XML.
    Bpmn,
    /// YAML workflow definition.
    Yaml,
}

/// A resource supplied to the deploy operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkflowRequestObject {
    /// Resource name, e.g. `"order-process.bpmn"`.
    pub name: String,
    /// Resource format.
    #[serde(rename = "type")]
    pub resource_type: ResourceType,
    /// Raw resource bytes.
    pub definition: Vec<u8>,
}

/// Describes one deployed workflow version.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkflowMetadata {
    /// Process id declared in the BPMN resource.
    pub bpmn_process_id: String,
    /// Version assigned by the gateway, starting at 1.
    pub version: i32,
    /// Key of this deployed version.
    pub workflow_key: i64,
    /// Name of the resource the workflow was parsed from.
    pub resource_name: String,
}
