//! Data contract and client port for the workflow gateway.
//!
//! This crate holds every message exchanged with the gateway, the typed key
//! identifiers, the error type every call reports, and the [`GatewayClient`]
//! trait that command builders dispatch through. Transport crates implement
//! the trait; they never add message types of their own.
//!
//! ## Architectural Layer
//!
//! **Data contract + port definition.** No I/O happens here. It defines
//! *what* a gateway call looks like; infrastructure decides *how* it travels.
//!
//! ## Module Layout
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`messages`] | Request/response pair for every unary operation |
//! | [`types`] | Sub-messages and enums shared between messages |
//! | [`identifiers`] | Newtype keys (`WorkflowKey`, `JobKey`, etc.) |
//! | [`errors`] | [`GatewayError`], [`StatusCode`], [`RetryPolicy`] |
//! | [`context`] | [`CallContext`]: per-call timeout and cancellation |
//! | [`client`] | The [`GatewayClient`] port |
//!
//! ## Features
//!
//! - `mock` derives `MockGatewayClient` with `mockall` for use in tests.

pub mod client;
pub mod context;
pub mod errors;
pub mod identifiers;
pub mod messages;
pub mod types;

// Re-export the everyday types at the crate root.
#[cfg(feature = "mock")]
pub use client::MockGatewayClient;
pub use client::{GatewayClient, GatewayFuture};
pub use context::CallContext;
pub use errors::{GatewayError, RetryPolicy, StatusCode};
pub use identifiers::{
    DeploymentKey, ElementInstanceKey, IncidentKey, JobKey, WorkflowInstanceKey, WorkflowKey,
};
pub use types::{
    BrokerInfo, Partition, PartitionBrokerRole, ResourceType, WorkflowMetadata,
    WorkflowRequestObject, LATEST_VERSION,
};
