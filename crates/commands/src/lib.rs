//! Fluent command builders for the workflow gateway.
//!
//! Application code assembles one gateway request at a time through a
//! chainable builder and sends it through a [`protocol::GatewayClient`]:
//!
//! ```no_run
//! # use std::sync::Arc;
//! # use commands::GatewayCommands;
//! # async fn example(client: Arc<dyn protocol::GatewayClient>) -> Result<(), protocol::GatewayError> {
//! let gateway = GatewayCommands::with_defaults(client);
//! let created = gateway
//!     .create_workflow_instance()
//!     .bpmn_process_id("order-process")
//!     .latest_version()
//!     .variables(serde_json::json!({ "orderId": 31243 }))
//!     .send()
//!     .await?;
//! println!("started instance {}", created.workflow_instance_key);
//! # Ok(())
//! # }
//! ```
//!
//! ## Architectural Layer
//!
//! **Client orchestration.** Builders own a request, forward it through the
//! client port exactly once, and hand the outcome back untouched. They do no
//! validation, retrying, or caching of their own.
//!
//! ## Module Layout
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`command`] | Generic [`Command`] builder and the [`Operation`] binding trait |
//! | [`operations`] | One marker type, builder alias, and setter block per operation |
//! | [`client`] | [`GatewayCommands`]: builders pre-bound to a client and config |
//! | [`config`] | [`ClientConfig`] and [`ConfigError`] |
//!
//! ## Logging
//!
//! Each send runs inside a `gateway_command` `tracing` span at debug level
//! carrying the operation name and a per-send `command_id`. The crate never
//! installs a subscriber.

pub mod client;
pub mod command;
pub mod config;
mod dispatch;
pub mod operations;

pub use client::GatewayCommands;
pub use command::{Command, Operation};
pub use config::{ClientConfig, ClientConfigBuilder, ConfigError};
pub use operations::{
    CancelWorkflowInstance, CancelWorkflowInstanceCommand, CompleteJob, CompleteJobCommand,
    CreateWorkflowInstance, CreateWorkflowInstanceCommand, DeployWorkflow, DeployWorkflowCommand,
    FailJob, FailJobCommand, GetWorkflow, GetWorkflowCommand, ListWorkflows, ListWorkflowsCommand,
    PublishMessage, PublishMessageCommand, ResolveIncident, ResolveIncidentCommand, SetVariables,
    SetVariablesCommand, Topology, TopologyCommand, UpdateJobRetries, UpdateJobRetriesCommand,
};
