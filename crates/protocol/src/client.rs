//! The gateway client port.
//!
//! [`GatewayClient`] is the capability the command builders dispatch
//! through. A transport crate implements it over the wire; tests substitute
//! the `mockall`-generated `MockGatewayClient` (enabled by the `mock`
//! feature).

use std::{future::Future, pin::Pin};

use async_trait::async_trait;

use crate::{
    messages::{
        CancelWorkflowInstanceRequest, CancelWorkflowInstanceResponse, CompleteJobRequest,
        CompleteJobResponse, CreateWorkflowInstanceRequest, CreateWorkflowInstanceResponse,
        DeployWorkflowRequest, DeployWorkflowResponse, FailJobRequest, FailJobResponse,
        GetWorkflowRequest, GetWorkflowResponse, ListWorkflowsRequest, ListWorkflowsResponse,
        PublishMessageRequest, PublishMessageResponse, ResolveIncidentRequest,
        ResolveIncidentResponse, SetVariablesRequest, SetVariablesResponse, TopologyRequest,
        TopologyResponse, UpdateJobRetriesRequest, UpdateJobRetriesResponse,
    },
    CallContext, GatewayError,
};

/// Boxed future returned by every [`GatewayClient`] method.
pub type GatewayFuture<'a, T> = Pin<Box<dyn Future<Output = Result<T, GatewayError>> + Send + 'a>>;

/// One method per unary gateway operation.
///
/// Implementations must be safe to call concurrently: independent commands
/// share one client. Implementations may use the [`CallContext`] to forward
/// deadlines to the server; the command layer enforces them locally either
/// way.
#[cfg_attr(feature = "mock", mockall::automock)]
#[async_trait]
pub trait GatewayClient: Send + Sync {
    async fn topology(
        &self,
        context: CallContext,
        request: TopologyRequest,
    ) -> Result<TopologyResponse, GatewayError>;

    async fn list_workflows(
        &self,
        context: CallContext,
        request: ListWorkflowsRequest,
    ) -> Result<ListWorkflowsResponse, GatewayError>;

    async fn get_workflow(
        &self,
        context: CallContext,
        request: GetWorkflowRequest,
    ) -> Result<GetWorkflowResponse, GatewayError>;

    async fn deploy_workflow(
        &self,
        context: CallContext,
        request: DeployWorkflowRequest,
    ) -> Result<DeployWorkflowResponse, GatewayError>;

    async fn create_workflow_instance(
        &self,
        context: CallContext,
        request: CreateWorkflowInstanceRequest,
    ) -> Result<CreateWorkflowInstanceResponse, GatewayError>;

    async fn cancel_workflow_instance(
        &self,
        context: CallContext,
        request: CancelWorkflowInstanceRequest,
    ) -> Result<CancelWorkflowInstanceResponse, GatewayError>;

    async fn set_variables(
        &self,
        context: CallContext,
        request: SetVariablesRequest,
    ) -> Result<SetVariablesResponse, GatewayError>;

    async fn publish_message(
        &self,
        context: CallContext,
        request: PublishMessageRequest,
    ) -> Result<PublishMessageResponse, GatewayError>;

    async fn complete_job(
        &self,
        context: CallContext,
        request: CompleteJobRequest,
    ) -> Result<CompleteJobResponse, GatewayError>;

    async fn fail_job(
        &self,
        context: CallContext,
        request: FailJobRequest,
    ) -> Result<FailJobResponse, GatewayError>;

    async fn update_job_retries(
        &self,
        context: CallContext,
        request: UpdateJobRetriesRequest,
    ) -> Result<UpdateJobRetriesResponse, GatewayError>;

    async fn resolve_incident(
        &self,
        context: CallContext,
        request: ResolveIncidentRequest,
    ) -> Result<ResolveIncidentResponse, GatewayError>;
}
