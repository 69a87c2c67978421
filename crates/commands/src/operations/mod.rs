//! Per-operation declarations.
//!
//! Each gateway operation gets a zero-sized marker type implementing
//! [`Operation`](crate::command::Operation), a `…Command` alias of the
//! generic [`Command`](crate::command::Command), and an `impl` block with
//! one setter per request field. All dispatch logic lives in the generic
//! builder; nothing here does more than write a field.

// ---------------------------------------------------------------------------
// Macro for operation markers.
// Generates: marker struct, Operation impl forwarding to one client method,
// and the `…Command` builder alias.
// ---------------------------------------------------------------------------
macro_rules! operation {
    (
        $(#[$attr:meta])*
        $name:ident, $alias:ident => $method:ident($request:ty) -> $response:ty
    ) => {
        $(#[$attr])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq)]
        pub struct $name;

        impl $crate::command::Operation for $name {
            type Request = $request;
            type Response = $response;
            const NAME: &'static str = stringify!($method);

            fn call<'c, C>(
                client: &'c C,
                context: ::protocol::CallContext,
                request: $request,
            ) -> ::protocol::GatewayFuture<'c, $response>
            where
                C: ::protocol::GatewayClient + ?Sized,
            {
                client.$method(context, request)
            }
        }

        #[doc = concat!("Builder for the `", stringify!($method), "` operation.")]
        pub type $alias<'a, C> = $crate::command::Command<'a, C, $name>;
    };
}

mod incidents;
mod instances;
mod jobs;
mod publish;
mod topology;
mod workflows;

pub use incidents::{ResolveIncident, ResolveIncidentCommand};
pub use instances::{
    CancelWorkflowInstance, CancelWorkflowInstanceCommand, CreateWorkflowInstance,
    CreateWorkflowInstanceCommand, SetVariables, SetVariablesCommand,
};
pub use jobs::{
    CompleteJob, CompleteJobCommand, FailJob, FailJobCommand, UpdateJobRetries,
    UpdateJobRetriesCommand,
};
pub use publish::{PublishMessage, PublishMessageCommand};
pub use topology::{Topology, TopologyCommand};
pub use workflows::{
    DeployWorkflow, DeployWorkflowCommand, GetWorkflow, GetWorkflowCommand, ListWorkflows,
    ListWorkflowsCommand,
};
