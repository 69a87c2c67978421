//! Drives the command builders against an in-memory gateway.
//!
//! Deploys a workflow, lists it, and starts an instance, with the send spans
//! printed as JSON. Run with:
//!
//! ```text
//! RUST_LOG=debug cargo run -p commands --example in_memory_gateway
//! ```

use std::{sync::Arc, time::Duration};

use async_trait::async_trait;
use commands::{ClientConfig, GatewayCommands};
use protocol::{
    messages::{
        CancelWorkflowInstanceRequest, CancelWorkflowInstanceResponse, CompleteJobRequest,
        CompleteJobResponse, CreateWorkflowInstanceRequest, CreateWorkflowInstanceResponse,
        DeployWorkflowRequest, DeployWorkflowResponse, FailJobRequest, FailJobResponse,
        GetWorkflowRequest, GetWorkflowResponse, ListWorkflowsRequest, ListWorkflowsResponse,
        PublishMessageRequest, PublishMessageResponse, ResolveIncidentRequest,
        ResolveIncidentResponse, SetVariablesRequest, SetVariablesResponse, TopologyRequest,
        TopologyResponse, UpdateJobRetriesRequest, UpdateJobRetriesResponse,
    },
    BrokerInfo, CallContext, GatewayClient, GatewayError, Partition, ResourceType, StatusCode,
    WorkflowMetadata, LATEST_VERSION,
};
use serde_json::json;
use tokio::sync::Mutex;
use tracing_subscriber::EnvFilter;

/// A deployed workflow version kept by the in-memory gateway.
struct Deployed {
    metadata: WorkflowMetadata,
    definition: Vec<u8>,
}

#[derive(Default)]
struct State {
    next_key: i64,
    workflows: Vec<Deployed>,
    instances: Vec<i64>,
}

impl State {
    fn allocate_key(&mut self) -> i64 {
        self.next_key += 1;
        self.next_key
    }

    /// Resolves by key when non-zero, else by process id and version.
    fn resolve(&self, key: i64, bpmn_process_id: &str, version: i32) -> Option<&Deployed> {
        if key != 0 {
            return self.workflows.iter().find(|w| w.metadata.workflow_key == key);
        }
        self.workflows
            .iter()
            .filter(|w| w.metadata.bpmn_process_id == bpmn_process_id)
            .filter(|w| version == LATEST_VERSION || w.metadata.version == version)
            .max_by_key(|w| w.metadata.version)
    }
}

/// Single-node gateway that keeps everything in memory.
#[derive(Default)]
struct InMemoryGateway {
    state: Mutex<State>,
}

fn unsupported(operation: &str) -> GatewayError {
    GatewayError::status(
        StatusCode::Unimplemented,
        format!("{operation} is not supported by the in-memory gateway"),
    )
}

#[async_trait]
impl GatewayClient for InMemoryGateway {
    async fn topology(
        &self,
        _context: CallContext,
        _request: TopologyRequest,
    ) -> Result<TopologyResponse, GatewayError> {
        Ok(TopologyResponse {
            brokers: vec![BrokerInfo {
                node_id: 0,
                host: "localhost".to_string(),
                port: 26501,
                partitions: vec![Partition::default()],
            }],
            cluster_size: 1,
            partitions_count: 1,
            replication_factor: 1,
        })
    }

    async fn list_workflows(
        &self,
        _context: CallContext,
        request: ListWorkflowsRequest,
    ) -> Result<ListWorkflowsResponse, GatewayError> {
        let state = self.state.lock().await;
        let workflows = state
            .workflows
            .iter()
            .filter(|w| {
                request.bpmn_process_id.is_empty()
                    || w.metadata.bpmn_process_id == request.bpmn_process_id
            })
            .map(|w| w.metadata.clone())
            .collect();
        Ok(ListWorkflowsResponse { workflows })
    }

    async fn get_workflow(
        &self,
        _context: CallContext,
        request: GetWorkflowRequest,
    ) -> Result<GetWorkflowResponse, GatewayError> {
        let state = self.state.lock().await;
        let deployed = state
            .resolve(request.workflow_key, &request.bpmn_process_id, request.version)
            .ok_or_else(|| GatewayError::status(StatusCode::NotFound, "no such workflow"))?;
        Ok(GetWorkflowResponse {
            workflow_key: deployed.metadata.workflow_key,
            version: deployed.metadata.version,
            bpmn_process_id: deployed.metadata.bpmn_process_id.clone(),
            resource_name: deployed.metadata.resource_name.clone(),
            bpmn_xml: String::from_utf8_lossy(&deployed.definition).into_owned(),
        })
    }

    async fn deploy_workflow(
        &self,
        _context: CallContext,
        request: DeployWorkflowRequest,
    ) -> Result<DeployWorkflowResponse, GatewayError> {
        if request.workflows.is_empty() {
            return Err(GatewayError::status(
                StatusCode::InvalidArgument,
                "a deployment needs at least one resource",
            ));
        }

        let mut state = self.state.lock().await;
        let key = state.allocate_key();
        let mut deployed = Vec::with_capacity(request.workflows.len());
        for resource in request.workflows {
            // The process id is taken from the resource name's stem.
            let bpmn_process_id = resource
                .name
                .split_once('.')
                .map_or(resource.name.as_str(), |(stem, _)| stem)
                .to_string();
            let version = state
                .workflows
                .iter()
                .filter(|w| w.metadata.bpmn_process_id == bpmn_process_id)
                .count() as i32
                + 1;
            let metadata = WorkflowMetadata {
                bpmn_process_id,
                version,
                workflow_key: state.allocate_key(),
                resource_name: resource.name,
            };
            deployed.push(metadata.clone());
            state.workflows.push(Deployed {
                metadata,
                definition: resource.definition,
            });
        }

        Ok(DeployWorkflowResponse {
            key,
            workflows: deployed,
        })
    }

    async fn create_workflow_instance(
        &self,
        _context: CallContext,
        request: CreateWorkflowInstanceRequest,
    ) -> Result<CreateWorkflowInstanceResponse, GatewayError> {
        let mut state = self.state.lock().await;
        let metadata = state
            .resolve(request.workflow_key, &request.bpmn_process_id, request.version)
            .map(|w| w.metadata.clone())
            .ok_or_else(|| GatewayError::status(StatusCode::NotFound, "no such workflow"))?;
        let workflow_instance_key = state.allocate_key();
        state.instances.push(workflow_instance_key);

        Ok(CreateWorkflowInstanceResponse {
            workflow_key: metadata.workflow_key,
            bpmn_process_id: metadata.bpmn_process_id,
            version: metadata.version,
            workflow_instance_key,
        })
    }

    async fn cancel_workflow_instance(
        &self,
        _context: CallContext,
        request: CancelWorkflowInstanceRequest,
    ) -> Result<CancelWorkflowInstanceResponse, GatewayError> {
        let mut state = self.state.lock().await;
        let before = state.instances.len();
        state
            .instances
            .retain(|key| *key != request.workflow_instance_key);
        if state.instances.len() == before {
            return Err(GatewayError::status(StatusCode::NotFound, "no such instance"));
        }
        Ok(CancelWorkflowInstanceResponse {})
    }

    async fn set_variables(
        &self,
        _context: CallContext,
        _request: SetVariablesRequest,
    ) -> Result<SetVariablesResponse, GatewayError> {
        Err(unsupported("set_variables"))
    }

    async fn publish_message(
        &self,
        _context: CallContext,
        _request: PublishMessageRequest,
    ) -> Result<PublishMessageResponse, GatewayError> {
        Err(unsupported("publish_message"))
    }

    async fn complete_job(
        &self,
        _context: CallContext,
        _request: CompleteJobRequest,
    ) -> Result<CompleteJobResponse, GatewayError> {
        Err(unsupported("complete_job"))
    }

    async fn fail_job(
        &self,
        _context: CallContext,
        _request: FailJobRequest,
    ) -> Result<FailJobResponse, GatewayError> {
        Err(unsupported("fail_job"))
    }

    async fn update_job_retries(
        &self,
        _context: CallContext,
        _request: UpdateJobRetriesRequest,
    ) -> Result<UpdateJobRetriesResponse, GatewayError> {
        Err(unsupported("update_job_retries"))
    }

    async fn resolve_incident(
        &self,
        _context: CallContext,
        _request: ResolveIncidentRequest,
    ) -> Result<ResolveIncidentResponse, GatewayError> {
        Err(unsupported("resolve_incident"))
    }
}

const ORDER_PROCESS: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<bpmn:definitions xmlns:bpmn="http://www.omg.org/spec/BPMN/20100524/MODEL">
  <bpmn:process id="order-process" isExecutable="true">
    <bpmn:startEvent id="start" />
  </bpmn:process>
</bpmn:definitions>
"#;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .json()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")))
        .init();

    let config = ClientConfig::builder()
        .request_timeout(Duration::from_secs(5))
        .build()?;
    let gateway = GatewayCommands::new(Arc::new(InMemoryGateway::default()), config)?;

    let topology = gateway.topology().send().await?;
    println!("cluster size: {}", topology.cluster_size);

    let deployment = gateway
        .deploy_workflow()
        .add_resource(ORDER_PROCESS, "order-process.bpmn", ResourceType::Bpmn)
        .send()
        .await?;
    println!("deployment {} accepted", deployment.key);

    let listed = gateway
        .list_workflows()
        .bpmn_process_id("order-process")
        .send()
        .await?;
    for workflow in &listed.workflows {
        println!(
            "{} v{} (key {})",
            workflow.bpmn_process_id, workflow.version, workflow.workflow_key
        );
    }

    let instance = gateway
        .create_workflow_instance()
        .bpmn_process_id("order-process")
        .latest_version()
        .variables(json!({ "orderId": 31243 }))
        .send()
        .await?;
    println!("started instance {}", instance.workflow_instance_key);

    if let Err(error) = gateway.publish_message().message_name("payment-received").send().await {
        println!("publish rejected: {error}");
    }

    Ok(())
}
