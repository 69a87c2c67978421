//! Workflow definition commands: list, fetch, deploy.

use protocol::{
    messages::{
        DeployWorkflowRequest, DeployWorkflowResponse, GetWorkflowRequest, GetWorkflowResponse,
        ListWorkflowsRequest, ListWorkflowsResponse,
    },
    ResourceType, WorkflowKey, WorkflowRequestObject, LATEST_VERSION,
};

use crate::command::Command;

operation! {
    /// Lists deployed workflows, optionally narrowed to one process id.
    ListWorkflows, ListWorkflowsCommand => list_workflows(ListWorkflowsRequest) -> ListWorkflowsResponse
}

impl<C: ?Sized> Command<'_, C, ListWorkflows> {
    /// Only lists versions of the given process.
    #[must_use]
    pub fn bpmn_process_id(mut self, bpmn_process_id: impl Into<String>) -> Self {
        self.request.bpmn_process_id = bpmn_process_id.into();
        self
    }
}

operation! {
    /// Fetches one deployed workflow, including its BPMN XML.
    GetWorkflow, GetWorkflowCommand => get_workflow(GetWorkflowRequest) -> GetWorkflowResponse
}

impl<C: ?Sized> Command<'_, C, GetWorkflow> {
    /// Selects the workflow by key.
    #[must_use]
    pub fn workflow_key(mut self, key: impl Into<WorkflowKey>) -> Self {
        self.request.workflow_key = key.into().as_i64();
        self
    }

    /// Selects the workflow by process id (combine with a version).
    #[must_use]
    pub fn bpmn_process_id(mut self, bpmn_process_id: impl Into<String>) -> Self {
        self.request.bpmn_process_id = bpmn_process_id.into();
        self
    }

    #[must_use]
    pub fn version(mut self, version: i32) -> Self {
        self.request.version = version;
        self
    }

    /// Shorthand for `version(LATEST_VERSION)`.
    #[must_use]
    pub fn latest_version(self) -> Self {
        self.version(LATEST_VERSION)
    }
}

operation! {
    /// Deploys one or more workflow resources as a single deployment.
    DeployWorkflow, DeployWorkflowCommand => deploy_workflow(DeployWorkflowRequest) -> DeployWorkflowResponse
}

impl<C: ?Sized> Command<'_, C, DeployWorkflow> {
    /// Appends a resource to the deployment. Resources are sent in the order
    /// they were added.
    #[must_use]
    pub fn add_resource(
        mut self,
        definition: impl Into<Vec<u8>>,
        name: impl Into<String>,
        resource_type: ResourceType,
    ) -> Self {
        self.request.workflows.push(WorkflowRequestObject {
            name: name.into(),
            resource_type,
            definition: definition.into(),
        });
        self
    }
}

#[cfg(test)]
mod tests {
    use protocol::{
        messages::{DeployWorkflowRequest, GetWorkflowRequest},
        ResourceType, WorkflowKey, WorkflowRequestObject, LATEST_VERSION,
    };
    use test_support::MockGatewayClient;

    use super::{DeployWorkflowCommand, GetWorkflowCommand};

    #[test]
    fn get_workflow_by_process_id_and_latest_version() {
        let client = MockGatewayClient::new();
        let request = GetWorkflowCommand::new(&client)
            .bpmn_process_id("order-process")
            .latest_version()
            .into_request();

        assert_eq!(
            request,
            GetWorkflowRequest {
                workflow_key: 0,
                version: LATEST_VERSION,
                bpmn_process_id: "order-process".to_string(),
            }
        );
    }

    #[test]
    fn get_workflow_by_key() {
        let client = MockGatewayClient::new();
        let request = GetWorkflowCommand::new(&client)
            .workflow_key(WorkflowKey::new(2_251_799_813_685_250))
            .into_request();

        assert_eq!(request.workflow_key, 2_251_799_813_685_250);
        assert!(request.bpmn_process_id.is_empty());
    }

    #[test]
    fn deploy_appends_resources_in_order() {
        let client = MockGatewayClient::new();
        let request = DeployWorkflowCommand::new(&client)
            .add_resource(b"<definitions/>".to_vec(), "order.bpmn", ResourceType::Bpmn)
            .add_resource("name: payment", "payment.yaml", ResourceType::Yaml)
            .into_request();

        assert_eq!(
            request,
            DeployWorkflowRequest {
                workflows: vec![
                    WorkflowRequestObject {
                        name: "order.bpmn".to_string(),
                        resource_type: ResourceType::Bpmn,
                        definition: b"<definitions/>".to_vec(),
                    },
                    WorkflowRequestObject {
                        name: "payment.yaml".to_string(),
                        resource_type: ResourceType::Yaml,
                        definition: b"name: payment".to_vec(),
                    },
                ],
            }
        );
    }
}
