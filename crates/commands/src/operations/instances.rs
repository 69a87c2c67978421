//! Workflow instance commands: create, cancel, set variables.

use protocol::{
    messages::{
        CancelWorkflowInstanceRequest, CancelWorkflowInstanceResponse,
        CreateWorkflowInstanceRequest, CreateWorkflowInstanceResponse, SetVariablesRequest,
        SetVariablesResponse,
    },
    ElementInstanceKey, WorkflowInstanceKey, WorkflowKey, LATEST_VERSION,
};

use crate::command::Command;

operation! {
    /// Starts a new instance of a deployed workflow.
    CreateWorkflowInstance, CreateWorkflowInstanceCommand
        => create_workflow_instance(CreateWorkflowInstanceRequest) -> CreateWorkflowInstanceResponse
}

impl<C: ?Sized> Command<'_, C, CreateWorkflowInstance> {
    /// Instantiates the workflow version with this key.
    #[must_use]
    pub fn workflow_key(mut self, key: impl Into<WorkflowKey>) -> Self {
        self.request.workflow_key = key.into().as_i64();
        self
    }

    /// Instantiates a version of this process (see [`version`](Self::version)).
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

    #[must_use]
    pub fn latest_version(self) -> Self {
        self.version(LATEST_VERSION)
    }

    /// Sets the initial variables from a JSON value.
    #[must_use]
    pub fn variables(mut self, variables: serde_json::Value) -> Self {
        self.request.variables = variables.to_string();
        self
    }

    /// Sets the initial variables from an already rendered JSON document.
    #[must_use]
    pub fn variables_json(mut self, variables: impl Into<String>) -> Self {
        self.request.variables = variables.into();
        self
    }
}

operation! {
    /// Cancels a running workflow instance.
    CancelWorkflowInstance, CancelWorkflowInstanceCommand
        => cancel_workflow_instance(CancelWorkflowInstanceRequest) -> CancelWorkflowInstanceResponse
}

impl<C: ?Sized> Command<'_, C, CancelWorkflowInstance> {
    #[must_use]
    pub fn workflow_instance_key(mut self, key: impl Into<WorkflowInstanceKey>) -> Self {
        self.request.workflow_instance_key = key.into().as_i64();
        self
    }
}

operation! {
    /// Merges variables into an element instance scope.
    SetVariables, SetVariablesCommand => set_variables(SetVariablesRequest) -> SetVariablesResponse
}

impl<C: ?Sized> Command<'_, C, SetVariables> {
    /// Scope to write to. A workflow instance key addresses the root scope.
    #[must_use]
    pub fn element_instance_key(mut self, key: impl Into<ElementInstanceKey>) -> Self {
        self.request.element_instance_key = key.into().as_i64();
        self
    }

    #[must_use]
    pub fn variables(mut self, variables: serde_json::Value) -> Self {
        self.request.variables = variables.to_string();
        self
    }

    #[must_use]
    pub fn variables_json(mut self, variables: impl Into<String>) -> Self {
        self.request.variables = variables.into();
        self
    }

    /// Keeps the variables in this scope instead of propagating them upward.
    #[must_use]
    pub fn local(mut self, local: bool) -> Self {
        self.request.local = local;
        self
    }
}
