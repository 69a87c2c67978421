//! Entry point that hands out command builders bound to one client.

use std::sync::Arc;

use protocol::GatewayClient;

use crate::{
    command::{Command, Operation},
    config::{ClientConfig, ConfigError},
    operations::{
        CancelWorkflowInstanceCommand, CompleteJobCommand, CreateWorkflowInstanceCommand,
        DeployWorkflowCommand, FailJobCommand, GetWorkflowCommand, ListWorkflowsCommand,
        PublishMessageCommand, ResolveIncidentCommand, SetVariablesCommand, TopologyCommand,
        UpdateJobRetriesCommand,
    },
};

/// Creates command builders for a shared [`GatewayClient`].
///
/// Every builder starts with an empty request and a context derived from the
/// [`ClientConfig`], so the configured request timeout applies unless the
/// caller sends with an explicit context. Builders borrow the client; any
/// number may be in flight at once.
///
/// ```no_run
/// # use std::sync::Arc;
/// # use commands::GatewayCommands;
/// # async fn example(client: Arc<dyn protocol::GatewayClient>) -> Result<(), protocol::GatewayError> {
/// let gateway = GatewayCommands::with_defaults(client);
/// let workflows = gateway.list_workflows().bpmn_process_id("order-process").send().await?;
/// for workflow in workflows.workflows {
///     println!("{} v{}", workflow.bpmn_process_id, workflow.version);
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct GatewayCommands<C: ?Sized> {
    config: ClientConfig,
    client: Arc<C>,
}

impl<C: GatewayClient + ?Sized> GatewayCommands<C> {
    /// Binds `client` with a validated configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if `config` fails [`ClientConfig::validate`].
    pub fn new(client: Arc<C>, config: ClientConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        tracing::debug!(request_timeout = ?config.request_timeout(), "Gateway commands configured");
        Ok(Self { config, client })
    }

    /// Binds `client` with the default (unbounded) configuration.
    pub fn with_defaults(client: Arc<C>) -> Self {
        Self {
            config: ClientConfig::default(),
            client,
        }
    }

    /// Returns the active configuration.
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Returns the underlying client.
    pub fn client(&self) -> &Arc<C> {
        &self.client
    }

    fn command<O: Operation>(&self) -> Command<'_, C, O> {
        Command::with_context(self.client.as_ref(), self.config.call_context())
    }

    pub fn topology(&self) -> TopologyCommand<'_, C> {
        self.command()
    }

    pub fn list_workflows(&self) -> ListWorkflowsCommand<'_, C> {
        self.command()
    }

    pub fn get_workflow(&self) -> GetWorkflowCommand<'_, C> {
        self.command()
    }

    pub fn deploy_workflow(&self) -> DeployWorkflowCommand<'_, C> {
        self.command()
    }

    pub fn create_workflow_instance(&self) -> CreateWorkflowInstanceCommand<'_, C> {
        self.command()
    }

    pub fn cancel_workflow_instance(&self) -> CancelWorkflowInstanceCommand<'_, C> {
        self.command()
    }

    pub fn set_variables(&self) -> SetVariablesCommand<'_, C> {
        self.command()
    }

    pub fn publish_message(&self) -> PublishMessageCommand<'_, C> {
        self.command()
    }

    pub fn complete_job(&self) -> CompleteJobCommand<'_, C> {
        self.command()
    }

    pub fn fail_job(&self) -> FailJobCommand<'_, C> {
        self.command()
    }

    pub fn update_job_retries(&self) -> UpdateJobRetriesCommand<'_, C> {
        self.command()
    }

    pub fn resolve_incident(&self) -> ResolveIncidentCommand<'_, C> {
        self.command()
    }
}

impl<C: ?Sized> Clone for GatewayCommands<C> {
    fn clone(&self) -> Self {
        Self {
            config: self.config.clone(),
            client: Arc::clone(&self.client),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::{sync::Arc, time::Duration};

    use protocol::{messages::ListWorkflowsResponse, GatewayClient};
    use test_support::MockGatewayClient;

    use super::*;

    #[test]
    fn builders_inherit_the_configured_timeout() {
        let config = ClientConfig::builder()
            .request_timeout(Duration::from_secs(3))
            .build()
            .unwrap();
        let gateway = GatewayCommands::new(Arc::new(MockGatewayClient::new()), config).unwrap();

        assert_eq!(
            gateway.list_workflows().context().timeout(),
            Some(Duration::from_secs(3))
        );
        assert_eq!(gateway.topology().context().timeout(), Some(Duration::from_secs(3)));
    }

    #[test]
    fn invalid_configuration_is_refused() {
        let config = ClientConfig {
            request_timeout_ms: Some(0),
        };
        let outcome = GatewayCommands::new(Arc::new(MockGatewayClient::new()), config);
        assert!(outcome.is_err());
    }

    #[tokio::test]
    async fn works_through_a_trait_object() {
        let mut mock = MockGatewayClient::new();
        mock.expect_list_workflows()
            .times(1)
            .returning(|_, _| Ok(ListWorkflowsResponse::default()));
        let client: Arc<dyn GatewayClient> = Arc::new(mock);

        let gateway = GatewayCommands::with_defaults(client);
        let response = gateway.list_workflows().send().await;

        assert_eq!(response, Ok(ListWorkflowsResponse::default()));
    }
}
