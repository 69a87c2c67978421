//! The generic command builder.
//!
//! A [`Command`] owns one in-progress request and a borrowed
//! [`GatewayClient`]. Setters (declared per operation in
//! [`crate::operations`]) consume and return the builder so calls chain;
//! [`Command::send`] consumes it for good, so a sent command cannot be
//! touched again.
//!
//! ```no_run
//! # use commands::ListWorkflowsCommand;
//! # async fn example(client: &dyn protocol::GatewayClient) -> Result<(), protocol::GatewayError> {
//! let _response = ListWorkflowsCommand::new(client)
//!     .bpmn_process_id("order-process")
//!     .send()
//!     .await?;
//! # Ok(())
//! # }
//! ```

use std::fmt;

use protocol::{CallContext, GatewayClient, GatewayError, GatewayFuture};

use crate::dispatch;

/// Binds one gateway operation to its request and response types.
///
/// Implemented by the zero-sized marker types in [`crate::operations`]; each
/// implementation forwards to exactly one [`GatewayClient`] method.
pub trait Operation: 'static {
    /// Request message, `Default` being the empty request.
    type Request: Default + fmt::Debug + Send + 'static;

    /// Response message returned on success.
    type Response: Send + 'static;

    /// Operation name used in log spans.
    const NAME: &'static str;

    /// Issues the call through the matching client method.
    fn call<'c, C>(
        client: &'c C,
        context: CallContext,
        request: Self::Request,
    ) -> GatewayFuture<'c, Self::Response>
    where
        C: GatewayClient + ?Sized;
}

/// Fluent builder for one gateway call of operation `O`.
///
/// Built with [`Command::new`] (unbounded context) or
/// [`Command::with_context`]; see [`crate::GatewayCommands`] for builders
/// that pick up the configured defaults.
pub struct Command<'a, C: ?Sized, O: Operation> {
    client: &'a C,
    context: CallContext,
    pub(crate) request: O::Request,
}

impl<'a, C: ?Sized, O: Operation> Command<'a, C, O> {
    /// Creates a builder with an empty request and the background context.
    pub fn new(client: &'a C) -> Self {
        Self::with_context(client, CallContext::background())
    }

    /// Creates a builder with an empty request that [`send`](Self::send)s
    /// under `context`.
    pub fn with_context(client: &'a C, context: CallContext) -> Self {
        Self {
            client,
            context,
            request: O::Request::default(),
        }
    }

    /// Returns the request assembled so far.
    pub fn request(&self) -> &O::Request {
        &self.request
    }

    /// Returns the context the argument-less [`send`](Self::send) will use.
    pub fn context(&self) -> &CallContext {
        &self.context
    }

    /// Gives up the builder without sending, returning the assembled request.
    pub fn into_request(self) -> O::Request {
        self.request
    }
}

impl<'a, C, O> Command<'a, C, O>
where
    C: GatewayClient + ?Sized,
    O: Operation,
{
    /// Sends the request under the builder's own context.
    ///
    /// # Errors
    ///
    /// Returns the client's error unchanged, or [`GatewayError::Cancelled`] /
    /// [`GatewayError::DeadlineExceeded`] when the context fires first.
    pub async fn send(self) -> Result<O::Response, GatewayError> {
        let Self {
            client,
            context,
            request,
        } = self;
        dispatch::send::<C, O>(client, context, request).await
    }

    /// Sends the request under `context` instead of the builder's own.
    ///
    /// # Errors
    ///
    /// Same as [`send`](Self::send).
    pub async fn send_with_context(self, context: CallContext) -> Result<O::Response, GatewayError> {
        dispatch::send::<C, O>(self.client, context, self.request).await
    }
}

impl<C: ?Sized, O: Operation> fmt::Debug for Command<'_, C, O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Command")
            .field("operation", &O::NAME)
            .field("context", &self.context)
            .field("request", &self.request)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use protocol::messages::{CreateWorkflowInstanceRequest, ListWorkflowsRequest};
    use test_support::MockGatewayClient;

    use crate::{CreateWorkflowInstanceCommand, ListWorkflowsCommand};

    #[test]
    fn fresh_builder_holds_the_default_request() {
        let client = MockGatewayClient::new();
        let command = ListWorkflowsCommand::new(&client);

        assert_eq!(command.request(), &ListWorkflowsRequest::default());
        assert_eq!(command.context().timeout(), None);
    }

    #[test]
    fn last_write_wins_per_field() {
        let client = MockGatewayClient::new();
        let request = CreateWorkflowInstanceCommand::new(&client)
            .bpmn_process_id("first")
            .version(3)
            .bpmn_process_id("second")
            .latest_version()
            .into_request();

        assert_eq!(
            request,
            CreateWorkflowInstanceRequest {
                bpmn_process_id: "second".to_string(),
                version: protocol::LATEST_VERSION,
                ..Default::default()
            }
        );
    }

    #[test]
    fn setters_on_distinct_fields_commute() {
        let client = MockGatewayClient::new();
        let forward = CreateWorkflowInstanceCommand::new(&client)
            .workflow_key(7_i64)
            .variables_json(r#"{"a":1}"#)
            .into_request();
        let backward = CreateWorkflowInstanceCommand::new(&client)
            .variables_json(r#"{"a":1}"#)
            .workflow_key(7_i64)
            .into_request();

        assert_eq!(forward, backward);
    }

    #[test]
    fn with_context_keeps_the_supplied_context() {
        let client = MockGatewayClient::new();
        let context = protocol::CallContext::background().with_timeout(Duration::from_secs(2));
        let command = ListWorkflowsCommand::with_context(&client, context);

        assert_eq!(command.context().timeout(), Some(Duration::from_secs(2)));
    }

    #[test]
    fn debug_output_names_the_operation() {
        let client = MockGatewayClient::new();
        let command = ListWorkflowsCommand::new(&client).bpmn_process_id("foo");
        let rendered = format!("{command:?}");

        assert!(rendered.contains("list_workflows"));
        assert!(rendered.contains("foo"));
    }
}
