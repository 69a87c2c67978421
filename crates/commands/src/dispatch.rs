//! Terminal dispatch shared by every command.
//!
//! Issues exactly one client call, races it against the call context, and
//! records the outcome as `tracing` events. The client's result is returned
//! as-is.

use std::{future, time::Duration};

use protocol::{CallContext, GatewayClient, GatewayError, GatewayFuture};
use tracing::Instrument;
use uuid::Uuid;

use crate::command::Operation;

/// Sends `request` through `client` once.
pub(crate) async fn send<C, O>(
    client: &C,
    context: CallContext,
    request: O::Request,
) -> Result<O::Response, GatewayError>
where
    C: GatewayClient + ?Sized,
    O: Operation,
{
    let command_id = Uuid::new_v4();
    let span = tracing::debug_span!("gateway_command", operation = O::NAME, %command_id);

    async move {
        tracing::debug!(?request, timeout = ?context.timeout(), "Dispatching gateway request");

        let call = O::call(client, context.clone(), request);
        let outcome = within_context(&context, call).await;

        match &outcome {
            Ok(_) => tracing::debug!("Gateway request completed"),
            Err(error) => tracing::debug!(%error, "Gateway request failed"),
        }
        outcome
    }
    .instrument(span)
    .await
}

/// Awaits `call` unless the context is cancelled or times out first.
///
/// Cancellation is checked before the call is polled, so a context that is
/// already cancelled never reaches the client.
pub(crate) async fn within_context<T>(
    context: &CallContext,
    call: GatewayFuture<'_, T>,
) -> Result<T, GatewayError> {
    let cancelled = async {
        match context.cancellation() {
            Some(token) => token.cancelled().await,
            None => future::pending::<()>().await,
        }
    };

    let timeout = context.timeout();
    let deadline = async move {
        match timeout {
            Some(after) => {
                tokio::time::sleep(after).await;
                after
            }
            None => future::pending::<Duration>().await,
        }
    };

    tokio::select! {
        biased;
        () = cancelled => Err(GatewayError::Cancelled),
        outcome = call => outcome,
        after = deadline => Err(GatewayError::DeadlineExceeded { after }),
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use protocol::{CallContext, GatewayError, GatewayFuture, StatusCode};
    use tokio_util::sync::CancellationToken;

    use super::within_context;

    fn never() -> GatewayFuture<'static, u32> {
        Box::pin(std::future::pending())
    }

    fn ready(outcome: Result<u32, GatewayError>) -> GatewayFuture<'static, u32> {
        Box::pin(async move { outcome })
    }

    #[tokio::test]
    async fn completed_call_passes_through() {
        let outcome = within_context(&CallContext::background(), ready(Ok(7))).await;
        assert_eq!(outcome, Ok(7));
    }

    #[tokio::test]
    async fn client_error_passes_through_unchanged() {
        let error = GatewayError::status(StatusCode::NotFound, "no such workflow");
        let outcome = within_context(&CallContext::background(), ready(Err(error.clone()))).await;
        assert_eq!(outcome, Err(error));
    }

    #[tokio::test]
    async fn timeout_turns_a_hung_call_into_deadline_exceeded() {
        let context = CallContext::background().with_timeout(Duration::from_millis(20));
        let outcome = within_context(&context, never()).await;
        assert_eq!(
            outcome,
            Err(GatewayError::DeadlineExceeded {
                after: Duration::from_millis(20)
            })
        );
    }

    #[tokio::test]
    async fn pre_cancelled_context_wins_over_a_ready_call() {
        let token = CancellationToken::new();
        token.cancel();
        let context = CallContext::background().with_cancellation(token);

        let outcome = within_context(&context, ready(Ok(1))).await;
        assert_eq!(outcome, Err(GatewayError::Cancelled));
    }

    #[tokio::test]
    async fn cancelling_while_waiting_aborts_the_call() {
        let token = CancellationToken::new();
        let context = CallContext::background().with_cancellation(token.clone());

        let canceller = tokio::spawn(async move {
            tokio::time::sleep(Duration::from_millis(10)).await;
            token.cancel();
        });

        let outcome = within_context(&context, never()).await;
        assert_eq!(outcome, Err(GatewayError::Cancelled));
        canceller.await.unwrap();
    }
}
