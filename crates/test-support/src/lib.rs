//! Test doubles for code that drives the workflow gateway.
//!
//! Provides the pieces a test needs to verify gateway calls without a live
//! server:
//!
//! - [`MockGatewayClient`]: the `mockall`-generated substitute for
//!   [`protocol::GatewayClient`].
//! - [`RequestMatcher`] / [`eq_request`]: a structural argument matcher
//!   that compares requests field by field.
//! - [`predicate`]: mockall's stock predicates, for the arguments the test
//!   does not care about.
//!
//! ```
//! use commands::ListWorkflowsCommand;
//! use protocol::messages::{ListWorkflowsRequest, ListWorkflowsResponse};
//! use test_support::{eq_request, predicate, MockGatewayClient};
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! let mut client = MockGatewayClient::new();
//! client
//!     .expect_list_workflows()
//!     .with(predicate::always(), eq_request(ListWorkflowsRequest::default()))
//!     .times(1)
//!     .returning(|_, _| Ok(ListWorkflowsResponse::default()));
//!
//! let response = ListWorkflowsCommand::new(&client).send().await;
//! assert_eq!(response, Ok(ListWorkflowsResponse::default()));
//! # }
//! ```

mod matcher;

pub use matcher::{eq_request, RequestMatcher};
pub use mockall::predicate;
pub use protocol::MockGatewayClient;
