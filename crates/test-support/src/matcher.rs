//! Structural request matcher for mock expectations.
//!
//! Requests are compared by value, never by identity: the matcher renders the
//! expected request and every candidate through serde and compares the
//! resulting field trees. Fields a message keeps out of its serialised form
//! (`#[serde(skip)]` caches, size memos, and similar bookkeeping) take no part
//! in the comparison.

use std::{any::Any, fmt};

use predicates::{reflection::PredicateReflection, Predicate};
use serde::Serialize;
use serde_json::Value;

/// Matches requests whose visible fields all equal those of `expected`.
///
/// Implements [`Predicate`], so it can be handed straight to a `mockall`
/// expectation:
///
/// ```
/// use protocol::messages::ListWorkflowsRequest;
/// use test_support::{eq_request, predicate, MockGatewayClient};
///
/// let mut client = MockGatewayClient::new();
/// client
///     .expect_list_workflows()
///     .with(
///         predicate::always(),
///         eq_request(ListWorkflowsRequest {
///             bpmn_process_id: "foo".to_string(),
///         }),
///     )
///     .returning(|_, _| Ok(Default::default()));
/// ```
#[derive(Debug, Clone)]
pub struct RequestMatcher<R> {
    expected: R,
    fields: Option<Value>,
}

impl<R: Serialize> RequestMatcher<R> {
    /// Wraps the request a test expects to see.
    pub fn new(expected: R) -> Self {
        let fields = serde_json::to_value(&expected).ok();
        Self { expected, fields }
    }

    /// Returns the expected request.
    pub fn expected(&self) -> &R {
        &self.expected
    }

    /// Returns `true` if every visible field of `candidate` equals the
    /// expected value.
    ///
    /// A request that cannot be serialised never matches.
    pub fn matches(&self, candidate: &R) -> bool {
        match (&self.fields, serde_json::to_value(candidate)) {
            (Some(expected), Ok(actual)) => *expected == actual,
            _ => false,
        }
    }
}

impl<R: Serialize + 'static> RequestMatcher<R> {
    /// Like [`matches`](Self::matches) for a candidate of unknown type.
    ///
    /// Returns `false` unless `candidate` is an `R`.
    pub fn matches_any(&self, candidate: &dyn Any) -> bool {
        candidate
            .downcast_ref::<R>()
            .is_some_and(|candidate| self.matches(candidate))
    }
}

/// Shorthand for [`RequestMatcher::new`], reading like mockall's `eq`.
pub fn eq_request<R: Serialize>(expected: R) -> RequestMatcher<R> {
    RequestMatcher::new(expected)
}

impl<R> fmt::Display for RequestMatcher<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let type_name = std::any::type_name::<R>();
        let short_name = type_name.rsplit("::").next().unwrap_or(type_name);
        match &self.fields {
            Some(fields) => write!(f, "{short_name} equal to {fields}"),
            None => write!(f, "{short_name} (not serialisable, matches nothing)"),
        }
    }
}

impl<R> PredicateReflection for RequestMatcher<R> {}

impl<R: Serialize> Predicate<R> for RequestMatcher<R> {
    fn eval(&self, variable: &R) -> bool {
        self.matches(variable)
    }
}

#[cfg(test)]
mod tests {
    use predicates::Predicate;
    use protocol::messages::{GetWorkflowRequest, ListWorkflowsRequest};
    use rstest::{fixture, rstest};
    use serde::Serialize;

    use super::{eq_request, RequestMatcher};

    #[derive(Debug, Clone, Serialize)]
    struct CachedRequest {
        name: String,
        #[serde(skip)]
        cached_size: usize,
    }

    fn order_lookup() -> GetWorkflowRequest {
        GetWorkflowRequest {
            workflow_key: 0,
            version: 3,
            bpmn_process_id: "order-process".to_string(),
        }
    }

    #[fixture]
    fn expected() -> GetWorkflowRequest {
        order_lookup()
    }

    #[rstest]
    fn distinct_instances_with_equal_fields_match(expected: GetWorkflowRequest) {
        let matcher = eq_request(expected.clone());
        let candidate = expected;

        assert!(matcher.eval(&candidate));
    }

    #[rstest]
    #[case::key(GetWorkflowRequest { workflow_key: 1, ..order_lookup() })]
    #[case::version(GetWorkflowRequest { version: 4, ..order_lookup() })]
    #[case::process_id(GetWorkflowRequest { bpmn_process_id: "order".to_string(), ..order_lookup() })]
    fn a_single_differing_field_fails(expected: GetWorkflowRequest, #[case] candidate: GetWorkflowRequest) {
        assert!(!eq_request(expected).eval(&candidate));
    }

    #[test]
    fn bookkeeping_fields_are_ignored() {
        let matcher = RequestMatcher::new(CachedRequest {
            name: "foo".to_string(),
            cached_size: 0,
        });

        assert!(matcher.matches(&CachedRequest {
            name: "foo".to_string(),
            cached_size: 128,
        }));
        assert!(!matcher.matches(&CachedRequest {
            name: "bar".to_string(),
            cached_size: 0,
        }));
    }

    #[test]
    fn candidates_of_another_type_never_match() {
        let matcher = eq_request(ListWorkflowsRequest::default());

        assert!(matcher.matches_any(&ListWorkflowsRequest::default()));
        assert!(!matcher.matches_any(&GetWorkflowRequest::default()));
        assert!(!matcher.matches_any(&"bpmn_process_id"));
    }

    #[test]
    fn description_names_the_type_and_fields() {
        let matcher = eq_request(ListWorkflowsRequest {
            bpmn_process_id: "foo".to_string(),
        });

        assert_eq!(
            matcher.to_string(),
            r#"ListWorkflowsRequest equal to {"bpmn_process_id":"foo"}"#
        );
    }

    #[test]
    fn expected_request_is_kept_verbatim() {
        let matcher = eq_request(ListWorkflowsRequest {
            bpmn_process_id: "foo".to_string(),
        });
        assert_eq!(matcher.expected().bpmn_process_id, "foo");
    }
}
