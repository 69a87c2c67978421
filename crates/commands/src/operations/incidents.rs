use protocol::{
    messages::{ResolveIncidentRequest, ResolveIncidentResponse},
    IncidentKey,
};

use crate::command::Command;

operation! {
    /// Marks an incident as resolved so the affected instance continues.
    ResolveIncident, ResolveIncidentCommand => resolve_incident(ResolveIncidentRequest) -> ResolveIncidentResponse
}

impl<C: ?Sized> Command<'_, C, ResolveIncident> {
    #[must_use]
    pub fn incident_key(mut self, key: impl Into<IncidentKey>) -> Self {
        self.request.incident_key = key.into().as_i64();
        self
    }
}

#[cfg(test)]
mod tests {
    use protocol::{messages::ResolveIncidentRequest, IncidentKey};
    use test_support::MockGatewayClient;

    use super::ResolveIncidentCommand;

    #[test]
    fn resolve_incident_sets_the_key() {
        let client = MockGatewayClient::new();
        let request = ResolveIncidentCommand::new(&client)
            .incident_key(IncidentKey::new(21))
            .into_request();

        assert_eq!(request, ResolveIncidentRequest { incident_key: 21 });
    }
}
