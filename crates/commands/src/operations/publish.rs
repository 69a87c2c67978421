use std::time::Duration;

use protocol::messages::{PublishMessageRequest, PublishMessageResponse};

use crate::command::Command;

operation! {
    /// Publishes a message for correlation with waiting workflow instances.
    PublishMessage, PublishMessageCommand => publish_message(PublishMessageRequest) -> PublishMessageResponse
}

impl<C: ?Sized> Command<'_, C, PublishMessage> {
    /// Message name, matched against message catch events.
    #[must_use]
    pub fn message_name(mut self, name: impl Into<String>) -> Self {
        self.request.name = name.into();
        self
    }

    #[must_use]
    pub fn correlation_key(mut self, correlation_key: impl Into<String>) -> Self {
        self.request.correlation_key = correlation_key.into();
        self
    }

    /// How long the gateway buffers the message if nothing correlates.
    ///
    /// Sent in whole milliseconds; durations beyond `i64::MAX` ms saturate.
    #[must_use]
    pub fn time_to_live(mut self, time_to_live: Duration) -> Self {
        self.request.time_to_live = i64::try_from(time_to_live.as_millis()).unwrap_or(i64::MAX);
        self
    }

    #[must_use]
    pub fn message_id(mut self, message_id: impl Into<String>) -> Self {
        self.request.message_id = message_id.into();
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
}
