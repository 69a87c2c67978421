//! Job commands issued by workers: complete, fail, update retries.

use protocol::{
    messages::{
        CompleteJobRequest, CompleteJobResponse, FailJobRequest, FailJobResponse,
        UpdateJobRetriesRequest, UpdateJobRetriesResponse,
    },
    JobKey,
};

use crate::command::Command;

operation! {
    /// Completes a job, optionally merging result variables.
    CompleteJob, CompleteJobCommand => complete_job(CompleteJobRequest) -> CompleteJobResponse
}

impl<C: ?Sized> Command<'_, C, CompleteJob> {
    #[must_use]
    pub fn job_key(mut self, key: impl Into<JobKey>) -> Self {
        self.request.job_key = key.into().as_i64();
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

operation! {
    /// Reports a job as failed.
    ///
    /// With `retries` at zero the gateway raises an incident instead of
    /// making the job available again.
    FailJob, FailJobCommand => fail_job(FailJobRequest) -> FailJobResponse
}

impl<C: ?Sized> Command<'_, C, FailJob> {
    #[must_use]
    pub fn job_key(mut self, key: impl Into<JobKey>) -> Self {
        self.request.job_key = key.into().as_i64();
        self
    }

    /// Remaining retries after this failure.
    #[must_use]
    pub fn retries(mut self, retries: i32) -> Self {
        self.request.retries = retries;
        self
    }

    #[must_use]
    pub fn error_message(mut self, message: impl Into<String>) -> Self {
        self.request.error_message = message.into();
        self
    }
}

operation! {
    UpdateJobRetries, UpdateJobRetriesCommand
        => update_job_retries(UpdateJobRetriesRequest) -> UpdateJobRetriesResponse
}

impl<C: ?Sized> Command<'_, C, UpdateJobRetries> {
    #[must_use]
    pub fn job_key(mut self, key: impl Into<JobKey>) -> Self {
        self.request.job_key = key.into().as_i64();
        self
    }

    #[must_use]
    pub fn retries(mut self, retries: i32) -> Self {
        self.request.retries = retries;
        self
    }
}
