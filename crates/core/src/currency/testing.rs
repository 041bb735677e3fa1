//! In-memory rate source for tests.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use super::request::{CandidateField, RateRequest};
use super::source::{RateSource, SourceError};

/// Canned outcome for one candidate field.
#[derive(Debug, Clone)]
pub(crate) enum Reply {
    Body(String),
    Empty,
    Status(u16),
    Transport,
}

/// Answers each candidate field with a fixed reply and records every request.
///
/// Fields without a scripted reply get an empty body.
#[derive(Debug, Clone, Default)]
pub(crate) struct ScriptedSource {
    replies: Arc<HashMap<CandidateField, Reply>>,
    requests: Arc<Mutex<Vec<RateRequest>>>,
}

impl ScriptedSource {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn reply(mut self, field: CandidateField, reply: Reply) -> Self {
        Arc::make_mut(&mut self.replies).insert(field, reply);
        self
    }

    pub(crate) fn requests(&self) -> Vec<RateRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl RateSource for ScriptedSource {
    async fn fetch(&self, request: &RateRequest) -> Result<Option<String>, SourceError> {
        self.requests.lock().unwrap().push(request.clone());

        match self.replies.get(&request.field).cloned().unwrap_or(Reply::Empty) {
            Reply::Body(body) => Ok(Some(body)),
            Reply::Empty => Ok(None),
            Reply::Status(status) => Err(SourceError::Status(status)),
            Reply::Transport => Err(SourceError::Transport("connection reset".to_string())),
        }
    }
}
