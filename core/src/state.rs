//! The client's memory of its last successful fetch.
//!
//! # Design
//! State is either empty or holds one `HeldSet`; subject and class level live
//! inside the held set, so they cannot be present without questions or vice
//! versa. Nothing is written until a response has parsed as `success: true`.
//!
//! Hosts that run requests themselves may have several in flight at once.
//! Each `begin_fetch` hands out a `FetchTicket` from a monotonically
//! increasing counter and only the newest ticket may commit; older responses
//! are still parsed and returned to their caller but leave state alone.
//! `clear` also advances the counter, so a fetch issued before a clear cannot
//! repopulate the state after it.

use crate::client::QuestionsClient;
use crate::error::ApiError;
use crate::http::{HttpRequest, HttpResponse};
use crate::types::{ClassLevel, Query, Question, QuestionsEnvelope};

/// Sequence number of one issued fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct FetchTicket(u64);

/// A fetch that has been issued but not completed.
#[derive(Debug, Clone)]
pub struct PendingFetch {
    pub ticket: FetchTicket,
    pub query: Query,
    pub request: HttpRequest,
}

/// The question set from the last committed fetch and the query that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeldSet {
    pub subject: String,
    pub class_level: ClassLevel,
    pub year: Option<String>,
    pub questions: Vec<Question>,
}

#[derive(Debug, Default)]
pub struct ClientState {
    held: Option<HeldSet>,
    issued: u64,
}

impl ClientState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Issue a new fetch. Any fetch issued earlier becomes stale.
    pub fn begin_fetch(&mut self, client: &QuestionsClient, query: Query) -> PendingFetch {
        self.issued += 1;
        let request = client.build_fetch_questions(&query);
        log::debug!("fetch #{} -> {}", self.issued, request.url);
        PendingFetch {
            ticket: FetchTicket(self.issued),
            query,
            request,
        }
    }

    /// Parse the response to `pending` and, if it succeeded and is still the
    /// newest fetch, commit its data.
    pub fn complete_fetch(
        &mut self,
        client: &QuestionsClient,
        pending: PendingFetch,
        response: HttpResponse,
    ) -> Result<QuestionsEnvelope, ApiError> {
        let envelope = client.parse_fetch_questions(response).map_err(|err| {
            log::error!(
                "error fetching questions for {}/{}: {err}",
                pending.query.subject,
                pending.query.class_level
            );
            err
        })?;

        if !self.is_current(pending.ticket) {
            log::warn!(
                "discarding stale response for fetch #{} ({}/{}); newest is #{}",
                pending.ticket.0,
                pending.query.subject,
                pending.query.class_level,
                self.issued
            );
            return Ok(envelope);
        }

        self.commit(&pending.query, envelope.data.clone());
        Ok(envelope)
    }

    pub fn is_current(&self, ticket: FetchTicket) -> bool {
        ticket.0 == self.issued
    }

    fn commit(&mut self, query: &Query, questions: Vec<Question>) {
        if questions.is_empty() {
            log::info!("{}/{} returned no questions", query.subject, query.class_level);
            self.held = None;
            return;
        }
        log::info!(
            "loaded {} {} {} questions",
            questions.len(),
            query.class_level,
            query.subject
        );
        self.held = Some(HeldSet {
            subject: query.subject.clone(),
            class_level: query.class_level,
            year: query.year.clone(),
            questions,
        });
    }

    pub fn held(&self) -> Option<&HeldSet> {
        self.held.as_ref()
    }

    /// The held question set, empty when nothing is held.
    pub fn current_questions(&self) -> &[Question] {
        self.held
            .as_ref()
            .map(|h| h.questions.as_slice())
            .unwrap_or_default()
    }

    pub fn subject(&self) -> Option<&str> {
        self.held.as_ref().map(|h| h.subject.as_str())
    }

    pub fn class_level(&self) -> Option<ClassLevel> {
        self.held.as_ref().map(|h| h.class_level)
    }

    pub fn clear(&mut self) {
        self.issued += 1;
        self.held = None;
    }
}
