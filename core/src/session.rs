//! One-call questions client: build, execute, parse and remember.
//!
//! # Design
//! `QuestionsSession` glues `QuestionsClient`, a `Transport` and a
//! `ClientState` together for hosts that are happy to block on each request.
//! Mutating calls take `&mut self`, so a session never has two fetches in
//! flight. Hosts that want overlapping requests use `ClientState`'s
//! `begin_fetch` / `complete_fetch` directly.
//!
//! Every failure is logged where it happens and then returned unchanged.

use crate::client::QuestionsClient;
use crate::dom::Document;
use crate::error::ApiError;
use crate::render::{render_options, render_question_set};
use crate::state::ClientState;
use crate::transport::{Transport, UreqTransport};
use crate::types::{
    AnswerOption, ClassLevel, Query, Question, QuestionsEnvelope, SubjectList, TestResult, CHEMISTRY,
    PHYSICS,
};
use crate::view::QuestionSetView;

pub struct QuestionsSession<T = UreqTransport> {
    client: QuestionsClient,
    transport: T,
    state: ClientState,
}

impl QuestionsSession<UreqTransport> {
    /// Session talking to `base_url` over a fresh `ureq` agent.
    pub fn connect(base_url: &str) -> Self {
        Self::new(QuestionsClient::new(base_url), UreqTransport::new())
    }
}

impl<T: Transport> QuestionsSession<T> {
    pub fn new(client: QuestionsClient, transport: T) -> Self {
        Self {
            client,
            transport,
            state: ClientState::new(),
        }
    }

    pub fn client(&self) -> &QuestionsClient {
        &self.client
    }

    pub fn state(&self) -> &ClientState {
        &self.state
    }

    pub fn fetch_questions(
        &mut self,
        subject: &str,
        class_level: ClassLevel,
        year: Option<&str>,
    ) -> Result<QuestionsEnvelope, ApiError> {
        self.fetch(Query::new(subject, class_level).with_year(year))
    }

    pub fn fetch(&mut self, query: Query) -> Result<QuestionsEnvelope, ApiError> {
        let pending = self.state.begin_fetch(&self.client, query);
        let response = self.transport.execute(&pending.request).map_err(|err| {
            log::error!(
                "error fetching questions for {}/{}: {err}",
                pending.query.subject,
                pending.query.class_level
            );
            err
        })?;
        self.state.complete_fetch(&self.client, pending, response)
    }

    pub fn fetch_ss2_chemistry(&mut self, year: Option<&str>) -> Result<QuestionsEnvelope, ApiError> {
        self.fetch_questions(CHEMISTRY, ClassLevel::Ss2, year)
    }

    pub fn fetch_ss3_chemistry(&mut self, year: Option<&str>) -> Result<QuestionsEnvelope, ApiError> {
        self.fetch_questions(CHEMISTRY, ClassLevel::Ss3, year)
    }

    pub fn fetch_ss2_physics(&mut self, year: Option<&str>) -> Result<QuestionsEnvelope, ApiError> {
        self.fetch_questions(PHYSICS, ClassLevel::Ss2, year)
    }

    pub fn fetch_ss3_physics(&mut self, year: Option<&str>) -> Result<QuestionsEnvelope, ApiError> {
        self.fetch_questions(PHYSICS, ClassLevel::Ss3, year)
    }

    /// Body of `GET /subjects`, unvalidated. Does not touch state.
    pub fn get_available_subjects(&self) -> Result<SubjectList, ApiError> {
        let request = self.client.build_get_subjects();
        self.transport
            .execute(&request)
            .and_then(|response| self.client.parse_get_subjects(response))
            .map_err(|err| {
                log::error!("error fetching subjects: {err}");
                err
            })
    }

    /// Body of `GET /test-api`, unvalidated. Does not touch state.
    pub fn test_connection(&self) -> Result<TestResult, ApiError> {
        let request = self.client.build_test_connection();
        self.transport
            .execute(&request)
            .and_then(|response| self.client.parse_test_connection(response))
            .map_err(|err| {
                log::error!("error testing API connection: {err}");
                err
            })
    }

    /// Render `questions` (or the held set) into the element `container_id`.
    /// A missing element is logged and otherwise ignored.
    pub fn render(&self, document: &mut dyn Document, container_id: &str, questions: Option<&[Question]>) {
        let Some(container) = document.element_by_id(container_id) else {
            log::error!("container with id '{container_id}' not found");
            return;
        };
        let view = QuestionSetView::build(&self.state, questions);
        container.set_inner_html(render_question_set(&view));
    }

    pub fn render_options(&self, options: &[AnswerOption]) -> String {
        render_options(options)
    }

    pub fn current_questions(&self) -> &[Question] {
        self.state.current_questions()
    }

    pub fn clear_questions(&mut self) {
        self.state.clear();
    }
}
