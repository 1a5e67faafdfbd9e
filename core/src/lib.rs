//! Client core for the exam questions API.
//!
//! # Overview
//! Fetches question sets from `GET {base}/questions/{subject}/{classLevel}`,
//! remembers the last successful set together with the query that produced
//! it, and renders a set as an HTML fragment into a `Document` element.
//!
//! # Design
//! - `QuestionsClient` is stateless: `build_*` produces an `HttpRequest`,
//!   `parse_*` consumes an `HttpResponse` (host-does-IO pattern).
//! - `ClientState` owns the held set and orders overlapping fetches with
//!   `FetchTicket`s so a stale response never overwrites a newer one.
//! - `QuestionsSession` is the one-call form over a blocking `Transport`.
//! - Wire aliases are normalized in `types`; rendering goes through the typed
//!   `view` model and escapes all backend text.
//! - Logging goes through the `log` facade; the host picks the logger.

pub mod client;
pub mod dom;
pub mod error;
pub mod http;
pub mod render;
pub mod session;
pub mod state;
pub mod transport;
pub mod types;
pub mod view;

pub use client::{QuestionsClient, DEFAULT_BASE_URL};
pub use dom::{Document, Element, MemoryDocument};
pub use error::ApiError;
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use render::{render_options, render_question_set};
pub use session::QuestionsSession;
pub use state::{ClientState, FetchTicket, HeldSet, PendingFetch};
pub use transport::{Transport, UreqTransport};
pub use types::{AnswerOption, ClassLevel, Query, Question, QuestionId, QuestionsEnvelope, SubjectList, TestResult};
pub use view::QuestionSetView;
