use std::{collections::HashMap, sync::Arc};

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tokio::net::TcpListener;

/// Subjects the backend accepts, with their display names.
pub const SUBJECTS: [(&str, &str); 12] = [
    ("chemistry", "Chemistry"),
    ("physics", "Physics"),
    ("mathematics", "Mathematics"),
    ("biology", "Biology"),
    ("english", "English Language"),
    ("economics", "Economics"),
    ("geography", "Geography"),
    ("government", "Government"),
    ("history", "History"),
    ("commerce", "Commerce"),
    ("accounting", "Accounting"),
    ("insurance", "Insurance"),
];

pub const CLASS_LEVELS: [&str; 2] = ["ss2", "ss3"];

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StoredOption {
    pub option: String,
    #[serde(default)]
    pub answer: bool,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StoredQuestion {
    pub id: u64,
    pub question: String,
    pub options: Vec<StoredOption>,
    pub year: String,
    pub examtype: String,
}

/// Questions keyed by `(subject, class level)`, both lower-case.
#[derive(Clone, Debug, Default)]
pub struct QuestionBank {
    sets: HashMap<(String, String), Vec<StoredQuestion>>,
}

impl QuestionBank {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, subject: &str, class_level: &str, question: StoredQuestion) {
        self.sets
            .entry((subject.to_lowercase(), class_level.to_lowercase()))
            .or_default()
            .push(question);
    }

    /// Questions for one pair, optionally restricted to one year.
    pub fn select(&self, subject: &str, class_level: &str, year: Option<&str>) -> Vec<StoredQuestion> {
        self.sets
            .get(&(subject.to_string(), class_level.to_string()))
            .map(|qs| {
                qs.iter()
                    .filter(|q| year.map_or(true, |y| q.year == y))
                    .cloned()
                    .collect()
            })
            .unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.sets.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// A small bank covering the chemistry and physics presets.
    pub fn sample() -> Self {
        let mut bank = Self::new();
        let q = |id: u64, question: &str, options: [(&str, bool); 4], year: &str| StoredQuestion {
            id,
            question: question.to_string(),
            options: options
                .iter()
                .map(|(text, answer)| StoredOption {
                    option: text.to_string(),
                    answer: *answer,
                })
                .collect(),
            year: year.to_string(),
            examtype: "utme".to_string(),
        };
        bank.insert(
            "chemistry",
            "ss2",
            q(1, "Which gas is evolved when zinc reacts with dilute HCl?", [("Oxygen", false), ("Hydrogen", true), ("Chlorine", false), ("Nitrogen", false)], "2010"),
        );
        bank.insert(
            "chemistry",
            "ss2",
            q(2, "The pH of a neutral solution at 25°C is", [("0", false), ("1", false), ("7", true), ("14", false)], "2012"),
        );
        bank.insert(
            "chemistry",
            "ss3",
            q(3, "Which of these is an alkane?", [("C2H4", false), ("C2H2", false), ("C6H6", false), ("C2H6", true)], "2015"),
        );
        bank.insert(
            "physics",
            "ss2",
            q(4, "The SI unit of force is the", [("Joule", false), ("Newton", true), ("Watt", false), ("Pascal", false)], "2010"),
        );
        bank.insert(
            "physics",
            "ss3",
            q(5, "Which wave needs no material medium?", [("Sound", false), ("Water", false), ("Light", true), ("Seismic", false)], "2014"),
        );
        bank
    }
}

pub type Bank = Arc<QuestionBank>;

#[derive(Deserialize)]
pub struct YearFilter {
    pub year: Option<String>,
}

pub fn app() -> Router {
    app_with(QuestionBank::sample())
}

pub fn app_with(bank: QuestionBank) -> Router {
    let api = Router::new()
        .route("/questions/{subject}/{class_level}", get(get_questions))
        .route("/subjects", get(get_subjects))
        .route("/test-api", get(test_api))
        .with_state(Arc::new(bank));
    Router::new().nest("/api", api)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

fn failure(status: StatusCode, error: String) -> (StatusCode, Json<Value>) {
    (status, Json(json!({ "success": false, "error": error })))
}

async fn get_questions(
    State(bank): State<Bank>,
    Path((subject, class_level)): Path<(String, String)>,
    Query(filter): Query<YearFilter>,
) -> (StatusCode, Json<Value>) {
    let subject_key = subject.to_lowercase();
    let level_key = class_level.to_lowercase();

    if !CLASS_LEVELS.contains(&level_key.as_str()) {
        return failure(
            StatusCode::BAD_REQUEST,
            "Invalid class level. Must be SS2 or SS3".to_string(),
        );
    }
    if !SUBJECTS.iter().any(|(key, _)| *key == subject_key) {
        let known: Vec<&str> = SUBJECTS.iter().map(|(key, _)| *key).collect();
        return failure(
            StatusCode::BAD_REQUEST,
            format!("Invalid subject. Available subjects: {}", known.join(", ")),
        );
    }

    let year = filter.year.filter(|y| !y.is_empty());
    let data = bank.select(&subject_key, &level_key, year.as_deref());
    log::debug!("{subject_key}/{level_key} year={year:?}: {} questions", data.len());
    (
        StatusCode::OK,
        Json(json!({
            "success": true,
            "subject": subject,
            "class_level": level_key.to_uppercase(),
            "year": year,
            "data": data,
        })),
    )
}

async fn get_subjects() -> Json<Value> {
    let subjects: serde_json::Map<String, Value> = SUBJECTS
        .iter()
        .map(|(key, name)| (key.to_string(), Value::from(*name)))
        .collect();
    Json(json!({
        "success": true,
        "subjects": subjects,
        "class_levels": ["SS2", "SS3"],
    }))
}

async fn test_api(State(bank): State<Bank>) -> Json<Value> {
    Json(json!({
        "success": true,
        "message": "API connection test",
        "result": { "success": true, "questions": bank.len() },
    }))
}
