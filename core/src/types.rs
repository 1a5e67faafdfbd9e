//! Domain DTOs for the questions API.
//!
//! # Design
//! The upstream question schema is inconsistent: question text arrives as
//! `question` or `text`, options as `options` or `option`, correctness as
//! `answer` or `is_correct`, ids and years as numbers or strings. All of that
//! is absorbed here, at deserialization time, through private `Raw*` wire
//! types. The rest of the crate only ever sees the canonical `Question` and
//! `AnswerOption` shapes.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

pub const CHEMISTRY: &str = "chemistry";
pub const PHYSICS: &str = "physics";

/// Shown in place of a question whose text is missing from the payload.
pub const MISSING_QUESTION_TEXT: &str = "Question text not available";

/// Academic grade tier a question set is filtered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClassLevel {
    Ss2,
    Ss3,
}

impl ClassLevel {
    /// Wire form used in request paths.
    pub fn as_str(self) -> &'static str {
        match self {
            ClassLevel::Ss2 => "ss2",
            ClassLevel::Ss3 => "ss3",
        }
    }
}

impl fmt::Display for ClassLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a string is neither `ss2` nor `ss3` (any case).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseClassLevelError(pub String);

impl fmt::Display for ParseClassLevelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid class level {:?}: expected ss2 or ss3", self.0)
    }
}

impl std::error::Error for ParseClassLevelError {}

impl FromStr for ClassLevel {
    type Err = ParseClassLevelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "ss2" => Ok(ClassLevel::Ss2),
            "ss3" => Ok(ClassLevel::Ss3),
            _ => Err(ParseClassLevelError(s.to_string())),
        }
    }
}

/// Parameters of one question fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query {
    pub subject: String,
    pub class_level: ClassLevel,
    pub year: Option<String>,
}

impl Query {
    pub fn new(subject: impl Into<String>, class_level: ClassLevel) -> Self {
        Self {
            subject: subject.into(),
            class_level,
            year: None,
        }
    }

    /// Sets the year filter. Empty strings are treated as no filter.
    pub fn with_year(mut self, year: Option<impl Into<String>>) -> Self {
        self.year = year.map(Into::into).filter(|y| !y.is_empty());
        self
    }
}

/// Question identifier; the backend uses both numeric and string ids.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum QuestionId {
    Number(i64),
    Text(String),
}

impl fmt::Display for QuestionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QuestionId::Number(n) => write!(f, "{n}"),
            QuestionId::Text(s) => f.write_str(s),
        }
    }
}

/// One answer choice in canonical form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RawOption")]
pub struct AnswerOption {
    pub text: String,
    pub correct: bool,
}

impl AnswerOption {
    pub fn new(text: impl Into<String>, correct: bool) -> Self {
        Self {
            text: text.into(),
            correct,
        }
    }
}

/// One exam question in canonical form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RawQuestion")]
pub struct Question {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<QuestionId>,
    pub text: String,
    pub options: Vec<AnswerOption>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub year: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exam_type: Option<String>,
}

/// Body of `GET /questions/{subject}/{classLevel}`.
///
/// `success` is read with JSON truthiness, the same rule the client uses to
/// accept or reject a response. `data` defaults to an empty set and the echo
/// fields are whatever the backend chose to send back.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionsEnvelope {
    #[serde(default, deserialize_with = "truthy_flag")]
    pub success: bool,
    #[serde(default, deserialize_with = "vec_or_null")]
    pub data: Vec<Question>,
    #[serde(default, deserialize_with = "string_or_number", skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(default, deserialize_with = "string_or_number", skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
    #[serde(default, deserialize_with = "string_or_number", skip_serializing_if = "Option::is_none")]
    pub class_level: Option<String>,
    #[serde(default, deserialize_with = "string_or_number", skip_serializing_if = "Option::is_none")]
    pub year: Option<String>,
}

/// Body of `GET /subjects`, passed through unvalidated.
pub type SubjectList = Value;

/// Body of `GET /test-api`, passed through unvalidated.
pub type TestResult = Value;

// ---------------------------------------------------------------------------
// Wire shapes
// ---------------------------------------------------------------------------

#[derive(Deserialize)]
struct RawQuestion {
    #[serde(default)]
    id: Option<QuestionId>,
    #[serde(default, deserialize_with = "string_or_number")]
    question: Option<String>,
    #[serde(default, deserialize_with = "string_or_number")]
    text: Option<String>,
    #[serde(default)]
    options: Option<Vec<RawOption>>,
    #[serde(default)]
    option: Option<Vec<RawOption>>,
    #[serde(default, deserialize_with = "string_or_number")]
    year: Option<String>,
    #[serde(default, deserialize_with = "string_or_number")]
    examtype: Option<String>,
    #[serde(default, deserialize_with = "string_or_number")]
    exam_type: Option<String>,
    #[serde(default, rename = "examType", deserialize_with = "string_or_number")]
    exam_type_camel: Option<String>,
}

impl From<RawQuestion> for Question {
    fn from(raw: RawQuestion) -> Self {
        let text = first_non_empty([raw.question, raw.text])
            .unwrap_or_else(|| MISSING_QUESTION_TEXT.to_string());
        let options = raw
            .options
            .or(raw.option)
            .unwrap_or_default()
            .into_iter()
            .map(AnswerOption::from)
            .collect();
        Question {
            id: raw.id,
            text,
            options,
            year: raw.year.filter(|y| !y.is_empty()),
            exam_type: first_non_empty([raw.examtype, raw.exam_type, raw.exam_type_camel]),
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawOption {
    Bare(String),
    BareNumber(serde_json::Number),
    Entry {
        #[serde(default, deserialize_with = "string_or_number")]
        option: Option<String>,
        #[serde(default, deserialize_with = "string_or_number")]
        text: Option<String>,
        #[serde(default)]
        answer: Option<Value>,
        #[serde(default)]
        is_correct: Option<Value>,
        #[serde(default)]
        correct: Option<Value>,
    },
}

impl From<RawOption> for AnswerOption {
    fn from(raw: RawOption) -> Self {
        match raw {
            RawOption::Bare(text) => AnswerOption {
                text,
                correct: false,
            },
            RawOption::BareNumber(n) => AnswerOption {
                text: n.to_string(),
                correct: false,
            },
            RawOption::Entry {
                option,
                text,
                answer,
                is_correct,
                correct,
            } => AnswerOption {
                text: first_non_empty([option, text]).unwrap_or_default(),
                correct: [answer, is_correct, correct]
                    .iter()
                    .flatten()
                    .any(truthy),
            },
        }
    }
}

fn first_non_empty<const N: usize>(candidates: [Option<String>; N]) -> Option<String> {
    candidates.into_iter().flatten().find(|s| !s.is_empty())
}

/// JSON truthiness: `false`, `0`, `""` and `null` are false, everything else
/// (including empty arrays and objects) is true.
pub(crate) fn truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

fn truthy_flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Value>::deserialize(deserializer)?.is_some_and(|v| truthy(&v)))
}

/// Strings pass through, numbers are printed, anything else reads as absent.
fn string_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        Some(Value::String(s)) => Some(s),
        Some(Value::Number(n)) => Some(n.to_string()),
        _ => None,
    })
}

fn vec_or_null<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn class_level_parses_any_case() {
        assert_eq!("SS2".parse::<ClassLevel>().unwrap(), ClassLevel::Ss2);
        assert_eq!("ss3".parse::<ClassLevel>().unwrap(), ClassLevel::Ss3);
        assert!("ss4".parse::<ClassLevel>().is_err());
    }

    #[test]
    fn query_drops_empty_year() {
        let q = Query::new("physics", ClassLevel::Ss2).with_year(Some(""));
        assert!(q.year.is_none());
        let q = Query::new("physics", ClassLevel::Ss2).with_year(Some("2010"));
        assert_eq!(q.year.as_deref(), Some("2010"));
    }

    #[test]
    fn question_prefers_question_field_over_text() {
        let q: Question = serde_json::from_value(json!({
            "id": 7,
            "question": "What is H2O?",
            "text": "ignored",
            "options": [{"option": "Water", "answer": true}, {"option": "Salt"}],
            "year": 2011,
            "examtype": "utme"
        }))
        .unwrap();
        assert_eq!(q.id, Some(QuestionId::Number(7)));
        assert_eq!(q.text, "What is H2O?");
        assert_eq!(q.year.as_deref(), Some("2011"));
        assert_eq!(q.exam_type.as_deref(), Some("utme"));
        assert_eq!(
            q.options,
            vec![AnswerOption::new("Water", true), AnswerOption::new("Salt", false)]
        );
    }

    #[test]
    fn question_falls_back_to_alternate_field_names() {
        let q: Question = serde_json::from_value(json!({
            "id": "q-1",
            "question": "",
            "text": "Define inertia.",
            "option": [{"text": "Resistance to change", "is_correct": 1}, "Mass"]
        }))
        .unwrap();
        assert_eq!(q.id, Some(QuestionId::Text("q-1".to_string())));
        assert_eq!(q.text, "Define inertia.");
        assert_eq!(
            q.options,
            vec![
                AnswerOption::new("Resistance to change", true),
                AnswerOption::new("Mass", false)
            ]
        );
        assert!(q.year.is_none());
    }

    #[test]
    fn question_without_text_gets_placeholder() {
        let q: Question = serde_json::from_value(json!({})).unwrap();
        assert_eq!(q.text, MISSING_QUESTION_TEXT);
        assert!(q.options.is_empty());
        assert!(q.id.is_none());
    }

    #[test]
    fn correctness_follows_json_truthiness() {
        let opts: Vec<AnswerOption> = serde_json::from_value(json!([
            {"option": "a", "answer": false},
            {"option": "b", "answer": 0},
            {"option": "c", "answer": ""},
            {"option": "d", "answer": null},
            {"option": "e", "answer": "yes"},
            {"option": "f", "is_correct": true}
        ]))
        .unwrap();
        let flags: Vec<bool> = opts.iter().map(|o| o.correct).collect();
        assert_eq!(flags, vec![false, false, false, false, true, true]);
    }

    #[test]
    fn canonical_question_deserializes_back_to_itself() {
        let q = Question {
            id: Some(QuestionId::Number(3)),
            text: "Speed of light?".to_string(),
            options: vec![AnswerOption::new("3e8 m/s", true)],
            year: Some("2015".to_string()),
            exam_type: Some("waec".to_string()),
        };
        let back: Question = serde_json::from_str(&serde_json::to_string(&q).unwrap()).unwrap();
        assert_eq!(back, q);
    }

    #[test]
    fn envelope_success_flag_follows_truthiness() {
        let env: QuestionsEnvelope =
            serde_json::from_value(json!({"success": 1, "data": [{"question": "Q", "options": []}]})).unwrap();
        assert!(env.success);
        assert_eq!(env.data.len(), 1);

        let env: QuestionsEnvelope = serde_json::from_value(json!({"success": "false"})).unwrap();
        assert!(env.success);

        let env: QuestionsEnvelope = serde_json::from_value(json!({"success": 0})).unwrap();
        assert!(!env.success);
    }

    #[test]
    fn numeric_scalars_do_not_sink_the_set() {
        let env: QuestionsEnvelope = serde_json::from_value(json!({
            "success": true,
            "data": [
                {"question": "Fine", "options": [{"option": "a"}], "examtype": "utme"},
                {"question": 12, "options": [{"option": 4, "answer": true}, 7], "examtype": 2}
            ]
        }))
        .unwrap();
        assert_eq!(env.data.len(), 2);
        let odd = &env.data[1];
        assert_eq!(odd.text, "12");
        assert_eq!(odd.exam_type.as_deref(), Some("2"));
        assert_eq!(
            odd.options,
            vec![AnswerOption::new("4", true), AnswerOption::new("7", false)]
        );
    }

    #[test]
    fn non_scalar_text_reads_as_missing() {
        let q: Question = serde_json::from_value(json!({"question": {"nested": true}, "examtype": [1]})).unwrap();
        assert_eq!(q.text, MISSING_QUESTION_TEXT);
        assert!(q.exam_type.is_none());
    }

    #[test]
    fn envelope_treats_null_data_as_empty() {
        let env: QuestionsEnvelope =
            serde_json::from_value(json!({"success": true, "data": null, "year": null})).unwrap();
        assert!(env.data.is_empty());
        assert!(env.year.is_none());
    }
}
