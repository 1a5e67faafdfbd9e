//! Typed view model for a rendered question set.
//!
//! Everything the HTML renderer needs is decided here (numbering, option
//! letters, heading text, which tags appear) so the renderer only formats.

use crate::state::ClientState;
use crate::types::{AnswerOption, Question};

/// A question set ready to render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuestionSetView {
    /// Nothing to show; rendered as the "no questions" placeholder.
    Empty,
    Populated {
        heading: Heading,
        questions: Vec<QuestionView>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Heading {
    /// Held subject with its first letter upper-cased, or `Questions`.
    pub subject: String,
    /// Held class level upper-cased, or empty.
    pub class_level: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionView {
    /// Question id, or its 0-based position when the question has none.
    pub key: String,
    /// 1-based position in the set.
    pub number: usize,
    pub text: String,
    pub options: Vec<OptionRow>,
    pub year: Option<String>,
    pub exam_type: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionRow {
    pub letter: String,
    pub text: String,
    pub correct: bool,
}

impl QuestionSetView {
    /// View of `questions`, or of the held set when `questions` is `None`.
    /// The heading always describes the held query.
    pub fn build(state: &ClientState, questions: Option<&[Question]>) -> Self {
        let questions = questions.unwrap_or_else(|| state.current_questions());
        if questions.is_empty() {
            return QuestionSetView::Empty;
        }
        let heading = Heading {
            subject: state
                .subject()
                .map(capitalize)
                .unwrap_or_else(|| "Questions".to_string()),
            class_level: state
                .class_level()
                .map(|c| c.as_str().to_ascii_uppercase())
                .unwrap_or_default(),
        };
        let questions = questions
            .iter()
            .enumerate()
            .map(|(index, q)| QuestionView {
                key: q
                    .id
                    .as_ref()
                    .map_or_else(|| index.to_string(), ToString::to_string),
                number: index + 1,
                text: q.text.clone(),
                options: option_rows(&q.options),
                year: q.year.clone(),
                exam_type: q.exam_type.clone(),
            })
            .collect();
        QuestionSetView::Populated { heading, questions }
    }
}

pub fn option_rows(options: &[AnswerOption]) -> Vec<OptionRow> {
    options
        .iter()
        .enumerate()
        .map(|(index, o)| OptionRow {
            letter: option_letter(index),
            text: o.text.clone(),
            correct: o.correct,
        })
        .collect()
}

/// `0 -> A`, `25 -> Z`, `26 -> AA`, `27 -> AB`, ...
pub fn option_letter(index: usize) -> String {
    let mut n = index + 1;
    let mut letters = Vec::new();
    while n > 0 {
        n -= 1;
        letters.push(b'A' + (n % 26) as u8);
        n /= 26;
    }
    letters.reverse();
    String::from_utf8(letters).unwrap_or_default()
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
