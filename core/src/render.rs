//! HTML rendering of `QuestionSetView`.
//!
//! All text coming from the backend is escaped before interpolation.

use crate::types::AnswerOption;
use crate::view::{option_rows, OptionRow, QuestionSetView, QuestionView};

pub const NO_QUESTIONS_HTML: &str = "<p>No questions available.</p>";
pub const NO_OPTIONS_HTML: &str = "<p>No options available</p>";

/// Escape text for use in element content and double- or single-quoted attributes.
pub fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

pub fn render_question_set(view: &QuestionSetView) -> String {
    let (heading, questions) = match view {
        QuestionSetView::Empty => return NO_QUESTIONS_HTML.to_string(),
        QuestionSetView::Populated { heading, questions } => (heading, questions),
    };

    let mut html = String::from("<div class=\"questions-container\">\n");
    html.push_str(&format!(
        "<h3>{} - {}</h3>\n",
        escape_html(&heading.subject),
        escape_html(&heading.class_level)
    ));
    html.push_str("<div class=\"questions-list\">\n");
    for question in questions {
        render_question(&mut html, question);
    }
    html.push_str("</div>\n</div>\n");
    html
}

fn render_question(html: &mut String, q: &QuestionView) {
    html.push_str(&format!(
        "<div class=\"question-item\" data-question-id=\"{}\">\n",
        escape_html(&q.key)
    ));
    html.push_str(&format!(
        "<div class=\"question-text\"><strong>Question {}:</strong> {}</div>\n",
        q.number,
        escape_html(&q.text)
    ));
    html.push_str("<div class=\"question-options\">\n");
    html.push_str(&render_option_rows(&q.options));
    html.push_str("</div>\n<div class=\"question-meta\">");
    if let Some(year) = &q.year {
        html.push_str(&format!("<span class=\"year\">Year: {}</span>", escape_html(year)));
    }
    if let Some(exam) = &q.exam_type {
        html.push_str(&format!("<span class=\"exam-type\">Exam: {}</span>", escape_html(exam)));
    }
    html.push_str("</div>\n</div>\n");
}

/// One lettered row per option; correct rows are flagged.
pub fn render_options(options: &[AnswerOption]) -> String {
    render_option_rows(&option_rows(options))
}

fn render_option_rows(rows: &[OptionRow]) -> String {
    if rows.is_empty() {
        return format!("{NO_OPTIONS_HTML}\n");
    }
    let mut html = String::from("<div class=\"options-list\">\n");
    for row in rows {
        let (class, indicator) = if row.correct {
            (" correct-option", "<span class=\"correct-indicator\">✓</span>")
        } else {
            ("", "")
        };
        html.push_str(&format!(
            "<div class=\"option-item{class}\"><span class=\"option-letter\">{}.</span><span class=\"option-text\">{}</span>{indicator}</div>\n",
            row.letter,
            escape_html(&row.text)
        ));
    }
    html.push_str("</div>\n");
    html
}
