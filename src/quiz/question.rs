use std::fs;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use super::QuizError;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum QuestionError {
    #[error("Question text cannot be empty")]
    EmptyText,
    #[error("A question needs at least two choices")]
    TooFewChoices,
    #[error("The answer must be one of the choices")]
    AnswerNotInChoices,
}

/// A single multiple-choice question, immutable once constructed.
///
/// Construction trims the text, every choice and the answer, then checks
/// that the text is non-empty, that there are at least two choices and that
/// the answer equals one of the choices. A bad question is a mistake in the
/// question set, not a user error, so these fail loudly at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    text: String,
    choices: Vec<String>,
    answer: String,
}

impl Question {
    pub fn new(text: String, choices: Vec<String>, answer: String) -> Result<Self, QuestionError> {
        let text = text.trim().to_string();
        if text.is_empty() {
            return Err(QuestionError::EmptyText);
        }

        let choices: Vec<String> = choices.iter().map(|c| c.trim().to_string()).collect();
        if choices.len() < 2 {
            return Err(QuestionError::TooFewChoices);
        }

        let answer = answer.trim().to_string();
        if !choices.contains(&answer) {
            return Err(QuestionError::AnswerNotInChoices);
        }

        Ok(Self {
            text,
            choices,
            answer,
        })
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn choices(&self) -> &[String] {
        &self.choices
    }

    pub fn answer(&self) -> &str {
        &self.answer
    }

    /// Case-insensitive, whitespace-trimmed comparison against the stored
    /// answer: `" c++ "` matches an answer of `"C++"`.
    pub fn check_answer(&self, guess: &str) -> bool {
        self.answer.to_lowercase() == guess.trim().to_lowercase()
    }
}

/// On-disk question shape; every record is validated through
/// [`Question::new`] when loaded.
#[derive(Debug, Deserialize)]
struct RawQuestion {
    text: String,
    choices: Vec<String>,
    answer: String,
}

/// Reads a question file: a JSON array of `{text, choices, answer}`
/// objects.
pub fn load_questions<P: AsRef<Path>>(path: P) -> Result<Vec<Question>, QuizError> {
    let contents = fs::read_to_string(path)?;
    let raw: Vec<RawQuestion> = serde_json::from_str(&contents)?;
    raw.into_iter()
        .map(|q| Question::new(q.text, q.choices, q.answer).map_err(QuizError::from))
        .collect()
}

/// The built-in question set used when no question file is given.
pub fn builtin_questions() -> Result<Vec<Question>, QuestionError> {
    let sets: [(&str, &[&str], &str); 5] = [
        (
            "Which programming language is the best?",
            &["C++", "Java", "Python", "Javascript"],
            "C++",
        ),
        (
            "Which programming paradigm does Python support?",
            &["Object-oriented", "Functional", "Procedural", "All of them"],
            "All of them",
        ),
        (
            "Is HTML a programming language?",
            &["Yes", "No", "Partially", "Only on the backend"],
            "No",
        ),
        (
            "Which data structure works on a LIFO (Last-In-First-Out) basis?",
            &["Queue", "Stack", "Linked List", "Tree"],
            "Stack",
        ),
        (
            "What is SQL used for?",
            &[
                "Database operations",
                "Web design",
                "Mobile app development",
                "Game programming",
            ],
            "Database operations",
        ),
    ];

    sets.iter()
        .map(|(text, choices, answer)| {
            Question::new(
                text.to_string(),
                choices.iter().map(|c| c.to_string()).collect(),
                answer.to_string(),
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn question(text: &str, choices: &[&str], answer: &str) -> Result<Question, QuestionError> {
        Question::new(
            text.to_string(),
            choices.iter().map(|c| c.to_string()).collect(),
            answer.to_string(),
        )
    }

    #[test]
    fn test_construction_trims_every_field() {
        let q = question(" 2 + 2? ", &[" 3 ", " 4 "], " 4 ").unwrap();
        assert_eq!(q.text(), "2 + 2?");
        assert_eq!(q.choices(), ["3", "4"]);
        assert_eq!(q.answer(), "4");
    }

    #[test]
    fn test_empty_text_is_rejected() {
        assert_eq!(
            question("   ", &["a", "b"], "a").unwrap_err(),
            QuestionError::EmptyText
        );
    }

    #[test]
    fn test_fewer_than_two_choices_is_rejected() {
        assert_eq!(
            question("Pick one", &["a"], "a").unwrap_err(),
            QuestionError::TooFewChoices
        );
    }

    #[test]
    fn test_answer_must_be_one_of_the_choices() {
        assert_eq!(
            question("Pick one", &["a", "b"], "c").unwrap_err(),
            QuestionError::AnswerNotInChoices
        );
    }

    #[test]
    fn test_check_answer_ignores_case_and_whitespace() {
        let q = question("Best language?", &["C++", "Java"], "C++").unwrap();
        assert!(q.check_answer(" c++ "));
        assert!(q.check_answer("C++"));
        assert!(!q.check_answer("Java "));
        assert!(!q.check_answer("c+"));
    }

    #[test]
    fn test_builtin_set_is_valid() {
        let questions = builtin_questions().unwrap();
        assert_eq!(questions.len(), 5);
        assert!(questions
            .iter()
            .all(|q| q.choices().contains(&q.answer().to_string())));
    }

    #[test]
    fn test_load_questions_from_a_file() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("questions.json");
        fs::write(
            &path,
            r#"[{"text": "2 + 2?", "choices": ["3", "4"], "answer": "4"}]"#,
        )
        .unwrap();

        let questions = load_questions(&path).unwrap();
        assert_eq!(questions.len(), 1);
        assert_eq!(questions[0].text(), "2 + 2?");
    }

    #[test]
    fn test_load_rejects_invalid_questions() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("questions.json");
        fs::write(
            &path,
            r#"[{"text": "2 + 2?", "choices": ["3", "4"], "answer": "5"}]"#,
        )
        .unwrap();

        assert!(matches!(
            load_questions(&path),
            Err(QuizError::Question(QuestionError::AnswerNotInChoices))
        ));
    }

    #[test]
    fn test_load_rejects_malformed_json() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("questions.json");
        fs::write(&path, "not json").unwrap();

        assert!(matches!(load_questions(&path), Err(QuizError::Parse(_))));
    }

    #[test]
    fn test_load_missing_file_is_an_io_error() {
        assert!(matches!(
            load_questions("/nonexistent/questions.json"),
            Err(QuizError::Io(_))
        ));
    }
}
