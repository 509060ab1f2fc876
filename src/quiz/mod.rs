//! The quiz half of the crate: a fixed list of multiple-choice questions
//! asked in order, scored as they are answered, closed out with a summary.
//!
//! [`question`] holds the validated question model and the question
//! sources, [`session`] the cursor/score state machine, and [`runner`] the
//! interactive loop that connects a session to input and output streams.

use thiserror::Error;

pub mod question;
pub mod runner;
pub mod session;

pub use question::{builtin_questions, load_questions, Question, QuestionError};
pub use session::{AnswerOutcome, Quiz, Summary};

#[derive(Error, Debug)]
pub enum QuizError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Invalid question: {0}")]
    Question(#[from] QuestionError),
    #[error("At least one question is required")]
    NoQuestions,
}
