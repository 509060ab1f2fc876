use std::fmt;

use chrono::{DateTime, Utc};

use super::question::Question;
use super::QuizError;

const BANNER: &str = "==================================================";

/// Outcome of feeding one line of input to [`Quiz::answer`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnswerOutcome {
    /// The guess matched; score and cursor advanced.
    Correct,
    /// The guess did not match; only the cursor advanced.
    Incorrect { correct_answer: String },
    /// Blank input. Nothing advanced, ask again.
    EmptyInput,
    /// A choice number outside the valid range. Nothing advanced.
    InvalidChoice,
    /// Every question has already been answered.
    Finished,
}

/// A quiz session: an ordered question list, a cursor, a running score and
/// the timestamps needed for the elapsed-time figure in the summary.
///
/// The cursor only ever moves forward, and only when an answer is scored.
/// Questions are asked in the order given, each exactly once.
#[derive(Debug, Clone)]
pub struct Quiz {
    questions: Vec<Question>,
    cursor: usize,
    score: usize,
    started_at: Option<DateTime<Utc>>,
    finished_at: Option<DateTime<Utc>>,
}

impl Quiz {
    pub fn new(questions: Vec<Question>) -> Result<Self, QuizError> {
        if questions.is_empty() {
            return Err(QuizError::NoQuestions);
        }

        Ok(Self {
            questions,
            cursor: 0,
            score: 0,
            started_at: None,
            finished_at: None,
        })
    }

    /// Marks the start of the session. The elapsed time in the summary is
    /// measured from here.
    pub fn start(&mut self) {
        self.started_at = Some(Utc::now());
    }

    /// The question the cursor points at, or `None` once the session is
    /// complete.
    pub fn current_question(&self) -> Option<&Question> {
        self.questions.get(self.cursor)
    }

    /// Scores one line of raw input against the current question.
    ///
    /// Input that is all ASCII digits is treated as a choice number and
    /// resolved to that choice's text; anything else is compared literally.
    /// Only `Correct` and `Incorrect` advance the cursor, so the caller can
    /// keep re-reading input until one of those comes back.
    pub fn answer(&mut self, raw: &str) -> AnswerOutcome {
        let Some(question) = self.questions.get(self.cursor) else {
            return AnswerOutcome::Finished;
        };

        let raw = raw.trim();
        if raw.is_empty() {
            return AnswerOutcome::EmptyInput;
        }

        let guess = if raw.chars().all(|c| c.is_ascii_digit()) {
            let choice = raw
                .parse::<usize>()
                .ok()
                .and_then(|n| n.checked_sub(1))
                .and_then(|i| question.choices().get(i));
            match choice {
                Some(text) => text.clone(),
                None => return AnswerOutcome::InvalidChoice,
            }
        } else {
            raw.to_string()
        };

        let correct = question.check_answer(&guess);
        let correct_answer = question.answer().to_string();

        self.cursor += 1;
        if correct {
            self.score += 1;
            AnswerOutcome::Correct
        } else {
            AnswerOutcome::Incorrect { correct_answer }
        }
    }

    /// Stamps the end time and returns the summary. `None` while questions
    /// remain. Calling it twice keeps the first end time.
    pub fn finish(&mut self) -> Option<Summary> {
        if !self.is_finished() {
            return None;
        }
        if self.finished_at.is_none() {
            self.finished_at = Some(Utc::now());
        }
        self.summary()
    }

    /// The summary, once the session has been started, fully answered and
    /// finished.
    pub fn summary(&self) -> Option<Summary> {
        if !self.is_finished() {
            return None;
        }
        let started_at = self.started_at?;
        let finished_at = self.finished_at?;

        let total = self.questions.len();
        let correct = self.score;
        Some(Summary {
            total,
            correct,
            incorrect: total - correct,
            percent: (correct as f64 / total as f64) * 100.0,
            elapsed_seconds: (finished_at - started_at).num_milliseconds() as f64 / 1000.0,
        })
    }

    pub fn is_finished(&self) -> bool {
        self.cursor >= self.questions.len()
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn score(&self) -> usize {
        self.score
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }
}

/// End-of-session report. `correct + incorrect` always equals `total`.
#[derive(Debug, Clone, PartialEq)]
pub struct Summary {
    pub total: usize,
    pub correct: usize,
    pub incorrect: usize,
    /// Share of correct answers, `0.0..=100.0`.
    pub percent: f64,
    pub elapsed_seconds: f64,
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", BANNER)?;
        writeln!(f, "QUIZ FINISHED!")?;
        writeln!(f, "{}", BANNER)?;
        writeln!(f, "Total questions: {}", self.total)?;
        writeln!(f, "Correct answers: {}", self.correct)?;
        writeln!(f, "Wrong answers: {}", self.incorrect)?;
        writeln!(f, "Success rate: {:.1}%", self.percent)?;
        writeln!(f, "Time: {:.1} seconds", self.elapsed_seconds)?;
        write!(f, "{}", BANNER)
    }
}
