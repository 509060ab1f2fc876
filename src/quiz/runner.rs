use std::io::{self, BufRead, Write};
use std::thread;
use std::time::Duration;

use super::session::{AnswerOutcome, Quiz, Summary};

/// Runs the prompt/read/score loop over `input`/`out` until every question
/// is answered, then prints and returns the summary.
///
/// `delay` is the pause inserted after each scored answer so the feedback
/// can be read before the next question block scrolls in. Re-prompts for
/// blank or out-of-range input happen without a pause.
pub fn run<R: BufRead, W: Write>(
    mut quiz: Quiz,
    input: &mut R,
    out: &mut W,
    delay: Duration,
) -> io::Result<Summary> {
    quiz.start();

    while let Some(question) = quiz.current_question() {
        let total = quiz.len();
        let number = quiz.cursor() + 1;
        let percent = (number as f64 / total as f64) * 100.0;

        writeln!(out)?;
        writeln!(out, "[{}/{}] - {:.0}% completed", number, total, percent)?;
        writeln!(out)?;
        writeln!(out, "{}", question.text())?;
        for (i, choice) in question.choices().iter().enumerate() {
            writeln!(out, "{}. {}", i + 1, choice)?;
        }
        let choice_count = question.choices().len();

        loop {
            let raw = prompt(
                input,
                out,
                &format!("\nYour answer (1-{} or text): ", choice_count),
            )?;
            match quiz.answer(&raw) {
                AnswerOutcome::Correct => {
                    writeln!(out, "✅ Correct!")?;
                    break;
                }
                AnswerOutcome::Incorrect { correct_answer } => {
                    writeln!(out, "❌ Wrong! Correct answer: {}", correct_answer)?;
                    break;
                }
                AnswerOutcome::EmptyInput => writeln!(out, "Please enter an answer!")?,
                AnswerOutcome::InvalidChoice => writeln!(out, "Invalid choice number!")?,
                AnswerOutcome::Finished => break,
            }
        }

        thread::sleep(delay);
    }

    writeln!(out)?;
    let summary = match quiz.finish() {
        Some(summary) => summary,
        None => {
            return Err(io::Error::new(
                io::ErrorKind::Other,
                "session ended before every question was answered",
            ))
        }
    };
    writeln!(out, "{}", summary)?;
    Ok(summary)
}

fn prompt<R: BufRead, W: Write>(input: &mut R, out: &mut W, message: &str) -> io::Result<String> {
    write!(out, "{}", message)?;
    out.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(io::Error::new(
            io::ErrorKind::UnexpectedEof,
            "input stream closed",
        ));
    }
    Ok(line.trim().to_string())
}
