//! Terminal front end: renders questions, classifies typed answers, and
//! prints every user-facing line of the quiz.

use std::io::{self, BufRead, Write};

use quiz_core::model::{normalize_label, AnswerOutcome, Question, SessionEnd};
use services::{PromptError, Prompter, SessionReport};

//
// ─── INPUT CLASSIFICATION ──────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Eq)]
enum Selection {
    Exit,
    Choice(String),
}

/// Splits raw input into the exit tokens and a canonicalized label choice.
fn classify_input(raw: &str) -> Selection {
    let token = raw.trim().to_ascii_uppercase();
    if token == "EXIT" || token == "Q" {
        return Selection::Exit;
    }
    Selection::Choice(normalize_label(raw))
}

//
// ─── PROMPTER ──────────────────────────────────────────────────────────────────
//

/// Blocking prompter over a buffered reader and a writer.
///
/// Generic so transcripts can be tested against in-memory buffers; the real
/// session uses `TerminalPrompter::stdio()`.
pub struct TerminalPrompter<R, W> {
    input: R,
    output: W,
}

impl TerminalPrompter<io::StdinLock<'static>, io::Stdout> {
    /// Prompter wired to the process's standard streams.
    #[must_use]
    pub fn stdio() -> Self {
        Self {
            input: io::stdin().lock(),
            output: io::stdout(),
        }
    }
}

impl<R: BufRead, W: Write> TerminalPrompter<R, W> {
    #[must_use]
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Opening banner.
    pub fn welcome(&mut self) {
        let _ = writeln!(self.output);
        let _ = writeln!(self.output, "Welcome to 'HOW SMART ARE YOU' quiz");
        let _ = writeln!(self.output, "Let's test your IQ and see how smart you are");
    }

    /// End-of-session lines for whichever terminal state was reached.
    pub fn summary(&mut self, report: &SessionReport) {
        match report.end {
            SessionEnd::Exhausted => {
                let _ = writeln!(self.output, "All questions have been used. Ending the quiz.");
            }
            SessionEnd::ExitedByUser => {
                let _ = writeln!(self.output, "Thanks for playing!");
            }
            SessionEnd::TooManyWrong => {
                let _ = writeln!(self.output, "\nYou've reached 10 wrong answers! Quiz over.");
            }
        }
        let _ = writeln!(
            self.output,
            "Your final score is: {} out of {}.",
            report.score, report.max_score
        );
    }

    fn read_answer(&mut self) -> Result<String, PromptError> {
        let mut line = String::new();
        let read = self.input.read_line(&mut line)?;
        if read == 0 {
            return Err(PromptError("end of input".to_string()));
        }
        Ok(line)
    }

    fn render_question(&mut self, question: &Question, points: i64) -> io::Result<()> {
        writeln!(self.output)?;
        writeln!(self.output, "{}", question.prompt())?;
        for option in question.options() {
            writeln!(self.output, "{}. {}", option.label(), option.text())?;
        }

        let labels: Vec<&str> = question.options().iter().map(|o| o.label()).collect();
        write!(
            self.output,
            "Select the correct option ({}) or type 'exit' or 'q' to quit [worth {points} point(s)]: ",
            labels.join(", ")
        )?;
        self.output.flush()
    }
}

impl<R: BufRead, W: Write> Prompter for TerminalPrompter<R, W> {
    fn present(
        &mut self,
        question: &Question,
        points: i64,
    ) -> Result<AnswerOutcome, PromptError> {
        self.render_question(question, points)?;
        let raw = self.read_answer()?;

        let choice = match classify_input(&raw) {
            Selection::Exit => return Ok(AnswerOutcome::UserExit),
            Selection::Choice(choice) => choice,
        };

        let Some(picked) = question.option(&choice) else {
            let _ = writeln!(self.output, "Invalid choice, defaulting to wrong answer.");
            return Ok(AnswerOutcome::Incorrect);
        };

        if question.is_correct(picked.label()) {
            let _ = writeln!(
                self.output,
                "Your answer was '{} {}'! It is correct.",
                picked.label(),
                picked.text()
            );
            let _ = writeln!(self.output, "You got {points} point(s) for this question.");
            Ok(AnswerOutcome::Correct)
        } else {
            let _ = writeln!(
                self.output,
                "Your answer was '{} {}'. Wrong answer.",
                picked.label(),
                picked.text()
            );
            let _ = writeln!(
                self.output,
                "The correct answer was '{} {}'.",
                question.correct_label(),
                question.correct_text()
            );
            let _ = writeln!(self.output, "You lost {points} point(s) for this question.");
            Ok(AnswerOutcome::Incorrect)
        }
    }

    fn progress(&mut self, score: i64, max_score: i64) {
        let _ = writeln!(
            self.output,
            "Your current total score is: {score} out of {max_score}.\n"
        );
    }
}
