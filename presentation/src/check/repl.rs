//! Answer-check loop: one prompt per question, then a score.

use crate::ConsoleFormatter;
use colored::Colorize;
use quizify_domain::QuizQuestion;
use rustyline::error::ReadlineError;
use rustyline::{DefaultEditor, Result as RlResult};

/// Result of grading one typed answer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckOutcome {
    Correct,
    /// Wrong pick; carries the presented correct option index
    Incorrect { answer: usize },
    /// Input names none of the options
    Unrecognized,
}

/// Grade a typed answer (a letter A-D or the option text).
pub fn grade(question: &QuizQuestion, input: &str) -> CheckOutcome {
    match question.resolve_choice(input) {
        None => CheckOutcome::Unrecognized,
        Some(i) if i == question.answer_index() => CheckOutcome::Correct,
        Some(_) => CheckOutcome::Incorrect {
            answer: question.answer_index(),
        },
    }
}

/// Running tally for a checked quiz
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct QuizScore {
    pub correct: usize,
    pub answered: usize,
    pub total: usize,
}

impl QuizScore {
    pub fn new(total: usize) -> Self {
        Self {
            total,
            ..Self::default()
        }
    }

    pub fn record(&mut self, outcome: &CheckOutcome) {
        match outcome {
            CheckOutcome::Correct => {
                self.correct += 1;
                self.answered += 1;
            }
            CheckOutcome::Incorrect { .. } => self.answered += 1,
            CheckOutcome::Unrecognized => {}
        }
    }

    pub fn summary(&self) -> String {
        format!(
            "Score: {}/{} ({} skipped)",
            self.correct,
            self.total,
            self.total - self.answered
        )
    }
}

/// Interactive answer checker
pub struct QuizCheckRepl<'a> {
    questions: &'a [QuizQuestion],
}

impl<'a> QuizCheckRepl<'a> {
    pub fn new(questions: &'a [QuizQuestion]) -> Self {
        Self { questions }
    }

    /// Run the loop. Ctrl-D or `/quit` ends early; the score is still printed.
    pub fn run(&self) -> RlResult<QuizScore> {
        let mut rl = DefaultEditor::new()?;
        let mut score = QuizScore::new(self.questions.len());

        println!();
        println!("Answer with A-D or the option text. /skip moves on, /quit stops.");

        'questions: for (i, question) in self.questions.iter().enumerate() {
            println!();
            print!("{}", ConsoleFormatter::format_question(i + 1, question));

            loop {
                match rl.readline("Your answer> ") {
                    Ok(line) => {
                        let line = line.trim();
                        match line {
                            "" => continue,
                            "/skip" | "/s" => break,
                            "/quit" | "/q" => break 'questions,
                            _ => {}
                        }

                        let outcome = grade(question, line);
                        score.record(&outcome);
                        match outcome {
                            CheckOutcome::Correct => {
                                println!("{} {}", "Correct!".green().bold(), question.explanation);
                                break;
                            }
                            CheckOutcome::Incorrect { .. } => {
                                println!("{}", "Incorrect.".red().bold());
                                print!("{}", ConsoleFormatter::format_reveal(question));
                                break;
                            }
                            CheckOutcome::Unrecognized => {
                                println!("{}", "Please answer with A, B, C or D.".yellow());
                            }
                        }
                    }
                    Err(ReadlineError::Interrupted) => {
                        println!("^C");
                        continue;
                    }
                    Err(ReadlineError::Eof) => break 'questions,
                    Err(err) => return Err(err),
                }
            }
        }

        println!();
        println!("{}", score.summary().cyan().bold());
        Ok(score)
    }
}
