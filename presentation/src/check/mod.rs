//! Interactive answer checking for quiz lists

pub mod repl;

pub use repl::{CheckOutcome, QuizCheckRepl, QuizScore, grade};
