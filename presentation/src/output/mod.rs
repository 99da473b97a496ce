//! Output formatting for tutoring answers and quizzes

pub mod console;
pub mod formatter;
pub mod html;
