//! Use cases
//!
//! Application-level operations that orchestrate domain logic.

pub mod ask_tutor;
pub mod generate_quiz;
pub(crate) mod shared;
