//! Prompt construction and answer post-processing

pub mod formatting;
pub mod template;

pub use formatting::format_tutoring_response;
pub use template::TutorPromptTemplate;
