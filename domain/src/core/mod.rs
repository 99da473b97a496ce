//! Core domain concepts shared across all subdomains.
//!
//! - [`model::Model`] — text-generation models the tutor can call
//! - [`question::TutorQuestion`] — a validated free-form tutoring question

pub mod model;
pub mod question;
