//! Study profile subdomain.
//!
//! - [`profile::StudyProfile`] — the learner's subject, level, style, language and background

pub mod profile;
