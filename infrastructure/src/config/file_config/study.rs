//! Default study profile from TOML (`[study]` section)
//!
//! Values here are used whenever the matching CLI flag is absent.

pub use quizify_domain::StudyProfile as FileStudyConfig;
