//! Progress display while waiting on the model

pub mod reporter;
