//! Post-processing of tutoring answers

use crate::study::profile::LearningStyle;

/// Append the learning-style note to a tutoring answer.
pub fn format_tutoring_response(content: &str, style: LearningStyle) -> String {
    match style {
        LearningStyle::Visual => format!(
            "{}\n\n*Note: Visualize these concepts as you read for better retention.*",
            content
        ),
        LearningStyle::HandsOn => format!(
            "{}\n\n*Tip: Try working through the examples yourself to reinforce your learning.*",
            content
        ),
        LearningStyle::TextBased => content.to_string(),
    }
}
