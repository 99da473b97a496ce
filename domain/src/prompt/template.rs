//! Prompt templates for tutoring and quiz generation

use crate::study::profile::{Level, StudyProfile, Subject};

/// Templates for the two requests the tutor makes
pub struct TutorPromptTemplate;

impl TutorPromptTemplate {
    /// Prompt for a free-form tutoring question
    pub fn tutoring(profile: &StudyProfile, question: &str) -> String {
        format!(
            r#"You are an expert tutor in {subject} at the {level} level.

STUDENT PROFILE:
- Background knowledge: {background}
- Learning style preference: {style}
- Language preference: {language}

QUESTION:
{question}

INSTRUCTIONS:
1. Provide a clear, educational explanation that directly addresses the question
2. Tailor your explanation to a {background} student at {level} level
3. Use {language} as the primary language
4. Format your response with appropriate markdown for readability

LEARNING STYLE ADAPTATIONS:
- For Visual learners: Include descriptions of visual concepts, diagrams, or mental models
- For Text-based learners: Provide clear, structured explanations with defined concepts
- For Hands-on learners: Include practical examples, exercises, or applications

Your explanation should be educational, accurate, and engaging."#,
            subject = profile.subject,
            level = profile.level,
            background = profile.background,
            style = profile.learning_style,
            language = profile.language,
            question = question,
        )
    }

    /// Prompt asking for `count` multiple-choice questions as a JSON array
    pub fn quiz(subject: &Subject, level: Level, topic: &str, count: usize) -> String {
        format!(
            r#"Create a {level}-level quiz of {subject} on topic {topic} with exactly {count} multiple-choice questions.

INSTRUCTIONS:
1. Each question should be appropriate for {level} level students
2. Each question must have exactly 4 answer options (A, B, C, D)
3. Clearly indicate the correct answer
4. Cover diverse aspects of {subject} on topic {topic}

FORMAT YOUR RESPONSE AS JSON:
```json
[
    {{
        "question": "Question text",
        "options": ["Option A", "Option B", "Option C", "Option D"],
        "correct_answer": "Option A",
        "explanation": "Brief explanation of why this answer is correct"
    }},
    ...
]
```

IMPORTANT: Make sure to return valid JSON that can be parsed. Do not include any text outside the JSON array.
The correct_answer must repeat the text of one of the options exactly.
Include a brief explanation for each correct answer."#
        )
    }
}
