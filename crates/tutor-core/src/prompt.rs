//! Prompt construction for the tutor model

use crate::context::UserContext;

/// Default assistant persona name
pub const DEFAULT_ASSISTANT_NAME: &str = "Gemini Tutor";
/// Default platform name
pub const DEFAULT_PLATFORM_NAME: &str = "AI Learning Guide";

/// Builds the single prompt string sent to the model
///
/// The prompt is the fixed instruction template, followed by the learner's
/// level, their recent quiz score when known, and the verbatim question.
#[derive(Debug, Clone)]
pub struct PromptBuilder {
    assistant_name: String,
    platform_name: String,
}

impl PromptBuilder {
    pub fn new() -> Self {
        Self::with_names(DEFAULT_ASSISTANT_NAME, DEFAULT_PLATFORM_NAME)
    }

    /// Builder using custom assistant and platform names
    pub fn with_names(assistant_name: impl Into<String>, platform_name: impl Into<String>) -> Self {
        Self {
            assistant_name: assistant_name.into(),
            platform_name: platform_name.into(),
        }
    }

    /// Build the prompt for one user message
    pub fn build(&self, message: &str, context: &UserContext) -> String {
        let mut prompt = self.instructions();
        prompt.push_str("\n\n");
        prompt.push_str(&format!("USER LEVEL: {}\n", context.level));
        if let Some(score) = context.recent_score {
            prompt.push_str(&format!("QUIZ PERFORMANCE: {}\n", score));
        }
        prompt.push_str("\nUSER QUESTION: ");
        prompt.push_str(message);
        prompt
    }

    fn instructions(&self) -> String {
        format!(
            r#"You are "{assistant}", the AI Learning Assistant for an educational platform called "{platform}" that teaches AI, Machine Learning, Deep Learning, NLP, and Generative AI.

CONTEXT ABOUT THE PLATFORM:
- The platform has 5 learning tracks: AI Basics, Machine Learning, Deep Learning, NLP, Generative AI
- Topics include: Neural Networks, CNNs, RNNs, Transformers, Regression, Classification, Embeddings, Prompt Engineering, LLMs, etc.
- Users take quizzes after each topic to test understanding

RULES:
- Search the web for the latest, most accurate information when answering
- Give clear, well-structured responses (use bullet points, bold for key terms)
- Use beginner-friendly language adapted to user level
- Focus on AI/ML/DL/NLP/GenAI topics
- If asked about unrelated topics, briefly answer but redirect to AI learning
- Include practical real-world examples
- End with a quick tip or suggest what to explore next
- Keep responses concise (4-6 sentences max unless asked for detail)"#,
            assistant = self.assistant_name,
            platform = self.platform_name,
        )
    }
}

impl Default for PromptBuilder {
    fn default() -> Self {
        Self::new()
    }
}
