use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct QuizAnswerInput {
    pub question_key: String,
    pub answer: String,
}

#[derive(Debug, Deserialize)]
pub struct QuizSubmitRequest {
    pub answers: Vec<QuizAnswerInput>,
}

#[derive(Debug, Serialize)]
pub struct CompletionResponse {
    pub onboarding_completed: bool,
}
