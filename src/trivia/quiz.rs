use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};
use serde_aux::field_attributes::deserialize_option_number_from_string;
use sqlx::SqlitePool;

use crate::db::queries::questions::get_quiz_candidates;
use crate::db::Question;
use crate::telemetry::QUIZ_QUESTIONS_SERVED;

use super::{TriviaError, TriviaResult};

/// Category id the quiz front-end sends for "every category".
pub const ALL_CATEGORIES: i64 = 0;

#[derive(Debug, Default, Deserialize)]
pub struct QuizRequest {
    #[serde(default)]
    pub previous_questions: Vec<i64>,
    pub quiz_category: Option<QuizCategory>,
}

/// The front-end sends `id` as a number for "All" and as a string key for the
/// other categories. Its `type` label is ignored.
#[derive(Debug, Default, Deserialize)]
pub struct QuizCategory {
    #[serde(default, deserialize_with = "deserialize_option_number_from_string")]
    pub id: Option<i64>,
}

#[derive(Debug, Serialize)]
pub struct QuizRound {
    /// `None` once every candidate has been played.
    pub question: Option<Question>,
}

pub async fn play_quiz(pool: &SqlitePool, request: QuizRequest) -> TriviaResult<QuizRound> {
    let category_id = request
        .quiz_category
        .and_then(|c| c.id)
        .ok_or_else(|| TriviaError::missing_field("quiz_category.id"))?;
    let category = (category_id != ALL_CATEGORIES).then_some(category_id);

    let candidates = get_quiz_candidates(pool, category, &request.previous_questions).await?;
    let question = pick(&candidates);
    match &question {
        Some(q) => {
            QUIZ_QUESTIONS_SERVED
                .with_label_values(&[category_id.to_string().as_str()])
                .inc();
            tracing::debug!(id = q.id, remaining = candidates.len() - 1, "Serving quiz question");
        }
        None => tracing::debug!(category_id, "Quiz candidates exhausted"),
    }
    Ok(QuizRound { question })
}

fn pick(candidates: &[Question]) -> Option<Question> {
    candidates.choose(&mut rand::thread_rng()).cloned()
}
