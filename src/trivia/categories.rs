use std::collections::BTreeMap;

use sqlx::SqlitePool;

use crate::db::queries::categories::get_all_categories;

use super::TriviaResult;

/// Category id to its label, ordered by id.
pub type CategoryMap = BTreeMap<i64, String>;

pub async fn list_categories(pool: &SqlitePool) -> TriviaResult<CategoryMap> {
    Ok(get_all_categories(pool)
        .await?
        .into_iter()
        .map(|c| (c.id, c.kind))
        .collect())
}
