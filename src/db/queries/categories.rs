use serde::{Deserialize, Serialize};
use sqlx::{FromRow, SqlitePool};
use std::collections::HashSet;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Category {
    pub id: i64,
    #[serde(rename = "type")]
    #[sqlx(rename = "type")]
    pub kind: String,
}

pub async fn get_all_categories(pool: &SqlitePool) -> sqlx::Result<Vec<Category>> {
    sqlx::query_as::<_, Category>(
        r#"
        SELECT id, type FROM categories ORDER BY id
        "#,
    )
    .fetch_all(pool)
    .await
}

pub async fn find_category(pool: &SqlitePool, id: i64) -> sqlx::Result<Option<Category>> {
    sqlx::query_as::<_, Category>(
        r#"
        SELECT id, type FROM categories WHERE categories.id = ?1
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await
}

pub async fn create_category(pool: &SqlitePool, kind: &str) -> sqlx::Result<i64> {
    let id = sqlx::query(
        r#"
        INSERT INTO categories (type) VALUES (?1)
        "#,
    )
    .bind(kind)
    .execute(pool)
    .await?
    .last_insert_rowid();

    Ok(id)
}

async fn insert_category_with_id(pool: &SqlitePool, category: &Category) -> sqlx::Result<()> {
    sqlx::query(
        r#"
        INSERT INTO categories (id, type) VALUES (?1, ?2)
        "#,
    )
    .bind(category.id)
    .bind(&category.kind)
    .execute(pool)
    .await?;
    Ok(())
}

async fn update_category(pool: &SqlitePool, category: &Category) -> sqlx::Result<()> {
    sqlx::query(
        r#"
        UPDATE categories SET type = ?1 WHERE categories.id = ?2
        "#,
    )
    .bind(&category.kind)
    .bind(category.id)
    .execute(pool)
    .await?;
    Ok(())
}

/// Makes the categories table match `categories`: rows missing from the import
/// are removed, known ids are updated, new ids are inserted as-is.
pub async fn import_categories(pool: &SqlitePool, categories: Vec<Category>) -> sqlx::Result<()> {
    let existing_ids: HashSet<i64> = get_all_categories(pool)
        .await?
        .iter()
        .map(|c| c.id)
        .collect();
    let new_ids: HashSet<i64> = categories.iter().map(|c| c.id).collect();
    for id in existing_ids.difference(&new_ids) {
        sqlx::query("DELETE FROM categories WHERE categories.id = ?1")
            .bind(id)
            .execute(pool)
            .await?;
    }
    for category in categories {
        if existing_ids.contains(&category.id) {
            update_category(pool, &category).await?;
        } else {
            insert_category_with_id(pool, &category).await?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::in_memory;

    #[tokio::test]
    async fn categories_are_ordered_by_id() {
        let pool = in_memory().await.unwrap();
        import_categories(
            &pool,
            vec![
                Category { id: 3, kind: "Geography".into() },
                Category { id: 1, kind: "Science".into() },
            ],
        )
        .await
        .unwrap();

        let ids: Vec<i64> = get_all_categories(&pool)
            .await
            .unwrap()
            .into_iter()
            .map(|c| c.id)
            .collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[tokio::test]
    async fn import_replaces_existing_rows() {
        let pool = in_memory().await.unwrap();
        let art = create_category(&pool, "Art").await.unwrap();
        let sports = create_category(&pool, "Sports").await.unwrap();

        import_categories(
            &pool,
            vec![Category { id: art, kind: "Fine Art".into() }],
        )
        .await
        .unwrap();

        assert_eq!(
            find_category(&pool, art).await.unwrap().map(|c| c.kind),
            Some("Fine Art".to_owned())
        );
        assert!(find_category(&pool, sports).await.unwrap().is_none());
    }
}
