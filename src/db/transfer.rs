//! CSV dumps of the store, used to seed and back up a database.

use anyhow::Context;
use serde::de::DeserializeOwned;
use serde::Serialize;
use sqlx::SqlitePool;
use std::path::Path;

use super::queries::categories::{get_all_categories, import_categories};
use super::queries::questions::{get_all_questions, import_questions};
use super::{Category, Question};

pub const CATEGORIES_FILE: &str = "categories.csv";
pub const QUESTIONS_FILE: &str = "questions.csv";

fn write_csv<T: Serialize>(path: &Path, rows: &[T]) -> anyhow::Result<()> {
    let mut writer = csv::Writer::from_path(path)
        .with_context(|| format!("Cannot create {}", path.display()))?;
    rows.iter().try_for_each(|row| writer.serialize(row))?;
    writer.flush()?;
    Ok(())
}

fn read_csv<T: DeserializeOwned>(path: &Path) -> anyhow::Result<Vec<T>> {
    let mut reader =
        csv::Reader::from_path(path).with_context(|| format!("Cannot open {}", path.display()))?;
    let rows = reader
        .deserialize()
        .collect::<Result<Vec<T>, _>>()
        .with_context(|| format!("Malformed row in {}", path.display()))?;
    Ok(rows)
}

pub async fn export_data(pool: &SqlitePool, path: &Path) -> anyhow::Result<()> {
    let categories = get_all_categories(pool).await?;
    let questions = get_all_questions(pool).await?;
    if !path.exists() {
        std::fs::create_dir_all(path)?
    }
    tracing::info!(
        categories = categories.len(),
        questions = questions.len(),
        "Exporting to {}",
        path.display()
    );
    write_csv(&path.join(CATEGORIES_FILE), &categories)?;
    write_csv(&path.join(QUESTIONS_FILE), &questions)?;
    Ok(())
}

pub async fn import_data(pool: &SqlitePool, path: &Path) -> anyhow::Result<()> {
    let categories: Vec<Category> = read_csv(&path.join(CATEGORIES_FILE))?;
    let questions: Vec<Question> = read_csv(&path.join(QUESTIONS_FILE))?;
    tracing::info!(
        categories = categories.len(),
        questions = questions.len(),
        "Importing from {}",
        path.display()
    );
    import_categories(pool, categories).await?;
    import_questions(pool, questions).await?;
    Ok(())
}
