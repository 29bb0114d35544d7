use trivia_api::db::{self, queries, transfer, NewQuestion};

#[tokio::test]
async fn export_then_import_restores_the_store() {
    let source = db::in_memory().await.unwrap();
    queries::categories::create_category(&source, "Science")
        .await
        .unwrap();
    let history = queries::categories::create_category(&source, "History")
        .await
        .unwrap();
    queries::questions::create_question(
        &source,
        &NewQuestion {
            question: "Whose autobiography is entitled 'I Know Why the Caged Bird Sings'?".into(),
            answer: "Maya Angelou".into(),
            category: 4,
            difficulty: 2,
        },
    )
    .await
    .unwrap();
    queries::questions::create_question(
        &source,
        &NewQuestion {
            question: "Who invented Peanut Butter?".into(),
            answer: "George Washington Carver".into(),
            category: history,
            difficulty: 2,
        },
    )
    .await
    .unwrap();

    let dir = tempfile::tempdir().unwrap();
    let dump = dir.path().join("dump");
    transfer::export_data(&source, &dump).await.unwrap();
    assert!(dump.join(transfer::CATEGORIES_FILE).exists());

    let target = db::in_memory().await.unwrap();
    queries::categories::create_category(&target, "Leftover")
        .await
        .unwrap();
    transfer::import_data(&target, &dump).await.unwrap();

    assert_eq!(
        queries::categories::get_all_categories(&target).await.unwrap(),
        queries::categories::get_all_categories(&source).await.unwrap()
    );
    assert_eq!(
        queries::questions::get_all_questions(&target).await.unwrap(),
        queries::questions::get_all_questions(&source).await.unwrap()
    );
}

#[tokio::test]
async fn import_from_missing_directory_fails() {
    let pool = db::in_memory().await.unwrap();
    let dir = tempfile::tempdir().unwrap();
    assert!(transfer::import_data(&pool, &dir.path().join("absent"))
        .await
        .is_err());
}
