mod common;

#[tokio::test]
async fn database_responds() {
    let state = common::test_state().await;
    let one: i32 = sqlx::query_scalar("SELECT 1")
        .fetch_one(&state.pool)
        .await
        .unwrap();
    assert_eq!(one, 1);
}

#[tokio::test]
async fn catalog_is_seeded() {
    let state = common::test_state().await;
    let name: String = sqlx::query_scalar("SELECT name FROM pokemon WHERE id = ?")
        .bind(25)
        .fetch_one(&state.pool)
        .await
        .unwrap();
    assert_eq!(name, "Pikachu");
}
