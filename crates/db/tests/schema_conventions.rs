use sqlx::PgPool;

async fn column_info(pool: &PgPool, table: &str) -> Vec<(String, String, String)> {
    sqlx::query_as(
        "SELECT column_name, data_type, is_nullable
         FROM information_schema.columns
         WHERE table_schema = 'public' AND table_name = $1
         ORDER BY ordinal_position",
    )
    .bind(table)
    .fetch_all(pool)
    .await
    .unwrap()
}

fn nullable(columns: &[(String, String, String)], name: &str) -> bool {
    columns
        .iter()
        .find(|(col, _, _)| col == name)
        .unwrap_or_else(|| panic!("column {name} missing"))
        .2
        == "YES"
}

#[sqlx::test(migrations = "./migrations")]
async fn primary_keys_are_bigint(pool: PgPool) {
    for table in ["projects", "project_contents"] {
        let columns = column_info(&pool, table).await;
        let (_, data_type, _) = columns
            .iter()
            .find(|(col, _, _)| col == "id")
            .unwrap_or_else(|| panic!("{table} has no id column"));
        assert_eq!(data_type, "bigint", "{table}.id should be bigint");
    }
}

#[sqlx::test(migrations = "./migrations")]
async fn project_contents_nullability_matches_model(pool: PgPool) {
    let columns = column_info(&pool, "project_contents").await;

    for required in ["id", "version", "import_date", "content", "project_id"] {
        assert!(!nullable(&columns, required), "{required} should be NOT NULL");
    }
    assert!(nullable(&columns, "file_name"), "file_name should be nullable");
}

#[sqlx::test(migrations = "./migrations")]
async fn project_contents_references_projects(pool: PgPool) {
    let fk_count: (i64,) = sqlx::query_as(
        "SELECT COUNT(*)
         FROM information_schema.table_constraints tc
         JOIN information_schema.constraint_column_usage ccu
           ON tc.constraint_name = ccu.constraint_name
         WHERE tc.table_name = 'project_contents'
           AND tc.constraint_type = 'FOREIGN KEY'
           AND ccu.table_name = 'projects'",
    )
    .fetch_one(&pool)
    .await
    .unwrap();
    assert_eq!(fk_count.0, 1, "project_contents should reference projects");
}

#[sqlx::test(migrations = "./migrations")]
async fn project_id_is_indexed(pool: PgPool) {
    let index_count: (i64,) = sqlx::query_as(
        "SELECT COUNT(*)
         FROM pg_indexes
         WHERE tablename = 'project_contents'
           AND indexname = 'idx_project_contents_project_id'",
    )
    .fetch_one(&pool)
    .await
    .unwrap();
    assert_eq!(index_count.0, 1);
}
