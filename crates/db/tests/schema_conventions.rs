//! Structural checks over the migrated schema.

use sqlx::PgPool;

async fn public_tables(pool: &PgPool) -> Vec<String> {
    sqlx::query_scalar(
        "SELECT table_name::text FROM information_schema.tables
         WHERE table_schema = 'public'
           AND table_type = 'BASE TABLE'
           AND table_name != '_sqlx_migrations'
         ORDER BY table_name",
    )
    .fetch_all(pool)
    .await
    .unwrap()
}

#[sqlx::test(migrations = "./migrations")]
async fn surrogate_keys_are_bigint(pool: PgPool) {
    let rows: Vec<(String, String)> = sqlx::query_as(
        "SELECT table_name::text, data_type::text FROM information_schema.columns
         WHERE column_name = 'id'
           AND table_schema = 'public'
           AND table_name != '_sqlx_migrations'",
    )
    .fetch_all(&pool)
    .await
    .unwrap();

    assert!(!rows.is_empty());
    for (table, data_type) in &rows {
        assert_eq!(data_type, "bigint", "{table}.id");
    }
}

#[sqlx::test(migrations = "./migrations")]
async fn every_table_is_timestamped(pool: PgPool) {
    for table in public_tables(&pool).await {
        let types: Vec<String> = sqlx::query_scalar(
            "SELECT data_type::text FROM information_schema.columns
             WHERE table_schema = 'public'
               AND table_name = $1
               AND column_name IN ('created_at', 'updated_at')",
        )
        .bind(&table)
        .fetch_all(&pool)
        .await
        .unwrap();

        assert_eq!(types.len(), 2, "{table} needs created_at and updated_at");
        assert!(
            types.iter().all(|t| t == "timestamp with time zone"),
            "{table} timestamps must be timestamptz"
        );
    }
}

/// Deleting a space must take all of its content with it.
#[sqlx::test(migrations = "./migrations")]
async fn space_content_cascades(pool: PgPool) {
    let rows: Vec<(String, String)> = sqlx::query_as(
        "SELECT tc.table_name::text, rc.delete_rule::text
         FROM information_schema.table_constraints tc
         JOIN information_schema.referential_constraints rc
           ON rc.constraint_name = tc.constraint_name
         JOIN information_schema.constraint_column_usage ccu
           ON ccu.constraint_name = tc.constraint_name
         WHERE tc.constraint_type = 'FOREIGN KEY'
           AND ccu.table_name = 'spaces'",
    )
    .fetch_all(&pool)
    .await
    .unwrap();

    let tables: Vec<&str> = rows.iter().map(|(t, _)| t.as_str()).collect();
    for expected in [
        "debates",
        "documents",
        "entities",
        "events",
        "pages",
        "posts",
        "proposals",
        "space_members",
    ] {
        assert!(tables.contains(&expected), "{expected} should reference spaces");
    }
    for (table, rule) in &rows {
        assert_eq!(rule, "CASCADE", "{table} -> spaces");
    }
}

/// Link tables are keyed on the pair they join.
#[sqlx::test(migrations = "./migrations")]
async fn link_tables_use_composite_keys(pool: PgPool) {
    for (table, columns) in [
        ("space_members", "space_id,user_id"),
        ("event_attendees", "event_id,user_id"),
        ("proposal_supporters", "proposal_id,user_id"),
        ("profile_interests", "user_id,interest_id"),
    ] {
        let key: String = sqlx::query_scalar(
            "SELECT string_agg(kcu.column_name::text, ',' ORDER BY kcu.ordinal_position)
             FROM information_schema.table_constraints tc
             JOIN information_schema.key_column_usage kcu
               ON kcu.constraint_name = tc.constraint_name
             WHERE tc.table_name = $1 AND tc.constraint_type = 'PRIMARY KEY'",
        )
        .bind(table)
        .fetch_one(&pool)
        .await
        .unwrap();
        assert_eq!(key, columns, "{table} primary key");
    }
}

/// The API turns `uq_*` violations into 409 responses.
#[sqlx::test(migrations = "./migrations")]
async fn unique_constraints_use_uq_prefix(pool: PgPool) {
    let names: Vec<String> = sqlx::query_scalar(
        "SELECT constraint_name::text FROM information_schema.table_constraints
         WHERE table_schema = 'public' AND constraint_type = 'UNIQUE'",
    )
    .fetch_all(&pool)
    .await
    .unwrap();

    for name in &names {
        assert!(name.starts_with("uq_"), "{name}");
    }
}

#[sqlx::test(migrations = "./migrations")]
async fn roles_are_seeded(pool: PgPool) {
    let names: Vec<String> = sqlx::query_scalar("SELECT name FROM roles ORDER BY id")
        .fetch_all(&pool)
        .await
        .unwrap();
    assert_eq!(names, vec!["admin", "moderator", "member"]);
}
