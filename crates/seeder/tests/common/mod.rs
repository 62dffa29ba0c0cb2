use sqlx::postgres::PgPoolOptions;
use sqlx::{Executor, PgPool};

/// Insert restaurants 1..=9 and product categories 1..=6 with fixed ids,
/// matching the ids the seed catalog references.
pub async fn seed_references(pool: &PgPool) {
    sqlx::query(
        "INSERT INTO restaurants (id, name) \
         SELECT g, 'Restaurant ' || g FROM generate_series(1, 9) g",
    )
    .execute(pool)
    .await
    .unwrap();
    sqlx::query(
        "INSERT INTO product_categories (id, name) \
         SELECT g, 'Category ' || g FROM generate_series(1, 6) g",
    )
    .execute(pool)
    .await
    .unwrap();
    sqlx::query("SELECT setval('restaurants_id_seq', 9)")
        .execute(pool)
        .await
        .unwrap();
    sqlx::query("SELECT setval('product_categories_id_seq', 6)")
        .execute(pool)
        .await
        .unwrap();
}

/// A one-connection pool on the same database running as a fresh
/// non-superuser role that owns the catalog tables.
///
/// Returns the pool and the role name; pass both to [`drop_owner_role`].
pub async fn owner_role_pool(pool: &PgPool) -> (PgPool, String) {
    let (role,): (String,) = sqlx::query_as("SELECT current_database() || '_owner'")
        .fetch_one(pool)
        .await
        .unwrap();
    sqlx::query(&format!("CREATE ROLE \"{role}\" NOLOGIN NOSUPERUSER"))
        .execute(pool)
        .await
        .unwrap();
    for table in ["restaurants", "product_categories", "products"] {
        sqlx::query(&format!("ALTER TABLE {table} OWNER TO \"{role}\""))
            .execute(pool)
            .await
            .unwrap();
    }

    let set_role = format!("SET ROLE \"{role}\"");
    let owner = PgPoolOptions::new()
        .max_connections(1)
        .after_connect(move |conn, _meta| {
            let set_role = set_role.clone();
            Box::pin(async move {
                conn.execute(set_role.as_str()).await?;
                Ok(())
            })
        })
        .connect_with((*pool.connect_options()).clone())
        .await
        .unwrap();

    (owner, role)
}

/// Close the owner pool and remove its role.
pub async fn drop_owner_role(pool: &PgPool, owner: PgPool, role: &str) {
    owner.close().await;
    sqlx::query(&format!("REASSIGN OWNED BY \"{role}\" TO CURRENT_USER"))
        .execute(pool)
        .await
        .unwrap();
    sqlx::query(&format!("DROP ROLE \"{role}\""))
        .execute(pool)
        .await
        .unwrap();
}
