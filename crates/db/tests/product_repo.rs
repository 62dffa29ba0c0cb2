//! Integration tests for the product and restaurant repositories.

mod common;

use deliverus_core::product::{ProductChanges, ProductDraft};
use deliverus_core::seed_catalog::generate_products;
use deliverus_core::validation::product::RestaurantLookup;
use deliverus_db::lookup::PgRestaurantLookup;
use deliverus_db::repositories::{ProductRepo, RestaurantRepo};
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn new_product(name: &str, restaurant_id: i64) -> ProductDraft {
    ProductDraft {
        name: name.to_string(),
        description: Some("Home made".to_string()),
        price: 1.5,
        image: None,
        order: Some(2),
        availability: true,
        restaurant_id,
        product_category_id: 1,
        fats: Some(10.0),
        proteins: Some(30.0),
        carbohydrates: Some(60.0),
        calories: None,
    }
}

fn changes(name: &str) -> ProductChanges {
    ProductChanges {
        name: name.to_string(),
        description: None,
        price: 2.0,
        image: None,
        order: None,
        availability: Some(false),
        product_category_id: 3,
        fats: None,
        proteins: Some(Some(5.0)),
        carbohydrates: None,
        calories: None,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn create_and_find_product(pool: PgPool) {
    common::seed_references(&pool).await;

    let created = ProductRepo::create(&pool, &new_product("Olives", 1)).await.unwrap();
    assert_eq!(created.name, "Olives");
    assert_eq!(created.order, Some(2));

    let found = ProductRepo::find_by_id(&pool, created.id).await.unwrap().unwrap();
    assert_eq!(found.id, created.id);
    assert_eq!(found.restaurant_id, 1);
    assert_eq!(found.carbohydrates, Some(60.0));
}

#[sqlx::test(migrations = "./migrations")]
async fn find_missing_product_returns_none(pool: PgPool) {
    assert!(ProductRepo::find_by_id(&pool, 4242).await.unwrap().is_none());
}

#[sqlx::test(migrations = "./migrations")]
async fn create_with_unknown_restaurant_violates_fk(pool: PgPool) {
    common::seed_references(&pool).await;

    let err = ProductRepo::create(&pool, &new_product("Ghost", 99)).await.unwrap_err();
    let db_err = err.as_database_error().expect("should be a database error");
    assert_eq!(db_err.code().as_deref(), Some("23503"));
}

#[sqlx::test(migrations = "./migrations")]
async fn batch_insert_counts_rows(pool: PgPool) {
    common::seed_references(&pool).await;

    let products = generate_products(250, 3, "public/products");
    let inserted = ProductRepo::create_batch(&pool, &products).await.unwrap();
    assert_eq!(inserted, 250);
    assert_eq!(ProductRepo::count(&pool).await.unwrap(), 250);

    let listed = ProductRepo::list_by_restaurant(&pool, 3).await.unwrap();
    assert_eq!(listed.len(), 250);
    assert_eq!(listed[0].name, "Product #0");
    assert_eq!(listed[0].fats, None);
}

#[sqlx::test(migrations = "./migrations")]
async fn empty_batch_is_a_no_op(pool: PgPool) {
    assert_eq!(ProductRepo::create_batch(&pool, &[]).await.unwrap(), 0);
}

#[sqlx::test(migrations = "./migrations")]
async fn update_keeps_restaurant_and_unset_fields(pool: PgPool) {
    common::seed_references(&pool).await;
    let created = ProductRepo::create(&pool, &new_product("Olives", 2)).await.unwrap();

    let updated = ProductRepo::update(&pool, created.id, &changes("Green olives"))
        .await
        .unwrap()
        .unwrap();

    assert_eq!(updated.name, "Green olives");
    assert_eq!(updated.restaurant_id, 2);
    assert_eq!(updated.product_category_id, 3);
    assert_eq!(updated.description.as_deref(), Some("Home made"));
    assert_eq!(updated.order, None);
    assert!(!updated.availability);
    assert_eq!(updated.fats, Some(10.0));
    assert_eq!(updated.proteins, Some(5.0));
}

#[sqlx::test(migrations = "./migrations")]
async fn update_clears_present_empty_fields(pool: PgPool) {
    common::seed_references(&pool).await;
    let created = ProductRepo::create(&pool, &new_product("Olives", 2)).await.unwrap();

    let cleared = ProductChanges {
        description: Some(None),
        fats: Some(None),
        carbohydrates: Some(Some(40.0)),
        ..changes("Olives")
    };
    let updated = ProductRepo::update(&pool, created.id, &cleared)
        .await
        .unwrap()
        .unwrap();

    assert_eq!(updated.description, None);
    assert_eq!(updated.fats, None);
    assert_eq!(updated.carbohydrates, Some(40.0));
    assert_eq!(updated.proteins, Some(5.0));
}

#[sqlx::test(migrations = "./migrations")]
async fn update_missing_product_returns_none(pool: PgPool) {
    common::seed_references(&pool).await;
    let result = ProductRepo::update(&pool, 4242, &changes("x")).await.unwrap();
    assert!(result.is_none());
}

#[sqlx::test(migrations = "./migrations")]
async fn truncate_empties_table_and_keeps_fk_enforcement(pool: PgPool) {
    common::seed_references(&pool).await;
    ProductRepo::create_batch(&pool, &generate_products(10, 1, "p"))
        .await
        .unwrap();

    ProductRepo::truncate_all(&pool).await.unwrap();
    assert_eq!(ProductRepo::count(&pool).await.unwrap(), 0);

    // A dangling restaurant id is still rejected.
    assert!(ProductRepo::create(&pool, &new_product("Ghost", 99)).await.is_err());
}

#[sqlx::test(migrations = "./migrations")]
async fn truncate_succeeds_as_non_superuser_table_owner(pool: PgPool) {
    common::seed_references(&pool).await;
    let (owner, role) = common::owner_role_pool(&pool).await;

    ProductRepo::create_batch(&owner, &generate_products(10, 1, "p"))
        .await
        .unwrap();
    ProductRepo::truncate_all(&owner).await.unwrap();
    assert_eq!(ProductRepo::count(&owner).await.unwrap(), 0);

    // The id sequence restarts.
    let first = ProductRepo::create(&owner, &new_product("First", 1)).await.unwrap();
    assert_eq!(first.id, 1);

    common::drop_owner_role(&pool, owner, &role).await;
}

#[sqlx::test(migrations = "./migrations")]
async fn restaurant_exists_checks_primary_key(pool: PgPool) {
    let restaurant = RestaurantRepo::create(&pool, "Casa Felix").await.unwrap();

    assert!(RestaurantRepo::exists(&pool, restaurant.id).await.unwrap());
    assert!(!RestaurantRepo::exists(&pool, restaurant.id + 1).await.unwrap());

    let found = RestaurantRepo::find_by_id(&pool, restaurant.id).await.unwrap().unwrap();
    assert_eq!(found.name, "Casa Felix");
}

#[sqlx::test(migrations = "./migrations")]
async fn product_accepts_created_category(pool: PgPool) {
    let restaurant = RestaurantRepo::create(&pool, "Casa Felix").await.unwrap();
    let category = RestaurantRepo::create_category(&pool, "Desserts").await.unwrap();
    assert_eq!(category.name, "Desserts");

    let mut draft = new_product("Flan", restaurant.id);
    draft.product_category_id = category.id;
    let product = ProductRepo::create(&pool, &draft).await.unwrap();
    assert_eq!(product.product_category_id, category.id);
}

#[sqlx::test(migrations = "./migrations")]
async fn pg_lookup_reports_existence(pool: PgPool) {
    let restaurant = RestaurantRepo::create(&pool, "100 montaditos").await.unwrap();
    let lookup = PgRestaurantLookup::new(pool.clone());

    assert!(lookup.restaurant_exists(restaurant.id).await.unwrap());
    assert!(!lookup.restaurant_exists(restaurant.id + 100).await.unwrap());
}

#[sqlx::test(migrations = "./migrations")]
async fn pg_lookup_surfaces_storage_errors(pool: PgPool) {
    let lookup = PgRestaurantLookup::new(pool.clone());
    pool.close().await;

    let err = lookup.restaurant_exists(1).await.unwrap_err();
    assert!(matches!(err, deliverus_core::error::CoreError::Storage(_)));
}

#[sqlx::test(migrations = "./migrations")]
async fn health_check_passes(pool: PgPool) {
    deliverus_db::health_check(&pool).await.unwrap();
}
