//! Demo catalog data for provisioning a fresh database.
//!
//! The fixed catalog covers the two showcase restaurants; generated batches
//! fill other restaurants with numbered placeholder products.

use crate::product::ProductDraft;
use crate::types::DbId;

/// Image files bundled with the example assets, copied on seeding.
pub const EXAMPLE_ASSET_FILES: &[&str] = &[
    "aceitunas.jpeg",
    "agua.png",
    "applePie.jpeg",
    "burritos.jpeg",
    "cafe.jpeg",
    "cerveza.jpeg",
    "chocolateCake.jpeg",
    "chocolateIceCream.jpeg",
    "churros.jpeg",
    "cola.jpeg",
    "ensaladilla.jpeg",
    "femaleAvatar.png",
    "grilledTuna.jpeg",
    "heroImage.jpg",
    "logo.jpeg",
    "maleAvatar.png",
    "montaditoChocolate.png",
    "montaditoJamon.jpeg",
    "montaditoQuesoTomate.jpeg",
    "montaditoSalmon.jpeg",
    "muffin.jpeg",
    "paella.jpeg",
    "salchichon.jpeg",
    "steak.jpeg",
];

/// Category assigned to every generated product.
pub const GENERATED_CATEGORY_ID: DbId = 5;

/// Image file shared by every generated product.
pub const GENERATED_IMAGE_FILE: &str = "agua.png";

/// A run of generated products for one restaurant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GeneratedBatch {
    pub count: usize,
    pub restaurant_id: DbId,
}

/// Generated batches, inserted in this order after the fixed catalog.
pub const GENERATED_BATCHES: &[GeneratedBatch] = &[
    GeneratedBatch { count: 1000, restaurant_id: 3 },
    GeneratedBatch { count: 30, restaurant_id: 5 },
    GeneratedBatch { count: 50, restaurant_id: 6 },
    GeneratedBatch { count: 100, restaurant_id: 7 },
    GeneratedBatch { count: 200, restaurant_id: 8 },
    GeneratedBatch { count: 1, restaurant_id: 9 },
];

struct CatalogEntry {
    name: &'static str,
    description: &'static str,
    price: f64,
    image_file: &'static str,
    order: i32,
    availability: bool,
    restaurant_id: DbId,
    product_category_id: DbId,
    fats: f64,
    proteins: f64,
    carbohydrates: f64,
}

macro_rules! entry {
    ($name:expr, $desc:expr, $price:expr, $img:expr, $order:expr, $avail:expr,
     restaurant $r:expr, category $c:expr, macros ($f:expr, $p:expr, $carb:expr)) => {
        CatalogEntry {
            name: $name,
            description: $desc,
            price: $price,
            image_file: $img,
            order: $order,
            availability: $avail,
            restaurant_id: $r,
            product_category_id: $c,
            fats: $f,
            proteins: $p,
            carbohydrates: $carb,
        }
    };
}

// Restaurant 1 (Casa Felix), restaurant 2 (100 montaditos).
// Categories: 1 starters, 3 drinks, 4 main courses, 5 desserts, 6 sandwiches.
const FIXED_CATALOG: &[CatalogEntry] = &[
    entry!("Ensaladilla", "Tuna salad with mayonnaise", 2.5, "ensaladilla.jpeg", 1, true, restaurant 1, category 1, macros (10.0, 50.0, 40.0)),
    entry!("Olives", "Home made", 1.5, "aceitunas.jpeg", 2, true, restaurant 1, category 1, macros (10.0, 30.0, 60.0)),
    entry!("Coca-cola", "33 cc", 1.5, "cola.jpeg", 3, true, restaurant 1, category 3, macros (40.0, 40.0, 20.0)),
    entry!("Water", "50 cc", 1.0, "agua.png", 4, true, restaurant 1, category 3, macros (10.0, 30.0, 60.0)),
    entry!("Coffee", "expresso", 1.2, "cafe.jpeg", 5, true, restaurant 1, category 3, macros (50.0, 50.0, 60.0)),
    entry!("Steak", "Pork", 3.5, "steak.jpeg", 6, true, restaurant 1, category 4, macros (50.0, 60.0, 40.0)),
    entry!("Grilled tuna", "with salad", 4.5, "grilledTuna.jpeg", 7, true, restaurant 1, category 4, macros (10.0, 20.0, 20.0)),
    entry!("Mexican burritos", "tomato, chicken, cheese", 4.0, "burritos.jpeg", 8, true, restaurant 1, category 4, macros (20.0, 30.0, 30.0)),
    entry!("Chocolate cake", "1 piece", 3.0, "chocolateCake.jpeg", 11, true, restaurant 1, category 5, macros (50.0, 40.0, 60.0)),
    entry!("Apple pie", "1 piece", 3.0, "applePie.jpeg", 10, false, restaurant 1, category 5, macros (10.0, 30.0, 40.0)),
    entry!("Churros", "5 pieces", 2.0, "churros.jpeg", 9, false, restaurant 1, category 5, macros (20.0, 20.0, 20.0)),
    entry!("Salchichón", "12 little pieces", 1.5, "salchichon.jpeg", 1, true, restaurant 2, category 1, macros (40.0, 40.0, 20.0)),
    entry!("Olives", "1 bowl", 1.5, "aceitunas.jpeg", 2, true, restaurant 2, category 1, macros (40.0, 30.0, 10.0)),
    entry!("Coca-cola", "33 cc", 1.5, "cola.jpeg", 3, true, restaurant 2, category 3, macros (50.0, 50.0, 60.0)),
    entry!("Water", "50 cc", 1.0, "agua.png", 4, true, restaurant 2, category 3, macros (50.0, 30.0, 60.0)),
    entry!("Beer", "20 cc", 1.0, "cerveza.jpeg", 5, true, restaurant 2, category 3, macros (10.0, 10.0, 20.0)),
    entry!("Jamón", "Cured Jam and olive oil", 1.5, "montaditoJamon.jpeg", 6, true, restaurant 2, category 6, macros (30.0, 30.0, 40.0)),
    entry!("Cheese and tomato", "Iberian cheese and tomato", 1.0, "montaditoQuesoTomate.jpeg", 7, true, restaurant 2, category 6, macros (10.0, 30.0, 20.0)),
    entry!("Smoked salmon", "Norwegian smoked salmon", 2.0, "montaditoSalmon.jpeg", 8, true, restaurant 2, category 6, macros (10.0, 20.0, 10.0)),
    entry!("Chocolate ice-cream", "100 ml", 3.0, "chocolateIceCream.jpeg", 9, true, restaurant 2, category 5, macros (10.0, 20.0, 50.0)),
    entry!("Sweet sandwich", "1 piece", 1.5, "montaditoChocolate.png", 10, true, restaurant 2, category 5, macros (20.0, 10.0, 10.0)),
    entry!("Muffin", "1 piece", 1.0, "muffin.jpeg", 11, false, restaurant 2, category 5, macros (10.0, 30.0, 30.0)),
];

/// Number of rows in the fixed catalog.
pub fn fixed_catalog_len() -> usize {
    FIXED_CATALOG.len()
}

/// Total rows across all generated batches.
pub fn generated_total() -> usize {
    GENERATED_BATCHES.iter().map(|b| b.count).sum()
}

/// Stored image path for a file inside the products folder.
pub fn image_path(products_folder: &str, file: &str) -> String {
    format!("{}/{file}", products_folder.trim_end_matches('/'))
}

/// The fixed catalog with images resolved against `products_folder`.
pub fn fixed_catalog(products_folder: &str) -> Vec<ProductDraft> {
    FIXED_CATALOG
        .iter()
        .map(|e| ProductDraft {
            name: e.name.to_string(),
            description: Some(e.description.to_string()),
            price: e.price,
            image: Some(image_path(products_folder, e.image_file)),
            order: Some(e.order),
            availability: e.availability,
            restaurant_id: e.restaurant_id,
            product_category_id: e.product_category_id,
            fats: Some(e.fats),
            proteins: Some(e.proteins),
            carbohydrates: Some(e.carbohydrates),
            calories: None,
        })
        .collect()
}

/// `count` numbered placeholder products for one restaurant.
///
/// Index `i` drives name, description, price and order.
pub fn generate_products(count: usize, restaurant_id: DbId, products_folder: &str) -> Vec<ProductDraft> {
    let image = image_path(products_folder, GENERATED_IMAGE_FILE);
    (0..count)
        .map(|i| ProductDraft {
            name: format!("Product #{i}"),
            description: Some(format!("Description #{i}")),
            price: i as f64,
            image: Some(image.clone()),
            order: i32::try_from(i).ok(),
            availability: true,
            restaurant_id,
            product_category_id: GENERATED_CATEGORY_ID,
            fats: None,
            proteins: None,
            carbohydrates: None,
            calories: None,
        })
        .collect()
}
