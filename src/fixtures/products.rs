// fixtures/products.rs
//
// Products with distinct unit prices, deliberately not in ranking order.

use crate::web_app::model::Product;

/// A product with a link derived from its title
pub fn product(title: &str, total_price: f64, unit_price_kg: f64) -> Product {
    Product {
        title: title.to_string(),
        link: format!("https://www.amazon.fr/dp/{}", title.replace(' ', "-")),
        total_price,
        unit_price_kg,
        unit_price_raw: None,
        product_id: None,
    }
}

/// Five grocery products in arbitrary order
pub fn sample_products() -> Vec<Product> {
    vec![
        product("Café grains 1kg", 15.9, 15.9),
        product("Riz basmati 5kg", 12.5, 2.5),
        product("Lentilles corail 500g", 2.1, 4.2),
        product("Pâtes complètes 3x500g", 3.6, 2.4),
        product("Thé vert 100g", 4.5, 45.0),
    ]
}
