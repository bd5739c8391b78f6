//! Built-in demonstration catalog.

use super::Product;

fn product(
    id: u64,
    name: &str,
    category: &str,
    price: f64,
    stock: i64,
    description: &str,
) -> Product {
    Product {
        id,
        name: name.to_string(),
        description: description.to_string(),
        category: category.to_string(),
        price,
        stock,
    }
}

/// Catalog used when no data file is given.
pub fn sample_catalog() -> Vec<Product> {
    vec![
        product(1, "Desk", "Furniture", 120.0, 3, "Oak writing desk"),
        product(2, "Lamp", "Lighting", 40.0, 30, "Adjustable desk lamp"),
        product(3, "Chair", "Furniture", 85.0, 0, "Ergonomic office chair"),
        product(4, "Bookshelf", "Furniture", 150.0, 7, "Five-shelf walnut unit"),
        product(5, "Floor Lamp", "Lighting", 65.5, 12, "Arc floor lamp, dimmable"),
        product(6, "Monitor", "Electronics", 229.99, 4, "27-inch IPS display"),
        product(7, "Keyboard", "Electronics", 49.9, 25, "Mechanical, brown switches"),
        product(8, "Mouse", "Electronics", 19.99, 60, "Wireless optical mouse"),
        product(9, "Notebook", "Stationery", 3.5, 200, "A5 dotted, 120 pages"),
        product(10, "Fountain Pen", "Stationery", 28.0, 2, "Steel nib, medium"),
        product(11, "Pendant Light", "Lighting", 95.0, 0, "Brass pendant, E27"),
        product(12, "Standing Mat", "Furniture", 35.0, 18, "Anti-fatigue mat"),
        product(13, "Webcam", "Electronics", 59.0, 9, "1080p with privacy shutter"),
        product(14, "Sticky Notes", "Stationery", 4.25, 150, "Pack of 12 pads"),
    ]
}
