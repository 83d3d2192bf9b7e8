use serde::Serialize;

/// Immutable reference data (⇔ `menu` row).
#[derive(Debug, Clone, Serialize)]
pub struct MenuItem {
    pub id: i64,
    pub name: String,
    pub price: f64,
    pub category: String,
}

/// Sample menu seeded into an empty database: (name, price, category).
pub const SAMPLE_MENU: [(&str, f64, &str); 9] = [
    ("Margherita Pizza", 8.50, "Pizza"),
    ("Farmhouse Pizza", 9.50, "Pizza"),
    ("Veg Burger", 5.00, "Burger"),
    ("Chicken Burger", 6.50, "Burger"),
    ("Pasta Alfredo", 7.50, "Pasta"),
    ("Coke", 1.50, "Beverage"),
    ("Orange Juice", 2.00, "Beverage"),
    ("French Fries", 3.00, "Sides"),
    ("Caesar Salad", 4.50, "Salad"),
];
