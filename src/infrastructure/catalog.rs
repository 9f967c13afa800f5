use std::str::FromStr;
use std::sync::{PoisonError, RwLock};

use bigdecimal::BigDecimal;

use crate::domain::ports::CatalogSource;
use crate::domain::product::{Performance, Product, ProductPick, Trend};

/// In-memory catalog collaborator.
///
/// The product list is replaceable at runtime so the recommendation feed
/// observes a changed snapshot on its next tick; the pick list used for
/// order-item resolution is fixed for the process lifetime.
pub struct StaticCatalog {
    products: RwLock<Vec<Product>>,
    picks: Vec<ProductPick>,
}

impl StaticCatalog {
    pub fn new(products: Vec<Product>, picks: Vec<ProductPick>) -> Self {
        Self {
            products: RwLock::new(products),
            picks,
        }
    }

    /// The six-product snapshot and five-entry price list the demo ships with.
    pub fn demo() -> Self {
        Self::new(demo_products(), demo_picks())
    }

    pub fn replace_products(&self, products: Vec<Product>) {
        *self
            .products
            .write()
            .unwrap_or_else(PoisonError::into_inner) = products;
    }
}

impl CatalogSource for StaticCatalog {
    fn products(&self) -> Vec<Product> {
        self.products
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn lookup(&self, product_id: &str) -> Option<ProductPick> {
        self.picks.iter().find(|pick| pick.id == product_id).cloned()
    }
}

fn dec(value: &str) -> BigDecimal {
    BigDecimal::from_str(value).expect("valid decimal literal")
}

#[rustfmt::skip]
fn demo_products() -> Vec<Product> {
    let entry = |id: &str, name: &str, sales, revenue, stock, category: &str, performance, trend| Product {
        id: id.to_string(),
        name: name.to_string(),
        sales,
        revenue: BigDecimal::from(revenue),
        stock,
        category: category.to_string(),
        performance,
        trend,
    };
    vec![
        entry("1", "Laptop Pro",     142, 42580i64,  25, "Electronics", Performance::High,   Trend::Up),
        entry("2", "Wireless Mouse",  98,  7663,     45, "Electronics", Performance::Medium, Trend::Stable),
        entry("3", "USB Cable",       87,  1391,    120, "Accessories", Performance::Medium, Trend::Down),
        entry("4", "Monitor 4K",      45, 17995,      8, "Electronics", Performance::High,   Trend::Up),
        entry("5", "Keyboard RGB",    33,  4289,     15, "Electronics", Performance::Low,    Trend::Down),
        entry("6", "Tablet Case",     12,   359,     67, "Accessories", Performance::Low,    Trend::Down),
    ]
}

fn demo_picks() -> Vec<ProductPick> {
    let pick = |id: &str, name: &str, price: &str| ProductPick {
        id: id.to_string(),
        name: name.to_string(),
        price: dec(price),
    };
    vec![
        pick("1", "Laptop Pro", "299.99"),
        pick("2", "Wireless Mouse", "78.25"),
        pick("3", "USB Cable", "15.99"),
        pick("4", "Monitor 4K", "399.99"),
        pick("5", "Keyboard RGB", "129.99"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_resolves_name_and_price_by_product_id() {
        let catalog = StaticCatalog::demo();

        let pick = catalog.lookup("2").expect("pick should exist");
        assert_eq!(pick.name, "Wireless Mouse");
        assert_eq!(pick.price, dec("78.25"));

        assert!(catalog.lookup("99").is_none());
    }

    #[test]
    fn replace_products_swaps_the_visible_snapshot() {
        let catalog = StaticCatalog::demo();
        assert_eq!(catalog.products().len(), 6);

        catalog.replace_products(vec![]);

        assert!(catalog.products().is_empty());
        // Picks are untouched by a snapshot swap.
        assert!(catalog.lookup("1").is_some());
    }
}
