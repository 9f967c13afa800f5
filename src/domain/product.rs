use bigdecimal::BigDecimal;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Performance {
    High,
    Medium,
    Low,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Up,
    Down,
    Stable,
}

/// One record of the externally owned catalog snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: String,
    pub name: String,
    pub sales: i64,
    pub revenue: BigDecimal,
    pub stock: i64,
    pub category: String,
    pub performance: Performance,
    pub trend: Trend,
}

impl Product {
    /// `revenue / sales`, or `None` for a product with no recorded sales.
    pub fn average_order_value(&self) -> Option<BigDecimal> {
        if self.sales == 0 {
            return None;
        }
        Some(self.revenue.clone() / BigDecimal::from(self.sales))
    }
}

/// The catalog lookup record used to resolve an order item's name and price
/// from a chosen product id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductPick {
    pub id: String,
    pub name: String,
    pub price: BigDecimal,
}
