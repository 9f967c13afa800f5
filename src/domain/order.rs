use bigdecimal::BigDecimal;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    Pending,
    Processing,
    Shipped,
    Completed,
    Cancelled,
}

impl OrderStatus {
    /// The lowercase form the UI sends and displays.
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Processing => "processing",
            OrderStatus::Shipped => "shipped",
            OrderStatus::Completed => "completed",
            OrderStatus::Cancelled => "cancelled",
        }
    }
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderItem {
    pub id: String,
    pub name: String,
    pub quantity: i32,
    pub price: BigDecimal,
}

impl OrderItem {
    /// Line total: `quantity × price`.
    pub fn subtotal(&self) -> BigDecimal {
        self.price.clone() * BigDecimal::from(self.quantity)
    }

    /// An item counts toward an order only when a product was actually
    /// picked and the quantity is positive.
    pub fn is_valid(&self) -> bool {
        !self.id.is_empty() && self.quantity > 0
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: String,
    pub customer: String,
    pub amount: BigDecimal,
    pub status: OrderStatus,
    pub date: NaiveDate,
    pub items: Vec<OrderItem>,
}

/// Creation input: everything an order carries except the repository-assigned
/// `id` and `date`.
#[derive(Debug, Clone)]
pub struct OrderDraft {
    pub customer: String,
    pub status: OrderStatus,
    pub items: Vec<OrderItem>,
}

impl OrderDraft {
    /// The subset of items that will be stored and summed into `amount`.
    pub fn valid_items(&self) -> Vec<OrderItem> {
        self.items
            .iter()
            .filter(|item| item.is_valid())
            .cloned()
            .collect()
    }
}

/// Sum of line subtotals over the given items.
pub fn order_total(items: &[OrderItem]) -> BigDecimal {
    items
        .iter()
        .map(OrderItem::subtotal)
        .fold(BigDecimal::from(0), |total, subtotal| total + subtotal)
}
