use super::errors::DomainError;
use super::order::{Order, OrderDraft};
use super::product::{Product, ProductPick};

/// Sole owner of the order collection; guarantees the amount invariant and
/// id uniqueness.
pub trait OrderRepository: Send + Sync + 'static {
    fn create(&self, draft: OrderDraft) -> Result<Order, DomainError>;
    /// Replaces the stored order with the same id. The stored creation date
    /// is kept regardless of what the caller sends.
    fn update(&self, order: Order) -> Result<(), DomainError>;
    /// Silent no-op when no order has the given id.
    fn delete(&self, id: &str);
    fn snapshot(&self) -> Vec<Order>;
}

/// Externally owned product catalog: a point-in-time snapshot for the
/// recommendation engine plus the id → name/price lookup used when editing
/// order items.
pub trait CatalogSource: Send + Sync + 'static {
    fn products(&self) -> Vec<Product>;
    fn lookup(&self, product_id: &str) -> Option<ProductPick>;
}
