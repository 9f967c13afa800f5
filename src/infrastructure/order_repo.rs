use std::sync::{PoisonError, RwLock};

use chrono::Utc;

use crate::domain::errors::DomainError;
use crate::domain::order::{order_total, Order, OrderDraft};
use crate::domain::ports::OrderRepository;

/// In-memory order collection for the single-writer demo core.
///
/// Mutations rewrite the collection under the write lock, so a snapshot
/// taken by a reader reflects either the pre- or post-mutation state, never
/// a partial one.
pub struct InMemoryOrderRepository {
    orders: RwLock<Vec<Order>>,
}

impl InMemoryOrderRepository {
    pub fn new() -> Self {
        Self {
            orders: RwLock::new(Vec::new()),
        }
    }
}

impl Default for InMemoryOrderRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl OrderRepository for InMemoryOrderRepository {
    fn create(&self, draft: OrderDraft) -> Result<Order, DomainError> {
        let customer = draft.customer.trim();
        if customer.is_empty() {
            return Err(DomainError::Validation(
                "customer name must not be empty".to_string(),
            ));
        }

        let items = draft.valid_items();
        if items.is_empty() {
            return Err(DomainError::Validation(
                "order needs at least one item with a product and a positive quantity".to_string(),
            ));
        }

        let amount = order_total(&items);
        let mut orders = self.orders.write().unwrap_or_else(PoisonError::into_inner);
        // Ids derive from the collection size, as in the original UI. After
        // a deletion this can hand out an id that is already taken.
        let order = Order {
            id: format!("ORD-{:03}", orders.len() + 1),
            customer: customer.to_string(),
            amount,
            status: draft.status,
            date: Utc::now().date_naive(),
            items,
        };
        orders.insert(0, order.clone());
        log::info!("created order {} for {}", order.id, order.customer);
        Ok(order)
    }

    fn update(&self, order: Order) -> Result<(), DomainError> {
        let mut orders = self.orders.write().unwrap_or_else(PoisonError::into_inner);
        match orders.iter_mut().find(|stored| stored.id == order.id) {
            Some(stored) => {
                // The creation date never changes, whatever the caller sends.
                let date = stored.date;
                *stored = Order { date, ..order };
                Ok(())
            }
            None => Err(DomainError::NotFound(order.id)),
        }
    }

    fn delete(&self, id: &str) {
        let mut orders = self.orders.write().unwrap_or_else(PoisonError::into_inner);
        orders.retain(|order| order.id != id);
    }

    fn snapshot(&self) -> Vec<Order> {
        self.orders
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}
