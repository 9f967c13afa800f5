use crate::domain::errors::DomainError;
use crate::domain::order::{Order, OrderDraft};
use crate::domain::ports::OrderRepository;

use super::order_query::filter_orders;

/// Thin application service the UI layer talks to: mutations go to the
/// repository port, reads go through the stateless query.
pub struct OrderService<R> {
    repo: R,
}

impl<R: OrderRepository> OrderService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    pub fn create_order(&self, draft: OrderDraft) -> Result<Order, DomainError> {
        self.repo.create(draft)
    }

    pub fn update_order(&self, order: Order) -> Result<(), DomainError> {
        self.repo.update(order)
    }

    pub fn delete_order(&self, id: &str) {
        self.repo.delete(id);
    }

    pub fn list_orders(&self) -> Vec<Order> {
        self.repo.snapshot()
    }

    /// Owned result of `filter_orders` over the current repository snapshot.
    pub fn search_orders(&self, search_term: &str, status_filter: &str) -> Vec<Order> {
        let snapshot = self.repo.snapshot();
        filter_orders(&snapshot, search_term, status_filter)
            .into_iter()
            .cloned()
            .collect()
    }
}
