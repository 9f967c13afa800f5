//! In-process core of a sales-operations demo: order lifecycle with its
//! amount invariant, a stateless order query, and a deterministic
//! recommendation rule engine over a product catalog snapshot.
//!
//! The UI layer, charts, and login stub are external collaborators; this
//! crate owns no persistence or network protocol.

pub mod application;
pub mod domain;
pub mod infrastructure;

pub use application::order_query::filter_orders;
pub use application::order_service::OrderService;
pub use application::recommendation::{recommend, LOW_STOCK_THRESHOLD};
pub use application::recommendation_feed::RecommendationFeed;
pub use domain::errors::DomainError;
pub use domain::order::{order_total, Order, OrderDraft, OrderItem, OrderStatus};
pub use domain::ports::{CatalogSource, OrderRepository};
pub use domain::product::{Performance, Product, ProductPick, Trend};
pub use domain::recommendation::{Priority, Recommendation, RecommendationKind};
pub use infrastructure::catalog::StaticCatalog;
pub use infrastructure::order_repo::InMemoryOrderRepository;
pub use infrastructure::session::SessionStore;
