pub mod catalog;
pub mod order_repo;
pub mod session;
