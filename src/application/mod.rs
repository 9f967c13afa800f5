pub mod order_query;
pub mod order_service;
pub mod recommendation;
pub mod recommendation_feed;
