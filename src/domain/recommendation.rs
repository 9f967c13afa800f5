use serde::{Deserialize, Serialize};

use super::product::Product;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecommendationKind {
    Promote,
    Restock,
    Optimize,
}

/// Descriptive metadata only; never used as a sort key. Recommendation lists
/// stay in rule-evaluation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Urgent,
    High,
    Medium,
}

/// A derived, non-persisted suggestion referencing a subset of catalog
/// products. Recomputed from the catalog snapshot on demand.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    pub kind: RecommendationKind,
    pub title: String,
    pub description: String,
    pub products: Vec<Product>,
    pub priority: Priority,
}
