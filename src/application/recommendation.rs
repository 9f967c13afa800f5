use crate::domain::product::{Performance, Product, Trend};
use crate::domain::recommendation::{Priority, Recommendation, RecommendationKind};

/// Stock level below which a product needs restocking.
pub const LOW_STOCK_THRESHOLD: i64 = 20;

/// The promote and optimize rules surface at most this many products each.
const RULE_PRODUCT_CAP: usize = 3;

/// Maps a catalog snapshot to prioritized recommendations.
///
/// Rules run in a fixed order (promote, restock, optimize) and each entry is
/// emitted only when its selector matches at least one product. The output
/// order is the rule order, never the priority value, so identical input
/// always yields an identical list.
pub fn recommend(products: &[Product]) -> Vec<Recommendation> {
    let mut recommendations = Vec::new();

    let top_performers: Vec<Product> = products
        .iter()
        .filter(|p| p.performance == Performance::High && p.trend == Trend::Up)
        .take(RULE_PRODUCT_CAP)
        .cloned()
        .collect();
    if !top_performers.is_empty() {
        recommendations.push(Recommendation {
            kind: RecommendationKind::Promote,
            title: "Boost High Performers".to_string(),
            description: "Increase marketing budget for these trending products".to_string(),
            products: top_performers,
            priority: Priority::High,
        });
    }

    // Restocking is never capped; every product below the threshold is listed.
    let low_stock: Vec<Product> = products
        .iter()
        .filter(|p| p.stock < LOW_STOCK_THRESHOLD)
        .cloned()
        .collect();
    if !low_stock.is_empty() {
        recommendations.push(Recommendation {
            kind: RecommendationKind::Restock,
            title: "Low Stock Alert".to_string(),
            description: "These products need immediate restocking".to_string(),
            products: low_stock,
            priority: Priority::Urgent,
        });
    }

    let underperforming: Vec<Product> = products
        .iter()
        .filter(|p| p.performance == Performance::Low && p.trend == Trend::Down)
        .take(RULE_PRODUCT_CAP)
        .cloned()
        .collect();
    if !underperforming.is_empty() {
        recommendations.push(Recommendation {
            kind: RecommendationKind::Optimize,
            title: "Optimize Underperformers".to_string(),
            description: "Consider promotional pricing or bundle deals".to_string(),
            products: underperforming,
            priority: Priority::Medium,
        });
    }

    recommendations
}
