use std::env;
use std::sync::Arc;
use std::time::Duration;

use dotenvy::dotenv;
use sales_ops_core::{
    CatalogSource, InMemoryOrderRepository, OrderDraft, OrderItem, OrderService, OrderStatus,
    RecommendationFeed, StaticCatalog,
};

#[tokio::main]
async fn main() {
    dotenv().ok();
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let refresh_secs: u64 = env::var("REFRESH_SECS")
        .unwrap_or_else(|_| "30".to_string())
        .parse()
        .expect("REFRESH_SECS must be a valid number");

    let catalog = Arc::new(StaticCatalog::demo());
    let service = OrderService::new(InMemoryOrderRepository::new());
    seed_orders(&service, catalog.as_ref());

    log::info!("starting recommendation feed, refreshing every {refresh_secs}s");
    let feed = RecommendationFeed::start(catalog.clone(), Duration::from_secs(refresh_secs));
    let mut updates = feed.subscribe();

    log_recommendations(&feed.latest());

    loop {
        tokio::select! {
            _ = tokio::signal::ctrl_c() => {
                log::info!("shutting down");
                break;
            }
            changed = updates.changed() => {
                if changed.is_err() {
                    break;
                }
                let recommendations = updates.borrow_and_update().clone();
                log_recommendations(&recommendations);
            }
        }
    }

    feed.stop();
}

fn seed_orders(service: &OrderService<InMemoryOrderRepository>, catalog: &StaticCatalog) {
    let seeds = [
        ("John Smith", "1", 1, OrderStatus::Completed),
        ("Sarah Johnson", "2", 2, OrderStatus::Processing),
    ];
    for (customer, product_id, quantity, status) in seeds {
        let Some(pick) = catalog.lookup(product_id) else {
            log::warn!("product {product_id} is not in the catalog, skipping seed order");
            continue;
        };
        let draft = OrderDraft {
            customer: customer.to_string(),
            status,
            items: vec![OrderItem {
                id: pick.id,
                name: pick.name,
                quantity,
                price: pick.price,
            }],
        };
        match service.create_order(draft) {
            Ok(order) => log::info!(
                "seeded order {} for {} ({})",
                order.id,
                order.customer,
                order.amount
            ),
            Err(e) => log::error!("failed to seed order for {customer}: {e}"),
        }
    }
}

fn log_recommendations(recommendations: &[sales_ops_core::Recommendation]) {
    match serde_json::to_string(recommendations) {
        Ok(json) => log::info!("recommendations: {json}"),
        Err(e) => log::error!("failed to render recommendations: {e}"),
    }
}
