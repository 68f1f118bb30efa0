use anyhow::Result;
use shared::{Config, NewsItem, NewsStore};
use tracing::{error, info};

fn test_items() -> Vec<NewsItem> {
    vec![
        NewsItem {
            title: "AWS Launches New Service".to_string(),
            date: "2025-02-01".to_string(),
            description:
                "Amazon Web Services announces a revolutionary new service for cloud computing."
                    .to_string(),
        },
        NewsItem {
            title: "Tech Innovation Award".to_string(),
            date: "2025-02-02".to_string(),
            description: "Leading tech companies receive recognition for innovative solutions."
                .to_string(),
        },
        NewsItem {
            title: "Future of AI".to_string(),
            date: "2025-01-30".to_string(),
            description: "Experts discuss the future implications of artificial intelligence."
                .to_string(),
        },
    ]
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let config = Config::from_env()?;
    let store = NewsStore::new(config.table_name).await;

    // One item failing should not stop the rest from being inserted.
    for item in test_items() {
        match store.put_item(&item).await {
            Ok(()) => info!(title = %item.title, "Inserted test item"),
            Err(e) => error!(title = %item.title, error = %e, "Failed to insert test item"),
        }
    }

    info!("Data insertion complete");

    Ok(())
}
