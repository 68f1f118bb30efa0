use aws_config::BehaviorVersion;
use aws_sdk_dynamodb::Client as DynamoClient;
use serde_dynamo::{from_items, to_item};
use tracing::{error, info};

use crate::error::StoreError;
use crate::model::NewsItem;

/// Adapter owning every read and write against the news table. Handlers
/// never touch the SDK client directly.
pub struct NewsStore {
    client: DynamoClient,
    table_name: String,
}

impl NewsStore {
    pub async fn new(table_name: impl Into<String>) -> Self {
        let config = aws_config::defaults(BehaviorVersion::latest()).load().await;

        Self {
            client: DynamoClient::new(&config),
            table_name: table_name.into(),
        }
    }

    /// For callers that already hold a configured client, e.g. tests
    /// pointed at DynamoDB Local.
    pub fn with_client(client: DynamoClient, table_name: impl Into<String>) -> Self {
        Self {
            client,
            table_name: table_name.into(),
        }
    }

    pub fn table_name(&self) -> &str {
        &self.table_name
    }

    /// Returns every stored item. Follows `last_evaluated_key` until the
    /// scan is exhausted; result order is whatever the engine yields.
    pub async fn scan_all(&self) -> Result<Vec<NewsItem>, StoreError> {
        info!(table_name = %self.table_name, "Executing table scan");

        let mut items = Vec::new();
        let mut last_evaluated_key = None;

        loop {
            let mut scan_request = self.client.scan().table_name(&self.table_name);

            if let Some(key) = last_evaluated_key {
                scan_request = scan_request.set_exclusive_start_key(Some(key));
            }

            let result = scan_request.send().await.map_err(|e| {
                error!(table_name = %self.table_name, error = %e, "Table scan failed");
                StoreError::Scan(e.to_string())
            })?;

            if let Some(page) = result.items {
                let page: Vec<NewsItem> = from_items(page).map_err(|e| {
                    error!(table_name = %self.table_name, error = %e, "Scanned item conversion failed");
                    StoreError::Conversion(e.to_string())
                })?;
                items.extend(page);
            }

            if result.last_evaluated_key.is_none() {
                break;
            }

            last_evaluated_key = result.last_evaluated_key;
        }

        info!(
            table_name = %self.table_name,
            item_count = items.len(),
            "Table scan finished"
        );

        Ok(items)
    }

    /// Persists exactly the three record fields. An existing record with
    /// the same `(title, date)` is overwritten.
    pub async fn put_item(&self, item: &NewsItem) -> Result<(), StoreError> {
        info!(
            table_name = %self.table_name,
            title = %item.title,
            date = %item.date,
            "Executing item put"
        );

        let attributes = to_item(item).map_err(|e| {
            error!(table_name = %self.table_name, error = %e, "Item conversion failed");
            StoreError::Conversion(e.to_string())
        })?;

        self.client
            .put_item()
            .table_name(&self.table_name)
            .set_item(Some(attributes))
            .send()
            .await
            .map_err(|e| {
                error!(table_name = %self.table_name, error = %e, "Item put failed");
                StoreError::Put(e.to_string())
            })?;

        info!(table_name = %self.table_name, title = %item.title, "Item put finished");

        Ok(())
    }
}
