use aws_lambda_events::event::apigw::{ApiGatewayProxyRequest, ApiGatewayProxyResponse};
use serde_json::json;
use shared::{ApiResponse, NewsStore, RequestInfo, ALLOW_GET};
use tracing::{error, info};

/// Read path: one scan per request, no caching between requests.
pub struct GetNewsService {
    store: NewsStore,
}

impl GetNewsService {
    pub fn new(store: NewsStore) -> Self {
        Self { store }
    }

    pub async fn handle(&self, request: ApiGatewayProxyRequest) -> ApiGatewayProxyResponse {
        let info = RequestInfo::from_request(&request);

        info!(
            request_id = %info.request_id,
            method = %info.method,
            path = %info.path,
            query_params = ?request.query_string_parameters,
            source_ip = %info.source_ip,
            user_agent = %info.user_agent,
            "Request received"
        );

        match self.store.scan_all().await {
            Ok(items) => {
                info!(
                    request_id = %info.request_id,
                    item_count = items.len(),
                    "Scan completed"
                );

                ApiResponse::json(200, ALLOW_GET, json!(items))
            }
            Err(e) => {
                error!(
                    request_id = %info.request_id,
                    error = %e,
                    "Error executing scan"
                );

                ApiResponse::json(
                    500,
                    ALLOW_GET,
                    json!({
                        "message": "Internal server error",
                        "error": e.to_string(),
                    }),
                )
            }
        }
    }
}
