use aws_lambda_events::event::apigw::{ApiGatewayProxyRequest, ApiGatewayProxyResponse};
use serde_json::{json, Value};
use shared::{ApiResponse, NewsItemDraft, NewsStore, RequestInfo, ALLOW_POST};
use tracing::{error, info, warn};

/// Write path: body → parse → validate → put. Client input problems stop
/// at 400 before the store is touched.
pub struct PostNewsService {
    store: NewsStore,
}

impl PostNewsService {
    pub fn new(store: NewsStore) -> Self {
        Self { store }
    }

    pub async fn handle(&self, request: ApiGatewayProxyRequest) -> ApiGatewayProxyResponse {
        let info = RequestInfo::from_request(&request);

        // The raw body is not logged here; the parsed payload is logged below.
        info!(
            request_id = %info.request_id,
            method = %info.method,
            path = %info.path,
            source_ip = %info.source_ip,
            user_agent = %info.user_agent,
            "Request received"
        );

        let body = match request.body.as_deref().filter(|body| !body.is_empty()) {
            Some(body) => body,
            None => {
                warn!(request_id = %info.request_id, "Missing request body");

                return ApiResponse::json(
                    400,
                    ALLOW_POST,
                    json!({ "message": "Request body is missing" }),
                );
            }
        };

        let payload: Value = match serde_json::from_str(body) {
            Ok(payload) => payload,
            Err(e) => {
                warn!(
                    request_id = %info.request_id,
                    error = %e,
                    "Request body is not valid JSON"
                );

                return ApiResponse::json(
                    400,
                    ALLOW_POST,
                    json!({ "message": "Request body is not valid JSON" }),
                );
            }
        };

        info!(request_id = %info.request_id, item = %payload, "Received item");

        let item = match NewsItemDraft::from_payload(&payload).validate() {
            Ok(item) => item,
            Err(e) => {
                warn!(
                    request_id = %info.request_id,
                    item = %payload,
                    "Missing required fields"
                );

                return ApiResponse::json(400, ALLOW_POST, json!({ "message": e.to_string() }));
            }
        };

        match self.store.put_item(&item).await {
            Ok(()) => {
                info!(
                    request_id = %info.request_id,
                    item_title = %item.title,
                    "Item created successfully"
                );

                // The stored record is restricted to the three known
                // fields; the response echoes the payload as submitted.
                ApiResponse::json(
                    201,
                    ALLOW_POST,
                    json!({
                        "message": "News item created successfully",
                        "item": payload,
                    }),
                )
            }
            Err(e) => {
                error!(
                    request_id = %info.request_id,
                    error = %e,
                    "Error creating item"
                );

                ApiResponse::json(500, ALLOW_POST, json!({ "message": "Internal server error" }))
            }
        }
    }
}
