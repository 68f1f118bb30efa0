use aws_lambda_events::encodings::Body;
use aws_lambda_events::event::apigw::ApiGatewayProxyResponse;
use aws_lambda_events::http::header::{
    ACCESS_CONTROL_ALLOW_HEADERS, ACCESS_CONTROL_ALLOW_METHODS, ACCESS_CONTROL_ALLOW_ORIGIN,
    CONTENT_TYPE,
};
use aws_lambda_events::http::{HeaderMap, HeaderValue};
use serde_json::Value;

pub const ALLOW_GET: &str = "GET, OPTIONS";
pub const ALLOW_POST: &str = "POST, OPTIONS";

pub struct ApiResponse;

impl ApiResponse {
    /// Every response goes through here so the CORS headers are present
    /// on success and failure alike.
    pub fn json(
        status_code: i64,
        allow_methods: &'static str,
        body: Value,
    ) -> ApiGatewayProxyResponse {
        ApiGatewayProxyResponse {
            status_code,
            headers: Self::cors_headers(allow_methods),
            multi_value_headers: HeaderMap::new(),
            body: Some(Body::Text(body.to_string())),
            is_base64_encoded: false,
        }
    }

    fn cors_headers(allow_methods: &'static str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(ACCESS_CONTROL_ALLOW_ORIGIN, HeaderValue::from_static("*"));
        headers.insert(
            ACCESS_CONTROL_ALLOW_METHODS,
            HeaderValue::from_static(allow_methods),
        );
        headers.insert(
            ACCESS_CONTROL_ALLOW_HEADERS,
            HeaderValue::from_static("Content-Type"),
        );
        headers
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_json_response_structure() {
        let response = ApiResponse::json(200, ALLOW_GET, json!([]));

        assert_eq!(response.status_code, 200);
        assert!(!response.is_base64_encoded);
        match response.body {
            Some(Body::Text(text)) => assert_eq!(text, "[]"),
            _ => panic!("expected a text body"),
        }
    }

    #[test]
    fn test_cors_headers_on_every_response() {
        for (status, methods) in [(200, ALLOW_GET), (201, ALLOW_POST), (400, ALLOW_POST), (500, ALLOW_GET)] {
            let response = ApiResponse::json(status, methods, json!({ "message": "m" }));

            let headers = &response.headers;
            assert_eq!(
                headers.get("access-control-allow-origin").unwrap().to_str().unwrap(),
                "*"
            );
            assert_eq!(
                headers.get("access-control-allow-methods").unwrap().to_str().unwrap(),
                methods
            );
            assert_eq!(
                headers.get("access-control-allow-headers").unwrap().to_str().unwrap(),
                "Content-Type"
            );
            assert_eq!(
                headers.get("content-type").unwrap().to_str().unwrap(),
                "application/json"
            );
        }
    }

    #[test]
    fn test_error_body_round_trips() {
        let response = ApiResponse::json(
            500,
            ALLOW_GET,
            json!({ "message": "Internal server error", "error": "scan failed" }),
        );

        let body = match response.body {
            Some(Body::Text(text)) => text,
            _ => panic!("expected a text body"),
        };
        let value: Value = serde_json::from_str(&body).unwrap();
        assert_eq!(value["message"], "Internal server error");
        assert_eq!(value["error"], "scan failed");
    }
}
