use aws_lambda_events::event::apigw::ApiGatewayProxyRequest;

/// Per-request metadata pulled from the API Gateway request context. The
/// request id is the correlation id threaded through every log line a
/// handler emits.
#[derive(Debug, Clone)]
pub struct RequestInfo {
    pub request_id: String,
    pub method: String,
    pub path: String,
    pub source_ip: String,
    pub user_agent: String,
}

impl RequestInfo {
    /// Extraction never fails; absent context fields are logged as
    /// "unknown".
    pub fn from_request(request: &ApiGatewayProxyRequest) -> Self {
        let context = &request.request_context;

        Self {
            request_id: or_unknown(context.request_id.as_ref()),
            method: request.http_method.to_string(),
            path: or_unknown(request.path.as_ref()),
            source_ip: or_unknown(context.identity.source_ip.as_ref()),
            user_agent: or_unknown(context.identity.user_agent.as_ref()),
        }
    }
}

fn or_unknown(value: Option<&String>) -> String {
    value.cloned().unwrap_or_else(|| "unknown".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use aws_lambda_events::event::apigw::{
        ApiGatewayProxyRequestContext, ApiGatewayRequestIdentity,
    };
    use aws_lambda_events::http::Method;

    #[test]
    fn test_from_request_with_full_context() {
        let request = ApiGatewayProxyRequest {
            http_method: Method::GET,
            path: Some("/news".to_string()),
            request_context: ApiGatewayProxyRequestContext {
                request_id: Some("req-123".to_string()),
                identity: ApiGatewayRequestIdentity {
                    source_ip: Some("203.0.113.7".to_string()),
                    user_agent: Some("curl/8.0".to_string()),
                    ..Default::default()
                },
                ..Default::default()
            },
            ..Default::default()
        };

        let info = RequestInfo::from_request(&request);
        assert_eq!(info.request_id, "req-123");
        assert_eq!(info.method, "GET");
        assert_eq!(info.path, "/news");
        assert_eq!(info.source_ip, "203.0.113.7");
        assert_eq!(info.user_agent, "curl/8.0");
    }

    #[test]
    fn test_from_request_with_empty_context_falls_back() {
        let request = ApiGatewayProxyRequest::default();

        let info = RequestInfo::from_request(&request);
        assert_eq!(info.request_id, "unknown");
        assert_eq!(info.path, "unknown");
        assert_eq!(info.source_ip, "unknown");
        assert_eq!(info.user_agent, "unknown");
    }
}
