use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Deserialize)]
pub struct RpcRequest {
    pub jsonrpc: String,
    pub method: String,
    #[serde(default)]
    pub params: Option<Value>,
    #[serde(default)]
    pub id: Option<Value>,
}

#[derive(Debug, Serialize)]
pub struct OutboundResponse {
    pub jsonrpc: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<RpcError>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<Value>,
}

#[derive(Debug, Serialize)]
pub struct RpcError {
    pub code: i64,
    pub message: String,
}

impl OutboundResponse {
    pub fn success(id: Option<Value>, result: Value) -> Self {
        Self {
            jsonrpc: "2.0".to_string(),
            result: Some(result),
            error: None,
            id,
        }
    }

    pub fn error(id: Option<Value>, code: i64, message: impl Into<String>) -> Self {
        Self {
            jsonrpc: "2.0".to_string(),
            result: None,
            error: Some(RpcError {
                code,
                message: message.into(),
            }),
            id,
        }
    }

    pub fn invalid_params(id: Option<Value>, message: impl Into<String>) -> Self {
        Self::error(id, -32602, message)
    }

    pub fn method_not_found(id: Option<Value>, method: &str) -> Self {
        Self::error(
            id,
            -32601,
            format!("Method '{method}' is not supported by this server."),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_request_defaults_optional_fields() {
        let request: RpcRequest =
            serde_json::from_value(json!({ "jsonrpc": "2.0", "method": "ping" })).unwrap();
        assert_eq!(request.method, "ping");
        assert!(request.params.is_none());
        assert!(request.id.is_none());
    }

    #[test]
    fn test_success_response_omits_error() {
        let response = OutboundResponse::success(Some(json!(7)), json!({ "ok": true }));
        let encoded = serde_json::to_value(&response).unwrap();
        assert_eq!(encoded["jsonrpc"], "2.0");
        assert_eq!(encoded["id"], json!(7));
        assert_eq!(encoded["result"]["ok"], json!(true));
        assert!(encoded.get("error").is_none());
    }

    #[test]
    fn test_method_not_found_uses_standard_code() {
        let response = OutboundResponse::method_not_found(None, "tools/fly");
        let error = response.error.unwrap();
        assert_eq!(error.code, -32601);
        assert!(error.message.contains("tools/fly"));
    }
}
