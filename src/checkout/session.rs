use serde::{Deserialize, Serialize};

pub const STATUS_SUCCESS: &str = "success";

/// Path parameters of `POST /api/checkout/{productId}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutRequest {
    pub product_id: String,
}

/// Fabricated confirmation returned by `POST /api/checkout/{id}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutResponse {
    pub status: String,
    pub reference: String,
    pub message: String,
    pub payment_url: String, // mock, never a live session
}

impl CheckoutResponse {
    pub fn is_success(&self) -> bool {
        self.status == STATUS_SUCCESS
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_format_is_camel_case() {
        let response = CheckoutResponse {
            status: STATUS_SUCCESS.to_string(),
            reference: "ref".to_string(),
            message: "msg".to_string(),
            payment_url: "https://checkout.pigeonhole.dev/mock/ref".to_string(),
        };
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["paymentUrl"], "https://checkout.pigeonhole.dev/mock/ref");
        assert!(json.get("payment_url").is_none());
    }

    #[test]
    fn test_request_reads_product_id() {
        let request: CheckoutRequest =
            serde_json::from_str(r#"{"productId":"cyber-finch"}"#).unwrap();
        assert_eq!(request.product_id, "cyber-finch");
    }
}
