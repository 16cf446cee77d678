//! Wire types for `/bundle`.

use serde::{Deserialize, Serialize};

/// GET response body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BundleResponse {
    /// Requested id, echoed verbatim
    pub bundle_id: String,
    /// Records in insertion order, possibly empty
    pub raw_txs: Vec<String>,
}

/// POST request body.
///
/// A missing or null `rawTx` deserializes to `None` and is rejected by the
/// handler as a validation error, same as an empty string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionRequest {
    #[serde(default)]
    pub raw_tx: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bundle_response_field_names() {
        let response = BundleResponse {
            bundle_id: "b1".to_string(),
            raw_txs: vec!["0x123".to_string()],
        };
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"bundleId": "b1", "rawTxs": ["0x123"]})
        );
    }

    #[test]
    fn test_empty_bundle_serializes_empty_array() {
        let response = BundleResponse {
            bundle_id: "b1".to_string(),
            raw_txs: vec![],
        };
        let json = serde_json::to_string(&response).unwrap();
        assert!(json.contains(r#""rawTxs":[]"#));
    }

    #[test]
    fn test_transaction_request_parsing() {
        let req: TransactionRequest = serde_json::from_str(r#"{"rawTx":"0x1"}"#).unwrap();
        assert_eq!(req.raw_tx.as_deref(), Some("0x1"));

        let req: TransactionRequest = serde_json::from_str("{}").unwrap();
        assert_eq!(req.raw_tx, None);

        let req: TransactionRequest = serde_json::from_str(r#"{"rawTx":null}"#).unwrap();
        assert_eq!(req.raw_tx, None);

        assert!(serde_json::from_str::<TransactionRequest>(r#"{"rawTx":5}"#).is_err());
    }
}
