//! API request/response types
//!
//! These types are used for JSON serialization in API endpoints. Every items
//! endpoint answers HTTP 200 with the `AjaxEnvelope`; logical failure is the
//! `success` flag plus a human-readable `error_message`, never a status code.

use serde::{Deserialize, Serialize};
use serde_json::Value;

// ============================================================================
// Envelope
// ============================================================================

/// Uniform JSON envelope for the items and layout endpoints
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AjaxEnvelope {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
}

impl AjaxEnvelope {
    /// Bare success with no payload
    pub fn ok() -> Self {
        Self {
            success: true,
            data: None,
            item: None,
            error_message: None,
        }
    }

    /// Success carrying a `data` payload
    pub fn ok_data(data: impl Serialize) -> Self {
        Self {
            data: Some(serde_json::to_value(data).unwrap_or(Value::Null)),
            ..Self::ok()
        }
    }

    /// Success carrying an `item` payload
    pub fn ok_item(item: impl Serialize) -> Self {
        Self {
            item: Some(serde_json::to_value(item).unwrap_or(Value::Null)),
            ..Self::ok()
        }
    }

    /// Success flag mirroring a service result, no payload
    pub fn from_flag(success: bool) -> Self {
        Self {
            success,
            data: None,
            item: None,
            error_message: None,
        }
    }

    /// Logical failure with a human-readable message
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            item: None,
            error_message: Some(message.into()),
        }
    }
}

// ============================================================================
// Status Types
// ============================================================================

/// Server status response
#[derive(Debug, Clone, Serialize)]
pub struct StatusResponse {
    pub status: &'static str,
    pub version: &'static str,
}

// ============================================================================
// Items Request Types
// ============================================================================

/// Insert item request
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InsertItemRequest {
    #[serde(default)]
    pub playlist_id: Option<u64>,
    /// Content reference: media id, playlist id, or URL
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub source: Option<String>,
    /// 1-based target position
    #[serde(default)]
    pub position: Option<u64>,
}

/// Edit item field request
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EditItemRequest {
    #[serde(default)]
    pub item_id: Option<u64>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub value: Option<String>,
}

/// Reorder items request
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReorderItemsRequest {
    #[serde(default)]
    pub playlist_id: Option<u64>,
    /// Item ids in their new order
    #[serde(default)]
    pub items_positions: Option<Vec<u64>>,
}

/// Delete item request
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DeleteItemRequest {
    #[serde(default)]
    pub playlist_id: Option<u64>,
    #[serde(default)]
    pub item_id: Option<u64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_envelope_omits_absent_fields() {
        let json = serde_json::to_value(AjaxEnvelope::ok()).unwrap();
        assert_eq!(json, serde_json::json!({ "success": true }));

        let json = serde_json::to_value(AjaxEnvelope::error("Playlist ID not valid.")).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "success": false, "error_message": "Playlist ID not valid." })
        );
    }

    #[test]
    fn test_envelope_payload_slots() {
        let json = serde_json::to_value(AjaxEnvelope::ok_data(vec![1, 2])).unwrap();
        assert_eq!(json["data"], serde_json::json!([1, 2]));
        assert!(json.get("item").is_none());

        let json = serde_json::to_value(AjaxEnvelope::ok_item("x")).unwrap();
        assert_eq!(json["item"], "x");
    }

    #[test]
    fn test_requests_tolerate_missing_fields() {
        let req: EditItemRequest = serde_json::from_str("{}").unwrap();
        assert!(req.item_id.is_none());
        assert!(req.name.is_none());
        assert!(req.value.is_none());
    }
}
