//! Node id decoders for GraphQL lookup responses
//!
//! The deleter needs exactly one scalar from the lookup payload: the issue's
//! node id. [`JsonDecoder`] parses the whole document; [`FieldExtractor`]
//! scans for the single `"id"` field the lookup query selects. Which one is
//! used is decided once from [`DecoderKind`].

use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;

use crate::core::DecoderKind;
use crate::error::Result;

/// Matches `"id": "<value>"` or `"id": null`
static ID_FIELD_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#""id"\s*:\s*(?:"([^"]*)"|null)"#).expect("Invalid regex pattern for id field")
});

/// Pulls the issue node id out of a lookup response
pub trait NodeIdDecoder {
    /// `Ok(None)` when the payload has no usable id (missing, null, or empty)
    fn node_id(&self, payload: &str) -> Result<Option<String>>;
}

/// Full JSON parse, then walk `data.repository.issue.id`
#[derive(Debug, Default, Clone, Copy)]
pub struct JsonDecoder;

impl NodeIdDecoder for JsonDecoder {
    fn node_id(&self, payload: &str) -> Result<Option<String>> {
        let value: Value = serde_json::from_str(payload)?;
        Ok(value
            .pointer("/data/repository/issue/id")
            .and_then(Value::as_str)
            .filter(|id| !id.is_empty())
            .map(str::to_string))
    }
}

/// Narrow extractor for the one `id` field in the lookup response shape
///
/// Only correct for payloads where `id` appears once, which holds for the
/// lookup query this crate sends.
#[derive(Debug, Default, Clone, Copy)]
pub struct FieldExtractor;

impl NodeIdDecoder for FieldExtractor {
    fn node_id(&self, payload: &str) -> Result<Option<String>> {
        Ok(ID_FIELD_PATTERN
            .captures(payload)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str())
            .filter(|id| !id.is_empty())
            .map(str::to_string))
    }
}

/// Build the decoder selected in configuration
pub fn decoder_for(kind: DecoderKind) -> Box<dyn NodeIdDecoder> {
    match kind {
        DecoderKind::Json => Box::new(JsonDecoder),
        DecoderKind::FieldExtractor => Box::new(FieldExtractor),
    }
}
