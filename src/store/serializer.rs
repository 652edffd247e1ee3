use serde::{Deserialize, Serialize};

pub trait DocumentSerializer<TDocument> {
    fn serialize(&self, document: &TDocument) -> Result<String, String>;
    fn deserialize(&self, content: &str) -> Result<TDocument, String>;
}

/// Documents are persisted as whole JSON blobs, matching the historical
/// store format.
pub struct JsonDocumentSerializer;

impl Default for JsonDocumentSerializer {
    fn default() -> Self {
        Self::new()
    }
}

impl JsonDocumentSerializer {
    pub fn new() -> Self {
        Self {}
    }
}

impl<TDocument> DocumentSerializer<TDocument> for JsonDocumentSerializer
where
    TDocument: for<'de> Deserialize<'de> + Serialize,
{
    fn serialize(&self, document: &TDocument) -> Result<String, String> {
        serde_json::to_string_pretty(document)
            .map_err(|e| format!("Failed to serialize document: {}", e))
    }

    fn deserialize(&self, content: &str) -> Result<TDocument, String> {
        serde_json::from_str(content).map_err(|e| format!("Failed to deserialize document: {}", e))
    }
}
