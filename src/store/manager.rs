use serde::{Deserialize, Serialize};
use std::sync::{Arc, Mutex};

use super::{
    DocumentSerializer, FileStoreProvider, JsonDocumentSerializer, StoreContentProvider, Validate,
};

/// Loads and saves one persisted document, caching it after the first read.
/// A missing document yields the default value rather than an error.
pub struct StoreManager<TProvider, TDocument, TSerializer = JsonDocumentSerializer>
where
    TProvider: StoreContentProvider,
    TDocument: Clone + for<'de> Deserialize<'de> + Serialize + Validate + Default,
    TSerializer: DocumentSerializer<TDocument>,
{
    serializer: TSerializer,
    content_provider: TProvider,
    document: Arc<Mutex<Option<TDocument>>>,
}

impl<TDocument> StoreManager<FileStoreProvider, TDocument, JsonDocumentSerializer>
where
    TDocument: Clone + for<'de> Deserialize<'de> + Serialize + Validate + Default,
{
    pub fn from_directory(directory: &str, key: &str) -> Self {
        Self::new(FileStoreProvider::new(directory, key), JsonDocumentSerializer::new())
    }
}

impl<TProvider, TDocument, TSerializer> StoreManager<TProvider, TDocument, TSerializer>
where
    TProvider: StoreContentProvider,
    TDocument: Clone + for<'de> Deserialize<'de> + Serialize + Validate + Default,
    TSerializer: DocumentSerializer<TDocument>,
{
    pub fn new(content_provider: TProvider, serializer: TSerializer) -> Self {
        Self {
            serializer,
            content_provider,
            document: Arc::new(Mutex::new(None)),
        }
    }

    pub fn get(&self) -> Result<TDocument, String> {
        let mut current = self.document.lock().unwrap();

        if let Some(document) = current.as_ref() {
            return Ok(document.clone());
        }

        if let Some(content) = self.content_provider.get_content()? {
            let document = self.serializer.deserialize(&content)?;
            document
                .validate()
                .map_err(|e| format!("Document validation error: {}", e))?;

            *current = Some(document.clone());
            return Ok(document);
        }

        Ok(TDocument::default())
    }

    pub fn set(&self, document: &TDocument) -> Result<(), String> {
        document
            .validate()
            .map_err(|e| format!("Document validation error: {}", e))?;

        let serialized = self.serializer.serialize(document)?;
        self.content_provider.set_content(&serialized)?;

        let mut current = self.document.lock().unwrap();
        *current = Some(document.clone());
        Ok(())
    }
}
