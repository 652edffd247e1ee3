use std::io::ErrorKind;
use std::path::PathBuf;
use std::sync::Mutex;

/// Raw access to one document of the flat key-value store. `Ok(None)` means
/// the document has never been written.
pub trait StoreContentProvider {
    fn get_content(&self) -> Result<Option<String>, String>;
    fn set_content(&self, content: &str) -> Result<(), String>;
}

/// Stores each document as `<directory>/<key>.json`.
pub struct FileStoreProvider {
    file_path: PathBuf,
}

impl FileStoreProvider {
    pub fn new(directory: impl Into<PathBuf>, key: &str) -> Self {
        let mut file_path = directory.into();
        file_path.push(format!("{}.json", key));
        Self { file_path }
    }
}

impl StoreContentProvider for FileStoreProvider {
    fn get_content(&self) -> Result<Option<String>, String> {
        match std::fs::read_to_string(&self.file_path) {
            Ok(content) => Ok(Some(content)),
            Err(err) => match err.kind() {
                ErrorKind::NotFound => Ok(None),
                _ => Err(format!("Failed to read store file: {}", err)),
            },
        }
    }

    fn set_content(&self, content: &str) -> Result<(), String> {
        if let Some(parent) = self.file_path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create store directory: {}", e))?;
        }
        std::fs::write(&self.file_path, content)
            .map_err(|e| format!("Failed to write store file: {}", e))
    }
}

/// In-memory provider for tests and hosts without a filesystem.
#[derive(Default)]
pub struct MemoryStoreProvider {
    content: Mutex<Option<String>>,
}

impl MemoryStoreProvider {
    pub fn new() -> Self {
        Self::default()
    }
}

impl StoreContentProvider for MemoryStoreProvider {
    fn get_content(&self) -> Result<Option<String>, String> {
        Ok(self.content.lock().unwrap().clone())
    }

    fn set_content(&self, content: &str) -> Result<(), String> {
        *self.content.lock().unwrap() = Some(content.to_string());
        Ok(())
    }
}
