mod content_provider;
mod manager;
mod serializer;
mod validate;

pub use content_provider::{FileStoreProvider, MemoryStoreProvider, StoreContentProvider};
pub use manager::StoreManager;
pub use serializer::{DocumentSerializer, JsonDocumentSerializer};
pub use validate::Validate;

/// Fixed key for the user settings document.
pub const SETTINGS_KEY: &str = "snake-game-settings";
/// Fixed key for the high-score document.
pub const HIGH_SCORES_KEY: &str = "snake-game-high-scores";
