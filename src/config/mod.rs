pub mod settings;

pub use settings::{AuthSettings, ServerSettings, Settings, TokenCacheSettings};
