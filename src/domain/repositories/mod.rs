pub mod content_store;
pub mod homepage_source;

pub use content_store::ContentStore;
pub use homepage_source::HomepageSource;
