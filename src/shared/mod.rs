pub mod application; // Shared application layer patterns
pub mod errors; // Shared error types
pub mod utils; // Shared utilities

pub use application::pagination::{FindResult, PaginationParams};
pub use errors::{AppError, AppResult};
