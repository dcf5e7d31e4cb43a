pub mod artist_page_service;
pub mod homepage_service;
pub mod query_service;
pub mod team_page_service;

pub use artist_page_service::ArtistPageService;
pub use homepage_service::{HomepageService, LiveHomepage};
pub use query_service::{Condition, Query, QueryService};
pub use team_page_service::TeamPageService;
