//! Content-hub core for a fan community site.
//!
//! Six content collections (artists, teams, events, campaigns, news,
//! hashtag metrics), a bounded-depth relationship resolver, derived-stat
//! aggregation, and a filtered/sorted/paginated query façade. Storage,
//! authentication, and the rendering chrome are external collaborators.

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod shared;

use application::services::{ArtistPageService, HomepageService, QueryService, TeamPageService};
use domain::repositories::{ContentStore, HomepageSource};
use std::sync::Arc;

pub use shared::errors::{AppError, AppResult};

/// Page services wired over one content store. Composition root for
/// embedders and tests.
pub struct AppServices {
    pub query: Arc<QueryService>,
    pub artist_pages: ArtistPageService,
    pub team_pages: TeamPageService,
    pub homepage: HomepageService,
}

impl AppServices {
    pub fn new(store: Arc<dyn ContentStore>, homepage_source: Arc<dyn HomepageSource>) -> Self {
        let query = Arc::new(QueryService::new(store));
        Self {
            artist_pages: ArtistPageService::new(Arc::clone(&query)),
            team_pages: TeamPageService::new(Arc::clone(&query)),
            homepage: HomepageService::new(Arc::clone(&query), homepage_source),
            query,
        }
    }
}
