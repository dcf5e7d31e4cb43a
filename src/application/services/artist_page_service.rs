use crate::application::services::query_service::{Query, QueryService};
use crate::application::views::{ArtistProfile, ArtistStatsView, CampaignCard};
use crate::domain::entities::Document;
use crate::domain::schema::Collection;
use crate::shared::application::pagination::FindResult;
use crate::shared::errors::{AppError, AppResult};
use std::sync::Arc;

/// Related sections show at most this many entries.
const RELATED_SECTION_LIMIT: usize = 5;

/// Assembles the artist detail page: one primary lookup plus independent
/// read-only sub-queries for the related sections, dispatched concurrently
/// and joined when all complete.
pub struct ArtistPageService {
    query: Arc<QueryService>,
}

impl ArtistPageService {
    pub fn new(query: Arc<QueryService>) -> Self {
        Self { query }
    }

    /// A missing artist is `NotFound`, surfaced to the page boundary as a
    /// 404 equivalent. A failed secondary query only empties its section.
    pub async fn artist_profile(&self, slug: &str) -> AppResult<ArtistProfile> {
        let primary = self
            .query
            .find(
                Query::new(Collection::Artists)
                    .equals("slug", slug)
                    .depth(2)
                    .limit(1),
            )
            .await?;
        let artist = primary
            .docs
            .into_iter()
            .find_map(Document::into_artist)
            .ok_or_else(|| AppError::NotFound(format!("artist '{}'", slug)))?;

        let events_query = Query::new(Collection::Events)
            .contains("artists", artist.id)
            .equals("status", "upcoming")
            .sort("eventDate")
            .limit(RELATED_SECTION_LIMIT);
        let campaigns_query = Query::new(Collection::Campaigns)
            .contains("artists", artist.id)
            .equals("active", true)
            .limit(RELATED_SECTION_LIMIT);

        let (events, campaigns) = tokio::join!(
            self.query.find(events_query),
            self.query.find(campaigns_query)
        );

        let upcoming_events = Self::section(events, slug, "upcoming events")
            .into_iter()
            .filter_map(Document::into_event)
            .collect();
        let active_campaigns: Vec<CampaignCard> = Self::section(campaigns, slug, "campaigns")
            .into_iter()
            .filter_map(Document::into_campaign)
            .map(CampaignCard::from_campaign)
            .collect();

        Ok(ArtistProfile {
            stats: ArtistStatsView::from_stats(&artist.stats),
            artist,
            upcoming_events,
            active_campaigns,
        })
    }

    fn section(
        result: AppResult<FindResult<Document>>,
        slug: &str,
        section: &str,
    ) -> Vec<Document> {
        match result {
            Ok(found) => found.docs,
            Err(err) => {
                log::warn!("artist '{}': {} section degraded: {}", slug, section, err);
                Vec::new()
            }
        }
    }
}
