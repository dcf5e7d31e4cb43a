use crate::domain::entities::{
    Artist, Campaign, Document, Event, HashtagMetric, News, Team,
};
use crate::domain::repositories::ContentStore;
use crate::domain::schema::Collection;
use crate::domain::value_objects::Ref;
use crate::shared::errors::AppResult;
use futures::future::BoxFuture;
use std::sync::Arc;
use uuid::Uuid;

/// Expands relationship references to a bounded depth.
///
/// Depth 0 leaves every reference as a bare identifier. Depth 1 embeds the
/// direct targets, whose own references stay unresolved. Depth 2 resolves
/// one additional hop. Cycles (artist -> team -> captain -> artist) are
/// truncated by depth alone, never by cycle detection. A dangling
/// identifier resolves to `Ref::Missing`, not an error.
pub struct RelationResolver {
    store: Arc<dyn ContentStore>,
}

impl RelationResolver {
    pub fn new(store: Arc<dyn ContentStore>) -> Self {
        Self { store }
    }

    pub async fn resolve(&self, document: Document, depth: u8) -> AppResult<Document> {
        let resolved = match document {
            Document::Artist(artist) => Document::Artist(self.resolve_artist(artist, depth).await?),
            Document::Team(team) => Document::Team(self.resolve_team(team, depth).await?),
            Document::Event(event) => Document::Event(self.resolve_event(event, depth).await?),
            Document::Campaign(campaign) => {
                Document::Campaign(self.resolve_campaign(campaign, depth).await?)
            }
            Document::News(news) => Document::News(self.resolve_news(news, depth).await?),
            Document::HashtagMetric(metric) => {
                Document::HashtagMetric(self.resolve_hashtag_metric(metric, depth).await?)
            }
        };
        Ok(resolved)
    }

    // Artist and team resolution are mutually recursive through the captain
    // edge, so both return boxed futures.
    pub fn resolve_artist<'a>(
        &'a self,
        mut artist: Artist,
        depth: u8,
    ) -> BoxFuture<'a, AppResult<Artist>> {
        Box::pin(async move {
            if depth == 0 {
                return Ok(artist);
            }
            let mut teams = Vec::with_capacity(artist.teams.len());
            for team_ref in artist.teams {
                teams.push(self.resolve_team_ref(team_ref, depth - 1).await?);
            }
            artist.teams = teams;
            Ok(artist)
        })
    }

    pub fn resolve_team<'a>(
        &'a self,
        mut team: Team,
        depth: u8,
    ) -> BoxFuture<'a, AppResult<Team>> {
        Box::pin(async move {
            if depth == 0 {
                return Ok(team);
            }
            if let Some(captain) = team.captain.take() {
                team.captain = Some(self.resolve_artist_ref(captain, depth - 1).await?);
            }
            Ok(team)
        })
    }

    pub async fn resolve_event(&self, mut event: Event, depth: u8) -> AppResult<Event> {
        if depth == 0 {
            return Ok(event);
        }
        let mut artists = Vec::with_capacity(event.artists.len());
        for artist_ref in event.artists {
            artists.push(self.resolve_artist_ref(artist_ref, depth - 1).await?);
        }
        event.artists = artists;
        Ok(event)
    }

    pub async fn resolve_campaign(&self, mut campaign: Campaign, depth: u8) -> AppResult<Campaign> {
        if depth == 0 {
            return Ok(campaign);
        }
        let mut artists = Vec::with_capacity(campaign.artists.len());
        for artist_ref in campaign.artists {
            artists.push(self.resolve_artist_ref(artist_ref, depth - 1).await?);
        }
        campaign.artists = artists;
        Ok(campaign)
    }

    pub async fn resolve_news(&self, mut news: News, depth: u8) -> AppResult<News> {
        if depth == 0 {
            return Ok(news);
        }
        let mut artists = Vec::with_capacity(news.related_artists.len());
        for artist_ref in news.related_artists {
            artists.push(self.resolve_artist_ref(artist_ref, depth - 1).await?);
        }
        news.related_artists = artists;

        let mut events = Vec::with_capacity(news.related_events.len());
        for event_ref in news.related_events {
            events.push(self.resolve_event_ref(event_ref, depth - 1).await?);
        }
        news.related_events = events;
        Ok(news)
    }

    pub async fn resolve_hashtag_metric(
        &self,
        mut metric: HashtagMetric,
        depth: u8,
    ) -> AppResult<HashtagMetric> {
        if depth == 0 {
            return Ok(metric);
        }
        if let Some(artist) = metric.related_artist.take() {
            metric.related_artist = Some(self.resolve_artist_ref(artist, depth - 1).await?);
        }
        if let Some(campaign) = metric.related_campaign.take() {
            metric.related_campaign = Some(self.resolve_campaign_ref(campaign, depth - 1).await?);
        }
        Ok(metric)
    }

    /// `depth` is how many hops remain for the target's own references.
    async fn resolve_artist_ref(&self, artist_ref: Ref<Artist>, depth: u8) -> AppResult<Ref<Artist>> {
        match artist_ref {
            Ref::Unresolved(id) | Ref::Missing(id) => match self.fetch_artist(id).await? {
                Some(artist) => Ok(Ref::resolved(self.resolve_artist(artist, depth).await?)),
                None => Ok(Ref::Missing(id)),
            },
            Ref::Resolved(artist) => Ok(Ref::resolved(self.resolve_artist(*artist, depth).await?)),
        }
    }

    async fn resolve_team_ref(&self, team_ref: Ref<Team>, depth: u8) -> AppResult<Ref<Team>> {
        match team_ref {
            Ref::Unresolved(id) | Ref::Missing(id) => match self.fetch_team(id).await? {
                Some(team) => Ok(Ref::resolved(self.resolve_team(team, depth).await?)),
                None => Ok(Ref::Missing(id)),
            },
            Ref::Resolved(team) => Ok(Ref::resolved(self.resolve_team(*team, depth).await?)),
        }
    }

    async fn resolve_event_ref(&self, event_ref: Ref<Event>, depth: u8) -> AppResult<Ref<Event>> {
        match event_ref {
            Ref::Unresolved(id) | Ref::Missing(id) => match self.fetch_event(id).await? {
                Some(event) => Ok(Ref::resolved(self.resolve_event(event, depth).await?)),
                None => Ok(Ref::Missing(id)),
            },
            Ref::Resolved(event) => Ok(Ref::resolved(self.resolve_event(*event, depth).await?)),
        }
    }

    async fn resolve_campaign_ref(
        &self,
        campaign_ref: Ref<Campaign>,
        depth: u8,
    ) -> AppResult<Ref<Campaign>> {
        match campaign_ref {
            Ref::Unresolved(id) | Ref::Missing(id) => match self.fetch_campaign(id).await? {
                Some(campaign) => Ok(Ref::resolved(self.resolve_campaign(campaign, depth).await?)),
                None => Ok(Ref::Missing(id)),
            },
            Ref::Resolved(campaign) => {
                Ok(Ref::resolved(self.resolve_campaign(*campaign, depth).await?))
            }
        }
    }

    async fn fetch_artist(&self, id: Uuid) -> AppResult<Option<Artist>> {
        let doc = self.store.get_by_id(Collection::Artists, id).await?;
        Ok(doc.and_then(Document::into_artist))
    }

    async fn fetch_team(&self, id: Uuid) -> AppResult<Option<Team>> {
        let doc = self.store.get_by_id(Collection::Teams, id).await?;
        Ok(doc.and_then(Document::into_team))
    }

    async fn fetch_event(&self, id: Uuid) -> AppResult<Option<Event>> {
        let doc = self.store.get_by_id(Collection::Events, id).await?;
        Ok(doc.and_then(Document::into_event))
    }

    async fn fetch_campaign(&self, id: Uuid) -> AppResult<Option<Campaign>> {
        let doc = self.store.get_by_id(Collection::Campaigns, id).await?;
        Ok(doc.and_then(Document::into_campaign))
    }
}
