/// Test data factories using builder pattern
///
/// Provides convenient methods to create test data with sensible defaults
use chrono::{DateTime, TimeZone, Utc};
use fanhub::domain::entities::{Artist, Campaign, CampaignGoal, Event, Location, News, Team, TicketInfo};
use fanhub::domain::value_objects::{
    ArtistStatus, CampaignType, EventStatus, EventType, ImageRef, NewsCategory, NewsStatus, Ref,
    Slug, SocialLinks, TeamColor,
};
use uuid::Uuid;

pub fn date(year: i32, month: u32, day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, 12, 0, 0).unwrap()
}

pub struct ArtistFactory(Artist);

impl ArtistFactory {
    pub fn new(name: &str, slug: &str) -> Self {
        Self(Artist {
            id: Uuid::new_v4(),
            name: name.to_string(),
            stage_name: None,
            slug: Slug::new(slug).unwrap(),
            profile_image: None,
            cover_image: None,
            bio: None,
            birth_date: None,
            teams: Vec::new(),
            is_team_captain: false,
            status: ArtistStatus::Active,
            professions: Vec::new(),
            achievements: Vec::new(),
            social_media: SocialLinks::default(),
            hashtags: Vec::new(),
            stats: Default::default(),
            gallery: Vec::new(),
            videos: Vec::new(),
            featured: false,
            created_at: Utc::now(),
        })
    }

    pub fn with_id(mut self, id: Uuid) -> Self {
        self.0.id = id;
        self
    }

    pub fn with_team(mut self, team_id: Uuid) -> Self {
        self.0.teams.push(Ref::unresolved(team_id));
        self
    }

    pub fn as_captain(mut self) -> Self {
        self.0.is_team_captain = true;
        self
    }

    pub fn with_status(mut self, status: ArtistStatus) -> Self {
        self.0.status = status;
        self
    }

    pub fn with_votes(mut self, votes: u64) -> Self {
        self.0.stats.total_votes = votes;
        self
    }

    pub fn featured(mut self) -> Self {
        self.0.featured = true;
        self
    }

    pub fn build(self) -> Artist {
        self.0
    }
}

pub struct TeamFactory(Team);

impl TeamFactory {
    pub fn new(name: &str, slug: &str) -> Self {
        Self(Team {
            id: Uuid::new_v4(),
            name: name.to_string(),
            slug: Slug::new(slug).unwrap(),
            description: None,
            color: TeamColor::Red,
            logo: None,
            cover_image: None,
            captain: None,
            motto: None,
            coach: None,
            stats: Default::default(),
            social_media: SocialLinks::default(),
            hashtags: Vec::new(),
            active: true,
            featured: false,
            created_at: Utc::now(),
        })
    }

    pub fn with_id(mut self, id: Uuid) -> Self {
        self.0.id = id;
        self
    }

    pub fn with_color(mut self, color: TeamColor) -> Self {
        self.0.color = color;
        self
    }

    pub fn with_captain(mut self, artist_id: Uuid) -> Self {
        self.0.captain = Some(Ref::unresolved(artist_id));
        self
    }

    pub fn with_stored_votes(mut self, votes: u64) -> Self {
        self.0.stats.total_votes = votes;
        self
    }

    pub fn inactive(mut self) -> Self {
        self.0.active = false;
        self
    }

    pub fn build(self) -> Team {
        self.0
    }
}

pub struct EventFactory(Event);

impl EventFactory {
    pub fn new(title: &str, slug: &str) -> Self {
        Self(Event {
            id: Uuid::new_v4(),
            title: title.to_string(),
            slug: Slug::new(slug).unwrap(),
            description: None,
            event_type: EventType::Concert,
            event_date: date(2024, 12, 20),
            end_date: None,
            location: Location::default(),
            artists: Vec::new(),
            featured_image: None,
            ticket_info: TicketInfo::default(),
            links: Vec::new(),
            status: EventStatus::Upcoming,
            featured: false,
            created_at: Utc::now(),
        })
    }

    pub fn with_artist(mut self, artist_id: Uuid) -> Self {
        self.0.artists.push(Ref::unresolved(artist_id));
        self
    }

    pub fn with_date(mut self, event_date: DateTime<Utc>) -> Self {
        self.0.event_date = event_date;
        self
    }

    pub fn with_status(mut self, status: EventStatus) -> Self {
        self.0.status = status;
        self
    }

    pub fn build(self) -> Event {
        self.0
    }
}

pub struct CampaignFactory(Campaign);

impl CampaignFactory {
    pub fn new(title: &str, slug: &str) -> Self {
        Self(Campaign {
            id: Uuid::new_v4(),
            title: title.to_string(),
            slug: Slug::new(slug).unwrap(),
            description: None,
            campaign_type: CampaignType::Voting,
            artists: Vec::new(),
            start_date: date(2024, 12, 1),
            end_date: date(2024, 12, 31),
            active_override: None,
            image: None,
            hashtags: Vec::new(),
            goals: Vec::new(),
            instructions: None,
            external_links: Vec::new(),
            updates: Vec::new(),
            featured: false,
            created_at: Utc::now(),
        })
    }

    pub fn with_artist(mut self, artist_id: Uuid) -> Self {
        self.0.artists.push(Ref::unresolved(artist_id));
        self
    }

    pub fn with_window(mut self, start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        self.0.start_date = start;
        self.0.end_date = end;
        self
    }

    pub fn with_override(mut self, active: bool) -> Self {
        self.0.active_override = Some(active);
        self
    }

    pub fn with_goal(mut self, description: &str, target: u64, current: u64) -> Self {
        self.0.goals.push(CampaignGoal {
            description: description.to_string(),
            target,
            current,
            unit: None,
            achieved: current >= target && target > 0,
        });
        self
    }

    pub fn build(self) -> Campaign {
        self.0
    }
}

pub struct NewsFactory(News);

impl NewsFactory {
    pub fn new(title: &str, slug: &str) -> Self {
        Self(News {
            id: Uuid::new_v4(),
            title: title.to_string(),
            slug: Slug::new(slug).unwrap(),
            excerpt: "Excerpt".to_string(),
            content: "Content".to_string(),
            category: NewsCategory::ShowUpdates,
            featured_image: ImageRef::new("/media/news/test.jpg", title),
            related_artists: Vec::new(),
            related_events: Vec::new(),
            tags: Vec::new(),
            author: News::DEFAULT_AUTHOR.to_string(),
            published_date: date(2024, 12, 10),
            featured: false,
            status: NewsStatus::Published,
            created_at: Utc::now(),
        })
    }

    pub fn with_published(mut self, published_date: DateTime<Utc>) -> Self {
        self.0.published_date = published_date;
        self
    }

    pub fn with_status(mut self, status: NewsStatus) -> Self {
        self.0.status = status;
        self
    }

    pub fn build(self) -> News {
        self.0
    }
}
