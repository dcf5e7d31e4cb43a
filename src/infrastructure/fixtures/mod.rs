//! Static fixture data.
//!
//! Mirrors the landing-page mock lists that ship while the live hashtag and
//! campaign feeds are not wired up, and doubles as the storage-free dataset
//! for tests. `seed_store` loads the same records into a [`MemoryStore`] so
//! the live query path can run against identical content.

use crate::domain::entities::{
    Artist, Campaign, CampaignGoal, CampaignUpdate, Document, Event, HashtagMetric, Location, News,
    Team, TicketInfo,
};
use crate::domain::repositories::{ContentStore, HomepageSource};
use crate::domain::value_objects::{
    ArtistStats, ArtistStatus, CampaignType, EngagementMetrics, EventStatus, EventType,
    HashtagPlatform, HashtagRef, ImageRef, NewsCategory, NewsStatus, Profession, Ref, Slug,
    SocialLinks, TeamColor, TeamStats, TrackedPlatform,
};
use crate::infrastructure::persistence::MemoryStore;
use crate::shared::errors::AppResult;
use async_trait::async_trait;
use chrono::{DateTime, TimeZone, Utc};
use uuid::Uuid;

pub struct FixtureData {
    pub teams: Vec<Team>,
    pub artists: Vec<Artist>,
    pub events: Vec<Event>,
    pub campaigns: Vec<Campaign>,
    pub news: Vec<News>,
    pub hashtag_metrics: Vec<HashtagMetric>,
}

fn ts(year: i32, month: u32, day: u32, hour: u32, minute: u32, second: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, hour, minute, second)
        .unwrap()
}

fn base_artist(name: &str, slug: &str) -> AppResult<Artist> {
    Ok(Artist {
        id: Uuid::new_v4(),
        name: name.to_string(),
        stage_name: None,
        slug: Slug::new(slug)?,
        profile_image: Some(ImageRef::new(&format!("/media/artists/{}.jpg", slug), name)),
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
        stats: ArtistStats::default(),
        gallery: Vec::new(),
        videos: Vec::new(),
        featured: false,
        created_at: Utc::now(),
    })
}

fn base_team(name: &str, slug: &str, color: TeamColor) -> AppResult<Team> {
    Ok(Team {
        id: Uuid::new_v4(),
        name: name.to_string(),
        slug: Slug::new(slug)?,
        description: None,
        color,
        logo: None,
        cover_image: None,
        captain: None,
        motto: None,
        coach: None,
        stats: TeamStats::default(),
        social_media: SocialLinks::default(),
        hashtags: Vec::new(),
        active: true,
        featured: false,
        created_at: Utc::now(),
    })
}

pub fn fixture_data() -> AppResult<FixtureData> {
    let mut nha_trai = base_team("Nhà trai", "nha-trai", TeamColor::Red)?;
    let mut nha_gai = base_team("Nhà gái", "nha-gai", TeamColor::Teal)?;

    let mut tuan_hung = base_artist("Tuấn Hưng", "tuan-hung")?;
    tuan_hung.teams = vec![Ref::unresolved(nha_trai.id)];
    tuan_hung.is_team_captain = true;
    tuan_hung.professions = vec![Profession::Singer, Profession::Musician];
    tuan_hung.social_media.instagram = Some("tuanhungofficial".to_string());
    tuan_hung.hashtags = vec![HashtagRef::on_platform(
        "TeamTuanHung",
        HashtagPlatform::All,
    )];
    tuan_hung.stats = ArtistStats {
        total_votes: 1_250_000,
        followers: 2_400_000,
        hashtag_mentions: 380_000,
        performance_count: 12,
        ranking: Some(1),
    };
    tuan_hung.featured = true;

    let mut bang_kieu = base_artist("Bằng Kiều", "bang-kieu")?;
    bang_kieu.teams = vec![Ref::unresolved(nha_trai.id)];
    bang_kieu.professions = vec![Profession::Singer];
    bang_kieu.stats = ArtistStats {
        total_votes: 980_000,
        followers: 1_100_000,
        hashtag_mentions: 150_000,
        performance_count: 10,
        ranking: Some(3),
    };
    bang_kieu.featured = true;

    let mut bb_tran = base_artist("BB Trần", "bb-tran")?;
    bb_tran.teams = vec![Ref::unresolved(nha_gai.id)];
    bb_tran.is_team_captain = true;
    bb_tran.professions = vec![Profession::Actor, Profession::Comedian];
    bb_tran.stats = ArtistStats {
        total_votes: 720_000,
        followers: 1_800_000,
        hashtag_mentions: 290_000,
        performance_count: 9,
        ranking: Some(4),
    };
    bb_tran.featured = true;

    let mut son_thach = base_artist("S.T Sơn Thạch", "st-son-thach")?;
    // Crossover member: belongs to both houses.
    son_thach.teams = vec![Ref::unresolved(nha_gai.id), Ref::unresolved(nha_trai.id)];
    son_thach.professions = vec![Profession::Singer, Profession::Dancer];
    son_thach.stats = ArtistStats {
        total_votes: 540_000,
        followers: 950_000,
        hashtag_mentions: 80_000,
        performance_count: 8,
        ranking: Some(5),
    };

    nha_trai.captain = Some(Ref::unresolved(tuan_hung.id));
    nha_trai.motto = Some("Cháy hết mình".to_string());
    nha_trai.stats = TeamStats {
        total_votes: 2_230_000,
        wins: 4,
        performances: 15,
    };
    nha_trai.hashtags = vec![HashtagRef::new("NhaTraiVN")];
    nha_trai.featured = true;

    nha_gai.captain = Some(Ref::unresolved(bb_tran.id));
    // No stored aggregate; vote totals roll up from the members.
    nha_gai.stats = TeamStats {
        total_votes: 0,
        wins: 3,
        performances: 14,
    };

    let finale_concert = Event {
        id: Uuid::new_v4(),
        title: "Call Me By Fire - Grand Finale Concert".to_string(),
        slug: Slug::new("grand-finale-concert")?,
        description: Some("The final live showdown of the season.".to_string()),
        event_type: EventType::Concert,
        event_date: ts(2024, 12, 25, 19, 0, 0),
        end_date: None,
        location: Location {
            venue: Some("Mỹ Đình National Stadium".to_string()),
            city: Some("Hanoi".to_string()),
            country: Some("Vietnam".to_string()),
            ..Default::default()
        },
        artists: vec![
            Ref::unresolved(tuan_hung.id),
            Ref::unresolved(bang_kieu.id),
            Ref::unresolved(bb_tran.id),
        ],
        featured_image: None,
        ticket_info: TicketInfo {
            available: true,
            ticket_link: Some("https://tickets.example.vn/grand-finale".to_string()),
            price: Some("500,000 - 2,000,000 VND".to_string()),
        },
        links: Vec::new(),
        status: EventStatus::Upcoming,
        featured: true,
        created_at: Utc::now(),
    };

    let fan_meeting = Event {
        id: Uuid::new_v4(),
        title: "Fan Meeting with Team A Artists".to_string(),
        slug: Slug::new("team-a-fan-meeting")?,
        description: None,
        event_type: EventType::FanMeeting,
        event_date: ts(2024, 12, 20, 15, 0, 0),
        end_date: None,
        location: Location {
            venue: Some("Diamond Plaza".to_string()),
            city: Some("Ho Chi Minh City".to_string()),
            country: Some("Vietnam".to_string()),
            ..Default::default()
        },
        artists: vec![Ref::unresolved(tuan_hung.id), Ref::unresolved(son_thach.id)],
        featured_image: None,
        ticket_info: TicketInfo::default(),
        links: Vec::new(),
        status: EventStatus::Upcoming,
        featured: false,
        created_at: Utc::now(),
    };

    let tv_special = Event {
        id: Uuid::new_v4(),
        title: "Live TV Performance Special".to_string(),
        slug: Slug::new("tv-performance-special")?,
        description: None,
        event_type: EventType::TvAppearance,
        event_date: ts(2024, 12, 18, 20, 0, 0),
        end_date: None,
        location: Location {
            venue: Some("VTV Studio".to_string()),
            city: Some("Hanoi".to_string()),
            country: Some("Vietnam".to_string()),
            ..Default::default()
        },
        artists: vec![
            Ref::unresolved(tuan_hung.id),
            Ref::unresolved(bang_kieu.id),
            Ref::unresolved(bb_tran.id),
            Ref::unresolved(son_thach.id),
        ],
        featured_image: None,
        ticket_info: TicketInfo::default(),
        links: Vec::new(),
        status: EventStatus::Upcoming,
        featured: false,
        created_at: Utc::now(),
    };

    let final_voting = Campaign {
        id: Uuid::new_v4(),
        title: "Vote for Your Favorite Artist - Final Round".to_string(),
        slug: Slug::new("final-voting-round")?,
        description: None,
        campaign_type: CampaignType::Voting,
        artists: vec![
            Ref::unresolved(tuan_hung.id),
            Ref::unresolved(bang_kieu.id),
            Ref::unresolved(bb_tran.id),
            Ref::unresolved(son_thach.id),
        ],
        start_date: ts(2024, 12, 1, 0, 0, 0),
        end_date: ts(2024, 12, 31, 23, 59, 59),
        active_override: Some(true),
        image: None,
        hashtags: Vec::new(),
        goals: vec![CampaignGoal {
            description: "Total Votes".to_string(),
            target: 5_000_000,
            current: 3_750_000,
            unit: Some("votes".to_string()),
            achieved: false,
        }],
        instructions: None,
        external_links: Vec::new(),
        updates: Vec::new(),
        featured: true,
        created_at: Utc::now(),
    };

    let tiktok_challenge = Campaign {
        id: Uuid::new_v4(),
        title: "#CallMeByFireChallenge on TikTok".to_string(),
        slug: Slug::new("tiktok-challenge")?,
        description: None,
        campaign_type: CampaignType::Hashtag,
        artists: vec![Ref::unresolved(tuan_hung.id), Ref::unresolved(bb_tran.id)],
        start_date: ts(2024, 12, 5, 0, 0, 0),
        end_date: ts(2024, 12, 28, 23, 59, 59),
        active_override: Some(true),
        image: None,
        hashtags: vec![HashtagRef::on_platform(
            "CallMeByFireChallenge",
            HashtagPlatform::TikTok,
        )],
        goals: vec![CampaignGoal {
            description: "TikTok Posts".to_string(),
            target: 100_000,
            current: 67_500,
            unit: Some("posts".to_string()),
            achieved: false,
        }],
        instructions: None,
        external_links: Vec::new(),
        updates: Vec::new(),
        featured: false,
        created_at: Utc::now(),
    };

    let charity_fundraiser = Campaign {
        id: Uuid::new_v4(),
        title: "Charity Concert Fundraiser".to_string(),
        slug: Slug::new("charity-fundraiser")?,
        description: None,
        campaign_type: CampaignType::Charity,
        artists: vec![Ref::unresolved(bang_kieu.id), Ref::unresolved(son_thach.id)],
        start_date: ts(2024, 11, 20, 0, 0, 0),
        end_date: ts(2024, 12, 25, 23, 59, 59),
        active_override: Some(true),
        image: None,
        hashtags: Vec::new(),
        goals: vec![CampaignGoal {
            description: "Funds Raised".to_string(),
            target: 1_000_000_000,
            current: 850_000_000,
            unit: Some("VND".to_string()),
            achieved: false,
        }],
        instructions: None,
        external_links: Vec::new(),
        updates: vec![CampaignUpdate {
            date: ts(2024, 12, 10, 9, 0, 0),
            message: "Passed the 800M VND mark - thank you!".to_string(),
        }],
        featured: false,
        created_at: Utc::now(),
    };

    let finale_news = News {
        id: Uuid::new_v4(),
        title: "Grand Finale Date Announced: December 25th at Mỹ Đình Stadium".to_string(),
        slug: Slug::new("grand-finale-announcement")?,
        excerpt: "The highly anticipated finale has been officially scheduled for December 25th \
                  at the iconic Mỹ Đình National Stadium."
            .to_string(),
        content: "The finale lineup and ticketing details were confirmed this morning."
            .to_string(),
        category: NewsCategory::Announcements,
        featured_image: ImageRef::new("/media/news/grand-finale.jpg", "Grand finale announcement"),
        related_artists: Vec::new(),
        related_events: vec![Ref::unresolved(finale_concert.id)],
        tags: vec!["finale".to_string()],
        author: News::DEFAULT_AUTHOR.to_string(),
        published_date: ts(2024, 12, 10, 10, 0, 0),
        featured: true,
        status: NewsStatus::Published,
        created_at: Utc::now(),
    };

    let behind_scenes = News {
        id: Uuid::new_v4(),
        title: "Behind the Scenes: How Artists Prepare for Live Performances".to_string(),
        slug: Slug::new("behind-scenes-preparations")?,
        excerpt: "An exclusive look at the intensive preparation process before each \
                  electrifying performance."
            .to_string(),
        content: "Rehearsals start at dawn and run late into the night.".to_string(),
        category: NewsCategory::BehindTheScenes,
        featured_image: ImageRef::new("/media/news/behind-scenes.jpg", "Rehearsal backstage"),
        related_artists: Vec::new(),
        related_events: Vec::new(),
        tags: Vec::new(),
        author: News::DEFAULT_AUTHOR.to_string(),
        published_date: ts(2024, 12, 8, 14, 30, 0),
        featured: false,
        status: NewsStatus::Published,
        created_at: Utc::now(),
    };

    let voting_record = News {
        id: Uuid::new_v4(),
        title: "Tuấn Hưng Breaks Voting Record with 250K Votes in 24 Hours".to_string(),
        slug: Slug::new("tuan-hung-voting-record")?,
        excerpt: "An unprecedented 250,000 votes within a single day sets a new show record."
            .to_string(),
        content: "The previous record stood for three seasons.".to_string(),
        category: NewsCategory::ArtistNews,
        featured_image: ImageRef::new("/media/news/voting-record.jpg", "Voting record"),
        related_artists: vec![Ref::unresolved(tuan_hung.id)],
        related_events: Vec::new(),
        tags: vec!["voting".to_string()],
        author: News::DEFAULT_AUTHOR.to_string(),
        published_date: ts(2024, 12, 6, 9, 15, 0),
        featured: false,
        status: NewsStatus::Published,
        created_at: Utc::now(),
    };

    let challenge_metric = HashtagMetric {
        id: Uuid::new_v4(),
        hashtag: "CallMeByFireChallenge".to_string(),
        platform: TrackedPlatform::TikTok,
        related_artist: None,
        related_campaign: Some(Ref::unresolved(tiktok_challenge.id)),
        mention_count: 125_000,
        metrics: EngagementMetrics {
            daily: 4_500,
            weekly: 28_000,
            monthly: 95_000,
            total_engagement: 870_000,
            average_engagement: 1_250.5,
            trending: true,
        },
        last_updated: ts(2024, 12, 12, 6, 0, 0),
        tracking_enabled: true,
    };

    let team_tag_metric = HashtagMetric {
        id: Uuid::new_v4(),
        hashtag: "TeamTuanHung".to_string(),
        platform: TrackedPlatform::Instagram,
        related_artist: Some(Ref::unresolved(tuan_hung.id)),
        related_campaign: None,
        mention_count: 45_000,
        metrics: EngagementMetrics {
            daily: 900,
            weekly: 6_800,
            monthly: 31_000,
            total_engagement: 210_000,
            average_engagement: 640.0,
            trending: true,
        },
        last_updated: ts(2024, 12, 12, 6, 0, 0),
        tracking_enabled: true,
    };

    let dormant_metric = HashtagMetric {
        id: Uuid::new_v4(),
        hashtag: "NhaTraiVN".to_string(),
        platform: TrackedPlatform::Twitter,
        related_artist: None,
        related_campaign: None,
        mention_count: 12_000,
        metrics: EngagementMetrics {
            daily: 120,
            weekly: 850,
            monthly: 4_100,
            total_engagement: 36_000,
            average_engagement: 210.0,
            trending: false,
        },
        last_updated: ts(2024, 12, 1, 6, 0, 0),
        tracking_enabled: false,
    };

    Ok(FixtureData {
        teams: vec![nha_trai, nha_gai],
        artists: vec![tuan_hung, bang_kieu, bb_tran, son_thach],
        events: vec![finale_concert, fan_meeting, tv_special],
        campaigns: vec![final_voting, tiktok_challenge, charity_fundraiser],
        news: vec![finale_news, behind_scenes, voting_record],
        hashtag_metrics: vec![challenge_metric, team_tag_metric, dormant_metric],
    })
}

/// Load the fixture dataset into a fresh in-memory store.
pub async fn seed_store() -> AppResult<MemoryStore> {
    let data = fixture_data()?;
    let store = MemoryStore::new();

    for team in data.teams {
        store.insert(Document::Team(team)).await?;
    }
    for artist in data.artists {
        store.insert(Document::Artist(artist)).await?;
    }
    for event in data.events {
        store.insert(Document::Event(event)).await?;
    }
    for campaign in data.campaigns {
        store.insert(Document::Campaign(campaign)).await?;
    }
    for news in data.news {
        store.insert(Document::News(news)).await?;
    }
    for metric in data.hashtag_metrics {
        store.insert(Document::HashtagMetric(metric)).await?;
    }

    Ok(store)
}

/// Fixture-backed [`HomepageSource`]: serves the canned landing-page lists
/// without touching a store.
pub struct FixtureHomepage {
    data: FixtureData,
}

impl FixtureHomepage {
    pub fn new() -> AppResult<Self> {
        Ok(Self {
            data: fixture_data()?,
        })
    }
}

#[async_trait]
impl HomepageSource for FixtureHomepage {
    async fn upcoming_events(&self, limit: usize) -> AppResult<Vec<Event>> {
        Ok(self.data.events.iter().take(limit).cloned().collect())
    }

    async fn active_campaigns(&self, limit: usize) -> AppResult<Vec<Campaign>> {
        Ok(self.data.campaigns.iter().take(limit).cloned().collect())
    }

    async fn latest_news(&self, limit: usize) -> AppResult<Vec<News>> {
        Ok(self.data.news.iter().take(limit).cloned().collect())
    }

    async fn trending_hashtags(&self, limit: usize) -> AppResult<Vec<HashtagMetric>> {
        Ok(self
            .data
            .hashtag_metrics
            .iter()
            .filter(|metric| metric.metrics.trending)
            .take(limit)
            .cloned()
            .collect())
    }
}
