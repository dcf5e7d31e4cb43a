pub mod artist;
pub mod campaign;
pub mod document;
pub mod event;
pub mod hashtag_metric;
pub mod news;
pub mod team;

pub use artist::{Achievement, Artist, GalleryImage, PerformanceVideo};
pub use campaign::{Campaign, CampaignGoal, CampaignUpdate, ExternalLink};
pub use document::Document;
pub use event::{Event, Location, RelatedLink, TicketInfo};
pub use hashtag_metric::HashtagMetric;
pub use news::News;
pub use team::Team;
