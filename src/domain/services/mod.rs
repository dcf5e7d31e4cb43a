pub mod relation_resolver;
pub mod stat_aggregator;

pub use relation_resolver::RelationResolver;
pub use stat_aggregator::{
    format_goal_magnitude, format_magnitude, goal_progress, member_count, team_vote_total,
    GoalProgress,
};
