use crate::application::services::query_service::{Condition, Query, QueryService};
use crate::application::views::{StatHighlight, TeamDirectoryEntry, TeamProfile};
use crate::domain::entities::{Artist, Document, Team};
use crate::domain::schema::Collection;
use crate::domain::services::stat_aggregator::team_vote_total;
use crate::shared::errors::{AppError, AppResult};
use futures::future::join_all;
use std::sync::Arc;

/// Roster queries fetch at most this many artists per team.
const ROSTER_LIMIT: usize = 100;

pub struct TeamPageService {
    query: Arc<QueryService>,
}

impl TeamPageService {
    pub fn new(query: Arc<QueryService>) -> Self {
        Self { query }
    }

    /// Team detail page: the team at depth 2 (captain embedded), the roster
    /// via a containment query, and the recomputed member count. The vote
    /// total prefers the stored team aggregate and falls back to the member
    /// rollup when that aggregate was never maintained.
    pub async fn team_profile(&self, slug: &str) -> AppResult<TeamProfile> {
        let primary = self
            .query
            .find(
                Query::new(Collection::Teams)
                    .equals("slug", slug)
                    .depth(2)
                    .limit(1),
            )
            .await?;
        let team = primary
            .docs
            .into_iter()
            .find_map(Document::into_team)
            .ok_or_else(|| AppError::NotFound(format!("team '{}'", slug)))?;

        let roster = self
            .query
            .find(
                Query::new(Collection::Artists)
                    .contains("teams", team.id)
                    .depth(1)
                    .limit(ROSTER_LIMIT),
            )
            .await;
        let (members, member_count): (Vec<Artist>, u64) = match roster {
            Ok(found) => {
                let count = found.total_docs;
                let members = found
                    .docs
                    .into_iter()
                    .filter_map(Document::into_artist)
                    .collect();
                (members, count)
            }
            Err(err) => {
                log::warn!("team '{}': members section degraded: {}", slug, err);
                (Vec::new(), 0)
            }
        };

        let captain = team
            .captain
            .as_ref()
            .and_then(|captain| captain.entity())
            .cloned();

        Ok(TeamProfile {
            total_votes: StatHighlight::of(team_vote_total(&team, &members)),
            wins: team.stats.wins,
            performances: team.stats.performances,
            captain,
            members,
            member_count,
            team,
        })
    }

    /// All active teams with their member counts, for the teams index page.
    /// Counts are secondary data: one failing count empties that entry, not
    /// the page.
    pub async fn team_directory(&self) -> AppResult<Vec<TeamDirectoryEntry>> {
        let teams = self
            .query
            .find(
                Query::new(Collection::Teams)
                    .equals("active", true)
                    .depth(2)
                    .limit(ROSTER_LIMIT),
            )
            .await?;
        let teams: Vec<Team> = teams
            .docs
            .into_iter()
            .filter_map(Document::into_team)
            .collect();

        let counts = join_all(teams.iter().map(|team| {
            let conditions = vec![Condition::Contains {
                field: "teams".to_string(),
                id: team.id,
            }];
            async move { self.query.count(Collection::Artists, &conditions).await }
        }))
        .await;

        Ok(teams
            .into_iter()
            .zip(counts)
            .map(|(team, count)| {
                let member_count = count.unwrap_or_else(|err| {
                    log::warn!("team '{}': member count degraded: {}", team.slug, err);
                    0
                });
                TeamDirectoryEntry { team, member_count }
            })
            .collect())
    }
}
