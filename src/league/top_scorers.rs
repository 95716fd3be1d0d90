use sqlx::PgPool;

use crate::db::goals;
use crate::error::LeagueResult;
use crate::models::report::{ScorerTally, TopScorer};

#[derive(Debug, Clone)]
pub struct TopScorerService {
    pool: PgPool,
}

impl TopScorerService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Players with the most goals across all matches, at most `limit` of them
    #[tracing::instrument(name = "Compute top scorers", skip(self))]
    pub async fn get_top_scorers(&self, limit: i64) -> LeagueResult<Vec<TopScorer>> {
        let tallies = goals::tally_goals_by_player(&self.pool).await?;
        let ranked = rank_top_scorers(tallies, limit);
        tracing::debug!("Top scorers list has {} entries", ranked.len());
        Ok(ranked)
    }
}

/// Order tallies by goals descending, then player name ascending, and keep the first `limit`.
/// A non-positive limit yields an empty list.
pub fn rank_top_scorers(mut tallies: Vec<ScorerTally>, limit: i64) -> Vec<TopScorer> {
    tallies.sort_by(|a, b| {
        b.goals
            .cmp(&a.goals)
            .then_with(|| a.player_name.cmp(&b.player_name))
            .then_with(|| a.player_id.cmp(&b.player_id))
    });

    let keep = usize::try_from(limit.max(0)).unwrap_or(usize::MAX);

    tallies
        .into_iter()
        .take(keep)
        .enumerate()
        .map(|(index, tally)| TopScorer {
            rank: u32::try_from(index + 1).unwrap_or(u32::MAX),
            player_id: tally.player_id,
            player_name: tally.player_name,
            team_name: tally.team_name,
            goals: tally.goals,
        })
        .collect()
}
