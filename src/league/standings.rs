use std::cmp::Ordering;
use std::collections::HashMap;

use sqlx::PgPool;
use uuid::Uuid;

use crate::db::{matches, teams};
use crate::error::LeagueResult;
use crate::models::matches::Match;
use crate::models::report::TeamStanding;
use crate::models::team::Team;

/// Service responsible for the league table
#[derive(Debug, Clone)]
pub struct StandingsService {
    pool: PgPool,
}

impl StandingsService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Build the current league table from every stored team and finished match.
    ///
    /// Teams and matches are read inside one read-only transaction so the table
    /// never mixes two different states of the store.
    #[tracing::instrument(name = "Compute league standings", skip(self))]
    pub async fn get_standings(&self) -> LeagueResult<Vec<TeamStanding>> {
        let mut tx = self.pool.begin().await?;
        sqlx::query("SET TRANSACTION ISOLATION LEVEL REPEATABLE READ READ ONLY")
            .execute(&mut *tx)
            .await?;

        let all_teams = teams::list_teams(&mut *tx).await?;
        let finished = matches::list_finished_matches(&mut *tx).await?;
        tx.commit().await?;

        let table = compute_standings(&all_teams, &finished);
        tracing::info!(
            "Computed standings for {} teams from {} finished matches",
            table.len(),
            finished.len()
        );
        Ok(table)
    }
}

/// Aggregate the league table in one pass over the matches.
///
/// Only matches that are finished with both scores present count. Every team
/// gets a row, including teams without a finished match.
pub fn compute_standings(teams: &[Team], matches: &[Match]) -> Vec<TeamStanding> {
    let mut table: HashMap<Uuid, TeamStanding> = teams
        .iter()
        .map(|team| (team.id, TeamStanding::new(team.id, team.name.clone())))
        .collect();

    for game in matches {
        let Some((home_score, away_score)) = game.final_score() else {
            continue;
        };
        if !table.contains_key(&game.home_team_id) || !table.contains_key(&game.away_team_id) {
            tracing::warn!("Skipping match {} referencing an unknown team", game.id);
            continue;
        }

        if let Some(home) = table.get_mut(&game.home_team_id) {
            home.record(home_score, away_score);
        }
        if let Some(away) = table.get_mut(&game.away_team_id) {
            away.record(away_score, home_score);
        }
    }

    let mut standings: Vec<TeamStanding> = table.into_values().collect();
    standings.sort_by(compare_standings);

    for (index, standing) in standings.iter_mut().enumerate() {
        standing.position = u32::try_from(index + 1).unwrap_or(u32::MAX);
    }

    standings
}

/// Ranking order: points, goal difference, goals scored (all descending),
/// then team name and id so equal records always come out the same way.
pub fn compare_standings(a: &TeamStanding, b: &TeamStanding) -> Ordering {
    b.points
        .cmp(&a.points)
        .then_with(|| b.goal_difference.cmp(&a.goal_difference))
        .then_with(|| b.goals_for.cmp(&a.goals_for))
        .then_with(|| a.team_name.cmp(&b.team_name))
        .then_with(|| a.team_id.cmp(&b.team_id))
}
