use std::collections::HashMap;

use sqlx::PgPool;
use uuid::Uuid;

use crate::db::helpers::{require_record, translate_write_error};
use crate::db::{goals, matches, players};
use crate::error::{LeagueError, LeagueResult};
use crate::league::validation::LeagueValidator;
use crate::models::matches::{Match, MatchStatus, ScoringEvent};
use crate::models::player::Player;

/// Records final results. Each report is one transaction: the match row is
/// locked, checked, its goals replaced, and its score and status written
/// together, or nothing is written at all.
///
/// A missing match is NotFound and a finished one is InvalidState before the
/// payload itself is looked at.
#[derive(Debug, Clone)]
pub struct ResultReporter {
    pool: PgPool,
}

impl ResultReporter {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    #[tracing::instrument(
        name = "Report match result",
        skip(self, scoring_events),
        fields(goal_count = scoring_events.len())
    )]
    pub async fn report_result(
        &self,
        match_id: Uuid,
        home_score: i32,
        away_score: i32,
        scoring_events: &[ScoringEvent],
    ) -> LeagueResult<Match> {
        // Dropping `tx` on any early return rolls the whole report back.
        let mut tx = self.pool.begin().await?;

        let game = require_record(matches::lock_match(&mut *tx, match_id).await?, "match")?;
        if game.status == MatchStatus::Finished {
            return Err(LeagueError::invalid_state(
                "match is already finished and its result cannot be reported again",
            ));
        }
        LeagueValidator::new().validate_result(home_score, away_score, scoring_events)?;

        let scorer_ids: Vec<Uuid> = scoring_events.iter().map(|event| event.player_id).collect();
        let scorers = players::find_players_by_ids(&mut *tx, &scorer_ids).await?;
        check_scorers(&game, scoring_events, &scorers)?;

        let removed = goals::delete_goals_for_match(&mut *tx, match_id).await?;
        for event in scoring_events {
            goals::insert_goal(&mut *tx, match_id, event)
                .await
                .map_err(|e| translate_write_error(e, "goal references a missing match or player"))?;
        }
        let finished = matches::record_final_score(&mut *tx, match_id, home_score, away_score).await?;

        tx.commit().await?;

        tracing::info!(
            "Match {} finished {}-{} with {} goals recorded ({} replaced)",
            match_id,
            home_score,
            away_score,
            scoring_events.len(),
            removed
        );
        Ok(finished)
    }
}

/// Every scorer must exist and play for one of the two teams of the match.
pub fn check_scorers(game: &Match, events: &[ScoringEvent], scorers: &[Player]) -> LeagueResult<()> {
    let teams_by_player: HashMap<Uuid, Uuid> = scorers
        .iter()
        .map(|player| (player.id, player.team_id))
        .collect();

    for event in events {
        match teams_by_player.get(&event.player_id) {
            None => {
                return Err(LeagueError::invalid_reference(format!(
                    "player {} does not exist",
                    event.player_id
                )));
            }
            Some(team_id) if !game.involves(*team_id) => {
                return Err(LeagueError::invalid_reference(format!(
                    "player {} plays for neither the home nor the away team",
                    event.player_id
                )));
            }
            Some(_) => {}
        }
    }

    Ok(())
}
