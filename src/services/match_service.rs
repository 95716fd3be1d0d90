use sqlx::PgPool;
use uuid::Uuid;

use crate::db::helpers::{require_record, translate_write_error};
use crate::db::{goals, matches, teams};
use crate::error::{LeagueError, LeagueResult};
use crate::league::results::ResultReporter;
use crate::league::validation::LeagueValidator;
use crate::models::matches::{
    Match, MatchDetails, MatchRangeQuery, MatchRequest, MatchStatus, MatchWithTeams, ScoringEvent,
};

const FINISHED_IMMUTABLE_MESSAGE: &str = "cannot update a finished match";

#[derive(Debug, Clone)]
pub struct MatchService {
    pool: PgPool,
}

impl MatchService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    #[tracing::instrument(name = "Create match", skip(self))]
    pub async fn create_match(&self, request: &MatchRequest) -> LeagueResult<Match> {
        LeagueValidator::new().validate_match_request(request)?;
        self.ensure_teams_exist(request).await?;

        let game = matches::insert_match(&self.pool, request)
            .await
            .map_err(|e| translate_write_error(e, "match references a missing team"))?;
        tracing::info!("Scheduled match {} at {}", game.id, game.match_time);
        Ok(game)
    }

    /// All matches, or only those inside the requested date range
    pub async fn list_matches(&self, query: &MatchRangeQuery) -> LeagueResult<Vec<MatchWithTeams>> {
        let range = LeagueValidator::new().validate_date_range(query.start_date, query.end_date)?;

        let found = match range {
            Some((start, end)) => matches::list_matches_between(&self.pool, start, end).await?,
            None => matches::list_matches(&self.pool).await?,
        };
        Ok(found)
    }

    pub async fn list_matches_by_team(&self, team_id: Uuid) -> LeagueResult<Vec<MatchWithTeams>> {
        require_record(teams::find_team(&self.pool, team_id).await?, "team")?;
        Ok(matches::list_matches_by_team(&self.pool, team_id).await?)
    }

    pub async fn get_match(&self, match_id: Uuid) -> LeagueResult<MatchDetails> {
        let game = require_record(matches::find_match_with_teams(&self.pool, match_id).await?, "match")?;
        let goal_list = goals::find_goals_for_match(&self.pool, match_id).await?;

        Ok(MatchDetails {
            game,
            goals: goal_list,
        })
    }

    /// Reschedule a match or change its teams. Finished matches are immutable.
    #[tracing::instrument(name = "Update match", skip(self))]
    pub async fn update_match(&self, match_id: Uuid, request: &MatchRequest) -> LeagueResult<Match> {
        LeagueValidator::new().validate_match_request(request)?;

        let existing = require_record(matches::find_match(&self.pool, match_id).await?, "match")?;
        if existing.status == MatchStatus::Finished {
            return Err(LeagueError::invalid_state(FINISHED_IMMUTABLE_MESSAGE));
        }
        self.ensure_teams_exist(request).await?;

        let updated = matches::update_match_schedule(&self.pool, match_id, request)
            .await
            .map_err(|e| translate_write_error(e, "match references a missing team"))?;

        // The update is guarded on status, so None here means the match was finished meanwhile.
        updated.ok_or_else(|| LeagueError::invalid_state(FINISHED_IMMUTABLE_MESSAGE))
    }

    pub async fn delete_match(&self, match_id: Uuid) -> LeagueResult<()> {
        let deleted = matches::delete_match(&self.pool, match_id).await?;
        if deleted == 0 {
            return Err(LeagueError::not_found("match"));
        }
        tracing::info!("Deleted match {} and its goals", match_id);
        Ok(())
    }

    pub async fn report_result(
        &self,
        match_id: Uuid,
        home_score: i32,
        away_score: i32,
        scoring_events: &[ScoringEvent],
    ) -> LeagueResult<Match> {
        ResultReporter::new(self.pool.clone())
            .report_result(match_id, home_score, away_score, scoring_events)
            .await
    }

    async fn ensure_teams_exist(&self, request: &MatchRequest) -> LeagueResult<()> {
        for (side, team_id) in [("home", request.home_team_id), ("away", request.away_team_id)] {
            if teams::find_team(&self.pool, team_id).await?.is_none() {
                return Err(LeagueError::invalid_reference(format!(
                    "{} team {} does not exist",
                    side, team_id
                )));
            }
        }
        Ok(())
    }
}
