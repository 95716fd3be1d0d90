use chrono::SecondsFormat;
use sqlx::PgPool;
use uuid::Uuid;

use crate::db::helpers::require_record;
use crate::db::{goals, matches};
use crate::error::LeagueResult;
use crate::models::goal::GoalWithScorer;
use crate::models::matches::MatchWithTeams;
use crate::models::report::{MatchReport, ReportGoal, WinsBeforeMatch};

#[derive(Debug, Clone)]
pub struct MatchReportService {
    pool: PgPool,
}

impl MatchReportService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Assemble the display report for one match.
    ///
    /// With `include_history`, the report also carries how many matches each
    /// side had won before this match's kick-off.
    #[tracing::instrument(name = "Build match report", skip(self))]
    pub async fn get_match_report(
        &self,
        match_id: Uuid,
        include_history: bool,
    ) -> LeagueResult<MatchReport> {
        let game = require_record(matches::find_match_with_teams(&self.pool, match_id).await?, "match")?;
        let goal_list = goals::find_goals_for_match(&self.pool, match_id).await?;

        let history = if include_history {
            Some(self.wins_before(&game).await?)
        } else {
            None
        };

        Ok(build_match_report(&game, &goal_list, history))
    }

    async fn wins_before(&self, game: &MatchWithTeams) -> LeagueResult<WinsBeforeMatch> {
        let kick_off = game.game.match_time;
        let home_team_wins = matches::count_wins_before(&self.pool, game.game.home_team_id, kick_off).await?;
        let away_team_wins = matches::count_wins_before(&self.pool, game.game.away_team_id, kick_off).await?;

        Ok(WinsBeforeMatch {
            home_team_wins,
            away_team_wins,
        })
    }
}

/// Pure assembly of a report from already loaded rows
pub fn build_match_report(
    game: &MatchWithTeams,
    goal_list: &[GoalWithScorer],
    wins_before_match: Option<WinsBeforeMatch>,
) -> MatchReport {
    let info = &game.game;

    MatchReport {
        match_id: info.id,
        home_team: game.home_team_name.clone(),
        away_team: game.away_team_name.clone(),
        home_score: info.home_score,
        away_score: info.away_score,
        score: info.score_line(),
        match_time: info.match_time.to_rfc3339_opts(SecondsFormat::Secs, true),
        status: info.status.to_string(),
        outcome: info.outcome(),
        goals: goal_list
            .iter()
            .map(|goal| ReportGoal {
                player_id: goal.player_id,
                player_name: goal.player_name.clone(),
                team_id: goal.team_id,
                minute: goal.minute,
            })
            .collect(),
        wins_before_match,
    }
}
