use sqlx::PgPool;
use uuid::Uuid;

use crate::db::helpers::{require_record, translate_write_error};
use crate::db::teams;
use crate::error::{LeagueError, LeagueResult};
use crate::league::validation::LeagueValidator;
use crate::models::team::{Team, TeamRequest};

#[derive(Debug, Clone)]
pub struct TeamService {
    pool: PgPool,
}

impl TeamService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create_team(&self, request: &TeamRequest) -> LeagueResult<Team> {
        LeagueValidator::new().validate_team_request(request)?;

        let team = teams::insert_team(&self.pool, request)
            .await
            .map_err(|e| translate_write_error(e, "team references a missing record"))?;
        tracing::info!("Created team {} ({})", team.name, team.id);
        Ok(team)
    }

    pub async fn list_teams(&self) -> LeagueResult<Vec<Team>> {
        Ok(teams::list_teams(&self.pool).await?)
    }

    pub async fn get_team(&self, team_id: Uuid) -> LeagueResult<Team> {
        require_record(teams::find_team(&self.pool, team_id).await?, "team")
    }

    pub async fn update_team(&self, team_id: Uuid, request: &TeamRequest) -> LeagueResult<Team> {
        LeagueValidator::new().validate_team_request(request)?;

        let updated = teams::update_team(&self.pool, team_id, request)
            .await
            .map_err(|e| translate_write_error(e, "team references a missing record"))?;
        require_record(updated, "team")
    }

    /// Players go with the team. A team that still appears in a match cannot be deleted.
    pub async fn delete_team(&self, team_id: Uuid) -> LeagueResult<()> {
        let deleted = teams::delete_team(&self.pool, team_id).await.map_err(|e| {
            translate_write_error(
                e,
                "team is still referenced by matches or by goals of its players",
            )
        })?;

        if deleted == 0 {
            return Err(LeagueError::not_found("team"));
        }
        tracing::info!("Deleted team {}", team_id);
        Ok(())
    }
}
