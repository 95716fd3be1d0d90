use sqlx::PgPool;
use uuid::Uuid;

use crate::db::helpers::{require_record, translate_write_error, DUPLICATE_NUMBER_MESSAGE};
use crate::db::{goals, players, teams};
use crate::error::{LeagueError, LeagueResult};
use crate::league::validation::LeagueValidator;
use crate::models::player::{Player, PlayerRequest, PlayerWithTeam};

#[derive(Debug, Clone)]
pub struct PlayerService {
    pool: PgPool,
}

impl PlayerService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    #[tracing::instrument(name = "Create player", skip(self, request), fields(player = %request))]
    pub async fn create_player(&self, request: &PlayerRequest) -> LeagueResult<Player> {
        LeagueValidator::new().validate_player_request(request)?;
        self.ensure_team_exists(request.team_id).await?;
        self.ensure_number_free(request.team_id, request.number, None).await?;

        let player = players::insert_player(&self.pool, request)
            .await
            .map_err(|e| translate_write_error(e, "team does not exist"))?;
        tracing::info!("Created player {} for team {}", player.id, player.team_id);
        Ok(player)
    }

    pub async fn list_players(&self) -> LeagueResult<Vec<PlayerWithTeam>> {
        Ok(players::list_players(&self.pool).await?)
    }

    pub async fn get_player(&self, player_id: Uuid) -> LeagueResult<PlayerWithTeam> {
        require_record(players::find_player_with_team(&self.pool, player_id).await?, "player")
    }

    pub async fn list_players_by_team(&self, team_id: Uuid) -> LeagueResult<Vec<Player>> {
        require_record(teams::find_team(&self.pool, team_id).await?, "team")?;
        Ok(players::find_players_by_team(&self.pool, team_id).await?)
    }

    #[tracing::instrument(name = "Update player", skip(self, request), fields(player = %request))]
    pub async fn update_player(&self, player_id: Uuid, request: &PlayerRequest) -> LeagueResult<Player> {
        LeagueValidator::new().validate_player_request(request)?;
        let current = require_record(players::find_player_with_team(&self.pool, player_id).await?, "player")?;
        self.ensure_team_exists(request.team_id).await?;
        if current.player.team_id != request.team_id {
            self.ensure_goals_stay_with_team(player_id, request.team_id).await?;
        }
        self.ensure_number_free(request.team_id, request.number, Some(player_id)).await?;

        let updated = players::update_player(&self.pool, player_id, request)
            .await
            .map_err(|e| translate_write_error(e, "team does not exist"))?;
        require_record(updated, "player")
    }

    /// Players with recorded goals cannot be deleted.
    pub async fn delete_player(&self, player_id: Uuid) -> LeagueResult<()> {
        let deleted = players::delete_player(&self.pool, player_id)
            .await
            .map_err(|e| translate_write_error(e, "player has recorded goals and cannot be deleted"))?;

        if deleted == 0 {
            return Err(LeagueError::not_found("player"));
        }
        tracing::info!("Deleted player {}", player_id);
        Ok(())
    }

    async fn ensure_team_exists(&self, team_id: Uuid) -> LeagueResult<()> {
        match teams::find_team(&self.pool, team_id).await? {
            Some(_) => Ok(()),
            None => Err(LeagueError::invalid_reference(format!("team {} does not exist", team_id))),
        }
    }

    /// A transfer may not leave recorded goals credited to a team that did not play the match.
    async fn ensure_goals_stay_with_team(&self, player_id: Uuid, team_id: Uuid) -> LeagueResult<()> {
        let stranded = goals::count_goals_outside_team(&self.pool, player_id, team_id).await?;
        if stranded > 0 {
            tracing::info!("Player {} has {} goals in matches team {} did not play", player_id, stranded, team_id);
            return Err(LeagueError::invalid_reference(format!(
                "player has {} recorded goals in matches team {} did not play",
                stranded, team_id
            )));
        }
        Ok(())
    }

    /// Shirt numbers are unique within a team. `exclude` is the player being updated.
    async fn ensure_number_free(
        &self,
        team_id: Uuid,
        number: i32,
        exclude: Option<Uuid>,
    ) -> LeagueResult<()> {
        match players::find_player_by_number(&self.pool, team_id, number).await? {
            Some(holder) if Some(holder.id) != exclude => {
                tracing::info!("Shirt number {} already taken by player {}", number, holder.id);
                Err(LeagueError::invalid_reference(DUPLICATE_NUMBER_MESSAGE))
            }
            _ => Ok(()),
        }
    }
}
