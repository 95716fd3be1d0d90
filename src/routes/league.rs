use actix_web::web;

use crate::handlers::{match_handler, player_handler, report_handler, team_handler};
use crate::middleware::auth::AuthMiddleware;

pub fn init_league_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("")
            .wrap(AuthMiddleware)
            // Teams
            .service(
                web::resource("/teams")
                    .route(web::get().to(team_handler::get_teams))
                    .route(web::post().to(team_handler::create_team))
            )
            .service(
                web::resource("/teams/{id}")
                    .route(web::get().to(team_handler::get_team_by_id))
                    .route(web::put().to(team_handler::update_team))
                    .route(web::delete().to(team_handler::delete_team))
            )

            // Players
            .service(
                web::resource("/players")
                    .route(web::get().to(player_handler::get_players))
                    .route(web::post().to(player_handler::create_player))
            )
            .service(
                web::resource("/players/by-team/{team_id}")
                    .route(web::get().to(player_handler::get_players_by_team))
            )
            .service(
                web::resource("/players/{id}")
                    .route(web::get().to(player_handler::get_player_by_id))
                    .route(web::put().to(player_handler::update_player))
                    .route(web::delete().to(player_handler::delete_player))
            )

            // Matches
            .service(
                web::resource("/matches")
                    .route(web::get().to(match_handler::get_matches))
                    .route(web::post().to(match_handler::create_match))
            )
            .service(
                web::resource("/matches/by-team/{team_id}")
                    .route(web::get().to(match_handler::get_matches_by_team))
            )
            .service(
                web::resource("/matches/{id}")
                    .route(web::get().to(match_handler::get_match_by_id))
                    .route(web::put().to(match_handler::update_match))
                    .route(web::delete().to(match_handler::delete_match))
            )
            .service(
                web::resource("/matches/{id}/report")
                    .route(web::post().to(match_handler::report_match_result))
            )

            // Reports
            .service(
                web::resource("/reports/standings")
                    .route(web::get().to(report_handler::get_standings))
            )
            .service(
                web::resource("/reports/top-scorers")
                    .route(web::get().to(report_handler::get_top_scorers))
            )
            .service(
                web::resource("/reports/matches/{id}")
                    .route(web::get().to(report_handler::get_match_report))
            )
    );
}
