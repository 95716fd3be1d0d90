use actix_web::web;

pub mod admin;
pub mod backend_health;
pub mod league;

use crate::routes::league::init_league_routes;

pub fn init_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(backend_health::backend_health);

    cfg.service(
        web::scope("/api/v1")
            .service(
                web::scope("/admin")
                    .service(admin::register)
                    .service(admin::login)
            )
            // Everything else requires an admin token
            .configure(init_league_routes)
    );
}
