use actix_web::web;

/// Monta um app de teste com o `MemoryStore` e todas as rotas
#[cfg(test)]
macro_rules! test_app {
    ($store:expr) => {
        actix_web::test::init_service(
            actix_web::App::new()
                .app_data(actix_web::web::Data::<dyn crate::database::DocumentStore>::from(
                    $store.clone() as std::sync::Arc<dyn crate::database::DocumentStore>,
                ))
                .configure(crate::api::configure),
        )
        .await
    };
}

pub mod activities;
pub mod challenges;
pub mod events;
pub mod health;
pub mod hero;
pub mod statistics;
pub mod swagger;
pub mod tips;
pub mod users;

/// Registra todas as rotas. O store é injetado pelo chamador via `app_data`.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        // Liveness
        .route("/", web::get().to(health::root))
        .route("/health", web::get().to(health::health_check))
        // Conteúdo da home
        .route("/tips", web::get().to(tips::list_tips))
        .route("/tips", web::post().to(tips::create_tips))
        .route("/upcomingEvents", web::get().to(events::list_events))
        .route("/upcomingEvents", web::post().to(events::create_events))
        .route("/statistics", web::get().to(statistics::list_statistics))
        .route("/statistics", web::post().to(statistics::create_statistics))
        .route("/hero", web::get().to(hero::list_hero))
        .route("/hero", web::post().to(hero::create_hero))
        // Users
        .route("/users", web::get().to(users::list_users))
        .route("/users", web::post().to(users::create_user))
        .route("/users", web::patch().to(users::update_user))
        // Challenges
        .route("/challenges", web::get().to(challenges::list_challenges))
        .route("/challenges", web::post().to(challenges::create_challenge))
        .route("/ongoing-challenges", web::get().to(challenges::list_ongoing_challenges))
        .route("/challenges/isJoined/{id}", web::get().to(challenges::is_joined))
        .route("/challenges/join/{id}", web::patch().to(challenges::join_challenge))
        .route("/challenges/{id}", web::get().to(challenges::get_challenge))
        // Activities
        .route("/my-activities", web::get().to(activities::list_my_activities))
        .route("/my-activities/progress/{id}", web::patch().to(activities::update_progress))
        .route("/my-activities/{id}", web::get().to(activities::get_activity))
        .route("/my-activities/{id}", web::delete().to(activities::delete_activity));
}
