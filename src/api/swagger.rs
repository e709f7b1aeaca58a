use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "EcoTrack API",
        version = "1.0.0",
        description = "REST backend for EcoTrack: community tips, upcoming events, statistics, users, eco challenges and per-user challenge activity.\n\nEvery endpoint performs a single read or write against one MongoDB collection. Write endpoints return driver-style acknowledgements."
    ),
    paths(
        // Health
        crate::api::health::root,
        crate::api::health::health_check,

        // Community
        crate::api::tips::list_tips,
        crate::api::tips::create_tips,
        crate::api::events::list_events,
        crate::api::events::create_events,
        crate::api::hero::list_hero,
        crate::api::hero::create_hero,

        // Statistics
        crate::api::statistics::list_statistics,
        crate::api::statistics::create_statistics,

        // Users
        crate::api::users::list_users,
        crate::api::users::create_user,
        crate::api::users::update_user,

        // Challenges
        crate::api::challenges::list_challenges,
        crate::api::challenges::list_ongoing_challenges,
        crate::api::challenges::get_challenge,
        crate::api::challenges::create_challenge,
        crate::api::challenges::join_challenge,
        crate::api::challenges::is_joined,

        // Activities
        crate::api::activities::list_my_activities,
        crate::api::activities::get_activity,
        crate::api::activities::delete_activity,
        crate::api::activities::update_progress,
    ),
    components(
        schemas(
            crate::api::health::HealthResponse,
            crate::models::InsertOneAck,
            crate::models::InsertManyAck,
            crate::models::UpdateAck,
            crate::models::DeleteAck,
            crate::models::StatisticsSnapshot,
            crate::models::UpdateUserRequest,
            crate::models::UserExistsResponse,
            crate::models::JoinChallengeRequest,
            crate::models::JoinChallengeResponse,
            crate::models::IsJoinedResponse,
            crate::models::ProgressRequest,
        )
    ),
    tags(
        (name = "Health", description = "Liveness and database connectivity."),
        (name = "Community", description = "Freeform home-page content: tips, upcoming events and hero banners."),
        (name = "Statistics", description = "Community statistics snapshots."),
        (name = "Users", description = "User registration and lookup by email."),
        (name = "Challenges", description = "Eco challenges: filtering, lookup and joining."),
        (name = "Activities", description = "Per-user challenge participation and progress."),
    )
)]
pub struct ApiDoc;
