pub mod activity_service;
pub mod challenge_service;
pub mod document_service;
pub mod statistics_service;
pub mod user_service;
