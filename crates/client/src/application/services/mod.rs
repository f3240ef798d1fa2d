//! Application services over the outbound ports.

mod auth_service;
mod entity_service;
mod world_service;

pub use auth_service::AuthService;
pub use entity_service::EntityService;
pub use world_service::WorldService;
