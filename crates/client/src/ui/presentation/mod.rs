//! Presentation layer: state store, service hooks, views, components.

pub mod components;
pub mod services;
pub mod store;
pub mod views;

pub use services::{refetch_worlds, use_services, Services};
pub use store::{use_app_store, StateHandle};
