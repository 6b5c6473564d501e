pub mod assets;
pub mod config;
pub mod error;
pub mod observability;
pub mod plan_store;
pub mod routes;
pub mod template;

pub use routes::AppState;
