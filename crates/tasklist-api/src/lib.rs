pub mod handlers;
pub mod routes;
pub mod state;

// Re-exports
pub use routes::create_router;
pub use state::ApiState;
