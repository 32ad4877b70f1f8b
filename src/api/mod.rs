pub mod extract;
pub mod handlers;
pub mod routes;
mod state;

pub use state::AppState;
