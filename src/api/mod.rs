//! The thin REST API service: `/api/bookings` and `/api/consultant`.

pub mod routes;
pub mod store;

pub use routes::{ApiState, api_routes};
pub use store::MemoryStore;
