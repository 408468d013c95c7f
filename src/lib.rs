pub mod config;
pub mod errors;
pub mod models;
pub mod scheduler;
pub mod store;

pub use config::*;
pub use errors::*;
pub use models::*;
pub use scheduler::*;
pub use store::*;
