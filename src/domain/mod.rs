pub mod error;
pub mod places_db;
pub mod snapshot;

pub use error::PollError;
