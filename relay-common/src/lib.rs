pub mod error;
pub mod models;
pub mod text;
pub mod traits;

pub use error::Error;
