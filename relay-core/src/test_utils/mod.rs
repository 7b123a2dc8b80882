pub mod helpers;

pub use helpers::RecordingSource;
