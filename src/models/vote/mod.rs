pub mod queries;
pub mod quorum;
pub mod types;

pub use queries::*;
pub use quorum::*;
pub use types::*;
