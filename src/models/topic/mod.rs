pub mod drafts;
pub mod moderation;
pub mod queries;
pub mod types;

pub use drafts::*;
pub use moderation::*;
pub use queries::*;
pub use types::*;
