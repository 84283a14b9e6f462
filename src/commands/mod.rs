pub mod chat;
pub mod edit;
pub mod imagine;
pub mod models;
pub mod video;

pub use chat::ChatMode;
pub use models::ModelGroups;
