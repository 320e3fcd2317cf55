pub mod forum;
pub mod settings;

pub use forum::ForumConfig;
pub use settings::Settings;
