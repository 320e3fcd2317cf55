pub mod app;
pub mod commands;
pub mod config;
pub mod constants;
pub mod db;
pub mod services;
pub mod utils;

pub use app::Error;
pub use db::models::{ContentType, SpamCheckState};
pub use services::spam::{AttributeStore, SpamGuard, SpamPolicy};
