pub mod check;
pub mod reset;
pub mod status;

use clap::{Parser, Subcommand};

use crate::app::{Data, Error};
use crate::db::models::ContentType;

#[derive(Parser, Debug)]
#[command(name = "forum-spam-guard", about = "Per-user posting spam guard for forum content")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Record a post attempt and report whether it is blocked
    Check {
        user_id: u64,
        /// Comment or Discussion
        content_type: ContentType,
    },
    /// Show the stored counter and any active lockout
    Status {
        user_id: u64,
        content_type: ContentType,
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
    /// Clear a user's counter and lockout
    Reset {
        user_id: u64,
        content_type: ContentType,
    },
}

/// Exit code when a post attempt is blocked
pub const EXIT_BLOCKED: i32 = 2;

/// Run a command, returning the process exit code
pub async fn run(data: &Data, command: Command) -> Result<i32, Error> {
    match command {
        Command::Check {
            user_id,
            content_type,
        } => check::check(data, user_id, content_type).await,
        Command::Status {
            user_id,
            content_type,
            json,
        } => status::status(data, user_id, content_type, json).await,
        Command::Reset {
            user_id,
            content_type,
        } => reset::reset(data, user_id, content_type).await,
    }
}
