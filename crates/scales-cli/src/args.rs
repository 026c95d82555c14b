//! Command-line interface definitions using clap
//!
//! Every option can also be supplied through the environment, which is how the
//! webhook server is usually configured when deployed.

use std::path::PathBuf;

use clap::{Args as ClapArgs, Parser, Subcommand};
use jiff::civil::Date;
use scales_core::{
    intake::{parse_duration, parse_weight, MAX_DURATION_WEEKS, MAX_WEIGHT_KG},
    Gender, UserProfile,
};

/// Chat-driven weight-goal tracker
///
/// Scales collects a target weight and timeline, rejects plans that change
/// weight faster than 2.5 kg per week, and reports progress for every weight
/// you log. Run `serve` to answer Telegram messages, or use the local
/// commands against the same database.
#[derive(Parser)]
#[command(version, about, name = "scales")]
pub struct Args {
    /// Path to the SQLite database file. Defaults to
    /// $XDG_DATA_HOME/scales/scales.db
    #[arg(long, global = true, env = "SCALES_DATABASE_FILE")]
    pub database_file: Option<PathBuf>,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    /// User id used by the local commands
    #[arg(long, global = true, env = "SCALES_USER_ID", default_value_t = 0)]
    pub user_id: i64,

    /// Override today's date (YYYY-MM-DD)
    #[arg(long, global = true, env = "SCALES_TODAY", hide = true)]
    pub today: Option<Date>,

    #[command(flatten)]
    pub profile: ProfileArgs,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands for the Scales CLI
#[derive(Subcommand)]
pub enum Commands {
    /// Create a plan from the current weight, target weight and duration
    #[command(alias = "p")]
    Plan(PlanArgs),
    /// Log a weight against the active plan
    #[command(alias = "l")]
    Log(LogArgs),
    /// Show the active plan and its weight history
    #[command(alias = "s")]
    Status(StatusArgs),
    /// Read chat messages from stdin, one per line, and print the replies
    Chat,
    /// Start the Telegram webhook server
    Serve(ServeArgs),
}

/// Fixed user attributes recorded with every new plan
#[derive(ClapArgs)]
pub struct ProfileArgs {
    /// Age in years
    #[arg(long, global = true, env = "SCALES_USER_AGE", default_value_t = 25)]
    pub age: u32,

    /// Height in centimetres
    #[arg(long, global = true, env = "SCALES_USER_HEIGHT", default_value_t = 171.0)]
    pub height: f64,

    /// Activity multiplier (1.2 = sedentary)
    #[arg(long, global = true, env = "SCALES_USER_ACTIVITY", default_value_t = 1.2)]
    pub activity_level: f64,

    /// male or female
    #[arg(long, global = true, env = "SCALES_USER_GENDER", default_value = "male")]
    pub gender: Gender,
}

impl From<ProfileArgs> for UserProfile {
    fn from(val: ProfileArgs) -> Self {
        UserProfile {
            age: val.age,
            height_cm: val.height,
            activity_level: val.activity_level,
            gender: val.gender,
        }
    }
}

/// Create a plan in one go
///
/// Runs the same three questions as the chat intake, answered from the
/// arguments. Plans faster than 2.5 kg per week are rejected and not saved.
#[derive(ClapArgs)]
pub struct PlanArgs {
    /// Current weight in kg
    #[arg(value_parser = weight_value)]
    pub current: f64,
    /// Target weight in kg
    #[arg(value_parser = weight_value)]
    pub target: f64,
    /// Duration in weeks
    #[arg(value_parser = duration_value)]
    pub weeks: f64,
}

/// Log a weight
#[derive(ClapArgs)]
pub struct LogArgs {
    /// Weight in kg
    #[arg(value_parser = weight_value)]
    pub weight: f64,
}

/// Show the active plan
#[derive(ClapArgs)]
pub struct StatusArgs {
    /// Print the plan and history as JSON
    #[arg(long)]
    pub json: bool,
}

/// Webhook server configuration
#[derive(ClapArgs)]
pub struct ServeArgs {
    /// Port to listen on
    #[arg(long, env = "PORT", default_value_t = 8080)]
    pub port: u16,

    /// Telegram bot token
    #[arg(long, env = "TELEGRAM_BOT_TOKEN", hide_env_values = true)]
    pub token: String,

    /// Public URL of the webhook endpoint to register with Telegram
    #[arg(long, env = "WEBHOOK_URL")]
    pub webhook_url: Option<String>,

    /// Seconds allowed for processing one update before it is dropped
    #[arg(long, env = "SCALES_PROCESSING_TIMEOUT", default_value_t = 50)]
    pub processing_timeout: u64,

    /// Base URL of the Telegram Bot API
    #[arg(long, env = "TELEGRAM_API_BASE", default_value = "https://api.telegram.org")]
    pub api_base: String,
}

fn weight_value(value: &str) -> Result<f64, String> {
    parse_weight(value)
        .ok_or_else(|| format!("'{value}' is not a weight between 0 and {MAX_WEIGHT_KG} kg"))
}

fn duration_value(value: &str) -> Result<f64, String> {
    parse_duration(value)
        .ok_or_else(|| format!("'{value}' is not a duration between 0 and {MAX_DURATION_WEEKS} weeks"))
}
