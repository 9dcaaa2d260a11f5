use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "femtrack", version, about = "FemPlus health tracking client")]
pub struct Cli {
    #[arg(long, global = true, help = "Backend base URL (persisted in the session)")]
    pub api: Option<String>,

    #[arg(
        long,
        global = true,
        default_value = "femtrack-session.json",
        help = "Session state file"
    )]
    pub session: PathBuf,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Create a new account
    Signup(SignupArgs),
    /// Log in and store the access token in the session
    Login(LoginArgs),
    /// Clear the stored token and email
    Logout,
    /// Show the logged-in user's profile
    Me,
    /// Save a reading for the logged-in user
    AddReading(ReadingArgs),
    /// Fetch the risk analysis for an email
    Analysis(AnalysisArgs),
    /// Run a prediction from reading values
    Predict(PredictArgs),
    /// Decode and validate a raw device frame
    DecodeFrame(DecodeFrameArgs),
    /// Feedback submission and listing
    Feedback(FeedbackArgs),
    /// Gas sensor telemetry
    Gas(GasArgs),
}

impl Commands {
    /// Commands reachable without a stored token.
    pub fn is_public(&self) -> bool {
        matches!(
            self,
            Commands::Signup(_)
                | Commands::Login(_)
                | Commands::Logout
                | Commands::Feedback(FeedbackArgs {
                    command: FeedbackCommand::List(_),
                })
        )
    }
}

#[derive(Debug, Args)]
pub struct SignupArgs {
    #[arg(long)]
    pub email: String,

    #[arg(long)]
    pub password: String,

    #[arg(long, help = "Must match --password")]
    pub confirm: String,
}

#[derive(Debug, Args)]
pub struct LoginArgs {
    #[arg(long)]
    pub email: String,

    #[arg(long)]
    pub password: String,
}

#[derive(Debug, Args, Default)]
pub struct ReadingArgs {
    #[arg(long, help = "Owner email (defaults to the session email)")]
    pub email: Option<String>,

    #[arg(long)]
    pub flow_ml: Option<String>,

    #[arg(long)]
    pub hb: Option<String>,

    #[arg(long)]
    pub ph: Option<String>,

    #[arg(long)]
    pub crp: Option<String>,

    #[arg(long)]
    pub hba1c: Option<String>,

    #[arg(long)]
    pub clots: Option<String>,

    #[arg(long)]
    pub fsh: Option<String>,

    #[arg(long)]
    pub lh: Option<String>,

    #[arg(long)]
    pub amh: Option<String>,

    #[arg(long)]
    pub tsh: Option<String>,

    #[arg(long)]
    pub prolactin: Option<String>,

    #[arg(long)]
    pub cycle_id: Option<String>,
}

#[derive(Debug, Args)]
pub struct AnalysisArgs {
    #[arg(long, help = "Email to analyze (defaults to the session email)")]
    pub email: Option<String>,
}

#[derive(Debug, Args)]
pub struct PredictArgs {
    #[command(flatten)]
    pub reading: ReadingArgs,

    #[arg(long, help = "Base64-encoded sample image")]
    pub image_base64: Option<String>,
}

#[derive(Debug, Args)]
pub struct DecodeFrameArgs {
    #[arg(long, help = "File holding a raw device frame (>= 44 bytes)")]
    pub input: PathBuf,

    #[arg(
        long,
        default_value_t = false,
        help = "Pre-fill a reading form from the frame"
    )]
    pub fill: bool,
}

#[derive(Debug, Args)]
pub struct FeedbackArgs {
    #[command(subcommand)]
    pub command: FeedbackCommand,
}

#[derive(Debug, Subcommand)]
pub enum FeedbackCommand {
    Send(FeedbackSendArgs),
    List(FeedbackListArgs),
}

#[derive(Debug, Args)]
pub struct FeedbackSendArgs {
    #[arg(long, help = "Star rating, 1-5")]
    pub rating: u8,

    #[arg(long, default_value = "")]
    pub comment: String,

    #[arg(long, default_value = "home")]
    pub context: String,
}

#[derive(Debug, Args)]
pub struct FeedbackListArgs {
    #[arg(long, default_value_t = 20)]
    pub limit: usize,
}

#[derive(Debug, Args)]
pub struct GasArgs {
    #[command(subcommand)]
    pub command: GasCommand,
}

#[derive(Debug, Subcommand)]
pub enum GasCommand {
    /// Fetch the latest gas sensor snapshot
    Latest,
    /// Attach the latest snapshot to the logged-in user
    Log,
}
