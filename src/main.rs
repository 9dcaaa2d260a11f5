use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use femtrack::cli::{Cli, Commands, FeedbackCommand, GasCommand};
use femtrack::commands;
use femtrack::session::Session;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    let mut session = Session::load(&cli.session);
    if let Some(api) = &cli.api {
        session.set_api_base(api);
        session.save()?;
    }

    if !cli.command.is_public() && !session.is_authenticated() {
        anyhow::bail!("please login first (femtrack login --email <email> --password <password>)");
    }

    match &cli.command {
        Commands::Signup(args) => commands::signup(&session, args),
        Commands::Login(args) => commands::login(&mut session, args),
        Commands::Logout => commands::logout(&mut session),
        Commands::Me => commands::me(&session),
        Commands::AddReading(args) => commands::add_reading(&session, args),
        Commands::Analysis(args) => commands::analysis(&session, args),
        Commands::Predict(args) => commands::predict(&session, args),
        Commands::DecodeFrame(args) => commands::decode_device_frame(args),
        Commands::Feedback(args) => match &args.command {
            FeedbackCommand::Send(args) => commands::feedback_send(&session, args),
            FeedbackCommand::List(args) => commands::feedback_list(&session, args),
        },
        Commands::Gas(args) => match &args.command {
            GasCommand::Latest => commands::gas_latest(&session),
            GasCommand::Log => commands::gas_log(&session),
        },
    }
}
