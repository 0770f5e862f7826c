use std::sync::Arc;
use anyhow::{anyhow, bail, Context};
use clap::{Args, Parser, Subcommand};
use dotenv::dotenv;
use tracing::info;
use reserve_front::api::HttpReservationClient;
use reserve_front::config::Config;
use reserve_front::controller;
use reserve_front::form::{ReservationForm, SubmitOutcome, TracingNavigator, TracingNotifier};

#[derive(Parser)]
#[clap(name = "reserve-front", about = "Restaurant site dev server and reservation client")]
struct Cli {
    #[clap(flatten)]
    config: Config,

    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Serve the site and forward /api/* to the backend.
    Serve,
    /// Fill in the reservation form and submit it.
    Reserve(ReserveArgs),
}

#[derive(Args)]
struct ReserveArgs {
    #[clap(long, default_value = "")]
    first_name: String,
    #[clap(long, default_value = "")]
    last_name: String,
    #[clap(long, default_value = "")]
    email: String,
    #[clap(long, default_value = "")]
    phone: String,
    /// Reservation day, YYYY-MM-DD.
    #[clap(long, default_value = "")]
    date: String,
    /// Reservation time, HH:MM.
    #[clap(long, default_value = "")]
    time: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    match cli.command {
        Command::Serve => controller::serve(&cli.config).await,
        Command::Reserve(args) => reserve(&cli.config, args).await,
    }
}

async fn reserve(config: &Config, args: ReserveArgs) -> anyhow::Result<()> {
    info!("Backend URL: {}", config.backend_url);
    let client = HttpReservationClient::new(config)
        .context("Error building the reservation client")?;

    let mut form = ReservationForm::new();
    form.set_first_name(&args.first_name);
    form.set_last_name(&args.last_name);
    form.set_email(&args.email);
    form.set_phone(&args.phone);
    form.set_date(&args.date)?;
    form.set_time(&args.time)?;

    match form.submit(&client, &TracingNotifier, Arc::new(TracingNavigator)).await {
        SubmitOutcome::Sent { navigation, .. } => {
            navigation.await.context("Navigation task failed")?;
            Ok(())
        }
        SubmitOutcome::Invalid(e) => Err(anyhow!(e.user_message())),
        SubmitOutcome::Failed { message, error } => Err(anyhow::Error::new(error).context(message)),
        SubmitOutcome::Busy => bail!("A reservation is already being submitted"),
    }
}
