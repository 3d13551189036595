//! `email-notification` - send a notification email through the Gmail API.

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![forbid(unsafe_code)]

mod cli;
mod error;

use clap::Parser;
use tracing::error;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use self::{cli::Cli, error::CommandError};

const DEFAULT_LOG_FILTER: &str =
    "email_notification=info,email_notification_core=info,email_notification_oauth=info";

fn main() {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| DEFAULT_LOG_FILTER.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    if let Err(err) = Cli::parse().run() {
        if err.is_fatal() {
            error!("{err}");
        }
        std::process::exit(err.exit_code());
    }
}
