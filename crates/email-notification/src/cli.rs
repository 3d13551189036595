use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use email_notification_core::{Config, ConsolePrompt, OutgoingMessage, send_email};
use tracing::debug;

use crate::error::{Error, Result};

const LONG_ABOUT: &str = "\
Use Gmail's API with OAuth2 to send notification emails.

Set up a Gmail account for your server and let Google's mail servers deliver
its notifications to whatever address you want, instead of running and
maintaining a mail server of your own.

The first run prints an authorization URL and waits for the code Google shows
after you grant access. The resulting token is cached and reused afterwards.";

#[derive(Debug, Parser)]
#[command(
    name = "email-notification",
    version,
    about = "Send email using Google's Gmail API",
    long_about = LONG_ABOUT
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    #[arg(
        long,
        global = true,
        value_name = "PATH",
        env = "EMAIL_NOTIFICATION_CREDENTIALS",
        default_value_os_t = Config::default_credentials_path(),
        help = "OAuth2 Credentials JSON file"
    )]
    credentials: PathBuf,

    #[arg(
        long,
        global = true,
        value_name = "PATH",
        env = "EMAIL_NOTIFICATION_TOKEN",
        default_value_os_t = Config::default_token_path(),
        help = "OAuth2 Token JSON file"
    )]
    token: PathBuf,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    #[command(about = "Send email command")]
    Send(SendArgs),
}

#[derive(Debug, Args)]
pub struct SendArgs {
    #[arg(long, default_value = "", help = "From email")]
    from: String,

    #[arg(long, default_value = "", help = "To email")]
    to: String,

    #[arg(long, default_value = "", help = "Email subject")]
    subject: String,

    #[arg(long, default_value = "", help = "Email body")]
    body: String,
}

impl From<SendArgs> for OutgoingMessage {
    fn from(args: SendArgs) -> Self {
        Self::new(args.from, args.to, args.subject, args.body)
    }
}

impl Cli {
    pub fn config(&self) -> Config {
        Config::new(&self.credentials, &self.token)
    }

    pub fn run(self) -> Result<()> {
        let config = self.config();
        debug!(?config, "Resolved configuration");

        match self.command {
            Command::Send(args) => {
                let runtime = tokio::runtime::Builder::new_current_thread()
                    .enable_all()
                    .build()
                    .map_err(Error::InitializeRuntime)?;

                let message = OutgoingMessage::from(args);
                let mut prompt = ConsolePrompt::stdio();
                runtime.block_on(send_email(&config, &message, &mut prompt))?;

                println!("Message sent!");
            }
        }

        Ok(())
    }
}
