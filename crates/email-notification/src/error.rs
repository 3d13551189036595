use thiserror::Error;

/// Result type alias for the CLI.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Error type for the CLI.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Application(#[from] email_notification_core::Error),

    #[error("could not initialize tokio runtime: {0}")]
    InitializeRuntime(#[source] std::io::Error),
}

impl Error {
    /// Setup failures are reported here; send failures were already logged.
    pub const fn is_fatal(&self) -> bool {
        match self {
            Self::Application(err) => err.is_fatal(),
            Self::InitializeRuntime(_) => true,
        }
    }
}

pub trait CommandError {
    fn exit_code(&self) -> exitcode::ExitCode;
}

impl CommandError for Error {
    fn exit_code(&self) -> exitcode::ExitCode {
        use email_notification_core::Error as Core;

        match self {
            Self::Application(err) => match err {
                Core::Credentials { .. } => exitcode::CONFIG,
                Core::TokenUnavailable { .. } | Core::AuthorizationPrompt(_) => exitcode::NOINPUT,
                Core::AuthExchange(_) => exitcode::NOPERM,
                Core::TokenPersist { .. } => exitcode::CANTCREAT,
                Core::InvalidMessage(_) => exitcode::DATAERR,
                Core::Send(_) => exitcode::UNAVAILABLE,
            },
            Self::InitializeRuntime(_) => exitcode::OSERR,
        }
    }
}
