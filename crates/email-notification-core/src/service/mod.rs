//! Token store and send workflow.
//!
//! [`obtain_token`] makes a usable token available, from the cache or from an
//! interactive authorization. [`send_email`] runs one full invocation.

mod send;
mod token;

pub use send::send_email;
pub use token::{AUTH_STATE, AuthorizationPrompt, ConsolePrompt, obtain_token};
