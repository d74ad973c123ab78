pub mod commands;
pub mod config;
pub mod contracts;
pub mod display;
pub mod error;
pub mod notifications;
pub mod pipeline;
pub mod snapshot;
pub mod state;

pub use contracts::envelope::{FailureEnvelope, SuccessEnvelope};
pub use error::{ClientError, ClientResult};
pub use pipeline::normalize::CanonicalTransaction;

pub const API_VERSION: &str = env!("CARGO_PKG_VERSION");
