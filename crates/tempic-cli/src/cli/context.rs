//! Per-invocation settings handed to every command handler.

use std::io::{self, Write};
use tempic_core::api::ApiClient;
use tempic_core::host::resolve_host;
use tempic_core::http::HttpOptions;

pub const NO_HOST_MESSAGE: &str = "Please specify a host.";

/// Everything a handler needs, resolved once at startup from flags,
/// environment and config file.
#[derive(Debug, Clone)]
pub struct RunContext {
    /// Host exactly as the user supplied it; validated per command.
    pub host_input: String,
    pub http: HttpOptions,
}

impl RunContext {
    pub fn new(host_input: Option<String>, http: HttpOptions) -> Self {
        Self {
            host_input: host_input.unwrap_or_default(),
            http,
        }
    }

    /// Builds the API client, or tells the user to pick a host and returns `None`.
    pub fn client(&self, out: &mut impl Write) -> io::Result<Option<ApiClient>> {
        match resolve_host(&self.host_input) {
            Ok(host) => Ok(Some(ApiClient::new(host, self.http))),
            Err(e) => {
                tracing::debug!("host rejected: {}", e);
                writeln!(out, "{}", NO_HOST_MESSAGE)?;
                Ok(None)
            }
        }
    }
}

/// How a command ended; anything but `Success` exits with status 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Success,
    Failure,
}

impl Outcome {
    pub fn exit_code(self) -> i32 {
        match self {
            Outcome::Success => 0,
            Outcome::Failure => 1,
        }
    }
}
