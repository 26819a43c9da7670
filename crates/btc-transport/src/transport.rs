//! Blocking HTTP transport behind a mockable seam.
//!
//! [`HttpTransport`] is the only place network bytes move. Any HTTP response,
//! success or error status alike, comes back as an [`HttpResponse`]; an `Err`
//! means the request never produced one (timeout, DNS, refused connection,
//! or a malformed URL). Status classification lives in the fetcher, which
//! keeps scripted test transports trivial.

use std::time::Duration;

use crate::config::FetcherConfig;

/// A raw HTTP response: status line plus body text.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    pub fn is_server_error(&self) -> bool {
        (500..600).contains(&self.status)
    }
}

/// Failures below the HTTP layer.
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    /// The request hit a configured timeout (connect, read, or write).
    #[error("request timed out: {0}")]
    Timeout(String),

    /// DNS failure, refused or reset connection, TLS trouble.
    #[error("network failure: {0}")]
    Network(String),

    /// The composed URL is not a fetchable URL. This is a caller bug, not a
    /// transient condition, and is never retried.
    #[error("invalid url: {0}")]
    InvalidUrl(String),
}

impl TransportError {
    /// Transient failures are worth re-attempting; a bad URL is not.
    pub fn is_retryable(&self) -> bool {
        !matches!(self, TransportError::InvalidUrl(_))
    }
}

/// Executes one blocking HTTP GET.
pub trait HttpTransport: Send + Sync {
    fn get(&self, url: &str) -> Result<HttpResponse, TransportError>;
}

/// Blocks the calling thread for a backoff delay.
///
/// Split out of the fetcher so tests can record requested delays instead of
/// actually waiting on the wall clock.
pub trait Sleeper: Send + Sync {
    fn sleep(&self, duration: Duration);
}

/// Production sleeper: `std::thread::sleep`.
pub struct ThreadSleeper;

impl Sleeper for ThreadSleeper {
    fn sleep(&self, duration: Duration) {
        if !duration.is_zero() {
            std::thread::sleep(duration);
        }
    }
}

/// ureq-backed transport with the configured connect/read/write timeouts.
///
/// The agent keeps a connection pool shared by all requests on this
/// transport; dropping the transport tears the pool down and abandons any
/// in-flight sockets.
pub struct UreqTransport {
    agent: ureq::Agent,
}

impl UreqTransport {
    pub fn new(config: &FetcherConfig) -> Self {
        Self {
            agent: Self::build_agent(
                config.connect_timeout,
                config.read_timeout,
                config.write_timeout,
            ),
        }
    }

    fn build_agent(connect: Duration, read: Duration, write: Duration) -> ureq::Agent {
        ureq::AgentBuilder::new()
            .timeout_connect(connect)
            .timeout_read(read)
            .timeout_write(write)
            .build()
    }
}

impl HttpTransport for UreqTransport {
    fn get(&self, url: &str) -> Result<HttpResponse, TransportError> {
        match self.agent.get(url).call() {
            Ok(response) => {
                let status = response.status();
                let body = response
                    .into_string()
                    .map_err(|e| TransportError::Network(format!("reading body: {e}")))?;
                Ok(HttpResponse { status, body })
            }
            // Non-2xx statuses still carry a usable response.
            Err(ureq::Error::Status(status, response)) => {
                let body = response.into_string().unwrap_or_default();
                Ok(HttpResponse { status, body })
            }
            Err(ureq::Error::Transport(transport)) => Err(classify_transport(&transport)),
        }
    }
}

fn classify_transport(transport: &ureq::Transport) -> TransportError {
    let message = transport.to_string();
    match transport.kind() {
        ureq::ErrorKind::InvalidUrl | ureq::ErrorKind::UnknownScheme => {
            TransportError::InvalidUrl(message)
        }
        ureq::ErrorKind::Io if message.contains("timed out") => TransportError::Timeout(message),
        _ => TransportError::Network(message),
    }
}
