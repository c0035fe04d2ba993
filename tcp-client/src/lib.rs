//! Private TCP line-protocol client for Hegel device communication
//!
//! This crate provides a minimal blocking client for the Hegel control
//! protocol: one short request line is written over a fresh TCP connection
//! and a single `\r`-terminated reply line is read back. It also supports
//! a reachability probe that attempts a connection without sending anything.

mod error;

pub use error::TransportError;

use std::io::{ErrorKind, Read, Write};
use std::net::{SocketAddr, TcpStream, ToSocketAddrs};
use std::time::{Duration, Instant};

/// The fixed control port Hegel amplifiers listen on.
pub const DEVICE_PORT: u16 = 50001;

/// Replies are single lines terminated by a carriage return.
const REPLY_TERMINATOR: u8 = b'\r';

/// Upper bound on buffered reply bytes before the connection is treated
/// as misbehaving. Real replies are under a dozen bytes.
const MAX_REPLY_LEN: usize = 256;

/// A minimal blocking TCP client for line-oriented device control
///
/// Each [`exchange`](LineClient::exchange) opens a fresh connection, writes
/// the request, and buffers reads until a complete reply line is available
/// or the I/O timeout elapses. The socket is closed on every exit path.
#[derive(Debug, Clone)]
pub struct LineClient {
    port: u16,
    connect_timeout: Duration,
    io_timeout: Duration,
    probe_timeout: Duration,
}

impl LineClient {
    /// Create a client targeting the standard device port with default timeouts
    pub fn new() -> Self {
        Self::with_port(DEVICE_PORT)
    }

    /// Create a client targeting a specific port (tests use ephemeral ports)
    pub fn with_port(port: u16) -> Self {
        Self {
            port,
            connect_timeout: Duration::from_secs(3),
            io_timeout: Duration::from_secs(3),
            probe_timeout: Duration::from_millis(500),
        }
    }

    /// Override the connection-establishment timeout
    pub fn connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = timeout;
        self
    }

    /// Override the per-exchange read/write timeout
    pub fn io_timeout(mut self, timeout: Duration) -> Self {
        self.io_timeout = timeout;
        self
    }

    /// Override the reachability-probe timeout
    pub fn probe_timeout(mut self, timeout: Duration) -> Self {
        self.probe_timeout = timeout;
        self
    }

    /// The port this client connects to
    pub fn port(&self) -> u16 {
        self.port
    }

    /// Perform one request/reply exchange with the device
    ///
    /// Opens a new connection, writes `request` in full, then reads until a
    /// `\r`-terminated line is buffered. Returns the reply line without its
    /// terminator.
    ///
    /// # Errors
    /// * [`TransportError::Timeout`] if no complete reply line arrives
    ///   within the I/O timeout
    /// * [`TransportError::Connection`] for resolution failures, refused or
    ///   reset connections, and premature close
    pub fn exchange(&self, host: &str, request: &str) -> Result<String, TransportError> {
        let addr = self.resolve(host)?;
        let mut stream = TcpStream::connect_timeout(&addr, self.connect_timeout)
            .map_err(|e| TransportError::Connection(format!("connect to {}: {}", addr, e)))?;

        stream
            .set_write_timeout(Some(self.io_timeout))
            .and_then(|_| stream.set_read_timeout(Some(self.io_timeout)))
            .map_err(|e| TransportError::Connection(format!("socket setup: {}", e)))?;

        stream
            .write_all(request.as_bytes())
            .map_err(|e| classify_io_error("write request", e))?;

        self.read_reply_line(&mut stream)
    }

    /// Check whether a device is accepting connections at `host`
    ///
    /// Attempts a connection without sending a command. Returns `true` iff
    /// the connection completes within the probe timeout; every failure
    /// (resolution, refusal, timeout) is swallowed into `false` so callers
    /// can use the result as a plain boolean gate.
    pub fn probe_reachable(&self, host: &str) -> bool {
        match self.resolve(host) {
            Ok(addr) => TcpStream::connect_timeout(&addr, self.probe_timeout).is_ok(),
            Err(_) => false,
        }
    }

    fn resolve(&self, host: &str) -> Result<SocketAddr, TransportError> {
        (host, self.port)
            .to_socket_addrs()
            .map_err(|e| TransportError::Connection(format!("resolve {}: {}", host, e)))?
            .next()
            .ok_or_else(|| TransportError::Connection(format!("no address for {}", host)))
    }

    /// Read and buffer until a full `\r`-terminated line is available
    ///
    /// The device may deliver the reply across several segments, so short
    /// reads are accumulated. The overall deadline is the I/O timeout from
    /// the first read, not per segment.
    fn read_reply_line(&self, stream: &mut TcpStream) -> Result<String, TransportError> {
        let deadline = Instant::now() + self.io_timeout;
        let mut buffer: Vec<u8> = Vec::with_capacity(32);
        let mut chunk = [0u8; 64];

        loop {
            if let Some(end) = buffer.iter().position(|&b| b == REPLY_TERMINATOR) {
                return Ok(String::from_utf8_lossy(&buffer[..end]).into_owned());
            }
            if buffer.len() > MAX_REPLY_LEN {
                return Err(TransportError::Connection(
                    "reply exceeded maximum line length without terminator".to_string(),
                ));
            }

            let remaining = deadline.saturating_duration_since(Instant::now());
            if remaining.is_zero() {
                return Err(TransportError::Timeout(
                    "no complete reply line before deadline".to_string(),
                ));
            }
            stream
                .set_read_timeout(Some(remaining))
                .map_err(|e| TransportError::Connection(format!("socket setup: {}", e)))?;

            match stream.read(&mut chunk) {
                Ok(0) => {
                    return Err(TransportError::Connection(
                        "connection closed before reply completed".to_string(),
                    ));
                }
                Ok(n) => buffer.extend_from_slice(&chunk[..n]),
                Err(e) => return Err(classify_io_error("read reply", e)),
            }
        }
    }
}

impl Default for LineClient {
    fn default() -> Self {
        Self::new()
    }
}

/// Map an I/O error to the transport taxonomy: timeouts are distinguished
/// from every other connection-level failure.
fn classify_io_error(context: &str, error: std::io::Error) -> TransportError {
    match error.kind() {
        ErrorKind::WouldBlock | ErrorKind::TimedOut => {
            TransportError::Timeout(format!("{}: {}", context, error))
        }
        _ => TransportError::Connection(format!("{}: {}", context, error)),
    }
}
