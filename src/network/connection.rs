//! TCP Connection
//!
//! Blocking RESP transport over a single TCP stream.

use std::io::{BufReader, BufWriter};
use std::net::{Shutdown, SocketAddr, TcpStream, ToSocketAddrs};
use std::time::Duration;

use bytes::Bytes;

use super::Transport;
use crate::config::Config;
use crate::error::{ClientError, Result};
use crate::protocol::{read_reply, write_request, Reply, ReplyLimits};

/// Timeouts applied to one connection; `None` blocks without limit
#[derive(Debug, Clone, Copy)]
struct Timeouts {
    connect: Option<Duration>,
    read: Option<Duration>,
    write: Option<Duration>,
}

/// Buffered halves of an open TCP stream
struct Stream {
    reader: BufReader<TcpStream>,
    writer: BufWriter<TcpStream>,
}

impl Stream {
    /// One full request/response cycle
    fn exchange(&mut self, frame: &[Bytes], limits: &ReplyLimits) -> Result<Reply> {
        write_request(&mut self.writer, frame)?;
        read_reply(&mut self.reader, limits)
    }
}

/// A connection to one server
pub struct Connection {
    /// Open stream, `None` once closed
    stream: Option<Stream>,

    /// Reply parsing bounds
    limits: ReplyLimits,

    /// Peer address for logging
    peer_addr: String,
}

impl Connection {
    /// Connect to `host:port`
    ///
    /// `timeout` bounds TCP establishment and every later read and write.
    /// A zero timeout means no limit.
    pub fn connect(host: &str, port: u16, timeout: Duration) -> Result<Self> {
        let timeout = (!timeout.is_zero()).then_some(timeout);
        let timeouts = Timeouts {
            connect: timeout,
            read: timeout,
            write: timeout,
        };
        Self::establish(host, port, timeouts, ReplyLimits::default())
    }

    /// Connect using a validated config
    pub fn open(config: &Config) -> Result<Self> {
        config.validate()?;
        let timeouts = Timeouts {
            connect: config.connect_timeout(),
            read: config.read_timeout(),
            write: config.write_timeout(),
        };
        Self::establish(&config.host, config.port, timeouts, ReplyLimits::from(config))
    }

    fn establish(host: &str, port: u16, timeouts: Timeouts, limits: ReplyLimits) -> Result<Self> {
        let addrs: Vec<SocketAddr> = (host, port)
            .to_socket_addrs()
            .map_err(|e| ClientError::Connection(format!("could not resolve {}:{}: {}", host, port, e)))?
            .collect();

        let mut last_error = None;
        for addr in &addrs {
            let attempt = match timeouts.connect {
                Some(timeout) => TcpStream::connect_timeout(addr, timeout),
                None => TcpStream::connect(addr),
            };
            match attempt {
                Ok(stream) => return Self::from_stream(stream, timeouts, limits),
                Err(e) => {
                    tracing::debug!("Connect to {} failed: {}", addr, e);
                    last_error = Some(e);
                }
            }
        }

        Err(ClientError::Connection(match last_error {
            Some(e) => format!("could not connect to {}:{}: {}", host, port, e),
            None => format!("no addresses found for {}:{}", host, port),
        }))
    }

    fn from_stream(stream: TcpStream, timeouts: Timeouts, limits: ReplyLimits) -> Result<Self> {
        let setup_error = |e: std::io::Error| ClientError::Connection(format!("could not configure socket: {}", e));

        let peer_addr = stream
            .peer_addr()
            .map(|a| a.to_string())
            .unwrap_or_else(|_| "unknown".to_string());

        // Requests are small and latency-bound
        stream.set_nodelay(true).map_err(setup_error)?;
        stream.set_read_timeout(timeouts.read).map_err(setup_error)?;
        stream.set_write_timeout(timeouts.write).map_err(setup_error)?;

        let read_stream = stream.try_clone().map_err(setup_error)?;

        tracing::debug!("Connected to {}", peer_addr);

        Ok(Self {
            stream: Some(Stream {
                reader: BufReader::new(read_stream),
                writer: BufWriter::new(stream),
            }),
            limits,
            peer_addr,
        })
    }

    /// Get the peer address string
    pub fn peer_addr(&self) -> &str {
        &self.peer_addr
    }
}

impl Transport for Connection {
    fn send_command(&mut self, frame: &[Bytes]) -> Result<Reply> {
        let stream = self.stream.as_mut().ok_or(ClientError::NotConnected)?;

        match stream.exchange(frame, &self.limits) {
            Ok(reply) => Ok(reply),
            Err(e) => {
                // The stream position is unknown after a failed exchange,
                // so later replies could be attributed to the wrong command.
                tracing::warn!("Closing connection to {}: {}", self.peer_addr, e);
                self.close();
                Err(e)
            }
        }
    }

    fn close(&mut self) {
        if let Some(stream) = self.stream.take() {
            let _ = stream.writer.get_ref().shutdown(Shutdown::Both);
            tracing::debug!("Closed connection to {}", self.peer_addr);
        }
    }

    fn is_connected(&self) -> bool {
        self.stream.is_some()
    }
}

impl Drop for Connection {
    fn drop(&mut self) {
        self.close();
    }
}
