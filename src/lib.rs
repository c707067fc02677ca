//! # kvclient
//!
//! A blocking client for key-value stores that speak RESP, with:
//! - Typed command arguments with a closed, total wire encoding
//! - A reply decoder that coerces nested reply trees into typed results
//! - Server errors reported separately from coercion errors
//! - A TCP transport with connect/read/write timeouts
//! - A cloneable handle for sharing one connection between threads
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                 Command Catalog (commands/)                  │
//! │           get / set / lpush / hgetall / zadd ...             │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │ Command (keyword + CommandArguments)
//! ┌─────────────────────▼───────────────────────────────────────┐
//! │                         Client                               │
//! └──────┬──────────────────────┬─────────────────────┬─────────┘
//!        │ encode               │ send                │ decode
//!        ▼                      ▼                     ▼
//!   ┌──────────┐        ┌──────────────┐       ┌─────────────┐
//!   │ protocol │        │  Transport   │       │   decode    │
//!   │ (frame)  │        │ (Connection) │       │ (Reply → T) │
//!   └──────────┘        └──────────────┘       └─────────────┘
//! ```
//!
//! ## Example
//!
//! ```no_run
//! use std::time::Duration;
//! use kvclient::Client;
//!
//! let mut client = Client::connect("127.0.0.1", 6379, Duration::from_secs(2))?;
//! client.set("greeting", "hello")?;
//! let value = client.get("greeting")?;
//! let length = client.rpush("queue", [1u64, 2, 3])?;
//! # Ok::<(), kvclient::ClientError>(())
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;

pub mod protocol;
pub mod decode;
pub mod network;
pub mod client;
pub mod commands;
pub mod shared;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use error::{ClientError, Result};
pub use config::Config;
pub use client::Client;
pub use protocol::{Command, CommandArgument, Reply};
pub use decode::{decode, decode_as, Destination, FromReply, IntWidth, Value};
pub use network::{Connection, Transport};
pub use shared::SharedClient;

// =============================================================================
// Version Info
// =============================================================================

/// Current version of kvclient
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
