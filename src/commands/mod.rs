//! Command Catalog
//!
//! One method per server command, grouped by data type. Each method fixes
//! the keyword, the argument order and the result type, then runs through
//! [`Client::command`](crate::Client::command).
//!
//! A few methods check their arguments first and fail with
//! `ClientError::InvalidArgument` before anything is encoded:
//! - `linsert`: position must be `BEFORE` or `AFTER`
//! - `bitop`: operation must be `AND`, `OR`, `XOR` or `NOT`
//! - `mset`, `msetnx`, `hmset`: arguments must come in pairs

mod connection;
mod server;
mod keys;
mod strings;
mod hashes;
mod lists;
mod sets;
mod sorted_sets;
mod transactions;

pub use lists::InsertPosition;
pub use strings::BitOperation;

use crate::error::{ClientError, Result};
use crate::protocol::CommandArgument;

/// Collect key/value style arguments, rejecting an odd count
fn collect_pairs<I>(command: &str, values: I) -> Result<Vec<CommandArgument>>
where
    I: IntoIterator,
    I::Item: Into<CommandArgument>,
{
    let values: Vec<CommandArgument> = values.into_iter().map(Into::into).collect();
    if values.len() % 2 != 0 {
        return Err(ClientError::InvalidArgument(format!(
            "{} expects name/value pairs, got {} arguments",
            command,
            values.len()
        )));
    }
    Ok(values)
}
