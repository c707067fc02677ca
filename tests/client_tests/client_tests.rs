//! Client Tests
//!
//! Tests for the encode → send → decode pipeline over a scripted transport.

#[path = "../common/mod.rs"]
mod common;

use std::thread;

use common::MockTransport;
use kvclient::{
    Client, ClientError, Command, Destination, IntWidth, Reply, SharedClient, Value,
};

fn client_with(replies: Vec<Reply>) -> Client<MockTransport> {
    Client::with_transport(MockTransport::with_replies(replies))
}

// =============================================================================
// Pipeline Tests
// =============================================================================

#[test]
fn test_set_returns_status_text() {
    let mut client = client_with(vec![Reply::status("OK")]);

    let result: String = client.command(Command::new("SET").arg("k").arg("v")).unwrap();

    assert_eq!(result, "OK");
    assert_eq!(client.transport().last_frame(), vec!["SET", "k", "v"]);
}

#[test]
fn test_incrby_returns_integer() {
    let mut client = client_with(vec![Reply::Integer(7)]);

    let total = client.incrby("n", 7).unwrap();

    assert_eq!(total, 7);
    assert_eq!(client.transport().last_frame(), vec!["INCRBY", "n", "7"]);
}

#[test]
fn test_one_frame_per_command() {
    let mut client = client_with(vec![
        Reply::status("OK"),
        Reply::bulk("v"),
        Reply::Integer(1),
    ]);

    client.set("k", "v").unwrap();
    assert_eq!(client.get("k").unwrap(), "v");
    assert_eq!(client.del(&["k"]).unwrap(), 1);

    assert_eq!(client.transport().sent().len(), 3);
}

#[test]
fn test_binary_value_is_sent_verbatim() {
    let mut client = client_with(vec![Reply::status("OK")]);
    let payload = vec![0x00u8, 0xFF, b'\r', b'\n'];

    client.set("blob", payload.clone()).unwrap();

    let frame = &client.transport().sent()[0];
    assert_eq!(frame[2].as_ref(), payload.as_slice());
}

// =============================================================================
// Argument Error Tests
// =============================================================================

#[test]
fn test_nan_argument_never_reaches_transport() {
    let mut client = client_with(vec![Reply::Integer(1)]);

    let result = client.zadd("scores", f64::NAN, "member");

    let error = result.unwrap_err();
    assert!(matches!(error, ClientError::UnsupportedArgumentType(_)));
    assert!(error.is_argument_error());
    assert!(client.transport().sent().is_empty());
}

#[test]
fn test_encoding_error_in_generic_command() {
    let mut client = client_with(vec![]);

    let command = Command::new("INCRBYFLOAT").arg("k").arg(f64::NAN);
    let result: kvclient::Result<f64> = client.command(command);

    assert!(result.is_err());
    assert!(client.transport().sent().is_empty());
}

// =============================================================================
// Server Error Tests
// =============================================================================

#[test]
fn test_server_error_is_surfaced() {
    let mut client = client_with(vec![Reply::error(
        "WRONGTYPE Operation against a key holding the wrong kind of value",
    )]);

    let result = client.lpush("k", ["a"]);

    match result {
        Err(ClientError::Server(message)) => assert!(message.starts_with("WRONGTYPE")),
        other => panic!("Expected server error, got {:?}", other),
    }
}

#[test]
fn test_nested_server_error_in_exec() {
    let mut client = client_with(vec![Reply::Array(vec![
        Reply::status("OK"),
        Reply::error("ERR value is not an integer or out of range"),
    ])]);

    let result = client.exec();

    assert!(matches!(result, Err(ClientError::Server(_))));
}

#[test]
fn test_server_error_leaves_client_usable() {
    let mut client = client_with(vec![Reply::error("ERR nope"), Reply::status("PONG")]);

    assert!(client.ping().is_err());
    assert_eq!(client.ping().unwrap(), "PONG");
}

#[test]
fn test_transport_error_is_propagated() {
    let mut transport = MockTransport::new();
    transport.push_failure(ClientError::Transport(std::io::Error::new(
        std::io::ErrorKind::TimedOut,
        "read timed out",
    )));
    let mut client = Client::with_transport(transport);

    let error = client.get("k").unwrap_err();

    assert!(error.is_timeout());
}

// =============================================================================
// Dynamic And Raw Tests
// =============================================================================

#[test]
fn test_command_as_dynamic_destination() {
    let mut client = client_with(vec![Reply::Array(vec![
        Reply::bulk("1"),
        Reply::bulk("2"),
        Reply::nil(),
    ])]);

    let destination = Destination::sequence_of(Destination::UnsignedInteger(IntWidth::W16));
    let value = client
        .command_as(Command::new("MGET").arg("a").arg("b").arg("c"), &destination)
        .unwrap();

    assert_eq!(
        value,
        Value::Sequence(vec![Value::Unsigned(1), Value::Unsigned(2), Value::Unsigned(0)])
    );
}

#[test]
fn test_raw_returns_error_reply_as_value() {
    let mut client = client_with(vec![Reply::error("ERR unknown command 'FOO'")]);

    let reply = client.raw(Command::new("FOO")).unwrap();

    assert_eq!(reply, Reply::error("ERR unknown command 'FOO'"));
}

#[test]
fn test_raw_returns_tree_undecoded() {
    let tree = Reply::Array(vec![Reply::bulk("a"), Reply::Integer(1), Reply::nil()]);
    let mut client = client_with(vec![tree.clone()]);

    assert_eq!(client.raw(Command::new("EXEC")).unwrap(), tree);
}

// =============================================================================
// Lifecycle Tests
// =============================================================================

#[test]
fn test_close_is_idempotent() {
    let mut client = client_with(vec![Reply::status("OK")]);
    assert!(client.is_connected());

    client.close();
    client.close();

    assert!(!client.is_connected());
    assert_eq!(client.transport().close_calls(), 2);
}

#[test]
fn test_command_after_close_fails() {
    let mut client = client_with(vec![Reply::status("OK")]);
    client.close();

    let result = client.set("k", "v");

    assert!(matches!(result, Err(ClientError::NotConnected)));
    assert!(client.transport().sent().is_empty());
}

#[test]
fn test_into_transport_returns_history() {
    let mut client = client_with(vec![Reply::status("PONG")]);
    client.ping().unwrap();

    let transport = client.into_transport();

    assert_eq!(transport.sent().len(), 1);
}

// =============================================================================
// Shared Client Tests
// =============================================================================

#[test]
fn test_shared_client_serializes_callers() {
    let replies: Vec<Reply> = (1..=40).map(Reply::Integer).collect();
    let shared = SharedClient::new(client_with(replies));

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let shared = shared.clone();
            thread::spawn(move || {
                (0..10)
                    .map(|_| shared.command::<i64>(Command::new("INCR").arg("hits")).unwrap())
                    .collect::<Vec<_>>()
            })
        })
        .collect();

    let mut seen: Vec<i64> = handles
        .into_iter()
        .flat_map(|handle| handle.join().unwrap())
        .collect();
    seen.sort_unstable();

    // Every caller got exactly one reply, none lost or duplicated
    assert_eq!(seen, (1..=40).collect::<Vec<_>>());
}

#[test]
fn test_shared_client_with_runs_a_block() {
    let shared = SharedClient::from(client_with(vec![
        Reply::status("OK"),
        Reply::status("QUEUED"),
        Reply::Array(vec![Reply::Integer(1)]),
    ]));

    let results = shared
        .with(|client| {
            client.multi()?;
            client.raw(Command::new("INCR").arg("n"))?;
            client.exec()
        })
        .unwrap();

    assert_eq!(results, vec!["1"]);
    shared.close();
    assert!(!shared.is_connected());
}
