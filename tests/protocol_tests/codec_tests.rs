//! Codec Tests
//!
//! Tests for RESP request and reply encoding/decoding.

use std::io::Cursor;

use bytes::Bytes;
use kvclient::protocol::{
    decode_reply, encode_reply, encode_request, read_reply, read_request, write_reply,
    write_request, Reply, ReplyKind, ReplyLimits,
};
use kvclient::ClientError;

// =============================================================================
// Request Encoding Tests
// =============================================================================

#[test]
fn test_encode_request_set() {
    let encoded = encode_request(&[b"SET".as_slice(), b"k", b"v"]);
    assert_eq!(encoded, b"*3\r\n$3\r\nSET\r\n$1\r\nk\r\n$1\r\nv\r\n");
}

#[test]
fn test_encode_request_empty_argument() {
    let encoded = encode_request(&[b"SET".as_slice(), b"k", b""]);
    assert_eq!(encoded, b"*3\r\n$3\r\nSET\r\n$1\r\nk\r\n$0\r\n\r\n");
}

#[test]
fn test_encode_request_binary_argument() {
    let binary: Vec<u8> = vec![0x00, b'\r', b'\n', 0xFF];
    let encoded = encode_request(&[b"SET".to_vec(), b"bin".to_vec(), binary.clone()]);

    let mut expected = b"*3\r\n$3\r\nSET\r\n$3\r\nbin\r\n$4\r\n".to_vec();
    expected.extend_from_slice(&binary);
    expected.extend_from_slice(b"\r\n");
    assert_eq!(encoded, expected);
}

#[test]
fn test_stream_write_read_request() {
    let frame = vec![Bytes::from("LPUSH"), Bytes::from("queue"), Bytes::from("a b c")];

    let mut buffer = Vec::new();
    write_request(&mut buffer, &frame).unwrap();

    let mut cursor = Cursor::new(buffer);
    let decoded = read_request(&mut cursor, &ReplyLimits::default()).unwrap();
    assert_eq!(decoded, frame);
}

#[test]
fn test_read_request_rejects_non_array() {
    let mut cursor = Cursor::new(b"+PING\r\n".to_vec());
    let result = read_request(&mut cursor, &ReplyLimits::default());
    assert!(matches!(result, Err(ClientError::Protocol(_))));
}

#[test]
fn test_read_request_rejects_integer_argument() {
    let mut cursor = Cursor::new(b"*2\r\n$3\r\nGET\r\n:1\r\n".to_vec());
    let result = read_request(&mut cursor, &ReplyLimits::default());
    assert!(result.unwrap_err().to_string().contains("bulk string"));
}

// =============================================================================
// Reply Decoding Tests
// =============================================================================

#[test]
fn test_decode_status() {
    assert_eq!(decode_reply(b"+OK\r\n").unwrap(), Reply::status("OK"));
}

#[test]
fn test_decode_error() {
    let reply = decode_reply(b"-ERR unknown command 'FOO'\r\n").unwrap();
    assert_eq!(reply, Reply::error("ERR unknown command 'FOO'"));
}

#[test]
fn test_decode_integer() {
    assert_eq!(decode_reply(b":1000\r\n").unwrap(), Reply::Integer(1000));
    assert_eq!(decode_reply(b":-42\r\n").unwrap(), Reply::Integer(-42));
}

#[test]
fn test_decode_bulk() {
    assert_eq!(decode_reply(b"$6\r\nfoobar\r\n").unwrap(), Reply::bulk("foobar"));
}

#[test]
fn test_decode_empty_bulk() {
    assert_eq!(decode_reply(b"$0\r\n\r\n").unwrap(), Reply::bulk(""));
}

#[test]
fn test_decode_bulk_containing_crlf() {
    let reply = decode_reply(b"$4\r\na\r\nb\r\n").unwrap();
    assert_eq!(reply, Reply::bulk("a\r\nb"));
}

#[test]
fn test_decode_nil_bulk_and_nil_array() {
    assert_eq!(decode_reply(b"$-1\r\n").unwrap(), Reply::nil());
    assert_eq!(decode_reply(b"*-1\r\n").unwrap(), Reply::nil());
}

#[test]
fn test_decode_empty_array() {
    assert_eq!(decode_reply(b"*0\r\n").unwrap(), Reply::Array(vec![]));
}

#[test]
fn test_decode_nested_array() {
    let wire = b"*3\r\n:1\r\n*2\r\n$1\r\na\r\n$-1\r\n+OK\r\n";
    let reply = decode_reply(wire).unwrap();
    assert_eq!(
        reply,
        Reply::Array(vec![
            Reply::Integer(1),
            Reply::Array(vec![Reply::bulk("a"), Reply::nil()]),
            Reply::status("OK"),
        ])
    );
}

#[test]
fn test_encode_decode_reply_tree() {
    let reply = Reply::Array(vec![
        Reply::status("QUEUED"),
        Reply::Integer(-7),
        Reply::nil(),
        Reply::bulk(Bytes::from_static(&[0x00, 0xFF, b'\n'])),
        Reply::Array(vec![]),
        Reply::error("WRONGTYPE Operation against a key holding the wrong kind of value"),
    ]);
    assert_eq!(decode_reply(&encode_reply(&reply)).unwrap(), reply);
}

// =============================================================================
// Error Handling Tests
// =============================================================================

#[test]
fn test_incomplete_line() {
    let result = decode_reply(b"+OK");
    assert!(result.unwrap_err().to_string().contains("incomplete"));
}

#[test]
fn test_incomplete_bulk() {
    let result = decode_reply(b"$10\r\nhello\r\n");
    assert!(result.unwrap_err().to_string().contains("incomplete"));
}

#[test]
fn test_incomplete_array() {
    let result = decode_reply(b"*2\r\n:1\r\n");
    assert!(matches!(result, Err(ClientError::Protocol(_))));
}

#[test]
fn test_unknown_reply_type() {
    let result = decode_reply(b"?what\r\n");
    assert!(result.unwrap_err().to_string().contains("unknown reply type"));
}

#[test]
fn test_line_without_crlf() {
    let result = decode_reply(b"+OK\n");
    assert!(result.unwrap_err().to_string().contains("CRLF"));
}

#[test]
fn test_bulk_without_trailing_crlf() {
    let result = decode_reply(b"$3\r\nfooXX");
    assert!(result.unwrap_err().to_string().contains("CRLF"));
}

#[test]
fn test_invalid_integer() {
    let result = decode_reply(b":12a\r\n");
    assert!(result.unwrap_err().to_string().contains("invalid integer"));
}

#[test]
fn test_invalid_negative_length() {
    let result = decode_reply(b"$-2\r\n");
    assert!(result.unwrap_err().to_string().contains("invalid length"));
}

#[test]
fn test_empty_line() {
    let result = decode_reply(b"\r\n");
    assert!(result.unwrap_err().to_string().contains("empty reply line"));
}

#[test]
fn test_bulk_limit() {
    let limits = ReplyLimits {
        max_bulk_len: 4,
        ..ReplyLimits::default()
    };
    let mut cursor = Cursor::new(b"$5\r\nhello\r\n".to_vec());
    let result = read_reply(&mut cursor, &limits);
    assert!(result.unwrap_err().to_string().contains("too large"));
}

#[test]
fn test_array_limit() {
    let limits = ReplyLimits {
        max_array_len: 1,
        ..ReplyLimits::default()
    };
    let mut cursor = Cursor::new(b"*2\r\n:1\r\n:2\r\n".to_vec());
    let result = read_reply(&mut cursor, &limits);
    assert!(result.unwrap_err().to_string().contains("too large"));
}

#[test]
fn test_depth_limit() {
    let limits = ReplyLimits {
        max_depth: 2,
        ..ReplyLimits::default()
    };
    let mut cursor = Cursor::new(b"*1\r\n*1\r\n*1\r\n:1\r\n".to_vec());
    let result = read_reply(&mut cursor, &limits);
    assert!(result.unwrap_err().to_string().contains("nesting"));

    let mut cursor = Cursor::new(b"*1\r\n*1\r\n:1\r\n".to_vec());
    assert!(read_reply(&mut cursor, &limits).is_ok());
}

#[test]
fn test_closed_stream_is_transport_error() {
    let mut cursor = Cursor::new(Vec::new());
    let result = read_reply(&mut cursor, &ReplyLimits::default());
    match result {
        Err(ClientError::Transport(e)) => {
            assert_eq!(e.kind(), std::io::ErrorKind::UnexpectedEof)
        }
        other => panic!("Expected transport error, got {:?}", other),
    }
}

// =============================================================================
// Stream I/O Tests
// =============================================================================

#[test]
fn test_stream_multiple_replies() {
    let replies = vec![
        Reply::status("OK"),
        Reply::Integer(3),
        Reply::nil(),
        Reply::Array(vec![Reply::bulk("a"), Reply::bulk("b")]),
        Reply::error("ERR oops"),
    ];

    let mut buffer = Vec::new();
    for reply in &replies {
        write_reply(&mut buffer, reply).unwrap();
    }

    let mut cursor = Cursor::new(buffer);
    for expected in &replies {
        let decoded = read_reply(&mut cursor, &ReplyLimits::default()).unwrap();
        assert_eq!(&decoded, expected);
    }
}

// =============================================================================
// Reply Model Tests
// =============================================================================

#[test]
fn test_reply_kind() {
    assert_eq!(Reply::status("OK").kind(), ReplyKind::Status);
    assert_eq!(Reply::error("ERR").kind(), ReplyKind::Error);
    assert_eq!(Reply::bulk("x").kind(), ReplyKind::Bulk);
    assert_eq!(Reply::nil().kind(), ReplyKind::Nil);
    assert_eq!(Reply::Integer(1).kind(), ReplyKind::Integer);
    assert_eq!(Reply::Array(vec![]).kind(), ReplyKind::Array);
}

#[test]
fn test_server_error_search_is_depth_first() {
    let reply = Reply::Array(vec![
        Reply::Integer(1),
        Reply::Array(vec![Reply::bulk("x"), Reply::error("first")]),
        Reply::error("second"),
    ]);
    assert_eq!(reply.server_error(), Some("first"));
    assert_eq!(Reply::bulk("x").server_error(), None);
}

#[test]
fn test_reply_display() {
    assert_eq!(Reply::status("OK").to_string(), "OK");
    assert_eq!(Reply::Integer(5).to_string(), "(integer) 5");
    assert_eq!(Reply::nil().to_string(), "(nil)");
    assert_eq!(Reply::bulk("hi").to_string(), "\"hi\"");
    assert_eq!(Reply::error("ERR no").to_string(), "(error) ERR no");
    assert_eq!(Reply::Array(vec![]).to_string(), "(empty array)");

    let nested = Reply::Array(vec![
        Reply::bulk("a"),
        Reply::Array(vec![Reply::bulk("b"), Reply::Integer(2)]),
    ]);
    assert_eq!(nested.to_string(), "1) \"a\"\n2) 1) \"b\"\n   2) (integer) 2");
}
