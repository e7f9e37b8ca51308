use tokio::net::{TcpListener, TcpStream};

use crate::protocol::{Book, BookshelfError, Operation, Request, Response, StreamEvent};
use crate::transport::{JsonCodec, TcpTransport};

async fn loopback_pair() -> (TcpStream, TcpStream) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let client = TcpStream::connect(addr).await.unwrap();
    let (server, _) = listener.accept().await.unwrap();
    (client, server)
}

#[tokio::test]
async fn test_message_round_trip() {
    let (mut client, mut server) = loopback_pair().await;

    TcpTransport::send_message(&mut client, b"hello frames")
        .await
        .unwrap();

    let received = TcpTransport::receive_message(&mut server).await.unwrap();
    assert_eq!(received, b"hello frames");
}

#[tokio::test]
async fn test_request_round_trip() {
    let (mut client, mut server) = loopback_pair().await;

    let request = Request::new(Operation::Get { id: 123 });
    let expected_id = request.id;

    let server_task = tokio::spawn(async move {
        let data = TcpTransport::receive_message(&mut server).await.unwrap();
        let decoded = JsonCodec::decode_request(&data).unwrap();
        assert_eq!(decoded.op, Operation::Get { id: 123 });

        let response = Response::success(decoded.id, serde_json::json!({"id": 123}));
        let encoded = JsonCodec::encode_response(&response).unwrap();
        TcpTransport::send_message(&mut server, &encoded)
            .await
            .unwrap();
    });

    let response = TcpTransport::send_request(&mut client, &request)
        .await
        .unwrap();
    assert_eq!(response.id, expected_id);
    assert!(response.success);

    server_task.await.unwrap();
}

#[tokio::test]
async fn test_receive_event() {
    let (mut client, mut server) = loopback_pair().await;

    let event = StreamEvent::Record {
        book: Book::new(123, "A Tale of Two Cities", "Charles Dickens"),
    };
    let encoded = JsonCodec::encode_event(&event).unwrap();
    TcpTransport::send_message(&mut server, &encoded)
        .await
        .unwrap();

    let received = TcpTransport::receive_event(&mut client).await.unwrap();
    assert_eq!(received, event);
}

#[tokio::test]
async fn test_oversized_frame_rejected() {
    use tokio::io::AsyncWriteExt;

    let (mut client, mut server) = loopback_pair().await;

    // Length prefix claiming 200 MB, well over the cap
    let len: u32 = 200 * 1024 * 1024;
    server.write_all(&len.to_be_bytes()).await.unwrap();

    let err = TcpTransport::receive_message(&mut client)
        .await
        .unwrap_err();
    assert!(matches!(err, BookshelfError::InvalidResponse(_)));
}

#[tokio::test]
async fn test_peer_close_is_connection_loss() {
    let (mut client, server) = loopback_pair().await;
    drop(server);

    let err = TcpTransport::receive_message(&mut client)
        .await
        .unwrap_err();
    assert!(matches!(err, BookshelfError::Connection(_)));
}

#[tokio::test]
async fn test_connect_refused() {
    // Bind then drop to get a port with nothing listening
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap().to_string();
    drop(listener);

    let err = TcpTransport::connect(&addr).await.unwrap_err();
    assert!(matches!(err, BookshelfError::Connection(_)));
}

#[tokio::test]
async fn test_connect_invalid_address() {
    let err = TcpTransport::connect("not an address").await.unwrap_err();
    assert!(matches!(err, BookshelfError::Connection(_)));
}
