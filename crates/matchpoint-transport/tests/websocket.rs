//! Integration tests for the WebSocket transport.
//!
//! These spin up a real listener and a `tokio-tungstenite` client to
//! verify that frames actually cross the network in both directions.

#[cfg(feature = "websocket")]
mod websocket {
    use matchpoint_transport::{Connection, Transport, WebSocketTransport};

    type ClientWs = tokio_tungstenite::WebSocketStream<
        tokio_tungstenite::MaybeTlsStream<tokio::net::TcpStream>,
    >;

    async fn connect_client(addr: &str) -> ClientWs {
        let url = format!("ws://{addr}");
        let (ws, _) = tokio_tungstenite::connect_async(&url)
            .await
            .expect("client should connect");
        ws
    }

    /// Binds on an ephemeral port and returns the transport plus its
    /// resolved address.
    async fn bind_transport() -> (WebSocketTransport, String) {
        let transport = WebSocketTransport::bind("127.0.0.1:0")
            .await
            .expect("should bind");
        let addr = transport
            .local_addr()
            .expect("should have local addr")
            .to_string();
        (transport, addr)
    }

    #[tokio::test]
    async fn test_websocket_accept_and_send_receive() {
        let (mut transport, addr) = bind_transport().await;

        let server_handle =
            tokio::spawn(async move { transport.accept().await.expect("should accept") });

        let mut client_ws = connect_client(&addr).await;
        let server_conn = server_handle.await.expect("task should complete");

        assert!(server_conn.id().into_inner() > 0);

        // --- Server sends, client receives. Send is a queue push; the
        // writer task delivers it. ---
        server_conn
            .send(b"{\"type\":\"opponent_left\"}")
            .expect("send should queue");

        use futures_util::StreamExt;
        let msg = client_ws.next().await.unwrap().unwrap();
        assert!(msg.is_text(), "valid UTF-8 goes out as a text frame");
        assert_eq!(msg.into_data().as_ref(), b"{\"type\":\"opponent_left\"}");

        // --- Client sends, server receives ---
        use futures_util::SinkExt;
        use tokio_tungstenite::tungstenite::Message;
        client_ws
            .send(Message::Text("hello from client".to_owned().into()))
            .await
            .unwrap();

        let received = server_conn
            .recv()
            .await
            .expect("recv should succeed")
            .expect("should have data");
        assert_eq!(received, b"hello from client");
    }

    #[tokio::test]
    async fn test_websocket_recv_returns_none_on_client_close() {
        let (mut transport, addr) = bind_transport().await;

        let server_handle =
            tokio::spawn(async move { transport.accept().await.expect("should accept") });

        let mut client_ws = connect_client(&addr).await;
        let server_conn = server_handle.await.unwrap();

        use futures_util::SinkExt;
        use tokio_tungstenite::tungstenite::Message;
        client_ws.send(Message::Close(None)).await.unwrap();

        let result = server_conn.recv().await.expect("recv should not error");
        assert!(result.is_none(), "should return None on client close");
    }

    #[tokio::test]
    async fn test_websocket_send_from_clone_reaches_client() {
        // Clones share one outbound queue — this is what lets the server
        // push to a connection from a different task than its reader.
        let (mut transport, addr) = bind_transport().await;

        let server_handle =
            tokio::spawn(async move { transport.accept().await.expect("should accept") });

        let mut client_ws = connect_client(&addr).await;
        let server_conn = server_handle.await.unwrap();

        let clone = server_conn.clone();
        tokio::spawn(async move {
            clone.send(b"pushed").expect("send should queue");
        });

        use futures_util::StreamExt;
        let msg = client_ws.next().await.unwrap().unwrap();
        assert_eq!(msg.into_data().as_ref(), b"pushed");
    }
}
