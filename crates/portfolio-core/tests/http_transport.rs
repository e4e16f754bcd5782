//! HTTP transport against a local one-shot server

use portfolio_core::{ContactForm, ContactSession, FormTransport, HttpTransport, SubmitError};
use portfolio_core::error::NETWORK_ERROR_MESSAGE;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

/// Serve a single canned response and hand back the raw request text.
async fn one_shot_server(status_line: &'static str, body: &'static str) -> (String, JoinHandle<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let handle = tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();
        let mut request = Vec::new();
        let mut buf = [0u8; 4096];

        // Read headers, then as much body as Content-Length says.
        loop {
            let n = socket.read(&mut buf).await.unwrap();
            if n == 0 {
                break;
            }
            request.extend_from_slice(&buf[..n]);
            let text = String::from_utf8_lossy(&request);
            if let Some(split) = text.find("\r\n\r\n") {
                let content_length = text[..split]
                    .lines()
                    .find_map(|line| {
                        let (name, value) = line.split_once(':')?;
                        name.eq_ignore_ascii_case("content-length")
                            .then(|| value.trim().parse::<usize>().ok())
                            .flatten()
                    })
                    .unwrap_or(0);
                if request.len() >= split + 4 + content_length {
                    break;
                }
            }
        }

        let response = format!(
            "HTTP/1.1 {status_line}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
            body.len()
        );
        socket.write_all(response.as_bytes()).await.unwrap();
        socket.shutdown().await.ok();

        String::from_utf8_lossy(&request).into_owned()
    });

    (format!("http://{addr}/f/test-form"), handle)
}

#[tokio::test]
async fn test_posts_form_encoded_fields_with_json_accept() {
    let (endpoint, server) = one_shot_server("200 OK", r#"{"ok":true}"#).await;
    let transport = HttpTransport::new(endpoint);
    let form = ContactForm::new("Ada Lovelace", "ada@example.com", "Hello & welcome");

    let response = transport.post_form(&form.fields()).await.unwrap();
    assert_eq!(response.status, 200);
    assert_eq!(response.body, r#"{"ok":true}"#);

    let request = server.await.unwrap();
    assert!(request.starts_with("POST /f/test-form"));
    assert!(request.to_ascii_lowercase().contains("accept: application/json"));
    assert!(request.contains("application/x-www-form-urlencoded"));
    assert!(request.contains("name=Ada+Lovelace&email=ada%40example.com&message=Hello+%26+welcome"));
}

#[tokio::test]
async fn test_rejection_round_trip() {
    let (endpoint, server) = one_shot_server(
        "422 Unprocessable Entity",
        r#"{"errors":[{"field":"email","message":"should be an email"}]}"#,
    )
    .await;
    let transport = HttpTransport::new(endpoint);

    let mut session = ContactSession::new();
    session.set_name("Ada");
    session.set_email("not-an-email");
    session.set_message("Hi");
    session.submit(&transport).await;

    assert_eq!(session.status.error_message(), Some("should be an email"));
    server.await.unwrap();
}

#[tokio::test]
async fn test_unreachable_endpoint_is_network_error() {
    // Bind then drop to get a port nothing listens on.
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let transport = HttpTransport::new(format!("http://{addr}/f/none"));
    let form = ContactForm::new("Ada", "ada@example.com", "Hi");

    let err = transport.post_form(&form.fields()).await.unwrap_err();
    assert!(matches!(err, SubmitError::Network(_)));
    assert_eq!(err.user_message(), NETWORK_ERROR_MESSAGE);
}
