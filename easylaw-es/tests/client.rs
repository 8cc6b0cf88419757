use std::time::Duration;

use easylaw_es::{EsClient, EsConfig, EsError, SearchEngine};
use serde_json::{json, Value};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};
use tokio::task::JoinHandle;

/// Captured request: head as text and raw body.
type Captured = (String, Vec<u8>);

/// Local listener answering exactly one request with `status` and `body`.
/// Returns the listener's address as `host:port` and the captured request.
async fn serve_once(status: &'static str, body: String) -> (String, JoinHandle<Captured>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap().to_string();
    let handle = tokio::spawn(async move {
        let (mut sock, _) = listener.accept().await.unwrap();
        let captured = read_request(&mut sock).await;
        let resp = format!(
            "HTTP/1.1 {status}\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{}",
            body.len(),
            body
        );
        sock.write_all(resp.as_bytes()).await.unwrap();
        let _ = sock.shutdown().await;
        captured
    });
    (addr, handle)
}

async fn read_request(sock: &mut TcpStream) -> Captured {
    let mut buf = Vec::new();
    let mut tmp = [0u8; 1024];
    let head_end = loop {
        let n = sock.read(&mut tmp).await.unwrap();
        assert!(n > 0, "client closed early");
        buf.extend_from_slice(&tmp[..n]);
        if let Some(i) = buf.windows(4).position(|w| w == b"\r\n\r\n") {
            break i + 4;
        }
    };
    let head = String::from_utf8(buf[..head_end].to_vec()).unwrap();
    let len: usize = header(&head, "content-length").map(|v| v.parse().unwrap()).unwrap_or(0);
    let mut body = buf[head_end..].to_vec();
    while body.len() < len {
        let n = sock.read(&mut tmp).await.unwrap();
        assert!(n > 0, "body cut short");
        body.extend_from_slice(&tmp[..n]);
    }
    (head, body)
}

/// Header value by case-insensitive name.
fn header<'a>(head: &'a str, name: &str) -> Option<&'a str> {
    head.lines().skip(1).find_map(|l| {
        let (k, v) = l.split_once(':')?;
        k.trim().eq_ignore_ascii_case(name).then(|| v.trim())
    })
}

fn config(host: String) -> EsConfig {
    EsConfig {
        host,
        username: "elastic".into(),
        password: "changeme".into(),
        ..Default::default()
    }
}

fn empty_hits() -> String {
    json!({"hits": {"total": {"value": 0, "relation": "eq"}, "hits": []}}).to_string()
}

#[tokio::test]
async fn posts_query_and_decodes_response() {
    let (addr, srv) = serve_once("200 OK", empty_hits()).await;
    let client = EsClient::new(&config(format!("http://{addr}"))).expect("client");

    let query = json!({"query": {"match_all": {}}, "from": 0, "size": 10});
    let value = client.search("laws", &query).await.expect("search ok");
    assert_eq!(value["hits"]["total"]["value"], 0);

    let (head, body) = srv.await.unwrap();
    assert!(head.starts_with("POST /laws/_search HTTP/1.1\r\n"), "head was: {head}");
    // base64("elastic:changeme")
    assert_eq!(header(&head, "authorization"), Some("Basic ZWxhc3RpYzpjaGFuZ2VtZQ=="));
    assert_eq!(header(&head, "content-type"), Some("application/json"));
    let sent: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(sent, query);
}

#[tokio::test]
async fn base_path_and_url_credentials_are_used() {
    let (addr, srv) = serve_once("200 OK", "{\"hits\":{}}".to_string()).await;
    let client = EsClient::new(&config(format!("http://reader:pw@{addr}/es/"))).expect("client");

    client.search_index("conseil", &json!({})).await.expect("search ok");
    let (head, _) = srv.await.unwrap();
    assert!(head.starts_with("POST /es/conseil/_search HTTP/1.1\r\n"), "head was: {head}");
    // base64("reader:pw")
    assert_eq!(header(&head, "authorization"), Some("Basic cmVhZGVyOnB3"));
}

#[tokio::test]
async fn escaped_url_credentials_are_decoded() {
    let (addr, srv) = serve_once("200 OK", empty_hits()).await;
    let client = EsClient::new(&config(format!("http://reader:p%40ss@{addr}"))).expect("client");

    client.search("supreme-court", &json!({})).await.expect("search ok");
    let (head, _) = srv.await.unwrap();
    // base64("reader:p@ss")
    assert_eq!(header(&head, "authorization"), Some("Basic cmVhZGVyOnBAc3M="));
}

#[tokio::test]
async fn error_status_is_reported_with_body() {
    let reply = r#"{"error":{"type":"index_not_found_exception"},"status":404}"#.to_string();
    let (addr, srv) = serve_once("404 Not Found", reply).await;
    let client = EsClient::new(&config(format!("http://{addr}"))).expect("client");

    match client.search("dostor", &json!({})).await {
        Err(EsError::Status { status, body }) => {
            assert_eq!(status, 404);
            assert!(body.contains("index_not_found_exception"));
        }
        other => panic!("unexpected result: {other:?}"),
    }
    srv.await.unwrap();
}

#[tokio::test]
async fn non_json_body_is_a_decode_error() {
    let (addr, srv) = serve_once("200 OK", "<html>proxy</html>".to_string()).await;
    let client = EsClient::new(&config(format!("http://{addr}"))).expect("client");
    let err = client.search("laws", &json!({})).await.expect_err("not json");
    assert!(matches!(err, EsError::Decode(_)));
    srv.await.unwrap();
}

#[tokio::test]
async fn silent_engine_times_out() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    // Accept and hold the connection without answering.
    let _srv = tokio::spawn(async move {
        let (sock, _) = listener.accept().await.unwrap();
        tokio::time::sleep(Duration::from_secs(5)).await;
        drop(sock);
    });

    let mut client = EsClient::new(&config(format!("http://{addr}"))).expect("client");
    client.req_timeout = Duration::from_millis(200);
    let err = client.search("laws", &json!({})).await.expect_err("should time out");
    assert!(matches!(err, EsError::Timeout(_)), "got {err:?}");
}

#[tokio::test]
async fn connect_failure_propagates() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client = EsClient::new(&config(format!("http://{addr}"))).expect("client");
    let err = client.search("laws", &json!({})).await.expect_err("no engine");
    match err {
        EsError::Http(e) => assert!(e.is_connect(), "got {e:?}"),
        other => panic!("unexpected error: {other:?}"),
    }
}
