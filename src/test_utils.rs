// SPDX-License-Identifier: MPL-2.0
//! Test utilities: record builders and a one-shot local HTTP server.

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

use crate::domain::apod::{MediaKind, Record};

/// Image record with a URL derived from the date.
pub fn image_record(date: &str) -> Record {
    Record {
        date: date.to_string(),
        title: format!("Image {date}"),
        explanation: Some(format!("Explanation for {date}")),
        media_type: MediaKind::Image,
        url: format!("https://apod.example/{date}.jpg"),
        hdurl: Some(format!("https://apod.example/{date}_hd.jpg")),
        thumbnail_url: None,
    }
}

/// YouTube video record.
pub fn video_record(date: &str, video_id: &str) -> Record {
    Record {
        date: date.to_string(),
        title: format!("Video {date}"),
        explanation: None,
        media_type: MediaKind::Video,
        url: format!("https://www.youtube.com/watch?v={video_id}"),
        hdurl: None,
        thumbnail_url: None,
    }
}

/// Canned response served by [`serve_once`].
pub struct FixtureResponse {
    pub status: u16,
    pub content_type: &'static str,
    pub body: Vec<u8>,
}

impl FixtureResponse {
    pub fn json(body: &str) -> Self {
        Self {
            status: 200,
            content_type: "application/json",
            body: body.as_bytes().to_vec(),
        }
    }

    pub fn status(status: u16) -> Self {
        Self {
            status,
            content_type: "text/plain",
            body: b"unavailable".to_vec(),
        }
    }
}

/// Serves `response` to a single connection on an ephemeral port.
///
/// Returns the base URL (`http://127.0.0.1:PORT`) and the server task, which
/// resolves to the raw request head it received.
pub async fn serve_once(response: FixtureResponse) -> (String, JoinHandle<String>) {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind fixture listener");
    let addr = listener.local_addr().expect("fixture address");

    let handle = tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.expect("accept connection");

        let mut request = Vec::new();
        let mut chunk = [0u8; 1024];
        while !request.windows(4).any(|w| w == b"\r\n\r\n") {
            let n = socket.read(&mut chunk).await.expect("read request");
            if n == 0 {
                break;
            }
            request.extend_from_slice(&chunk[..n]);
        }

        let head = format!(
            "HTTP/1.1 {} Fixture\r\nContent-Type: {}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
            response.status,
            response.content_type,
            response.body.len()
        );
        socket
            .write_all(head.as_bytes())
            .await
            .expect("write head");
        socket.write_all(&response.body).await.expect("write body");
        socket.shutdown().await.ok();

        String::from_utf8_lossy(&request).into_owned()
    });

    (format!("http://{addr}"), handle)
}
