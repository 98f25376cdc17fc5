#![allow(dead_code)]

use std::{
    collections::HashMap,
    io::{self, Write},
    path::Path,
    sync::Mutex,
};

use async_trait::async_trait;
use covergrab::{
    collection::TagReader,
    error::CoverError,
    hosts::{ArchiveStrategy, GalleryStrategy, SearchStrategy},
    http::HttpTransport,
    pipeline::{FallbackChoice, KeywordPrompt},
    types::TrackTags,
};
use reqwest::StatusCode;

pub const GALLERY: &str = "http://gallery.test";
pub const ARCHIVE: &str = "http://archive.test";

/// Transport answering from canned pages and assets, recording every request.
#[derive(Default)]
pub struct FakeTransport {
    down: Vec<String>,
    pages: HashMap<String, String>,
    assets: HashMap<String, Vec<u8>>,
    requests: Mutex<Vec<String>>,
}

impl FakeTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn down(mut self, url: &str) -> Self {
        self.down.push(url.to_string());
        self
    }

    pub fn page(mut self, url: &str, html: &str) -> Self {
        self.pages.insert(url.to_string(), html.to_string());
        self
    }

    pub fn asset(mut self, url: &str, bytes: &[u8]) -> Self {
        self.assets.insert(url.to_string(), bytes.to_vec());
        self
    }

    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }

    pub fn probes(&self) -> Vec<String> {
        self.requests()
            .into_iter()
            .filter_map(|r| r.strip_prefix("PROBE ").map(str::to_string))
            .collect()
    }

    fn record(&self, kind: &str, url: &str) {
        self.requests
            .lock()
            .unwrap()
            .push(format!("{} {}", kind, url));
    }
}

#[async_trait]
impl HttpTransport for FakeTransport {
    async fn probe(&self, url: &str) -> Result<(), CoverError> {
        self.record("PROBE", url);
        if self.down.iter().any(|d| d == url) {
            return Err(CoverError::Io(io::Error::new(
                io::ErrorKind::ConnectionRefused,
                "connection refused",
            )));
        }
        Ok(())
    }

    async fn get_text(&self, url: &str) -> Result<String, CoverError> {
        self.record("GET", url);
        Ok(self.pages.get(url).cloned().unwrap_or_default())
    }

    async fn download(&self, url: &str, dest: &Path) -> Result<u64, CoverError> {
        self.record("DOWNLOAD", url);
        match self.assets.get(url) {
            Some(bytes) => {
                std::fs::write(dest, bytes)?;
                Ok(bytes.len() as u64)
            }
            None => Err(CoverError::AssetNotFound {
                url: url.to_string(),
                status: StatusCode::NOT_FOUND,
            }),
        }
    }
}

/// Prompt replaying a fixed script of answers.
pub struct ScriptedPrompt {
    choice: FallbackChoice,
    keywords: Vec<String>,
    pub offers: usize,
    pub asked: usize,
}

impl ScriptedPrompt {
    pub fn new(choice: FallbackChoice, keywords: &[&str]) -> Self {
        Self {
            choice,
            keywords: keywords.iter().rev().map(|k| k.to_string()).collect(),
            offers: 0,
            asked: 0,
        }
    }

    /// Prompt that must never be consulted.
    pub fn silent() -> Self {
        Self::new(FallbackChoice::Exit, &[])
    }
}

impl KeywordPrompt for ScriptedPrompt {
    fn offer_keyword_search(&mut self) -> FallbackChoice {
        self.offers += 1;
        self.choice
    }

    fn next_keywords(&mut self, _attempt: usize) -> Option<String> {
        self.asked += 1;
        self.keywords.pop()
    }
}

/// Tag reader keyed by file name.
#[derive(Default)]
pub struct FakeTags {
    tags: HashMap<String, TrackTags>,
}

impl FakeTags {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn file(mut self, name: &str, artist: &str, album: &str) -> Self {
        self.tags.insert(
            name.to_string(),
            TrackTags {
                artist: artist.to_string(),
                album: album.to_string(),
            },
        );
        self
    }
}

impl TagReader for FakeTags {
    fn read_tags(&self, path: &Path) -> Result<TrackTags, CoverError> {
        let name = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or_default();
        self.tags
            .get(name)
            .cloned()
            .ok_or_else(|| CoverError::UnreadableTags {
                path: path.to_path_buf(),
                reason: "no tags".to_string(),
            })
    }
}

pub fn gallery() -> Box<dyn SearchStrategy> {
    Box::new(GalleryStrategy::new(GALLERY))
}

pub fn archive() -> Box<dyn SearchStrategy> {
    Box::new(ArchiveStrategy::new(ARCHIVE))
}

pub fn gallery_results(hrefs: &[&str]) -> String {
    let items: String = hrefs
        .iter()
        .map(|href| {
            format!(
                r#"<div class="coverLink"><a href="{}"><img src="/images/loading.gif" alt=""/><br/>Cover</a></div>"#,
                href
            )
        })
        .collect();
    format!("<html><body><div id=\"results\">{}</div></body></html>", items)
}

pub fn gallery_detail(href: &str) -> String {
    format!(
        r#"<html><body><div class="selectedCoverThumb"><a href="{}"><img src="/thumb.jpg"/></a></div></body></html>"#,
        href
    )
}

pub fn archive_results(hrefs: &[&str]) -> String {
    let items: String = hrefs
        .iter()
        .map(|href| {
            format!(
                r#"<div class="row"><div class="thumbnail text-muted searchitem js_href" data-href="{}"><img src="/t.jpg"/></div></div>"#,
                href
            )
        })
        .collect();
    format!("<html><body>{}</body></html>", items)
}

pub fn archive_detail(action: &str) -> String {
    format!(
        r#"<html><body><form id="EntryForm" action="{}" method="post"><button>Download</button></form></body></html>"#,
        action
    )
}

/// Zip archive holding the given files.
pub fn zip_bytes(files: &[(&str, &str)]) -> Vec<u8> {
    let mut buf = io::Cursor::new(Vec::new());
    {
        let mut writer = zip::ZipWriter::new(&mut buf);
        let options = zip::write::FileOptions::default();
        for (name, content) in files {
            writer.start_file(*name, options).unwrap();
            writer.write_all(content.as_bytes()).unwrap();
        }
        writer.finish().unwrap();
    }
    buf.into_inner()
}

/// Raw HTTP/1.1 response with a `Content-Length` matching `body`.
pub fn http_response(status: &str, body: &[u8]) -> Vec<u8> {
    let mut response = format!(
        "HTTP/1.1 {}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
        status,
        body.len()
    )
    .into_bytes();
    response.extend_from_slice(body);
    response
}

/// Serves canned raw responses by request path on a local port and returns
/// the base URL. Unknown paths get a 404.
pub async fn serve(routes: &[(&str, Vec<u8>)]) -> String {
    use tokio::io::{AsyncReadExt, AsyncWriteExt};

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let routes: HashMap<String, Vec<u8>> = routes
        .iter()
        .map(|(path, response)| (path.to_string(), response.clone()))
        .collect();

    tokio::spawn(async move {
        while let Ok((mut socket, _)) = listener.accept().await {
            let routes = routes.clone();
            tokio::spawn(async move {
                let mut request = Vec::new();
                let mut buf = [0u8; 1024];
                while !request.windows(4).any(|w| w == b"\r\n\r\n") {
                    match socket.read(&mut buf).await {
                        Ok(0) | Err(_) => return,
                        Ok(n) => request.extend_from_slice(&buf[..n]),
                    }
                }

                let head = String::from_utf8_lossy(&request);
                let path = head.split_whitespace().nth(1).unwrap_or("/").to_string();
                let response = routes
                    .get(&path)
                    .cloned()
                    .unwrap_or_else(|| http_response("404 Not Found", b"missing"));

                let _ = socket.write_all(&response).await;
                let _ = socket.shutdown().await;
            });
        }
    });

    format!("http://{}", addr)
}
