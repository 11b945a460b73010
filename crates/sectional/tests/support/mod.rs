//! Shared fixtures for integration tests.

#![allow(dead_code)]

use std::sync::{Arc, Mutex, Once};
use std::thread::{self, ThreadId};
use std::time::Duration;

use async_trait::async_trait;
use domkit::{Document, Node, Page};
use sectional::log::{self, Level, LevelFilter, Log, Metadata, Record};
use sectional::{
    ApiClient, HttpRequest, HttpResponse, SiteConfig, Transport, TransportError,
};

/// A transport that records every request and answers with a canned reply.
pub struct FakeTransport {
    calls: Mutex<Vec<HttpRequest>>,
    reply: Result<HttpResponse, TransportError>,
}

impl FakeTransport {
    pub fn replying(status: u16, body: &str) -> Arc<Self> {
        Arc::new(Self {
            calls: Mutex::new(Vec::new()),
            reply: Ok(HttpResponse {
                status,
                body: body.to_string(),
            }),
        })
    }

    pub fn failing(error: TransportError) -> Arc<Self> {
        Arc::new(Self {
            calls: Mutex::new(Vec::new()),
            reply: Err(error),
        })
    }

    pub fn calls(&self) -> Vec<HttpRequest> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl Transport for FakeTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        self.calls.lock().unwrap().push(request);
        // Yield so concurrent sends interleave like real requests.
        tokio::task::yield_now().await;
        self.reply.clone()
    }
}

/// A transport whose requests never complete.
pub struct HangingTransport;

#[async_trait]
impl Transport for HangingTransport {
    async fn send(&self, _request: HttpRequest) -> Result<HttpResponse, TransportError> {
        tokio::time::sleep(Duration::from_secs(3600)).await;
        Err(TransportError::Request("unreachable".to_string()))
    }
}

pub fn client(transport: Arc<dyn Transport>) -> ApiClient {
    ApiClient::new(transport, &SiteConfig::default().api)
}

/// The stock page: four sections, a matching sidebar, the request form and
/// two result popups.
pub fn stock_page(nickname: &str, invite: &str) -> Page {
    let sections = ["home", "about", "rules", "apply"];

    Page::from_nodes(vec![
        Node::new("main").with_children(
            sections
                .iter()
                .map(|id| Node::new("section").with_id(*id))
                .collect(),
        ),
        Node::new("aside").with_children(
            sections
                .iter()
                .map(|id| Node::new("div").with_id(format!("sidebar-{id}")))
                .collect(),
        ),
        Node::new("form").with_children(vec![
            Node::new("input").with_id("nickname").with_value(nickname),
            Node::new("input").with_id("invite").with_value(invite),
        ]),
        Node::new("div")
            .with_id("success-popup")
            .with_children(vec![Node::new("p").with_id("success-message")]),
        Node::new("div")
            .with_id("error-popup")
            .with_children(vec![Node::new("p").with_id("error-message")]),
    ])
}

/// Text content of the element with `id`.
pub fn text_of(page: &Page, id: &str) -> String {
    page.element_by_id(id)
        .and_then(|node| page.element(node))
        .map(|element| element.text().to_string())
        .unwrap_or_default()
}

// ============================================================================
// Log capture
// ============================================================================

static RECORDS: Mutex<Vec<(ThreadId, Level, String)>> = Mutex::new(Vec::new());

struct RecordingLogger;

impl Log for RecordingLogger {
    fn enabled(&self, _metadata: &Metadata) -> bool {
        true
    }

    fn log(&self, record: &Record) {
        RECORDS
            .lock()
            .unwrap()
            .push((thread::current().id(), record.level(), record.args().to_string()));
    }

    fn flush(&self) {}
}

/// Install the recording logger once per test binary and drop anything this
/// thread logged so far.
pub fn capture_logs() {
    static INSTALL: Once = Once::new();
    INSTALL.call_once(|| {
        log::set_boxed_logger(Box::new(RecordingLogger)).unwrap();
        log::set_max_level(LevelFilter::Trace);
    });
    take_logs();
}

/// Records logged from the current thread since the last call.
///
/// Tests run on separate threads, so each only sees its own records.
pub fn take_logs() -> Vec<(Level, String)> {
    let me = thread::current().id();
    let mut records = RECORDS.lock().unwrap();
    let (mine, others): (Vec<_>, Vec<_>) = records.drain(..).partition(|(id, _, _)| *id == me);
    *records = others;
    mine.into_iter().map(|(_, level, message)| (level, message)).collect()
}

/// Only the records at `level`.
pub fn at_level(records: &[(Level, String)], level: Level) -> Vec<&str> {
    records
        .iter()
        .filter(|(l, _)| *l == level)
        .map(|(_, message)| message.as_str())
        .collect()
}
