//! Drive the stock page against a running API server.
//!
//! ```sh
//! SECTIONAL_API_URL=http://127.0.0.1:8000 cargo run --example site -- site.json
//! ```
//!
//! Without a config path the built-in layout is used. Logs go to
//! `sectional.log` in the working directory.

use std::sync::Arc;

use sectional_rs::domkit::{Node, Page};
use sectional_rs::log::LevelFilter;
use sectional_rs::{ApiClient, ReqwestTransport, Site, SiteConfig, init_logger};

fn page() -> Page {
    let sections = ["home", "about", "rules", "apply"];

    Page::from_nodes(vec![
        Node::new("main").with_children(
            sections
                .iter()
                .map(|id| Node::new("section").with_id(*id).with_text(id.to_uppercase()))
                .collect(),
        ),
        Node::new("aside").with_children(
            sections
                .iter()
                .map(|id| Node::new("div").with_id(format!("sidebar-{id}")))
                .collect(),
        ),
        Node::new("form").with_children(vec![
            Node::new("input").with_id("nickname").with_value("neo"),
            Node::new("input").with_id("invite"),
            Node::new("textarea").with_id("about").with_value("Hello from the demo."),
        ]),
        Node::new("div")
            .with_id("success-popup")
            .with_children(vec![Node::new("p").with_id("success-message")]),
        Node::new("div")
            .with_id("error-popup")
            .with_children(vec![Node::new("p").with_id("error-message")]),
    ])
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_logger("sectional.log", LevelFilter::Debug)?;

    let config = match std::env::args().nth(1) {
        Some(path) => SiteConfig::load(path)?,
        None => {
            let mut config = SiteConfig::default();
            config.apply_env();
            config
        }
    };

    let client = ApiClient::new(Arc::new(ReqwestTransport::new()), &config.api);
    println!("API: {}", client.base_url());
    println!("ping: {:?}", client.ping().await);

    let mut site = Site::setup(&config, page(), client)?;
    println!("{}", site.document().outline());

    for id in ["nav-about", "nav-apply", "submit-button"] {
        site.click(id).await;
        println!("after #{id}:\n{}", site.document().outline());
    }

    for alert in site.document_mut().take_alerts() {
        println!("alert: {alert}");
    }
    Ok(())
}
