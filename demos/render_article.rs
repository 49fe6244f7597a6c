//! Render a sample article and print the body and its JSON-LD.
//!
//! ```sh
//! RUST_LOG=vrachka_render=trace cargo run --example render_article
//! ```

use anyhow::Context;
use chrono::{TimeZone, Utc};
use tracing_subscriber::EnvFilter;
use vrachka_render::{Article, RenderConfig, render_article};

const SAMPLE_BODY: &str = r#"{"content":"<p>Пълнолунието в Овен идва с ясни решения.</p><!-- IMAGE:1 --><h2>Въведение</h2><p>Луната осветява стари въпроси.</p><!-- VRACHKA:quote:Каквото е горе, това е и долу. --><h3>Кой е засегнат</h3><p>Огнените знаци най-силно.</p><!-- CTA:soft --><h2>Често задавани въпроси</h2><h3>Кога е пълнолунието?</h3><p>На 17 октомври.</p><h3>Носи ли късмет?</h3><p>Носи яснота.</p><h2>Заключение</h2><p>Бъдете търпеливи.</p>"}"#;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let config = match std::env::args().nth(1) {
        Some(path) => RenderConfig::from_json_file(&path)?,
        None => RenderConfig::builder()
            .site_url("https://vrachka.eu")
            .logo_url("https://vrachka.eu/logo.png")
            .build()
            .context("Failed to build default render config")?,
    };

    let article = Article {
        content: SAMPLE_BODY.to_string(),
        title: "Пълнолуние в Овен".to_string(),
        excerpt: None,
        category: "Астрология".to_string(),
        slug: "palnolunie-v-oven".to_string(),
        image_urls: vec![
            "https://cdn.vrachka.eu/hero.jpg".to_string(),
            "https://cdn.vrachka.eu/moon.jpg".to_string(),
        ],
        published_at: Utc
            .with_ymd_and_hms(2026, 10, 16, 7, 0, 0)
            .single()
            .context("Invalid publish date")?,
        updated_at: Utc::now(),
    };

    let rendered = render_article(&article, &config);

    println!("{}\n", rendered.content.html);
    println!(
        "{} headings, {} words, {} min read\n",
        rendered.content.headings.len(),
        rendered.content.word_count,
        rendered.content.reading_minutes
    );
    println!(
        "{}",
        rendered
            .structured_data
            .to_script_tags()
            .context("Failed to serialize structured data")?
    );

    Ok(())
}
