//! Render one HTML fragment to AMP markup for eyeballing the pipeline.
//!
//! Usage: cargo run --example render_fragment -- <FILE>
//! Reads the fragment from FILE, or falls back to a built-in sample.

use amp_content::{render, RenderConfig};

const SAMPLE: &str = r#"<p>Watch this:</p>
<iframe src="https://www.youtube.com/embed/dQw4w9WgXcQ" width="560" height="315"></iframe>
<img src="https://example.com/photo-640x480.jpg" alt="A photo">
"#;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args: Vec<String> = std::env::args().collect();
    let html = match args.get(1) {
        Some(path) => {
            log::info!("📄 Reading fragment from {path}");
            std::fs::read_to_string(path)?
        }
        None => SAMPLE.to_string(),
    };

    let config = RenderConfig::default();
    let content = render(&html, &config)?;

    log::info!("✅ Rendered {} bytes of AMP markup", content.amp_html.len());
    for (name, url) in &content.scripts {
        log::info!("   requires {name} ({url})");
    }

    println!("{}", content.amp_html);

    Ok(())
}
