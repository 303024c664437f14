//! Console overlay demo: simulates a page lifecycle end to end.

use anyhow::Result;
use clap::Parser;
use tracing::info;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use common::{Color, OverlayError};
use console::{LogValue, Palette};
use panel::PanelConfig;
use webconsole::{Overlay, OverlayConfig};

/// In-page diagnostic console overlay demo
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Page URL to simulate
    #[arg(default_value = "https://example.com/?webconsole=1")]
    url: String,

    /// Panel viewport rows
    #[arg(long, default_value = "25")]
    rows: usize,

    /// Panel width in pixels
    #[arg(long, default_value = "300")]
    width: u32,

    /// Error text color (hex)
    #[arg(long, default_value = "#910000")]
    error_color: String,

    /// Report a synthetic uncaught error before shutdown
    #[arg(long)]
    fail: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let palette = Palette {
        error: parse_color(&args.error_color)?,
        ..Palette::default()
    };
    let config = OverlayConfig::new().with_palette(palette).with_panel(
        PanelConfig::new()
            .with_width(args.width)
            .with_viewport_rows(args.rows),
    );

    let overlay = match Overlay::bootstrap(&args.url, config)? {
        Some(overlay) => overlay,
        None => {
            println!("page did not request the console overlay");
            return Ok(());
        }
    };

    run(overlay, args.fail)
}

fn parse_color(hex: &str) -> Result<Color, OverlayError> {
    Color::from_hex(hex).ok_or_else(|| OverlayError::invalid_color(hex))
}

fn run(mut overlay: Overlay, fail: bool) -> Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(overlay.layer())
        .try_init()?;

    overlay.prepare()?;
    info!("console overlay demo v{}", webconsole::VERSION);

    let console = overlay.console();

    // Page scripts log before the document is ready; everything buffers.
    {
        let mut console = console.lock();
        console.log(&["page booting".into()]);
        console.count("boot");
        console.time("load");
        console.warn(&["%cstyled warning".into(), "font-weight:bold".into()]);
    }

    // Document load: the panel appears and buffered lines flush in order.
    overlay.start();

    {
        let mut console = console.lock();
        console.time_end("load");
        console.log(&["ready".into(), LogValue::from_serialize(&vec![1, 2, 3])]);
        console.error(&"resource missing".into());
    }

    // Host-side tracing flows through the layer into the same panel.
    info!(target: "page", "scripted event");

    if fail {
        console
            .lock()
            .report_uncaught("synthetic failure", Some("/js/app.js"), 42, 7, None);
    }

    if let Some(panel) = overlay.panel() {
        let panel = panel.lock();
        println!("console panel ({} lines):", panel.line_count());
        println!("{}", panel.render_text());
    }

    overlay.stop();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_args_default() {
        let args = Args::parse_from(["webconsole"]);
        assert_eq!(args.url, "https://example.com/?webconsole=1");
        assert_eq!(args.rows, 25);
        assert_eq!(args.width, 300);
        assert!(!args.fail);
    }

    #[test]
    fn test_args_custom() {
        let args = Args::parse_from([
            "webconsole",
            "https://x.dev/?webconsole",
            "--rows",
            "10",
            "--fail",
        ]);
        assert_eq!(args.url, "https://x.dev/?webconsole");
        assert_eq!(args.rows, 10);
        assert!(args.fail);
    }

    #[test]
    fn test_parse_color() {
        assert_eq!(parse_color("#910000").unwrap(), Color::rgb(145, 0, 0));
        assert!(parse_color("nope").is_err());
    }
}
