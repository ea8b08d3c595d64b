//! Replay a scripted event sequence against a page fixture and print the
//! resulting slider states.

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use slider_core::SliderConfig;
use slider_host::{PageFixture, Script, replay};

#[derive(Debug, Parser)]
#[command(name = "slider-sim", about = "Replay input against slider page fixtures")]
struct Args {
    /// Page fixture describing the markup
    #[arg(long, value_name = "FILE")]
    page: PathBuf,

    /// Timed event script; without one the page is only bootstrapped
    #[arg(long, value_name = "FILE")]
    script: Option<PathBuf>,

    /// Slider configuration (TOML)
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Log controller activity
    #[arg(short, long)]
    verbose: bool,
}

fn init_logging(verbose: bool) {
    if std::env::var("RUST_LOG").is_err() {
        let level = if verbose {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Info
        };
        env_logger::Builder::new()
            .target(env_logger::Target::Stdout)
            .filter_level(log::LevelFilter::Warn)
            .filter_module("slider_core", level)
            .filter_module("slider_host", level)
            .filter_module("slider_sim", level)
            .init();
    } else {
        env_logger::init();
    }
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let config = match &args.config {
        Some(path) => SliderConfig::from_path(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => SliderConfig::default(),
    };
    let page = PageFixture::load(&args.page)?;
    let script = match &args.script {
        Some(path) => Script::load(path)?,
        None => Script::default(),
    };

    log::info!(
        "Replaying {} event(s) against {}",
        script.events.len(),
        args.page.display()
    );
    let outcome = replay(&page, &script, config);

    for snapshot in outcome.registry.snapshots() {
        println!("{snapshot}");
    }
    for root in outcome.registry.skipped() {
        println!("{root}: skipped");
    }
    println!(
        "{} delivery(ies), {} recompute(s)",
        outcome.delivered, outcome.recomputes
    );

    Ok(())
}
