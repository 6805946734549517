use std::io;

use anyhow::{Context, Result};
use clap::Parser;
use log::info;
use winit::event_loop::EventLoop;

use ornament_tour::app::{ViewerApp, ViewerState};
use ornament_tour::cli::Cli;
use ornament_tour::config::{load_content, sample_content, Settings};
use ornament_tour::headless::{self, HeadlessOptions, ScriptedDrag};
use ornament_tour::tree::{default_layers, ContentAssigner, TreeScene};

/// Placeholder photo count when no content file is given
const SAMPLE_CONTENT_COUNT: usize = 12;

fn build_scene(cli: &Cli, settings: &Settings) -> Result<TreeScene> {
    let content = match &cli.content {
        Some(path) => load_content(path)?,
        None => sample_content(SAMPLE_CONTENT_COUNT),
    };
    let assigner = match cli.seed {
        Some(seed) => ContentAssigner::seeded(seed),
        None => ContentAssigner::from_entropy(),
    };
    let mut scene = TreeScene::with_assigner(default_layers(), settings.tree_color, assigner);
    scene.set_content(&content);
    info!(
        "Tree ready: {} slots, {} content items, {} tour targets",
        scene.total_slots(),
        content.len(),
        scene.targets().len()
    );
    Ok(scene)
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let settings = match &cli.settings {
        Some(path) => Settings::load(path)?,
        None => Settings::default(),
    };
    let settings = cli.apply_overrides(settings);
    let mut scene = build_scene(&cli, &settings)?;

    if cli.headless {
        let options = HeadlessOptions {
            frames: cli.frames,
            fps: cli.fps,
            drag: cli.drag.as_deref().and_then(ScriptedDrag::from_args),
        };
        let stdout = io::stdout();
        let mut out = io::BufWriter::new(stdout.lock());
        headless::run(&mut scene, settings.tour(), &options, &mut out)?;
        return Ok(());
    }

    let event_loop = EventLoop::new().context("Failed to create event loop")?;
    let mut app = ViewerApp::new(ViewerState::new(scene, settings));

    info!("Ornament Tour - drag to orbit, wheel to zoom, T toggles the tour, R reshuffles, Escape quits");
    event_loop.run_app(&mut app).context("Event loop failed")?;

    Ok(())
}
