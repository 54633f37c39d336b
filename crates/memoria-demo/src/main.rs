//! Scene generator binary: builds the full decorative scene from config and
//! writes the descriptor sets as JSON for the rendering layer.
//!
//! Configuration is loaded from `memoria.ron` (created with defaults if
//! missing) and can be overridden via CLI flags, e.g.
//! `cargo run -p memoria-demo -- --seed 7 --stars 800 --out scene.json`.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use memoria_config::{CliArgs, Config};
use memoria_scene::{
    Cloud, CloudFieldGenerator, HillLayer, HillStackGenerator, Star, StarFieldGenerator, Zone,
};
use memoria_ui::{PanelSize, PlacementSolver, Viewport, surface_scroll_target};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::Serialize;
use tracing::{error, info, warn};

/// One row of the zone table handed to the rendering layer.
#[derive(Serialize)]
struct ZoneRow {
    zone: Zone,
    icon: &'static str,
    /// Zone end as a fraction of the canvas height.
    end_fraction: f64,
}

/// Complete generated scene, serialized for the renderer.
#[derive(Serialize)]
struct SceneDump {
    seed: u64,
    visual_height: f64,
    zones: Vec<ZoneRow>,
    stars: Vec<Star>,
    clouds: Vec<Cloud>,
    hills: Vec<HillLayer>,
}

fn main() -> ExitCode {
    let args = CliArgs::parse();

    let config_dir = args.config.clone().unwrap_or_else(|| PathBuf::from("."));
    let mut config = match Config::load_or_create(&config_dir) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("could not load config: {err}");
            return ExitCode::FAILURE;
        }
    };
    config.apply_cli_overrides(&args);

    memoria_log::init_logging(None, cfg!(debug_assertions), Some(&config));

    if let Err(err) = config.validate() {
        error!("invalid configuration: {err}");
        return ExitCode::FAILURE;
    }

    let zones = config.zones;
    let mut rng = ChaCha8Rng::seed_from_u64(config.seed);

    let star_field = StarFieldGenerator::new(config.stars.clone()).generate(&mut rng);
    info!(
        "generated {} stars in {} attempts",
        star_field.stars.len(),
        star_field.attempts
    );

    let clouds = CloudFieldGenerator::new(config.clouds.clone()).generate(
        zones.space_limit,
        zones.sky_limit,
        &mut rng,
    );
    info!("generated {} clouds", clouds.len());

    let hills = HillStackGenerator::new(config.hills.clone()).generate(
        zones.sky_limit,
        zones.visual_height - zones.sky_limit,
        &mut rng,
    );
    info!("generated {} hill layers", hills.len());

    // Exercise the UI geometry against a nominal desktop viewport.
    let viewport = Viewport {
        width: 1920.0,
        height: 1080.0,
    };
    let solver = PlacementSolver::new(config.ui.viewport_margin, config.ui.cursor_offset);
    let sample = solver.place(
        1900.0,
        100.0,
        PanelSize {
            width: config.ui.new_panel_width,
            height: config.ui.new_panel_height,
        },
        viewport,
    );
    info!("sample panel placement at right edge: ({}, {})", sample.x, sample.y);

    let scroll_target = surface_scroll_target(
        zones.sky_limit,
        config.ui.surface_scroll_lead,
        zones.visual_height,
        viewport.height,
    );
    info!("intro scroll target: {scroll_target}px");

    let dump = SceneDump {
        seed: config.seed,
        visual_height: zones.visual_height,
        zones: [Zone::Space, Zone::Sky, Zone::Surface, Zone::Roots, Zone::Deep]
            .into_iter()
            .map(|zone| ZoneRow {
                zone,
                icon: zone.default_icon(),
                end_fraction: zones.end_fraction(zone),
            })
            .collect(),
        stars: star_field.stars,
        clouds,
        hills,
    };

    let out_path = args.out.clone().unwrap_or_else(|| PathBuf::from("scene.json"));
    let json = match serde_json::to_string_pretty(&dump) {
        Ok(json) => json,
        Err(err) => {
            error!("could not serialize scene: {err}");
            return ExitCode::FAILURE;
        }
    };
    if let Err(err) = std::fs::write(&out_path, json) {
        error!("could not write {}: {err}", out_path.display());
        return ExitCode::FAILURE;
    }

    if dump.stars.len() < config.stars.star_count as usize {
        warn!("star field fell short of target; consider a lower taper exponent");
    }
    info!("scene written to {}", out_path.display());
    ExitCode::SUCCESS
}
