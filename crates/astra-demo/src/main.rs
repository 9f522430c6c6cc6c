//! Headless demo driving the viewer core end to end.
//!
//! Loads a catalog (a JSON file via `--catalog`, or a built-in sample),
//! classifies it into a scene session, exercises the filter, selection,
//! camera, and per-frame operations the rendering shell would invoke,
//! prints the glossary, and generates a detail-view terrain mesh for the
//! focused body.
//!
//! Run with `cargo run -p astra-demo -- --filter gas_giants --body Jupiter`.

use clap::Parser;
use tracing::info;

use astra_catalog::Catalog;
use astra_config::{CliArgs, Config};
use astra_input::{KeyboardState, PanInput, RawKeyEvent};
use astra_scene::{SceneSession, VisibilityFilter};
use astra_terrain::{BandingParams, DetailSpin};
use winit::event::ElementState;
use winit::keyboard::{KeyCode, PhysicalKey};

/// Small bundled catalog so the demo runs without any input file.
const SAMPLE_CATALOG: &str = r#"[
    {"name": "Sun", "vol_mean_radius_km": 695700.0, "x": 0.0, "y": 0.0, "z": 0.0},
    {"name": "Mercury", "target_primary": "Sun", "vol_mean_radius_km": 2439.7,
     "mass_kg": 3.30e23, "x": 0.39, "y": 0.0, "z": 0.0},
    {"name": "Earth", "target_primary": "Sun", "vol_mean_radius_km": 6371.0,
     "mass_kg": 5.97e24, "atmosphere_mass_kg": 5.1e15, "x": 1.0, "y": 0.0, "z": 0.0},
    {"name": "Moon", "target_primary": "Earth", "vol_mean_radius_km": 1737.4,
     "x": 1.0026, "y": 0.0, "z": 0.0},
    {"name": "Jupiter", "target_primary": "Sun", "vol_mean_radius_km": 69911.0,
     "mass_kg": 1.898e27, "atmosphere_mass_kg": 1.9e27, "x": 5.2, "y": 0.0, "z": 0.0},
    {"name": "Ceres", "semi_major_axis_au": 2.77, "eccentricity": 0.08,
     "vol_mean_radius_km": 470.0, "x": 2.77, "y": 0.3, "z": 0.1},
    {"name": "Halley", "semi_major_axis_au": 17.8, "eccentricity": 0.97,
     "vol_mean_radius_km": 5.5, "orbital_period_days": 27510.0,
     "x": 17.8, "y": 3.0, "z": 1.0},
    {"name": "Sedna", "semi_major_axis_au": 506.0, "eccentricity": 0.85,
     "vol_mean_radius_km": 500.0}
]"#;

/// Number of simulated pan frames.
const PAN_FRAMES: u32 = 30;

fn main() -> std::process::ExitCode {
    match run() {
        Ok(()) => std::process::ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            std::process::ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let args = CliArgs::parse();

    let mut config = match args.config.clone().or_else(Config::default_dir) {
        Some(dir) => Config::load_or_create(&dir).unwrap_or_default(),
        None => Config::default(),
    };
    config.apply_cli_overrides(&args);
    astra_log::init_logging(None, cfg!(debug_assertions), Some(&config));

    let json = match &args.catalog {
        Some(path) => std::fs::read_to_string(path)?,
        None => SAMPLE_CATALOG.to_string(),
    };
    let catalog = Catalog::from_json_str(&json)?;

    let mut session = SceneSession::new();
    session.load_catalog(&catalog.bodies);

    if let Some(filter) = &args.filter {
        session.set_visibility_filter(VisibilityFilter::from_name(filter));
    }
    info!(
        filter = ?session.visibility_filter(),
        visible = session.visible_bodies().count(),
        "scene ready"
    );

    println!("glossary:");
    for entry in session.glossary("") {
        println!("  {:<12} {}", entry.name, entry.category.label());
    }

    // Drive the planar camera the way the shell would: forward key events,
    // snapshot the pan intent, tick once per frame.
    let mut keyboard = KeyboardState::new();
    keyboard.process_raw(RawKeyEvent {
        key: PhysicalKey::Code(KeyCode::KeyD),
        state: ElementState::Pressed,
        repeat: false,
    });
    for _ in 0..PAN_FRAMES {
        let input = PanInput::from_keyboard(&keyboard);
        session.tick(&input);
        keyboard.clear_transients();
    }
    info!(pose = ?session.pose(), "panned for {PAN_FRAMES} frames");

    // Toggle labels on the L key's press edge, the way the shell does.
    keyboard.process_raw(RawKeyEvent {
        key: PhysicalKey::Code(KeyCode::KeyL),
        state: ElementState::Pressed,
        repeat: false,
    });
    if keyboard.just_pressed(PhysicalKey::Code(KeyCode::KeyL)) {
        session.set_labels_visible(!session.labels_visible());
    }
    keyboard.clear_transients();
    info!(labels = session.labels_visible(), "labels toggled");

    // Mode round trip: the free camera gets its default vantage, and the
    // panned planar pose is waiting on the way back.
    session.toggle_camera_mode();
    info!(mode = ?session.mode(), pose = ?session.pose(), "switched to free orbit");
    session.toggle_camera_mode();
    info!(mode = ?session.mode(), pose = ?session.pose(), "restored planar pose");

    // Open the detail view for the requested (or first visible) body.
    let focus = args
        .body
        .clone()
        .or_else(|| session.visible_bodies().nth(1).map(|b| b.name.clone()));
    let Some(focus) = focus else {
        info!("no body to focus; done");
        return Ok(());
    };
    session.select_body(Some(&focus));
    let Some(body) = session.bodies().iter().find(|b| b.name == focus) else {
        info!(body = %focus, "unknown body; focus cleared");
        return Ok(());
    };

    let mesh = astra_terrain::generate(body.scaled_radius as f32, config.terrain.resolution, None)?;
    let banding = BandingParams {
        line_count: config.terrain.topographic_lines,
        line_width: config.terrain.line_width,
        ..Default::default()
    };
    let contour_vertices = mesh.heights.iter().filter(|&&h| banding.on_line(h)).count();

    let spin = DetailSpin::default();
    println!("terrain for {}:", body.name);
    println!("  vertices:  {}", mesh.vertex_count());
    println!("  triangles: {}", mesh.triangle_count());
    println!("  on contour lines: {contour_vertices}");
    println!("  spin after 600 frames: {:.3} rad", spin.angle_after(600));
    info!(body = %focus, resolution = config.terrain.resolution, "detail view generated");

    Ok(())
}
