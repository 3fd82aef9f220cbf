use std::sync::OnceLock;

use macroquad::prelude::*;
use sparse_life::{
    SimConfig, Simulation, presets,
    rendering, input,
};

/// Loaded once in `window_conf`, which runs before `main`
static CONFIG: OnceLock<SimConfig> = OnceLock::new();

fn startup_config() -> &'static SimConfig {
    CONFIG.get_or_init(|| {
        let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).try_init();
        load_config()
    })
}

/// Config comes from the JSON file named by the first argument, if any
fn load_config() -> SimConfig {
    match std::env::args().nth(1) {
        Some(path) => match SimConfig::load(&path) {
            Ok(config) => {
                log::info!("Loaded config from {}", path);
                config
            }
            Err(e) => {
                log::error!("Ignoring config {}: {}", path, e);
                SimConfig::default()
            }
        },
        None => SimConfig::default(),
    }
}

fn window_conf() -> Conf {
    let (window_width, window_height) = startup_config().window_size();
    Conf {
        window_title: "Conway's Game of Life".to_owned(),
        window_width,
        window_height,
        window_resizable: false,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    let mut sim = match Simulation::new(startup_config().clone()) {
        Ok(sim) => sim,
        Err(e) => {
            log::error!("Cannot start simulation: {}", e);
            return;
        }
    };
    let patterns = presets::all_patterns();

    loop {
        // 1. Input
        if !input::process_keyboard_input(&mut sim, &patterns) {
            break;
        }

        // 2-3. Region streaming, then evolution when due
        if let Err(e) = sim.frame() {
            log::error!("Simulation halted: {}", e);
            break;
        }

        // 4. Render (with timing)
        let render_start = std::time::Instant::now();
        clear_background(BLACK);
        rendering::draw_grid_lines(&sim.viewport, sim.config.grid_line_spacing, sim.config.cell_size);
        rendering::draw_cells(&sim);
        let render_ms = render_start.elapsed().as_secs_f32() * 1000.0;
        rendering::draw_stats(&sim, render_ms);

        next_frame().await;
    }
}
