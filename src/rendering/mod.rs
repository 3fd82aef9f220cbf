use macroquad::prelude::*;
use crate::application::{Simulation, Viewport};

/// Format large numbers with K/M/B suffixes
fn format_number(n: usize) -> String {
    if n >= 1_000_000_000 {
        format!("{:.1}B", n as f64 / 1_000_000_000.0)
    } else if n >= 1_000_000 {
        format!("{:.1}M", n as f64 / 1_000_000.0)
    } else if n >= 1_000 {
        format!("{:.1}K", n as f64 / 1_000.0)
    } else {
        format!("{}", n)
    }
}

/// Green / yellow / orange / red depending on how long a phase took
fn timing_color(ms: f32, budget_ms: f32) -> Color {
    if ms < budget_ms {
        Color::from_rgba(0, 255, 0, 255)
    } else if ms < budget_ms * 3.0 {
        Color::from_rgba(255, 255, 0, 255)
    } else if ms < budget_ms * 10.0 {
        Color::from_rgba(255, 165, 0, 255)
    } else {
        Color::from_rgba(255, 0, 0, 255)
    }
}

/// Draw the live cells inside the viewport
pub fn draw_cells(sim: &Simulation) {
    let cell_size = sim.config.cell_size;
    let alive_color = WHITE;

    for cell in sim.visible_cells() {
        let (screen_x, screen_y) = sim.viewport.grid_to_screen(cell, cell_size);
        draw_rectangle(screen_x, screen_y, cell_size, cell_size, alive_color);
    }
}

/// Draw grid lines every `spacing` cells, labelled with grid coordinates
pub fn draw_grid_lines(viewport: &Viewport, spacing: i32, cell_size: f32) {
    let line_color = Color::from_rgba(200, 200, 200, 255);
    let label_color = Color::from_rgba(150, 150, 150, 255);
    let width_px = viewport.width as f32 * cell_size;
    let height_px = viewport.height as f32 * cell_size;

    let first_x = (spacing - viewport.x.rem_euclid(spacing)) % spacing;
    for x in (first_x..viewport.width).step_by(spacing as usize) {
        let px = x as f32 * cell_size;
        draw_line(px, 0.0, px, height_px, 1.0, line_color);
        draw_text(&(viewport.x + x).to_string(), px + 2.0, 14.0, 16.0, label_color);
    }

    let first_y = (spacing - viewport.y.rem_euclid(spacing)) % spacing;
    for y in (first_y..viewport.height).step_by(spacing as usize) {
        let py = y as f32 * cell_size;
        draw_line(0.0, py, width_px, py, 1.0, line_color);
        draw_text(&(viewport.y + y).to_string(), 2.0, py + 14.0, 16.0, label_color);
    }
}

/// Draw FPS and simulation stats in the corner
pub fn draw_stats(sim: &Simulation, render_ms: f32) {
    let x = 10.0;
    let background = Color::from_rgba(0, 0, 0, 180);
    draw_rectangle(x - 4.0, 20.0, 230.0, 118.0, background);

    let lines = [
        (format!("FPS: {}", get_fps()), WHITE),
        (
            format!("Live: {} | Gen: {}", format_number(sim.live.len()), sim.generation),
            Color::from_rgba(0, 255, 150, 255),
        ),
        (
            format!(
                "Regions: {} (+{} cooling)",
                sim.regions.tracked_count(),
                sim.regions.cooling_count()
            ),
            GRAY,
        ),
        (
            format!("View: ({}, {})", sim.viewport.x, sim.viewport.y),
            GRAY,
        ),
        (
            format!("{} evolve: {:.1}ms", sim.algorithm.name(), sim.last_evolution_time_ms),
            timing_color(sim.last_evolution_time_ms, 16.0),
        ),
        (
            format!("Regions: {:.1}ms | Render: {:.1}ms", sim.last_region_time_ms, render_ms),
            timing_color(sim.last_region_time_ms.max(render_ms), 5.0),
        ),
        (
            if sim.is_running { "Running".to_string() } else { "Paused".to_string() },
            if sim.is_running {
                Color::from_rgba(0, 255, 0, 255)
            } else {
                Color::from_rgba(255, 165, 0, 255)
            },
        ),
    ];

    lines.iter().enumerate().for_each(|(i, (text, color))| {
        draw_text(text, x, 36.0 + i as f32 * 16.0, 18.0, *color);
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(999), "999");
        assert_eq!(format_number(18_000), "18.0K");
        assert_eq!(format_number(162_000), "162.0K");
        assert_eq!(format_number(2_500_000), "2.5M");
        assert_eq!(format_number(3_000_000_000), "3.0B");
    }
}
