use macroquad::prelude::*;
use crate::application::{Direction, Simulation};
use crate::domain::Pattern;

const NAV_KEYS: [(KeyCode, Direction); 4] = [
    (KeyCode::Left, Direction::Left),
    (KeyCode::Right, Direction::Right),
    (KeyCode::Up, Direction::Up),
    (KeyCode::Down, Direction::Down),
];

const PATTERN_KEYS: [KeyCode; 8] = [
    KeyCode::Key1,
    KeyCode::Key2,
    KeyCode::Key3,
    KeyCode::Key4,
    KeyCode::Key5,
    KeyCode::Key6,
    KeyCode::Key7,
    KeyCode::Key8,
];

/// Move the viewport for every arrow key pressed this frame
pub fn handle_navigation(sim: &mut Simulation) {
    NAV_KEYS
        .iter()
        .filter(|(key, _)| is_key_pressed(*key))
        .for_each(|(_, direction)| sim.navigate(*direction));
}

/// Stamp a preset at the viewport center when its digit key is pressed
pub fn handle_pattern_keys(sim: &mut Simulation, patterns: &[Pattern]) {
    for (key, pattern) in PATTERN_KEYS.iter().zip(patterns) {
        if is_key_pressed(*key) {
            let placed = sim.stamp_pattern(pattern);
            log::info!("Stamped {} ({}), {} cells", pattern.name, pattern.description, placed);
        }
    }
}

/// Process keyboard input. Returns false once the user asked to quit.
pub fn process_keyboard_input(sim: &mut Simulation, patterns: &[Pattern]) -> bool {
    handle_navigation(sim);
    handle_pattern_keys(sim, patterns);

    if is_key_pressed(KeyCode::Space) {
        sim.toggle_running();
    }
    // Reset viewport with 'H' (home)
    if is_key_pressed(KeyCode::H) {
        sim.viewport.reset();
    }

    !is_key_pressed(KeyCode::Escape)
}
