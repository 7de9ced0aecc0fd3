//! Standalone entry point for running a scripted scene locally (for testing/demo).

use patto_run::game::demo::game_loop::run_game_loop;

fn main() {
    env_logger::init();
    run_game_loop();
}
