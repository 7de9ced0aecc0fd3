// Demo module for the game. Provides a scripted headless run of a scene and
// the terminal output used to follow it.
pub mod game_loop;
pub mod render;
