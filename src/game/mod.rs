pub mod types;
pub mod state;
pub mod controller;
pub mod host;
pub mod scene;
pub mod systems;
pub mod demo;

pub use controller::GameLoopController;
pub use host::{Host, ScriptedFrame, ScriptedHost};
pub use scene::Scene;
pub use state::{ControllerState, Phase};
