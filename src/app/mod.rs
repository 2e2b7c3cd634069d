//! Application-Layer: Controller, State, Events und Handler.

pub mod command_log;
pub mod controller;
pub mod events;
pub mod handlers;
mod intent_mapping;
pub mod render_scene;
pub mod state;

pub use command_log::CommandLog;
pub use controller::EditorController;
pub use events::{EditorCommand, EditorIntent};
pub use render_scene::{
    build as build_curve_scene, ControlPointSprite, CurveScene, CurveSection, TravellerSprite,
};
pub use state::{EditorState, FrameState, HitTarget, InteractionPhase, SelectionState, TravellerState};
