//! Kern-Datenmodell: DragPoints, ControlPoints und das CurveModel.

mod control_point;
mod curve_model;
mod drag_point;

pub use control_point::{ControlId, ControlPoint, SCREEN_RADIUS};
pub use curve_model::CurveModel;
pub use drag_point::{DragPoint, FlipAxis};
