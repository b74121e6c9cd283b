//! Rendering hand-off
//!
//! The simulation describes each frame as draw commands and HUD text; a
//! backend implementing [`Renderer`] decides how to put them on screen.
//! `shapes` tessellates commands into vertex lists for GPU backends.

pub mod frame;
pub mod shapes;
pub mod vertex;

pub use frame::{DrawCommand, Frame, Hud, Renderer, TextAnchor, build_frame};
pub use vertex::Vertex;
