//! Presentation module
//!
//! Turns committed game state into a [`Frame`] and, for GPU front-ends, a
//! flat list of colored triangles. No graphics API lives here.

pub mod frame;
pub mod shapes;
pub mod vertex;

pub use frame::{Frame, Label};
pub use shapes::frame_vertices;
pub use vertex::Vertex;
