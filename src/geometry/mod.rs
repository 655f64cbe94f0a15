//! Screen-space geometry handed to the render collaborator
//!
//! A fresh vertex list is produced every frame; the collaborator decides how
//! to upload or draw it.

pub mod frame;
pub mod shapes;
pub mod vertex;

pub use frame::FrameGeometry;
pub use vertex::Vertex;
