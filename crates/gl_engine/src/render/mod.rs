//! # Rendering System
//!
//! Windowing and OpenGL resource management for one-draw-call rendering.
//!
//! The module split follows the data flow of a frame: host-side geometry
//! ([`mesh`]), GPU residency and layout ([`opengl`]), and the surface the
//! finished frames land on ([`window`]).

// Public modules for application use
pub mod mesh;
pub mod opengl;
pub mod window;

pub use mesh::{Mesh, Vertex};
pub use opengl::{GlError, GlResult};
pub use window::{Window, WindowConfig, WindowError};
