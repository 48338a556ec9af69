//! # GL Engine
//!
//! A small rendering layer over OpenGL 4.6 with GLFW windowing.
//!
//! ## Features
//!
//! - **Window Management**: GLFW window owning a core profile GL context
//! - **GPU Resources**: RAII wrappers for buffers, vertex arrays, and shader programs
//! - **Direct State Access**: Objects are configured by name without disturbing global binds
//! - **Host-Side Validation**: Layout and upload mistakes are caught before they reach the driver
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use gl_engine::render::opengl::{self, VertexBuffer};
//! use gl_engine::render::window::{Window, WindowConfig};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let mut window = Window::new(&WindowConfig::default())?;
//!     opengl::load_functions(|symbol| window.get_proc_address(symbol))?;
//!
//!     let _vertex_buffer = VertexBuffer::new(&[0.0_f32, 0.5, -0.5, -0.5, 0.5, -0.5])?;
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names, clippy::too_many_arguments)]

pub mod render;
