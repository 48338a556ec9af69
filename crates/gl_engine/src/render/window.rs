//! Window management using GLFW
//!
//! Provides cross-platform window creation with an OpenGL 4.6 core context

use glfw::Context;
use thiserror::Error;

/// Window management errors
#[derive(Error, Debug)]
pub enum WindowError {
    #[error("GLFW initialization failed")]
    InitializationFailed,

    #[error("Window creation failed")]
    CreationFailed,
}

pub type WindowResult<T> = Result<T, WindowError>;

/// Window configuration
#[derive(Debug, Clone)]
pub struct WindowConfig {
    /// Window title
    pub title: String,

    /// Window width
    pub width: u32,

    /// Window height
    pub height: u32,

    /// VSync setting
    pub vsync: bool,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: String::from("Hello Triangle"),
            width: 800,
            height: 480,
            vsync: true,
        }
    }
}

/// GLFW window wrapper with proper resource management
///
/// Creating the window makes its GL context current on the calling thread,
/// which is what the function loader and every later GL call run against.
pub struct Window {
    glfw: glfw::Glfw,
    window: glfw::PWindow,
    _events: glfw::GlfwReceiver<(f64, glfw::WindowEvent)>,
}

impl Window {
    /// Create a window with a current OpenGL 4.6 core profile context
    pub fn new(config: &WindowConfig) -> WindowResult<Self> {
        let mut glfw = glfw::init(glfw::fail_on_errors)
            .map_err(|_| WindowError::InitializationFailed)?;

        // Context setup matches the GL version the wrappers are written against
        glfw.window_hint(glfw::WindowHint::ClientApi(glfw::ClientApiHint::OpenGl));
        glfw.window_hint(glfw::WindowHint::ContextVersion(4, 6));
        glfw.window_hint(glfw::WindowHint::OpenGlProfile(glfw::OpenGlProfileHint::Core));
        glfw.window_hint(glfw::WindowHint::OpenGlForwardCompat(true));
        glfw.window_hint(glfw::WindowHint::OpenGlDebugContext(cfg!(debug_assertions)));
        glfw.window_hint(glfw::WindowHint::SRgbCapable(true));
        glfw.window_hint(glfw::WindowHint::DoubleBuffer(true));
        glfw.window_hint(glfw::WindowHint::Resizable(false));

        // Create window
        let (mut window, events) = glfw
            .create_window(config.width, config.height, &config.title, glfw::WindowMode::Windowed)
            .ok_or(WindowError::CreationFailed)?;

        window.make_current();
        glfw.set_swap_interval(if config.vsync {
            glfw::SwapInterval::Sync(1)
        } else {
            glfw::SwapInterval::None
        });

        log::info!(
            "Created {}x{} window with OpenGL 4.6 core context",
            config.width,
            config.height
        );

        Ok(Self {
            glfw,
            window,
            _events: events,
        })
    }

    pub fn should_close(&self) -> bool {
        self.window.should_close()
    }

    pub fn poll_events(&mut self) {
        self.glfw.poll_events();
    }

    /// Check whether a key is currently held down
    pub fn key_pressed(&self, key: glfw::Key) -> bool {
        self.window.get_key(key) == glfw::Action::Press
    }

    /// Present the back buffer, blocking on vsync when enabled
    pub fn swap_buffers(&mut self) {
        self.window.swap_buffers();
    }

    /// Look up an OpenGL entry point in the window's context
    pub fn get_proc_address(&mut self, procname: &str) -> *const std::ffi::c_void {
        self.window.get_proc_address(procname) as *const _
    }

    pub fn get_size(&self) -> (u32, u32) {
        let (width, height) = self.window.get_size();
        (width as u32, height as u32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_matches_demo_window() {
        let config = WindowConfig::default();

        assert_eq!(config.title, "Hello Triangle");
        assert_eq!(config.width, 800);
        assert_eq!(config.height, 480);
        assert!(config.vsync);
    }
}
