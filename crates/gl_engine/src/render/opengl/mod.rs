//! OpenGL rendering backend
//!
//! Direct-state-access wrappers over a loaded GL 4.6 core context following
//! the resource ownership rules used across the render module: every GPU
//! object is owned by exactly one RAII wrapper, and anything that can be
//! validated host-side fails before the driver is involved.

use std::ffi::CStr;

use gl::types::{GLchar, GLenum, GLint, GLsizei, GLuint};
use thiserror::Error;

pub mod buffer;
pub mod shader;
pub mod vertex_array;
pub mod vertex_layout;

pub use buffer::{Buffer, IndexBuffer, VertexBuffer};
pub use shader::{ShaderProgram, ShaderStage, StageKind};
pub use vertex_array::VertexArray;
pub use vertex_layout::{
    ComponentType, GlVertexLayout, VertexAttribute, VertexBinding, VertexLayout,
};

/// OpenGL backend errors
#[derive(Error, Debug)]
pub enum GlError {
    /// A required GL function was not resolved by the context's loader
    #[error("Missing OpenGL entry point: {name}")]
    MissingEntryPoint {
        /// Name of the unresolved GL function
        name: &'static str,
    },

    /// A buffer upload was attempted with no data
    #[error("Buffer data is empty")]
    EmptyBufferData,

    /// An attribute referenced a binding point with no vertex buffer attached
    #[error("No vertex buffer bound at binding {binding}")]
    InvalidBinding {
        /// The binding point index the attribute referenced
        binding: u32,
    },

    /// Shader stage compilation failed
    #[error("Shader compilation failed ({stage}): {log}")]
    Compile {
        /// The pipeline stage that failed to compile
        stage: StageKind,
        /// Driver diagnostic text, never empty
        log: String,
    },

    /// Shader program linking failed
    #[error("Shader program linking failed: {log}")]
    Link {
        /// Driver diagnostic text, never empty
        log: String,
    },
}

/// Result type for OpenGL operations
pub type GlResult<T> = Result<T, GlError>;

/// Resolve GL entry points through the context's loader
///
/// Must run after the context is made current. Verifies that the direct
/// state access functions the wrappers depend on were actually resolved,
/// so a context below 4.5 fails here instead of crashing mid-setup.
pub fn load_functions<F>(mut loader: F) -> GlResult<()>
where
    F: FnMut(&str) -> *const std::ffi::c_void,
{
    gl::load_with(|symbol| loader(symbol));

    let required = [
        ("glCreateBuffers", gl::CreateBuffers::is_loaded()),
        ("glNamedBufferStorage", gl::NamedBufferStorage::is_loaded()),
        ("glCreateVertexArrays", gl::CreateVertexArrays::is_loaded()),
        ("glVertexArrayVertexBuffer", gl::VertexArrayVertexBuffer::is_loaded()),
        ("glVertexArrayAttribFormat", gl::VertexArrayAttribFormat::is_loaded()),
        ("glVertexArrayElementBuffer", gl::VertexArrayElementBuffer::is_loaded()),
        ("glCreateShader", gl::CreateShader::is_loaded()),
        ("glCreateProgram", gl::CreateProgram::is_loaded()),
        ("glDrawElements", gl::DrawElements::is_loaded()),
    ];
    for (name, loaded) in required {
        if !loaded {
            return Err(GlError::MissingEntryPoint { name });
        }
    }

    log::info!("OpenGL {} on {}", context_string(gl::VERSION), context_string(gl::RENDERER));

    Ok(())
}

/// Route driver debug messages into the log
///
/// No-op when the context was not created with the debug flag. Messages are
/// delivered synchronously so a breakpoint in the log call sits on the
/// offending GL call.
pub fn enable_debug_output() {
    if !gl::DebugMessageCallback::is_loaded() {
        return;
    }

    let mut flags: GLint = 0;
    unsafe {
        gl::GetIntegerv(gl::CONTEXT_FLAGS, &mut flags);
    }
    if flags & (gl::CONTEXT_FLAG_DEBUG_BIT as GLint) == 0 {
        log::debug!("Context has no debug flag, driver messages stay disabled");
        return;
    }

    unsafe {
        gl::Enable(gl::DEBUG_OUTPUT);
        gl::Enable(gl::DEBUG_OUTPUT_SYNCHRONOUS);
        gl::DebugMessageCallback(Some(debug_message_callback), std::ptr::null());
    }

    log::info!("OpenGL debug output enabled");
}

/// Clear the color buffer to the given RGBA color
pub fn clear(color: [f32; 4]) {
    unsafe {
        gl::ClearColor(color[0], color[1], color[2], color[3]);
        gl::Clear(gl::COLOR_BUFFER_BIT);
    }
}

/// Draw a triangle list from the bound vertex array's index buffer
pub fn draw_indexed(index_count: u32) {
    unsafe {
        gl::DrawElements(
            gl::TRIANGLES,
            index_count as GLsizei,
            gl::UNSIGNED_INT,
            std::ptr::null(),
        );
    }
}

fn context_string(name: GLenum) -> String {
    let ptr = unsafe { gl::GetString(name) };
    if ptr.is_null() {
        return String::from("unknown");
    }

    unsafe { CStr::from_ptr(ptr.cast()) }
        .to_string_lossy()
        .into_owned()
}

extern "system" fn debug_message_callback(
    source: GLenum,
    _gltype: GLenum,
    id: GLuint,
    severity: GLenum,
    _length: GLsizei,
    message: *const GLchar,
    _user_param: *mut std::os::raw::c_void,
) {
    let message = if message.is_null() {
        std::borrow::Cow::from("<no message>")
    } else {
        unsafe { CStr::from_ptr(message) }.to_string_lossy()
    };

    let source = match source {
        gl::DEBUG_SOURCE_API => "api",
        gl::DEBUG_SOURCE_WINDOW_SYSTEM => "window system",
        gl::DEBUG_SOURCE_SHADER_COMPILER => "shader compiler",
        gl::DEBUG_SOURCE_THIRD_PARTY => "third party",
        gl::DEBUG_SOURCE_APPLICATION => "application",
        _ => "other",
    };

    match severity {
        gl::DEBUG_SEVERITY_HIGH => log::error!("GL {} [{}]: {}", source, id, message),
        gl::DEBUG_SEVERITY_MEDIUM => log::warn!("GL {} [{}]: {}", source, id, message),
        gl::DEBUG_SEVERITY_LOW => log::info!("GL {} [{}]: {}", source, id, message),
        _ => log::debug!("GL {} [{}]: {}", source, id, message),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages_name_the_failure() {
        let missing = GlError::MissingEntryPoint {
            name: "glCreateBuffers",
        };
        assert!(missing.to_string().contains("glCreateBuffers"));

        let binding = GlError::InvalidBinding { binding: 2 };
        assert!(binding.to_string().contains("binding 2"));
    }
}
