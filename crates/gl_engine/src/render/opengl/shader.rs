//! Shader management and compilation
//!
//! GLSL stage compilation and program linking with driver diagnostics
//! surfaced as error values, following RAII patterns

use std::fmt;

use gl::types::{GLchar, GLenum, GLint, GLsizei, GLuint};

use crate::render::opengl::{GlError, GlResult};

/// Shader pipeline stage
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StageKind {
    /// Vertex stage
    Vertex,
    /// Fragment stage
    Fragment,
}

impl StageKind {
    /// Get the OpenGL enum for this stage
    pub fn gl_enum(self) -> GLenum {
        match self {
            Self::Vertex => gl::VERTEX_SHADER,
            Self::Fragment => gl::FRAGMENT_SHADER,
        }
    }
}

impl fmt::Display for StageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Vertex => write!(f, "vertex"),
            Self::Fragment => write!(f, "fragment"),
        }
    }
}

/// Compiled shader stage with RAII cleanup
pub struct ShaderStage {
    id: GLuint,
}

impl ShaderStage {
    /// Compile a shader stage from GLSL source
    ///
    /// On failure the driver's info log travels in the error; it is never
    /// empty even when the driver reports nothing. A successful compile
    /// with a non-empty log is forwarded as a warning, since drivers put
    /// deprecation and portability notes there.
    pub fn compile(kind: StageKind, source: &str) -> GlResult<Self> {
        let id = unsafe { gl::CreateShader(kind.gl_enum()) };

        // Explicit length, the source does not need a NUL terminator
        let ptr = source.as_ptr().cast::<GLchar>();
        let len = source.len() as GLint;
        unsafe {
            gl::ShaderSource(id, 1, &ptr, &len);
            gl::CompileShader(id);
        }

        let mut status: GLint = 0;
        unsafe {
            gl::GetShaderiv(id, gl::COMPILE_STATUS, &mut status);
        }

        let log = shader_info_log(id);
        if status == GLint::from(gl::FALSE) {
            unsafe {
                gl::DeleteShader(id);
            }
            return Err(GlError::Compile {
                stage: kind,
                log: ensure_diagnostic(log),
            });
        }

        if !log.is_empty() {
            log::warn!("{} shader compiled with messages: {}", kind, log);
        }

        Ok(Self { id })
    }

    /// Get shader handle
    pub fn handle(&self) -> GLuint {
        self.id
    }
}

impl Drop for ShaderStage {
    fn drop(&mut self) {
        unsafe {
            gl::DeleteShader(self.id);
        }
    }
}

/// Linked shader program with RAII cleanup
pub struct ShaderProgram {
    id: GLuint,
}

impl ShaderProgram {
    /// Link a program from compiled vertex and fragment stages
    ///
    /// The stages are consumed; once linked the program carries everything
    /// the driver needs and the stage objects are released.
    pub fn link(vertex: ShaderStage, fragment: ShaderStage) -> GlResult<Self> {
        let id = unsafe { gl::CreateProgram() };

        unsafe {
            gl::AttachShader(id, vertex.handle());
            gl::AttachShader(id, fragment.handle());
            gl::LinkProgram(id);
            gl::DetachShader(id, vertex.handle());
            gl::DetachShader(id, fragment.handle());
        }

        let mut status: GLint = 0;
        unsafe {
            gl::GetProgramiv(id, gl::LINK_STATUS, &mut status);
        }

        let log = program_info_log(id);
        if status == GLint::from(gl::FALSE) {
            unsafe {
                gl::DeleteProgram(id);
            }
            return Err(GlError::Link {
                log: ensure_diagnostic(log),
            });
        }

        if !log.is_empty() {
            log::warn!("Shader program linked with messages: {}", log);
        }

        Ok(Self { id })
    }

    /// Get program handle
    pub fn handle(&self) -> GLuint {
        self.id
    }

    /// Bind the program for drawing
    pub fn bind(&self) {
        unsafe {
            gl::UseProgram(self.id);
        }
    }

    /// Clear the program binding
    pub fn unbind(&self) {
        unsafe {
            gl::UseProgram(0);
        }
    }
}

impl Drop for ShaderProgram {
    fn drop(&mut self) {
        unsafe {
            gl::DeleteProgram(self.id);
        }
    }
}

fn shader_info_log(id: GLuint) -> String {
    let mut len: GLint = 0;
    unsafe {
        gl::GetShaderiv(id, gl::INFO_LOG_LENGTH, &mut len);
    }
    if len <= 1 {
        return String::new();
    }

    let mut buffer = vec![0u8; len as usize];
    let mut written: GLsizei = 0;
    unsafe {
        gl::GetShaderInfoLog(id, len, &mut written, buffer.as_mut_ptr().cast());
    }
    buffer.truncate(written as usize);

    String::from_utf8_lossy(&buffer).trim_end().to_string()
}

fn program_info_log(id: GLuint) -> String {
    let mut len: GLint = 0;
    unsafe {
        gl::GetProgramiv(id, gl::INFO_LOG_LENGTH, &mut len);
    }
    if len <= 1 {
        return String::new();
    }

    let mut buffer = vec![0u8; len as usize];
    let mut written: GLsizei = 0;
    unsafe {
        gl::GetProgramInfoLog(id, len, &mut written, buffer.as_mut_ptr().cast());
    }
    buffer.truncate(written as usize);

    String::from_utf8_lossy(&buffer).trim_end().to_string()
}

fn ensure_diagnostic(log: String) -> String {
    if log.is_empty() {
        String::from("driver returned no info log")
    } else {
        log
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stage_names_render_lowercase() {
        assert_eq!(StageKind::Vertex.to_string(), "vertex");
        assert_eq!(StageKind::Fragment.to_string(), "fragment");
    }

    #[test]
    fn test_stage_gl_mapping() {
        assert_eq!(StageKind::Vertex.gl_enum(), gl::VERTEX_SHADER);
        assert_eq!(StageKind::Fragment.gl_enum(), gl::FRAGMENT_SHADER);
    }

    #[test]
    fn test_compile_error_carries_stage_and_diagnostic() {
        let error = GlError::Compile {
            stage: StageKind::Fragment,
            log: String::from("0:4(2): error: `vColor` undeclared"),
        };

        let rendered = error.to_string();
        assert!(rendered.contains("fragment"));
        assert!(rendered.contains("`vColor` undeclared"));
    }

    #[test]
    fn test_empty_driver_log_gets_placeholder() {
        assert!(!ensure_diagnostic(String::new()).is_empty());
        assert_eq!(ensure_diagnostic(String::from("kept")), "kept");
    }
}
