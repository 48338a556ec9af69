//! Vertex array management for attribute and index buffer setup
//!
//! Wraps a vertex array object configured entirely through direct state
//! access, with a host-side layout record validating every declaration.

use gl::types::{GLboolean, GLint, GLintptr, GLsizei, GLuint};

use crate::render::opengl::buffer::{IndexBuffer, VertexBuffer};
use crate::render::opengl::vertex_layout::{VertexAttribute, VertexBinding, VertexLayout};
use crate::render::opengl::GlResult;

/// Vertex array object wrapper with RAII cleanup
///
/// The array references buffers by handle and does not own them; callers
/// must keep the attached buffers alive for as long as the array is drawn.
pub struct VertexArray {
    id: GLuint,
    layout: VertexLayout,
}

impl VertexArray {
    /// Create a vertex array with an initial vertex buffer binding
    pub fn new(binding: VertexBinding, vertex_buffer: &VertexBuffer) -> Self {
        let mut id: GLuint = 0;
        unsafe {
            gl::CreateVertexArrays(1, &mut id);
        }

        let mut vertex_array = Self {
            id,
            layout: VertexLayout::new(),
        };
        vertex_array.bind_vertex_buffer(binding, vertex_buffer);

        vertex_array
    }

    /// Attach a vertex buffer to a binding point
    ///
    /// Establishes the binding so attributes may reference it. Reusing an
    /// index replaces the previous attachment.
    pub fn bind_vertex_buffer(&mut self, binding: VertexBinding, vertex_buffer: &VertexBuffer) {
        unsafe {
            gl::VertexArrayVertexBuffer(
                self.id,
                binding.index,
                vertex_buffer.handle(),
                binding.offset as GLintptr,
                binding.stride as GLsizei,
            );
        }
        self.layout.add_binding(binding);
    }

    /// Declare a vertex attribute slot
    ///
    /// Fails with [`GlError::InvalidBinding`] when the referenced binding
    /// point has no vertex buffer attached; the array is left untouched.
    ///
    /// [`GlError::InvalidBinding`]: crate::render::opengl::GlError::InvalidBinding
    pub fn add_attribute(&mut self, attribute: VertexAttribute) -> GlResult<()> {
        self.layout.add_attribute(attribute)?;

        unsafe {
            gl::EnableVertexArrayAttrib(self.id, attribute.location);
            gl::VertexArrayAttribFormat(
                self.id,
                attribute.location,
                attribute.components as GLint,
                attribute.component_type.gl_enum(),
                attribute.normalized as GLboolean,
                attribute.offset,
            );
            gl::VertexArrayAttribBinding(self.id, attribute.location, attribute.binding);
        }

        Ok(())
    }

    /// Attach an index buffer for indexed draws
    pub fn set_index_buffer(&mut self, index_buffer: &IndexBuffer) {
        unsafe {
            gl::VertexArrayElementBuffer(self.id, index_buffer.handle());
        }
    }

    /// Get vertex array handle
    pub fn handle(&self) -> GLuint {
        self.id
    }

    /// Get the recorded bindings and attribute slots
    pub fn layout(&self) -> &VertexLayout {
        &self.layout
    }

    /// Bind the vertex array for drawing
    pub fn bind(&self) {
        unsafe {
            gl::BindVertexArray(self.id);
        }
    }

    /// Clear the vertex array binding
    pub fn unbind(&self) {
        unsafe {
            gl::BindVertexArray(0);
        }
    }
}

impl Drop for VertexArray {
    fn drop(&mut self) {
        unsafe {
            gl::DeleteVertexArrays(1, &self.id);
        }
    }
}
