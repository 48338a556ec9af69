//! Buffer management for vertex and index data
//!
//! GPU memory following RAII patterns. Storage is allocated once at creation
//! from host data and keeps that exact size for the buffer's lifetime.

use gl::types::{GLsizeiptr, GLuint};

use crate::render::opengl::{GlError, GlResult};

/// GPU buffer with immutable storage
///
/// Created through `glNamedBufferStorage` with no storage flags, so the
/// contents are fixed at upload time and the object never rebinds any
/// global buffer target.
pub struct Buffer {
    id: GLuint,
    size: usize,
}

impl Buffer {
    /// Create a buffer whose storage is fixed to the given bytes
    ///
    /// Fails with [`GlError::EmptyBufferData`] before any GL call when
    /// `data` is empty; zero-size storage is never allocated.
    pub fn with_data(data: &[u8]) -> GlResult<Self> {
        if data.is_empty() {
            return Err(GlError::EmptyBufferData);
        }

        let mut id: GLuint = 0;
        unsafe {
            gl::CreateBuffers(1, &mut id);
            gl::NamedBufferStorage(id, data.len() as GLsizeiptr, data.as_ptr().cast(), 0);
        }

        Ok(Self {
            id,
            size: data.len(),
        })
    }

    /// Create a buffer from a slice of plain-old-data values
    pub fn from_slice<T: bytemuck::Pod>(data: &[T]) -> GlResult<Self> {
        Self::with_data(bytemuck::cast_slice(data))
    }

    /// Get buffer handle
    pub fn handle(&self) -> GLuint {
        self.id
    }

    /// Get size in bytes, exactly the length of the uploaded data
    pub fn size(&self) -> usize {
        self.size
    }
}

impl Drop for Buffer {
    fn drop(&mut self) {
        unsafe {
            gl::DeleteBuffers(1, &self.id);
        }
    }
}

/// Vertex buffer specifically for vertex data
pub struct VertexBuffer {
    buffer: Buffer,
}

impl VertexBuffer {
    /// Create vertex buffer with vertex data
    pub fn new<T: bytemuck::Pod>(vertices: &[T]) -> GlResult<Self> {
        let buffer = Buffer::from_slice(vertices)?;

        Ok(Self { buffer })
    }

    /// Get buffer handle
    pub fn handle(&self) -> GLuint {
        self.buffer.handle()
    }

    /// Get size in bytes
    pub fn size(&self) -> usize {
        self.buffer.size()
    }
}

/// Index buffer for index data
pub struct IndexBuffer {
    buffer: Buffer,
    index_count: u32,
}

impl IndexBuffer {
    /// Create index buffer with index data
    pub fn new(indices: &[u32]) -> GlResult<Self> {
        let buffer = Buffer::from_slice(indices)?;

        Ok(Self {
            buffer,
            index_count: indices.len() as u32,
        })
    }

    /// Get buffer handle
    pub fn handle(&self) -> GLuint {
        self.buffer.handle()
    }

    /// Get index count
    pub fn index_count(&self) -> u32 {
        self.index_count
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_upload_is_rejected() {
        let result = Buffer::with_data(&[]);

        assert!(matches!(result, Err(GlError::EmptyBufferData)));
    }

    #[test]
    fn test_empty_typed_slices_are_rejected() {
        assert!(matches!(
            Buffer::from_slice::<f32>(&[]),
            Err(GlError::EmptyBufferData)
        ));
        assert!(matches!(
            VertexBuffer::new::<f32>(&[]),
            Err(GlError::EmptyBufferData)
        ));
        assert!(matches!(IndexBuffer::new(&[]), Err(GlError::EmptyBufferData)));
    }
}
