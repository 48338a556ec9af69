//! Vertex layout descriptions for the OpenGL backend
//!
//! Host-side records of buffer bindings and attribute slots, kept separate
//! from the live vertex array object so layout rules can be checked and
//! inspected without a round trip to the driver.

use gl::types::GLenum;

use crate::render::mesh::Vertex;
use crate::render::opengl::{GlError, GlResult};

/// Component data type of a vertex attribute
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComponentType {
    /// 32-bit IEEE float
    Float,
    /// 8-bit unsigned integer
    UnsignedByte,
    /// 32-bit unsigned integer
    UnsignedInt,
}

impl ComponentType {
    /// Get the OpenGL enum for this component type
    pub fn gl_enum(self) -> GLenum {
        match self {
            Self::Float => gl::FLOAT,
            Self::UnsignedByte => gl::UNSIGNED_BYTE,
            Self::UnsignedInt => gl::UNSIGNED_INT,
        }
    }

    /// Get the size of one component in bytes
    pub fn size(self) -> u32 {
        match self {
            Self::Float | Self::UnsignedInt => 4,
            Self::UnsignedByte => 1,
        }
    }
}

/// Describes how a vertex buffer attaches to a vertex array binding point
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VertexBinding {
    /// Binding point index
    pub index: u32,

    /// Byte offset of the first vertex in the buffer
    pub offset: u32,

    /// Byte stride between consecutive vertices
    pub stride: u32,
}

/// Describes one vertex attribute slot
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VertexAttribute {
    /// Shader input location
    pub location: u32,

    /// Binding point the attribute reads its data from
    pub binding: u32,

    /// Number of components, 1 through 4
    pub components: u32,

    /// Data type of each component
    pub component_type: ComponentType,

    /// Whether integer data is normalized into [0, 1]
    pub normalized: bool,

    /// Byte offset of the attribute within a vertex
    pub offset: u32,
}

/// Record of a vertex array's established bindings and declared attributes
///
/// Attribute slots are independent: each declaration names its own binding,
/// component layout, and offset, so declaration order carries no meaning.
/// Redeclaring a slot or rebinding an index replaces the previous entry.
#[derive(Debug, Default, Clone)]
pub struct VertexLayout {
    bindings: Vec<VertexBinding>,
    attributes: Vec<VertexAttribute>,
}

impl VertexLayout {
    /// Create an empty layout
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a vertex buffer binding
    pub fn add_binding(&mut self, binding: VertexBinding) {
        if let Some(existing) = self.bindings.iter_mut().find(|b| b.index == binding.index) {
            *existing = binding;
        } else {
            self.bindings.push(binding);
        }
    }

    /// Record an attribute slot
    ///
    /// Fails with [`GlError::InvalidBinding`] when the referenced binding
    /// point was never established; nothing is recorded in that case.
    pub fn add_attribute(&mut self, attribute: VertexAttribute) -> GlResult<()> {
        if self.binding(attribute.binding).is_none() {
            return Err(GlError::InvalidBinding {
                binding: attribute.binding,
            });
        }

        if let Some(existing) = self
            .attributes
            .iter_mut()
            .find(|a| a.location == attribute.location)
        {
            *existing = attribute;
        } else {
            self.attributes.push(attribute);
        }

        Ok(())
    }

    /// Look up an established binding by index
    pub fn binding(&self, index: u32) -> Option<&VertexBinding> {
        self.bindings.iter().find(|b| b.index == index)
    }

    /// Look up a declared attribute by shader location
    pub fn attribute(&self, location: u32) -> Option<&VertexAttribute> {
        self.attributes.iter().find(|a| a.location == location)
    }

    /// Get all established bindings
    pub fn bindings(&self) -> &[VertexBinding] {
        &self.bindings
    }

    /// Get all declared attribute slots
    pub fn attributes(&self) -> &[VertexAttribute] {
        &self.attributes
    }
}

/// OpenGL vertex layout implementation for the engine's Vertex type
pub struct GlVertexLayout;

impl GlVertexLayout {
    /// Get the vertex buffer binding description for Vertex
    ///
    /// The binding describes the stride between consecutive vertices and
    /// where in the buffer the first vertex starts.
    pub fn binding_description(index: u32) -> VertexBinding {
        VertexBinding {
            index,
            offset: 0,
            stride: std::mem::size_of::<Vertex>() as u32,
        }
    }

    /// Get the vertex attribute descriptions for Vertex
    ///
    /// This describes the layout of the individual attributes (position,
    /// color) within the vertex structure for shader input.
    pub fn attribute_descriptions(binding: u32) -> [VertexAttribute; 2] {
        [
            // Position attribute (location = 0)
            VertexAttribute {
                location: 0,
                binding,
                components: 2,
                component_type: ComponentType::Float,
                normalized: false,
                offset: 0, // Start of struct
            },
            // Color attribute (location = 1)
            VertexAttribute {
                location: 1,
                binding,
                components: 3,
                component_type: ComponentType::Float,
                normalized: false,
                offset: 8, // 2 * sizeof(f32) after position
            },
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_binding() -> VertexBinding {
        VertexBinding {
            index: 0,
            offset: 0,
            stride: 20,
        }
    }

    fn position_attribute(binding: u32) -> VertexAttribute {
        VertexAttribute {
            location: 0,
            binding,
            components: 2,
            component_type: ComponentType::Float,
            normalized: false,
            offset: 0,
        }
    }

    #[test]
    fn test_attribute_requires_established_binding() {
        let mut layout = VertexLayout::new();

        let result = layout.add_attribute(position_attribute(0));

        assert!(matches!(result, Err(GlError::InvalidBinding { binding: 0 })));
        assert!(layout.attributes().is_empty());
    }

    #[test]
    fn test_failed_attribute_does_not_create_binding() {
        let mut layout = VertexLayout::new();

        let _ = layout.add_attribute(position_attribute(3));

        assert!(layout.binding(3).is_none());
        assert!(layout.bindings().is_empty());
    }

    #[test]
    fn test_interleaved_two_slot_layout() {
        let mut layout = VertexLayout::new();
        layout.add_binding(base_binding());

        // Declare color before position; slots do not depend on call order
        layout
            .add_attribute(VertexAttribute {
                location: 1,
                binding: 0,
                components: 3,
                component_type: ComponentType::Float,
                normalized: false,
                offset: 8,
            })
            .unwrap();
        layout.add_attribute(position_attribute(0)).unwrap();

        let position = layout.attribute(0).unwrap();
        assert_eq!(position.components, 2);
        assert_eq!(position.offset, 0);

        let color = layout.attribute(1).unwrap();
        assert_eq!(color.components, 3);
        assert_eq!(color.offset, 8);

        assert_eq!(layout.binding(0).unwrap().stride, 20);
    }

    #[test]
    fn test_redeclaring_a_slot_replaces_it() {
        let mut layout = VertexLayout::new();
        layout.add_binding(base_binding());
        layout.add_attribute(position_attribute(0)).unwrap();

        let replacement = VertexAttribute {
            components: 4,
            ..position_attribute(0)
        };
        layout.add_attribute(replacement).unwrap();

        assert_eq!(layout.attributes().len(), 1);
        assert_eq!(layout.attribute(0).unwrap().components, 4);
    }

    #[test]
    fn test_rebinding_an_index_replaces_it() {
        let mut layout = VertexLayout::new();
        layout.add_binding(base_binding());
        layout.add_binding(VertexBinding {
            index: 0,
            offset: 0,
            stride: 32,
        });

        assert_eq!(layout.bindings().len(), 1);
        assert_eq!(layout.binding(0).unwrap().stride, 32);
    }

    #[test]
    fn test_vertex_descriptions_match_vertex_struct() {
        let binding = GlVertexLayout::binding_description(0);
        assert_eq!(binding.index, 0);
        assert_eq!(binding.offset, 0);
        assert_eq!(binding.stride, 20);

        let [position, color] = GlVertexLayout::attribute_descriptions(0);
        assert_eq!(position.location, 0);
        assert_eq!(position.components, 2);
        assert_eq!(position.offset, 0);
        assert_eq!(color.location, 1);
        assert_eq!(color.components, 3);
        assert_eq!(color.offset, 8);
        assert_eq!(color.component_type, ComponentType::Float);
    }

    #[test]
    fn test_component_type_gl_mapping() {
        assert_eq!(ComponentType::Float.gl_enum(), gl::FLOAT);
        assert_eq!(ComponentType::UnsignedByte.gl_enum(), gl::UNSIGNED_BYTE);
        assert_eq!(ComponentType::UnsignedInt.gl_enum(), gl::UNSIGNED_INT);

        assert_eq!(ComponentType::Float.size(), 4);
        assert_eq!(ComponentType::UnsignedByte.size(), 1);
        assert_eq!(ComponentType::UnsignedInt.size(), 4);
    }
}
