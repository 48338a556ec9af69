//! Hello triangle demo application
//!
//! Opens a window with an OpenGL 4.6 core context and draws one static
//! indexed triangle per frame until the window is closed or Escape is
//! pressed.

use gl_engine::render::opengl::{
    self, GlVertexLayout, IndexBuffer, ShaderProgram, ShaderStage, StageKind, VertexArray,
    VertexBuffer,
};
use gl_engine::render::{Mesh, Window, WindowConfig};

const VERTEX_SHADER: &str = include_str!("shaders/triangle.vert");
const FRAGMENT_SHADER: &str = include_str!("shaders/triangle.frag");

/// Background color for every frame
const CLEAR_COLOR: [f32; 4] = [1.0, 1.0, 1.0, 1.0];

struct TriangleApp {
    program: ShaderProgram,
    vertex_array: VertexArray,
    _vertex_buffer: VertexBuffer,
    index_buffer: IndexBuffer,
    // Dropped last so the GL context outlives every GL object above
    window: Window,
}

impl TriangleApp {
    fn new() -> Result<Self, Box<dyn std::error::Error>> {
        let config = WindowConfig::default();
        let mut window = Window::new(&config)?;

        opengl::load_functions(|symbol| window.get_proc_address(symbol))?;
        if cfg!(debug_assertions) {
            opengl::enable_debug_output();
        }

        let mesh = Mesh::triangle();
        let vertex_buffer = VertexBuffer::new(&mesh.vertices)?;
        let index_buffer = IndexBuffer::new(&mesh.indices)?;

        let mut vertex_array =
            VertexArray::new(GlVertexLayout::binding_description(0), &vertex_buffer);
        for attribute in GlVertexLayout::attribute_descriptions(0) {
            vertex_array.add_attribute(attribute)?;
        }
        vertex_array.set_index_buffer(&index_buffer);

        let vertex_stage = ShaderStage::compile(StageKind::Vertex, VERTEX_SHADER)?;
        let fragment_stage = ShaderStage::compile(StageKind::Fragment, FRAGMENT_SHADER)?;
        let program = ShaderProgram::link(vertex_stage, fragment_stage)?;

        log::info!("Triangle resources ready");

        Ok(Self {
            program,
            vertex_array,
            _vertex_buffer: vertex_buffer,
            index_buffer,
            window,
        })
    }

    fn run(&mut self) {
        log::info!("Entering frame loop");

        loop {
            self.window.poll_events();

            opengl::clear(CLEAR_COLOR);

            self.vertex_array.bind();
            self.program.bind();
            opengl::draw_indexed(self.index_buffer.index_count());
            self.program.unbind();
            self.vertex_array.unbind();

            self.window.swap_buffers();

            // Exit is decided only after the frame in flight completes
            if self.window.should_close() || self.window.key_pressed(glfw::Key::Escape) {
                break;
            }
        }

        log::info!("Frame loop finished");
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    log::info!("Starting hello triangle demo");

    let mut app = match TriangleApp::new() {
        Ok(app) => app,
        Err(e) => {
            log::error!("Demo setup failed: {}", e);
            return Err(e);
        }
    };
    app.run();

    log::info!("Hello triangle demo completed successfully");
    Ok(())
}
