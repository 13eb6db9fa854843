//! Shader program and vertex buffer that draw immediate-mode quads.
//!
//! Core GL and GLES 3 have no fixed-function pipeline, so the texture
//! environment, the current color and the alpha test are uniforms here.
//! Quads are streamed into one small VBO and drawn as a triangle fan.

use bytemuck::{Pod, Zeroable};
use glam::Mat4;
use xash_ref::xref::{Error, Result};
use xash_ref::xref::device::{QuadVertex, TexEnvMode};
use xash_ref::engine_err;

const LOG_SOURCE: &str = "xref::gl";

/// GPU layout of one quad corner
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct GpuVertex {
    pub position: [f32; 2],
    pub uv: [f32; 2],
}

impl From<QuadVertex> for GpuVertex {
    fn from(v: QuadVertex) -> Self {
        Self { position: v.position, uv: v.uv }
    }
}

pub const VERTEX_STRIDE: i32 = std::mem::size_of::<GpuVertex>() as i32;

const VERTEX_BODY: &str = r#"
layout(location = 0) in vec2 a_position;
layout(location = 1) in vec2 a_uv;
uniform mat4 u_mvp;
out vec2 v_uv;
void main() {
    v_uv = a_uv;
    gl_Position = u_mvp * vec4(a_position, 0.0, 1.0);
}
"#;

const FRAGMENT_BODY: &str = r#"
uniform sampler2D u_texture;
uniform vec4 u_color;
uniform int u_textured;
uniform int u_replace;
uniform int u_alpha_test;
uniform float u_alpha_ref;
in vec2 v_uv;
out vec4 frag_color;
void main() {
    vec4 color = u_color;
    if (u_textured != 0) {
        vec4 texel = texture(u_texture, v_uv);
        color = u_replace != 0 ? texel : texel * u_color;
    }
    if (u_alpha_test != 0 && color.a <= u_alpha_ref) {
        discard;
    }
    frag_color = color;
}
"#;

/// `#version` line for the context flavor
pub fn shader_header(gles: bool) -> &'static str {
    if gles {
        "#version 300 es\nprecision mediump float;\n"
    } else {
        "#version 330 core\n"
    }
}

pub fn vertex_source(gles: bool) -> String {
    format!("{}{}", shader_header(gles), VERTEX_BODY)
}

pub fn fragment_source(gles: bool) -> String {
    format!("{}{}", shader_header(gles), FRAGMENT_BODY)
}

/// Prefix each source line with its number, then append the driver log
pub fn format_shader_error(source: &str, log: &str) -> String {
    let lines: Vec<&str> = source.lines().collect();
    let width = lines.len().max(1).to_string().len();
    let numbered = lines
        .iter()
        .enumerate()
        .map(|(i, line)| format!("{:>width$}: {}", i + 1, line, width = width))
        .collect::<Vec<_>>()
        .join("\n");

    match (numbered.is_empty(), log.is_empty()) {
        (true, true) => String::new(),
        (true, false) => log.to_string(),
        (false, true) => numbered,
        (false, false) => format!("{}\n\n{}", numbered, log),
    }
}

/// Per-draw state the shader needs
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QuadUniforms {
    pub mvp: Mat4,
    pub color: [u8; 4],
    pub textured: bool,
    pub tex_env: TexEnvMode,
    pub texture_unit: u32,
    pub alpha_test: bool,
    pub alpha_ref: f32,
}

struct Locations {
    mvp: Option<glow::UniformLocation>,
    texture: Option<glow::UniformLocation>,
    color: Option<glow::UniformLocation>,
    textured: Option<glow::UniformLocation>,
    replace: Option<glow::UniformLocation>,
    alpha_test: Option<glow::UniformLocation>,
    alpha_ref: Option<glow::UniformLocation>,
}

pub struct QuadProgram {
    program: glow::Program,
    vao: glow::VertexArray,
    vbo: glow::Buffer,
    locations: Locations,
}

impl QuadProgram {
    /// Compile the quad shaders and create the streaming vertex buffer.
    ///
    /// # Errors
    ///
    /// `Error::InitializationFailed` with the numbered source and driver log
    /// when a stage fails to compile or the program fails to link.
    #[allow(unsafe_code)]
    pub fn new(gl: &glow::Context, gles: bool) -> Result<Self> {
        use glow::HasContext;

        let vertex = compile_shader(gl, glow::VERTEX_SHADER, &vertex_source(gles))?;
        let fragment = match compile_shader(gl, glow::FRAGMENT_SHADER, &fragment_source(gles)) {
            Ok(shader) => shader,
            Err(e) => {
                // SAFETY: vertex is a valid shader created above.
                unsafe { gl.delete_shader(vertex) };
                return Err(e);
            }
        };

        // SAFETY: both shaders compiled successfully; they are detached and
        // deleted on every path since the program keeps its own copy.
        let program = unsafe {
            let program = gl.create_program().map_err(|e| {
                gl.delete_shader(vertex);
                gl.delete_shader(fragment);
                engine_err!(LOG_SOURCE, "create_program: {}", e)
            })?;
            gl.attach_shader(program, vertex);
            gl.attach_shader(program, fragment);
            gl.link_program(program);
            gl.detach_shader(program, vertex);
            gl.detach_shader(program, fragment);
            gl.delete_shader(vertex);
            gl.delete_shader(fragment);

            if !gl.get_program_link_status(program) {
                let log = gl.get_program_info_log(program);
                gl.delete_program(program);
                return Err(Error::InitializationFailed(format!("quad program link error:\n{}", log)));
            }
            program
        };

        // SAFETY: program is linked; the names queried are declared in the sources.
        let locations = unsafe {
            Locations {
                mvp: gl.get_uniform_location(program, "u_mvp"),
                texture: gl.get_uniform_location(program, "u_texture"),
                color: gl.get_uniform_location(program, "u_color"),
                textured: gl.get_uniform_location(program, "u_textured"),
                replace: gl.get_uniform_location(program, "u_replace"),
                alpha_test: gl.get_uniform_location(program, "u_alpha_test"),
                alpha_ref: gl.get_uniform_location(program, "u_alpha_ref"),
            }
        };

        // SAFETY: the VAO and VBO are fresh objects; attribute layout
        // matches GpuVertex (#[repr(C)], two vec2).
        let (vao, vbo) = unsafe {
            let vao = gl.create_vertex_array().map_err(|e| {
                gl.delete_program(program);
                engine_err!(LOG_SOURCE, "create_vertex_array: {}", e)
            })?;
            let vbo = gl.create_buffer().map_err(|e| {
                gl.delete_vertex_array(vao);
                gl.delete_program(program);
                engine_err!(LOG_SOURCE, "create_buffer: {}", e)
            })?;

            gl.bind_vertex_array(Some(vao));
            gl.bind_buffer(glow::ARRAY_BUFFER, Some(vbo));
            gl.buffer_data_size(glow::ARRAY_BUFFER, VERTEX_STRIDE * 4, glow::STREAM_DRAW);
            gl.enable_vertex_attrib_array(0);
            gl.vertex_attrib_pointer_f32(0, 2, glow::FLOAT, false, VERTEX_STRIDE, 0);
            gl.enable_vertex_attrib_array(1);
            gl.vertex_attrib_pointer_f32(1, 2, glow::FLOAT, false, VERTEX_STRIDE, 8);
            gl.bind_buffer(glow::ARRAY_BUFFER, None);
            gl.bind_vertex_array(None);
            (vao, vbo)
        };

        Ok(Self { program, vao, vbo, locations })
    }

    /// Stream four corners and draw them as a triangle fan
    #[allow(unsafe_code)]
    pub fn draw(&self, gl: &glow::Context, vertices: &[QuadVertex; 4], uniforms: &QuadUniforms) {
        use glow::HasContext;

        let gpu: [GpuVertex; 4] = vertices.map(GpuVertex::from);
        let [r, g, b, a] = uniforms.color.map(|c| c as f32 / 255.0);
        let l = &self.locations;

        // SAFETY: program, VAO and VBO were created in new() and are alive
        // until destroy(); the VBO was sized for exactly four vertices.
        unsafe {
            gl.use_program(Some(self.program));
            gl.uniform_matrix_4_f32_slice(l.mvp.as_ref(), false, &uniforms.mvp.to_cols_array());
            gl.uniform_1_i32(l.texture.as_ref(), uniforms.texture_unit as i32);
            gl.uniform_4_f32(l.color.as_ref(), r, g, b, a);
            gl.uniform_1_i32(l.textured.as_ref(), uniforms.textured as i32);
            gl.uniform_1_i32(l.replace.as_ref(), (uniforms.tex_env == TexEnvMode::Replace) as i32);
            gl.uniform_1_i32(l.alpha_test.as_ref(), uniforms.alpha_test as i32);
            gl.uniform_1_f32(l.alpha_ref.as_ref(), uniforms.alpha_ref);

            gl.bind_vertex_array(Some(self.vao));
            gl.bind_buffer(glow::ARRAY_BUFFER, Some(self.vbo));
            gl.buffer_sub_data_u8_slice(glow::ARRAY_BUFFER, 0, bytemuck::cast_slice(&gpu));
            gl.draw_arrays(glow::TRIANGLE_FAN, 0, 4);
            gl.bind_buffer(glow::ARRAY_BUFFER, None);
            gl.bind_vertex_array(None);
            gl.use_program(None);
        }
    }

    /// Release the program and buffers
    #[allow(unsafe_code)]
    pub fn destroy(&self, gl: &glow::Context) {
        use glow::HasContext;

        // SAFETY: handles were created in new().
        unsafe {
            gl.delete_program(self.program);
            gl.delete_vertex_array(self.vao);
            gl.delete_buffer(self.vbo);
        }
    }
}

#[allow(unsafe_code)]
fn compile_shader(gl: &glow::Context, stage: u32, source: &str) -> Result<glow::Shader> {
    use glow::HasContext;

    let stage_name = if stage == glow::VERTEX_SHADER { "vertex" } else { "fragment" };

    // SAFETY: valid stage constant and source; the shader is deleted on failure.
    unsafe {
        let shader = gl
            .create_shader(stage)
            .map_err(|e| engine_err!(LOG_SOURCE, "create_shader ({}): {}", stage_name, e))?;
        gl.shader_source(shader, source);
        gl.compile_shader(shader);

        if gl.get_shader_compile_status(shader) {
            Ok(shader)
        } else {
            let log = gl.get_shader_info_log(shader);
            gl.delete_shader(shader);
            Err(Error::InitializationFailed(format!(
                "{} shader compile error:\n{}",
                stage_name,
                format_shader_error(source, &log)
            )))
        }
    }
}

#[cfg(test)]
#[path = "gl_quad_program_tests.rs"]
mod tests;
