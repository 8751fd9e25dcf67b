mod shader;

pub use self::shader::{Shader, Program, Error};


mod shader_source;
pub use self::shader_source::{ShaderProgramSource, ShaderStage};


mod vertex_buffer;
pub use self::vertex_buffer::VertexBuffer;

mod index_buffer;
pub use self::index_buffer::IndexBuffer;

mod vertex_array;
pub use self::vertex_array::VertexArray;


mod viewport;
pub use self::viewport::Viewport;

mod color_buffer;
pub use self::color_buffer::ColorBuffer;
