use shape::ShapeKind;

/// Window and scene settings for the demo.
#[derive(Debug, Clone)]
pub struct Config {
    pub title: String,
    pub width: u32,
    pub height: u32,
    pub gl_version: (u8, u8),
    /// Resource name of the `.shader` file, without the extension.
    pub shader: String,
    pub shape: ShapeKind,
    pub shape_color: [f32; 4],
    pub clear_color: [f32; 4],
}

impl Default for Config {
    fn default() -> Config {
        Config {
            title: "Hello World".into(),
            width: 640,
            height: 480,
            gl_version: (3, 3),
            shader: "shaders/basic".into(),
            shape: ShapeKind::Square,
            shape_color: [0.05, 0.75, 0.45, 1.0],
            clear_color: [0.0, 0.0, 0.0, 1.0],
        }
    }
}
