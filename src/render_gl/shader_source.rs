use gl;
use std::fmt;
use std::str::FromStr;

const MARKER: &str = "#shader";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShaderStage {
    Vertex,
    Fragment,
}

impl ShaderStage {
    pub fn name(&self) -> &'static str {
        match *self {
            ShaderStage::Vertex => "vertex",
            ShaderStage::Fragment => "fragment",
        }
    }

    pub fn gl_kind(&self) -> gl::types::GLenum {
        match *self {
            ShaderStage::Vertex => gl::VERTEX_SHADER,
            ShaderStage::Fragment => gl::FRAGMENT_SHADER,
        }
    }
}

impl fmt::Display for ShaderStage {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ShaderStage {
    type Err = String;

    fn from_str(s: &str) -> Result<ShaderStage, String> {
        match s {
            "vertex" => Ok(ShaderStage::Vertex),
            "fragment" => Ok(ShaderStage::Fragment),
            other => Err(format!("unknown shader stage {:?}", other)),
        }
    }
}

/// Vertex and fragment text split out of a single `.shader` file.
///
/// The file is a sequence of sections, each opened by a marker line such as
/// `#shader vertex`. Every other line is copied into the section of the most
/// recent marker. Lines before the first marker, or after a marker naming an
/// unknown stage, are dropped.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShaderProgramSource {
    pub vertex: String,
    pub fragment: String,
}

impl ShaderProgramSource {
    pub fn parse(text: &str) -> ShaderProgramSource {
        let mut source = ShaderProgramSource::default();
        let mut current: Option<ShaderStage> = None;

        for (number, line) in text.lines().enumerate() {
            let mut tokens = line.split_whitespace();
            if tokens.next() == Some(MARKER) {
                current = match tokens.next() {
                    Some(name) => match name.parse::<ShaderStage>() {
                        Ok(stage) => Some(stage),
                        Err(message) => {
                            warn!("line {}: {}, skipping section", number + 1, message);
                            None
                        }
                    },
                    None => {
                        warn!("line {}: {} marker without a stage", number + 1, MARKER);
                        None
                    }
                };
                continue;
            }

            if let Some(stage) = current {
                let section = source.stage_mut(stage);
                section.push_str(line);
                section.push('\n');
            }
        }

        source
    }

    pub fn stage(&self, stage: ShaderStage) -> &str {
        match stage {
            ShaderStage::Vertex => &self.vertex,
            ShaderStage::Fragment => &self.fragment,
        }
    }

    fn stage_mut(&mut self, stage: ShaderStage) -> &mut String {
        match stage {
            ShaderStage::Vertex => &mut self.vertex,
            ShaderStage::Fragment => &mut self.fragment,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_vertex_and_fragment() {
        let text = "#shader vertex\n\
                    #version 330 core\n\
                    void main() {}\n\
                    #shader fragment\n\
                    #version 330 core\n\
                    out vec4 color;\n";

        let source = ShaderProgramSource::parse(text);
        assert_eq!(source.vertex, "#version 330 core\nvoid main() {}\n");
        assert_eq!(source.fragment, "#version 330 core\nout vec4 color;\n");
    }

    #[test]
    fn keeps_blank_lines_and_indentation() {
        let text = "#shader vertex\n\nvoid main()\n{\n    gl_Position = position;\n}\n";

        let source = ShaderProgramSource::parse(text);
        assert_eq!(source.vertex, "\nvoid main()\n{\n    gl_Position = position;\n}\n");
        assert_eq!(source.fragment, "");
    }

    #[test]
    fn drops_lines_before_first_marker() {
        let text = "// preamble\n#shader fragment\nfrag\n";

        let source = ShaderProgramSource::parse(text);
        assert_eq!(source.vertex, "");
        assert_eq!(source.fragment, "frag\n");
    }

    #[test]
    fn unknown_stage_discards_its_section() {
        let text = "#shader vertex\nv\n#shader geometry\ng\n#shader fragment\nf\n";

        let source = ShaderProgramSource::parse(text);
        assert_eq!(source.vertex, "v\n");
        assert_eq!(source.fragment, "f\n");
    }

    #[test]
    fn bare_marker_discards_its_section() {
        let source = ShaderProgramSource::parse("#shader vertex\nv\n#shader\nlost\n");
        assert_eq!(source.vertex, "v\n");
    }

    #[test]
    fn repeated_stage_accumulates_in_order() {
        let text = "#shader vertex\na\n#shader fragment\nb\n#shader vertex\nc\n";

        let source = ShaderProgramSource::parse(text);
        assert_eq!(source.vertex, "a\nc\n");
        assert_eq!(source.fragment, "b\n");
    }

    #[test]
    fn crlf_input_is_normalized() {
        let source = ShaderProgramSource::parse("#shader vertex\r\nline one\r\nline two\r\n");
        assert_eq!(source.vertex, "line one\nline two\n");
    }

    #[test]
    fn indented_marker_is_recognized() {
        let source = ShaderProgramSource::parse("  #shader   fragment\nf\n");
        assert_eq!(source.fragment, "f\n");
    }

    #[test]
    fn last_line_without_newline_is_terminated() {
        let source = ShaderProgramSource::parse("#shader fragment\nf");
        assert_eq!(source.fragment, "f\n");
    }

    #[test]
    fn empty_input_gives_empty_sections() {
        assert_eq!(ShaderProgramSource::parse(""), ShaderProgramSource::default());
    }

    #[test]
    fn stage_accessor_matches_fields() {
        let source = ShaderProgramSource::parse("#shader vertex\nv\n#shader fragment\nf\n");
        assert_eq!(source.stage(ShaderStage::Vertex), "v\n");
        assert_eq!(source.stage(ShaderStage::Fragment), "f\n");
    }

    #[test]
    fn stage_names_parse_back() {
        for stage in &[ShaderStage::Vertex, ShaderStage::Fragment] {
            assert_eq!(stage.name().parse::<ShaderStage>(), Ok(*stage));
            assert_eq!(stage.to_string(), stage.name());
        }
        assert!("geometry".parse::<ShaderStage>().is_err());
    }

    #[test]
    fn stage_gl_kinds() {
        assert_eq!(ShaderStage::Vertex.gl_kind(), gl::VERTEX_SHADER);
        assert_eq!(ShaderStage::Fragment.gl_kind(), gl::FRAGMENT_SHADER);
    }
}
