//=========================================================================
// Shader Source Preprocessor
//=========================================================================
//
// Splits a single GLSL file into per-stage sources.
//
// Stages are introduced by a directive line:
//
// ```text
// #type vertex
// ...vertex code...
// #type fragment
// ...fragment code...
// ```
//
// Each body starts at the first character after the directive's line
// terminator(s) and runs up to the next directive or end of file. A later
// directive for the same stage replaces the earlier body.
//
//=========================================================================

//=== Standard Library Imports ============================================

use std::collections::HashMap;
use std::fmt;
use std::path::Path;

//=== External Crates =====================================================

use log::debug;

//=== Constants ===========================================================

const TYPE_TOKEN: &str = "#type";
const LINE_TERMINATORS: &[char] = &['\r', '\n'];

//=== ShaderStage =========================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShaderStage {
    Vertex,
    Fragment,
}

impl ShaderStage {
    /// Parses the stage name used in `#type` directives.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "vertex" => Some(Self::Vertex),
            "fragment" => Some(Self::Fragment),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Vertex => "vertex",
            Self::Fragment => "fragment",
        }
    }
}

impl fmt::Display for ShaderStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

//=== ShaderSourceError ===================================================

#[derive(Debug)]
pub enum ShaderSourceError {
    /// A `#type` directive at this byte offset is not followed by a line
    /// terminator.
    MissingLineTerminator { offset: usize },

    /// The directive names a stage that is not `vertex` or `fragment`.
    UnknownStage(String),

    /// A directive at this byte offset is followed by nothing but line
    /// terminators.
    MissingBody { offset: usize },

    /// Reading the shader file failed.
    Io(std::io::Error),
}

impl fmt::Display for ShaderSourceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingLineTerminator { offset } => {
                write!(f, "Syntax error: #type directive at byte {} has no line end", offset)
            }
            Self::UnknownStage(name) => write!(f, "Unknown shader type '{}'", name),
            Self::MissingBody { offset } => {
                write!(f, "Syntax error: #type directive at byte {} has no body", offset)
            }
            Self::Io(e) => write!(f, "Failed to read shader source: {}", e),
        }
    }
}

impl std::error::Error for ShaderSourceError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for ShaderSourceError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

//=== ShaderSources =======================================================

/// Per-stage source text extracted from one file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShaderSources {
    stages: HashMap<ShaderStage, String>,
}

impl ShaderSources {
    pub fn get(&self, stage: ShaderStage) -> Option<&str> {
        self.stages.get(&stage).map(String::as_str)
    }

    pub fn vertex(&self) -> Option<&str> {
        self.get(ShaderStage::Vertex)
    }

    pub fn fragment(&self) -> Option<&str> {
        self.get(ShaderStage::Fragment)
    }

    pub fn len(&self) -> usize {
        self.stages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stages.is_empty()
    }
}

//=== preprocess() ========================================================

/// Splits `source` on `#type <stage>` directives.
///
/// Text before the first directive is ignored. A source without any
/// directive yields an empty [`ShaderSources`].
pub fn preprocess(source: &str) -> Result<ShaderSources, ShaderSourceError> {
    let mut sources = ShaderSources::default();
    let mut pos = source.find(TYPE_TOKEN);

    while let Some(start) = pos {
        let eol = source[start..]
            .find(LINE_TERMINATORS)
            .map(|i| start + i)
            .ok_or(ShaderSourceError::MissingLineTerminator { offset: start })?;

        let name = source[start + TYPE_TOKEN.len()..eol].trim();
        let stage = ShaderStage::from_name(name)
            .ok_or_else(|| ShaderSourceError::UnknownStage(name.to_string()))?;

        let body_start = source[eol..]
            .find(|c: char| !LINE_TERMINATORS.contains(&c))
            .map(|i| eol + i)
            .ok_or(ShaderSourceError::MissingBody { offset: start })?;

        pos = source[body_start..].find(TYPE_TOKEN).map(|i| body_start + i);
        let body_end = pos.unwrap_or(source.len());

        debug!(target: "render", "Found {} stage ({} bytes)", stage, body_end - body_start);
        sources
            .stages
            .insert(stage, source[body_start..body_end].to_string());
    }

    Ok(sources)
}

/// Reads `path` and runs [`preprocess`] on its contents.
pub fn preprocess_file(path: impl AsRef<Path>) -> Result<ShaderSources, ShaderSourceError> {
    let text = std::fs::read_to_string(path.as_ref())?;
    preprocess(&text)
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    const BASIC: &str = "#type vertex\nvoid main() { gl_Position = vec4(0.0); }\n#type fragment\nvoid main() {}\n";

    #[test]
    fn splits_vertex_and_fragment() {
        let sources = preprocess(BASIC).unwrap();
        assert_eq!(sources.len(), 2);
        assert_eq!(sources.vertex(), Some("void main() { gl_Position = vec4(0.0); }\n"));
        assert_eq!(sources.fragment(), Some("void main() {}\n"));
    }

    #[test]
    fn handles_crlf_and_blank_lines() {
        let src = "#type vertex\r\n\r\nV\r\n#type fragment\r\nF";
        let sources = preprocess(src).unwrap();
        assert_eq!(sources.vertex(), Some("V\r\n"));
        assert_eq!(sources.fragment(), Some("F"));
    }

    #[test]
    fn ignores_preamble_before_first_directive() {
        let sources = preprocess("// header\n#type fragment\nF\n").unwrap();
        assert_eq!(sources.fragment(), Some("F\n"));
        assert_eq!(sources.vertex(), None);
    }

    #[test]
    fn later_directive_overrides_earlier() {
        let sources = preprocess("#type vertex\nA\n#type vertex\nB\n").unwrap();
        assert_eq!(sources.len(), 1);
        assert_eq!(sources.vertex(), Some("B\n"));
    }

    #[test]
    fn no_directive_yields_empty() {
        assert!(preprocess("void main() {}").unwrap().is_empty());
    }

    #[test]
    fn unknown_stage_is_error() {
        match preprocess("#type geometry\nG\n") {
            Err(ShaderSourceError::UnknownStage(name)) => assert_eq!(name, "geometry"),
            other => panic!("Expected UnknownStage, got {:?}", other),
        }
    }

    #[test]
    fn missing_line_terminator_is_error() {
        assert!(matches!(
            preprocess("#type vertex"),
            Err(ShaderSourceError::MissingLineTerminator { offset: 0 })
        ));
    }

    #[test]
    fn missing_body_is_error() {
        assert!(matches!(
            preprocess("#type vertex\n\n"),
            Err(ShaderSourceError::MissingBody { offset: 0 })
        ));
    }

    #[test]
    fn stage_names_round_trip() {
        for stage in [ShaderStage::Vertex, ShaderStage::Fragment] {
            assert_eq!(ShaderStage::from_name(stage.name()), Some(stage));
        }
        assert_eq!(ShaderStage::from_name("Vertex"), None);
    }

    #[test]
    fn missing_file_is_io_error() {
        assert!(matches!(
            preprocess_file("/definitely/not/here.glsl"),
            Err(ShaderSourceError::Io(_))
        ));
    }
}
