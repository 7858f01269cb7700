//=========================================================================
// Render Support
//
// GPU-independent helpers used by renderer backends. Compiling, linking
// and uploading are left to the backend.
//
//=========================================================================

pub mod shader_source;

pub use shader_source::{preprocess, preprocess_file, ShaderSourceError, ShaderSources, ShaderStage};
