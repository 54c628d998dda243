use std::fmt;

/// Why a shader cannot be turned into the quad pipeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShaderError {
    /// WGSL did not parse. `message` is the rendered diagnostic.
    Parse { label: String, message: String },
    /// The module parsed but failed naga validation.
    Invalid { label: String, message: String },
    /// A required entry point is absent or has the wrong stage.
    MissingEntryPoint { label: String, name: &'static str, stage: &'static str },
    /// A required `@group(0)` uniform binding is absent or unused.
    MissingBinding { label: String, binding: u32 },
}

impl fmt::Display for ShaderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Parse { label, message } => write!(f, "shader {label} failed to parse:\n{message}"),
            Self::Invalid { label, message } => write!(f, "shader {label} is invalid: {message}"),
            Self::MissingEntryPoint { label, name, stage } => {
                write!(f, "shader {label} has no {stage} entry point `{name}`")
            }
            Self::MissingBinding { label, binding } => write!(
                f,
                "shader {label} does not use a uniform at @group(0) @binding({binding})"
            ),
        }
    }
}

impl std::error::Error for ShaderError {}
