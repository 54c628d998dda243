use std::borrow::Cow;

/// WGSL program text plus a label used in diagnostics and GPU object names.
#[derive(Debug, Clone)]
pub struct ShaderSource {
    pub label: Cow<'static, str>,
    pub code: Cow<'static, str>,
}

impl ShaderSource {
    pub fn new(label: impl Into<Cow<'static, str>>, code: impl Into<Cow<'static, str>>) -> Self {
        Self {
            label: label.into(),
            code: code.into(),
        }
    }

    /// Source embedded in the binary, typically via `include_str!`.
    pub const fn from_static(label: &'static str, code: &'static str) -> Self {
        Self {
            label: Cow::Borrowed(label),
            code: Cow::Borrowed(code),
        }
    }
}
