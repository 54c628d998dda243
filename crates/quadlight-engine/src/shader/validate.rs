use naga::valid::{Capabilities, ValidationFlags, Validator};
use naga::{AddressSpace, ShaderStage};

use super::{ShaderError, ShaderSource};

pub const VERTEX_ENTRY: &str = "vs_main";
pub const FRAGMENT_ENTRY: &str = "fs_main";

/// `@group(0)` slot of the (time, angle) uniform.
pub const FRAME_BINDING: u32 = 0;
/// `@group(0)` slot of the (width, height) uniform.
pub const RESOLUTION_BINDING: u32 = 1;

/// What validation learned about a shader.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShaderInterface {
    /// `@group(0)` uniform bindings used by the quad entry points, ascending.
    pub uniform_bindings: Vec<u32>,
}

/// Parses and validates `source` against the quad pipeline's interface:
/// a `vs_main` vertex stage, an `fs_main` fragment stage, and uniforms at
/// `@group(0)` bindings 0 and 1 that at least one of them reads.
///
/// Pipelines use an auto-derived layout, so an unused binding would be
/// missing from the layout and the bind group could not be created.
pub fn validate(source: &ShaderSource) -> Result<ShaderInterface, ShaderError> {
    let label = source.label.to_string();

    let module = naga::front::wgsl::parse_str(&source.code).map_err(|e| ShaderError::Parse {
        label: label.clone(),
        message: e.emit_to_string(&source.code),
    })?;

    let info = Validator::new(ValidationFlags::all(), Capabilities::all())
        .validate(&module)
        .map_err(|e| ShaderError::Invalid {
            label: label.clone(),
            message: e.as_inner().to_string(),
        })?;

    let find_entry = |name: &'static str, stage: ShaderStage, stage_name: &'static str| {
        module
            .entry_points
            .iter()
            .position(|ep| ep.name == name && ep.stage == stage)
            .ok_or_else(|| ShaderError::MissingEntryPoint {
                label: label.clone(),
                name,
                stage: stage_name,
            })
    };

    let vs = find_entry(VERTEX_ENTRY, ShaderStage::Vertex, "vertex")?;
    let fs = find_entry(FRAGMENT_ENTRY, ShaderStage::Fragment, "fragment")?;

    let mut uniform_bindings: Vec<u32> = module
        .global_variables
        .iter()
        .filter(|(_, var)| var.space == AddressSpace::Uniform)
        .filter_map(|(handle, var)| {
            let binding = var.binding.as_ref()?;
            let used = !info.get_entry_point(vs)[handle].is_empty()
                || !info.get_entry_point(fs)[handle].is_empty();
            (binding.group == 0 && used).then_some(binding.binding)
        })
        .collect();
    uniform_bindings.sort_unstable();

    for binding in [FRAME_BINDING, RESOLUTION_BINDING] {
        if !uniform_bindings.contains(&binding) {
            return Err(ShaderError::MissingBinding { label, binding });
        }
    }

    log::debug!("shader {label} validated, uniform bindings {uniform_bindings:?}");
    Ok(ShaderInterface { uniform_bindings })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shader::fixtures::QUAD_WGSL;

    fn src(code: &str) -> ShaderSource {
        ShaderSource::new("test.wgsl", code.to_string())
    }

    #[test]
    fn quad_shader_passes() {
        let iface = validate(&src(QUAD_WGSL)).unwrap();
        assert_eq!(iface.uniform_bindings, vec![0, 1]);
    }

    #[test]
    fn syntax_error_is_a_parse_error() {
        let err = validate(&src("fn vs_main( {")).unwrap_err();
        assert!(matches!(err, ShaderError::Parse { .. }), "{err}");
    }

    #[test]
    fn type_error_is_a_validation_or_parse_error() {
        let code = QUAD_WGSL.replace("return vec4<f32>(uv, wave, 1.0);", "return uv;");
        let err = validate(&src(&code)).unwrap_err();
        assert!(
            matches!(err, ShaderError::Parse { .. } | ShaderError::Invalid { .. }),
            "{err}"
        );
    }

    #[test]
    fn missing_fragment_entry_is_reported() {
        let code = QUAD_WGSL.replace("fn fs_main", "fn fragment_main");
        let err = validate(&src(&code)).unwrap_err();
        assert_eq!(
            err,
            ShaderError::MissingEntryPoint {
                label: "test.wgsl".into(),
                name: FRAGMENT_ENTRY,
                stage: "fragment",
            }
        );
    }

    #[test]
    fn vertex_entry_with_wrong_name_is_reported() {
        let code = QUAD_WGSL.replace("fn vs_main", "fn main_vs");
        let err = validate(&src(&code)).unwrap_err();
        assert!(
            matches!(err, ShaderError::MissingEntryPoint { name: VERTEX_ENTRY, .. }),
            "{err}"
        );
    }

    #[test]
    fn unused_resolution_binding_is_reported() {
        let code = QUAD_WGSL.replace("let uv = pos.xy / u_resolution.size;", "let uv = pos.xy;");
        let err = validate(&src(&code)).unwrap_err();
        assert_eq!(
            err,
            ShaderError::MissingBinding {
                label: "test.wgsl".into(),
                binding: RESOLUTION_BINDING,
            }
        );
    }

    #[test]
    fn error_message_names_the_shader() {
        let err = validate(&src("")).unwrap_err();
        assert!(err.to_string().contains("test.wgsl"), "{err}");
    }
}
