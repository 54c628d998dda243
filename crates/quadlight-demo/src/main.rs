use std::process::ExitCode;

use quadlight_engine::device::GpuInit;
use quadlight_engine::logging::{init_logging, LoggingConfig};
use quadlight_engine::shader::ShaderSource;
use quadlight_engine::window::{Runtime, RuntimeConfig};
use winit::dpi::LogicalSize;

const PLASMA: ShaderSource =
    ShaderSource::from_static("plasma.wgsl", include_str!("../shaders/plasma.wgsl"));

fn main() -> ExitCode {
    init_logging(LoggingConfig::default());

    let config = RuntimeConfig {
        title: "quadlight · plasma".to_string(),
        initial_size: LogicalSize::new(800.0, 600.0),
    };

    match Runtime::run(config, GpuInit::default(), PLASMA) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!("{err:#}");
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quadlight_engine::shader;

    #[test]
    fn plasma_shader_satisfies_quad_interface() {
        let iface = shader::validate(&PLASMA).unwrap();
        assert_eq!(iface.uniform_bindings, vec![0, 1]);
    }
}
