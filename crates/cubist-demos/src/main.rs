mod scenes;

use anyhow::{bail, Result};

use cubist_engine::device::GpuInit;
use cubist_engine::logging::{init_logging, LoggingConfig};
use cubist_engine::window::{Runtime, RuntimeConfig};

use scenes::{SpinningCube, Triangle, TwoCubes};

const USAGE: &str = "usage: cubist-demos [cube | two-cubes | triangle]";

fn main() -> Result<()> {
    init_logging(LoggingConfig::default());

    let scene = std::env::args().nth(1).unwrap_or_else(|| "cube".to_string());

    let config = RuntimeConfig {
        title: format!("cubist — {scene}"),
        ..RuntimeConfig::default()
    };

    log::info!("starting scene '{scene}' (Escape closes)");

    match scene.as_str() {
        "cube" => Runtime::run(config, GpuInit::default(), SpinningCube::new()?),
        "two-cubes" => Runtime::run(config, GpuInit::default(), TwoCubes::new()?),
        "triangle" => Runtime::run(config, GpuInit::default(), Triangle::new()),
        other => bail!("unknown scene '{other}'\n{USAGE}"),
    }
}
