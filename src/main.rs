use routeboard::cli::run_cli;
use routeboard::logging::{init_logging, LogConfig};

fn main() -> anyhow::Result<()> {
    init_logging(&LogConfig::from_env())?;
    let code = run_cli()?;
    std::process::exit(code);
}
