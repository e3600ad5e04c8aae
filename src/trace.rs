use lelana_censor::{init_filter, FilterConfig};
use std::env::{args, var};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

pub fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let config = match var("CENSOR_CONFIG") {
        Ok(path) => match FilterConfig::from_path(&path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("{}", e);
                return ExitCode::FAILURE;
            }
        },
        Err(_) => FilterConfig::default(),
    }
    .apply_env();

    let censor = match init_filter(&config) {
        Ok(censor) => censor,
        Err(e) => {
            eprintln!("{}", e);
            return ExitCode::FAILURE;
        }
    };

    let input = args().skip(1).collect::<Vec<_>>().join(" ");
    let (censored, outcome) = censor.censor_and_analyze(&input);
    println!("\"{}\" -> \"{}\" ({:?})", input, censored, outcome);
    ExitCode::SUCCESS
}
