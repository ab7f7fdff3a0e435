//! `lightbox-replay`: replay a JSON gallery scenario and print what happened.

#[cfg(not(target_arch = "wasm32"))]
fn main() -> std::process::ExitCode {
    use std::process::ExitCode;

    use lightbox::{LogLevel, Scenario};

    let mut args = std::env::args().skip(1);
    let Some(path) = args.next() else {
        eprintln!("Usage: lightbox-replay <scenario.json> [log-level]");
        return ExitCode::FAILURE;
    };

    let scenario = match Scenario::load(&path) {
        Ok(scenario) => scenario,
        Err(e) => {
            eprintln!("Failed to load {}: {}", path, e);
            return ExitCode::FAILURE;
        }
    };

    let level = args
        .next()
        .and_then(|name| LogLevel::from_name(&name))
        .unwrap_or(scenario.options.log_level);
    env_logger::Builder::new()
        .filter_level(level.to_level_filter())
        .parse_default_env()
        .init();

    let report = match scenario.replay() {
        Ok(report) => report,
        Err(e) => {
            log::error!("Replay failed: {}", e);
            return ExitCode::FAILURE;
        }
    };

    match serde_json::to_string_pretty(&report) {
        Ok(json) => {
            println!("{}", json);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Failed to serialize report: {}", e);
            ExitCode::FAILURE
        }
    }
}

// The replay tool is native only
#[cfg(target_arch = "wasm32")]
fn main() {}
