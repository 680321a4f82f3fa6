//! Command-line planner: load a roster CSV, generate one set's matches, print them as JSON.
//! Run with: cargo run --bin plan -- roster.csv 1
//! Override with env: PLAN_FORMAT (Same-Sex or Mixed), PLAN_COURTS (comma-separated names).

use social_doubles::{
    generate_matches, load_roster, validate_config, Court, GenerationConfig, MatchFormat,
};
use std::fs::File;
use std::process::ExitCode;

fn default_courts() -> Vec<Court> {
    (1..=4).map(|i| Court::hard(format!("Court {i}"))).collect()
}

fn courts_from_env() -> Vec<Court> {
    std::env::var("PLAN_COURTS")
        .ok()
        .map(|s| {
            s.split(',')
                .map(str::trim)
                .filter(|name| !name.is_empty())
                .map(Court::hard)
                .collect::<Vec<_>>()
        })
        .filter(|courts| !courts.is_empty())
        .unwrap_or_else(default_courts)
}

fn main() -> ExitCode {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let mut args = std::env::args().skip(1);
    let (Some(path), Some(set)) = (args.next(), args.next()) else {
        eprintln!("usage: plan <roster.csv> <set-number>");
        return ExitCode::from(2);
    };
    let Ok(set_number) = set.parse::<u8>() else {
        eprintln!("Set number must be an integer (got '{set}')");
        return ExitCode::from(2);
    };
    let format = std::env::var("PLAN_FORMAT")
        .ok()
        .and_then(|f| f.parse::<MatchFormat>().ok())
        .unwrap_or_default();

    let players = match File::open(&path).map_err(|e| e.to_string()).and_then(|f| {
        load_roster(f).map_err(|e| e.to_string())
    }) {
        Ok(players) => players,
        Err(e) => {
            eprintln!("{path}: {e}");
            return ExitCode::FAILURE;
        }
    };

    let config = GenerationConfig::new(players, courts_from_env(), set_number, format);
    let report = validate_config(&config);
    if !report.valid {
        for e in &report.errors {
            eprintln!("{e}");
        }
        return ExitCode::FAILURE;
    }

    let result = generate_matches(&config);
    log::info!(
        "Set {} ({}): {} match(es), {} warning(s)",
        set_number,
        format,
        result.matches.len(),
        result.warnings.len()
    );
    for w in &result.warnings {
        log::warn!("{}", w);
    }
    match serde_json::to_string_pretty(&result) {
        Ok(json) => {
            println!("{json}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Could not serialise result: {e}");
            ExitCode::FAILURE
        }
    }
}
