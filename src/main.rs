// main.rs
use std::env;
use std::fs::File;
use std::process;

use fret_chart_rust::config::preset_names;
use fret_chart_rust::guitar::intervals::{chord_type_names, scale_type_names};
use fret_chart_rust::{Instrument, SearchConfig};
use serde::Serialize;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

const USAGE: &str = "Usage: fret-chart [--config <settings.json>] <command>
  chord    <tuning> <frets> <root> <type> [inversion] [starting_string]
  scale    <tuning> <frets> <root> <type>
  arpeggio <tuning> <frets> <root> <type>
  preset   <name> chord|scale|arpeggio <root> <type> [inversion] [starting_string]
  list     presets|chords|scales

Tunings are hyphen separated from the lowest string, e.g. E-A-D-G-B-E";

fn fail(message: &str) -> ! {
    eprintln!("{}", message);
    process::exit(1);
}

fn usage() -> ! {
    fail(USAGE)
}

fn parse_number(value: &str, what: &str) -> usize {
    value
        .parse()
        .unwrap_or_else(|_| fail(&format!("Invalid {}: '{}'", what, value)))
}

fn print_json<T: Serialize>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(json) => println!("{}", json),
        Err(e) => fail(&format!("Error serialising result: {}", e)),
    }
}

fn load_config(path: &str) -> SearchConfig {
    let file = File::open(path)
        .unwrap_or_else(|e| fail(&format!("Error reading config '{}': {}", path, e)));
    SearchConfig::from_reader(file).unwrap_or_else(|e| fail(&format!("{}", e)))
}

/// Runs a query against an instrument. `rest` starts at the root note.
fn run_query(instrument: &Instrument, query: &str, rest: &[String]) {
    if rest.len() < 2 {
        usage();
    }
    let (root, kind) = (rest[0].as_str(), rest[1].as_str());

    let result = match query {
        "chord" => {
            let inversion = rest.get(2).map_or(0, |v| parse_number(v, "inversion"));
            let starting_string = rest.get(3).map(|v| parse_number(v, "starting string"));
            instrument
                .chord(root, kind, inversion, starting_string)
                .map(|voicings| print_json(&voicings))
        }
        "scale" => instrument.scale(root, kind).map(|positions| print_json(&positions)),
        "arpeggio" => instrument.arpeggio(root, kind).map(|positions| print_json(&positions)),
        _ => usage(),
    };

    if let Err(e) = result {
        fail(&format!("Error: {}", e));
    }
}

fn main() {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("fret_chart_rust=warn")),
        )
        .init();

    let mut args: Vec<String> = env::args().skip(1).collect();

    let mut config = SearchConfig::default();
    if args.first().map(String::as_str) == Some("--config") {
        if args.len() < 2 {
            usage();
        }
        config = load_config(&args[1]);
        args.drain(..2);
    }

    let Some(command) = args.first() else {
        usage();
    };

    match command.as_str() {
        "chord" | "scale" | "arpeggio" => {
            if args.len() < 5 {
                usage();
            }
            let fret_count = parse_number(&args[2], "fret count");
            let instrument = Instrument::new(&args[1], fret_count)
                .unwrap_or_else(|e| fail(&format!("Error: {}", e)))
                .with_config(config);
            run_query(&instrument, command, &args[3..]);
        }
        "preset" => {
            if args.len() < 5 {
                usage();
            }
            let instrument = Instrument::from_preset(&args[1])
                .unwrap_or_else(|e| fail(&format!("Error: {}", e)))
                .with_config(config);
            run_query(&instrument, &args[2], &args[3..]);
        }
        "list" => match args.get(1).map(String::as_str) {
            Some("presets") => print_json(&preset_names()),
            Some("chords") => print_json(&chord_type_names()),
            Some("scales") => print_json(&scale_type_names()),
            _ => usage(),
        },
        _ => usage(),
    }
}
