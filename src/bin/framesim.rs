//! Command-line front end for the LRU frame simulator.
//!
//! Usage:
//!   framesim <frames> <reference string...>
//!   framesim            (prompts for frames and reference on stdin)
//!
//! Example:
//!   framesim 3 "1 2 3 1 4"

use std::env;
use std::error::Error;
use std::io::{self, BufRead, Write};

use framesim::error::ConfigError;
use framesim::input::{parse_reference_string, validate_frame_count};
use framesim::report::TextRenderer;
use framesim::sim::Simulator;

fn main() {
    if let Err(err) = run() {
        eprintln!("framesim: {}", err);
        std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn Error>> {
    let args: Vec<String> = env::args().skip(1).collect();
    let (frames_raw, reference_raw) = match args.len() {
        0 => read_interactive()?,
        1 => {
            return Err(Box::new(ConfigError::new(
                "usage: framesim <frames> <reference string...>",
            )));
        },
        _ => (args[0].clone(), args[1..].join(" ")),
    };

    let frames = frames_raw
        .trim()
        .parse::<usize>()
        .map_err(|_| ConfigError::new(format!("invalid frame count '{}'", frames_raw.trim())))?;
    let frames = validate_frame_count(frames)?;
    let reference = parse_reference_string(&reference_raw)?;

    let mut sim = Simulator::try_new(frames)?;
    let stdout = io::stdout();
    let mut renderer = TextRenderer::new(stdout.lock());
    let report = sim.run(reference, &mut renderer)?;

    let mut out = renderer.finish()?;
    writeln!(out, "Hits: {}  Faults: {}", report.hits, report.faults)?;
    Ok(())
}

fn read_interactive() -> Result<(String, String), Box<dyn Error>> {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    print!("Enter the number of frames: ");
    io::stdout().flush()?;
    let frames = lines
        .next()
        .ok_or_else(|| ConfigError::new("no frame count supplied"))??;

    print!("Enter the reference string: ");
    io::stdout().flush()?;
    let reference = lines
        .next()
        .ok_or_else(|| ConfigError::new("no reference string supplied"))??;

    Ok((frames, reference))
}
