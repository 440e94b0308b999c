//! Score command - parse balls, score the game, render the result

use super::Cli;
use crate::config::CliDefaults;
use crate::input::{parse_balls, INVALID_FORMAT};
use crate::reporters::{self, OutputFormat, RenderOptions};
use crate::scoring::score_game;
use anyhow::Result;
use std::process::ExitCode;
use std::str::FromStr;
use tracing::{debug, info, warn};

/// Exit code for a ball token that is not an integer
pub const EXIT_FORMAT_ERROR: u8 = 1;
/// Exit code for balls that do not form a legal game
pub const EXIT_INVALID_GAME: u8 = 2;

/// Pick the output format: flag or env first, then config, then text
///
/// A bad format in a config file is logged and ignored.
fn resolve_format(flag: Option<&str>, defaults: &CliDefaults) -> OutputFormat {
    let Some(name) = flag.or(defaults.format.as_deref()) else {
        return OutputFormat::default();
    };
    OutputFormat::from_str(name).unwrap_or_else(|e| {
        warn!("Ignoring configured format: {}", e);
        OutputFormat::default()
    })
}

pub fn run(cli: &Cli, defaults: &CliDefaults) -> Result<ExitCode> {
    let format = resolve_format(cli.format.as_deref(), defaults);
    let options = RenderOptions {
        frames: cli.frames || defaults.frames.unwrap_or(false),
        color: !cli.no_color
            && !defaults.no_color.unwrap_or(false)
            && console::colors_enabled(),
    };
    debug!("Rendering as {} ({:?})", format, options);

    let balls = match parse_balls(&cli.balls) {
        Ok(balls) => balls,
        Err(e) => {
            debug!("{}", e);
            println!("{}", INVALID_FORMAT);
            return Ok(ExitCode::from(EXIT_FORMAT_ERROR));
        }
    };

    let game = match score_game(&balls) {
        Ok(game) => game,
        Err(e) => {
            info!("Rejected game at frame {}: {}", e.frame(), e);
            println!("{} {}", INVALID_FORMAT, e);
            return Ok(ExitCode::from(EXIT_INVALID_GAME));
        }
    };

    let rendered = reporters::report(&game, format, &options)?;
    print!("{}", rendered);
    if format == OutputFormat::Json {
        println!();
    }
    Ok(ExitCode::SUCCESS)
}
