//! CLI definition and handler

mod score;

use anyhow::Result;
use clap::error::ErrorKind;
use clap::Parser;
use std::ffi::OsString;
use std::process::ExitCode;

/// bowlscore - Ten-pin bowling score calculator
#[derive(Parser, Debug)]
#[command(name = "bowlscore")]
#[command(
    version,
    about = "Score a complete ten-pin bowling game from its ball pinfalls",
    long_about = "Validates a full game of ball pinfalls and prints its total score.\n\n\
Pass every ball of the game in order. A strike is a single 10; frame 10 \
takes its bonus balls after its own throws.",
    after_help = "\
Examples:
  bowlscore 10 10 10 10 10 10 10 10 10 10 10 10     Perfect game (300)
  bowlscore 9 0 3 5 6 1 3 6 8 1 5 3 2 5 8 0 7 1 8 1  Open game (82)
  bowlscore --frames 10 3 7 6 1 10 10 10 2 8 9 0 7 3 10 10 10
  bowlscore --format json 5 5 5 5 5 5 5 5 5 5 5 5 5 5 5 5 5 5 5 5 5

Options go before the balls.

Exit codes:
  0  Game scored
  1  A ball is not an integer
  2  The balls do not form a legal game"
)]
pub struct Cli {
    /// Pins knocked down by each ball, in order
    ///
    /// Every token after the first ball is taken as a ball, including ones
    /// that look like options.
    #[arg(
        value_name = "BALLS",
        allow_hyphen_values = true,
        allow_negative_numbers = true,
        trailing_var_arg = true
    )]
    pub balls: Vec<String>,

    /// Output format: text, json
    #[arg(long, short = 'f', env = "BOWLSCORE_FORMAT", value_parser = ["text", "json"])]
    pub format: Option<String>,

    /// Show the frame-by-frame breakdown (text format)
    #[arg(long)]
    pub frames: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, default_value = "warn", value_parser = ["error", "warn", "info", "debug", "trace"])]
    pub log_level: String,
}

/// Parse arguments, treating an unrecognized option as a malformed ball
///
/// Help, version and other clap errors exit the process as usual.
pub fn parse_from<I, T>(args: I) -> std::result::Result<Cli, ExitCode>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    match Cli::try_parse_from(args) {
        Ok(cli) => Ok(cli),
        Err(e) if e.kind() == ErrorKind::UnknownArgument => {
            println!("{}", crate::input::INVALID_FORMAT);
            Err(ExitCode::from(score::EXIT_FORMAT_ERROR))
        }
        Err(e) => e.exit(),
    }
}

/// Run the CLI, returning the process exit code
pub fn run(cli: Cli) -> Result<ExitCode> {
    let cwd = std::env::current_dir()?;
    let config = crate::config::load_config(&cwd);
    score::run(&cli, &config.defaults)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_negative_ball_is_positional() {
        let cli = Cli::try_parse_from(["bowlscore", "-9", "0", "10"]).expect("parse");
        assert_eq!(cli.balls, vec!["-9", "0", "10"]);
    }

    #[test]
    fn test_flags_and_balls() {
        let cli = Cli::try_parse_from(["bowlscore", "--format", "json", "--frames", "10", "10"])
            .expect("parse");
        assert_eq!(cli.format.as_deref(), Some("json"));
        assert!(cli.frames);
        assert_eq!(cli.balls.len(), 2);
    }

    #[test]
    fn test_unknown_format_rejected() {
        assert!(Cli::try_parse_from(["bowlscore", "--format", "sarif", "10"]).is_err());
    }

    #[test]
    fn test_hyphen_tokens_after_first_ball_are_balls() {
        let cli = Cli::try_parse_from(["bowlscore", "10", "-x", "--", "--foo", "3"]).expect("parse");
        assert_eq!(cli.balls, vec!["10", "-x", "--", "--foo", "3"]);
    }

    #[test]
    fn test_options_after_balls_are_balls() {
        let cli = Cli::try_parse_from(["bowlscore", "10", "--frames"]).expect("parse");
        assert!(!cli.frames);
        assert_eq!(cli.balls, vec!["10", "--frames"]);
    }

    #[test]
    fn test_non_numeric_ball_reaches_parser() {
        let cli = Cli::try_parse_from(["bowlscore", "10", "abc"]).expect("parse");
        assert_eq!(cli.balls, vec!["10", "abc"]);
    }
}
