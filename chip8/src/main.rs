use std::error::Error;
use std::path::PathBuf;

use clap::Parser;

mod keymap;
mod run;

use run::Options;

/// Runs a Chip-8 ROM in the terminal
#[derive(Parser, Debug)]
#[command(version)]
struct Cli {
    /// Path to the ROM file to run
    rom: PathBuf,

    /// Seed for the random number generator, for reproducible runs
    #[arg(short, long)]
    seed: Option<u64>,

    /// Cycles per second
    #[arg(long, default_value_t = 60, value_parser = clap::value_parser!(u64).range(1..))]
    hz: u64,
}

impl From<Cli> for Options {
    fn from(cli: Cli) -> Self {
        let mut options = Options::new(cli.rom);
        options.seed = cli.seed;
        options.cycle_time = 1_000_000_000 / cli.hz;
        options
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let options = Options::from(Cli::parse());
    log::info!("starting with {:?}", options);
    run::run(options)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<Options, clap::Error> {
        Cli::try_parse_from(std::iter::once("emu8").chain(args.iter().copied())).map(Options::from)
    }

    #[test]
    fn test_rom_only() {
        let options = parse(&["pong.ch8"]).unwrap();
        assert_eq!(options, Options::new(PathBuf::from("pong.ch8")));
    }

    #[test]
    fn test_seed_and_rate() {
        let options = parse(&["--seed", "7", "pong.ch8", "--hz", "500"]).unwrap();
        assert_eq!(options.rom, PathBuf::from("pong.ch8"));
        assert_eq!(options.seed, Some(7));
        assert_eq!(options.cycle_time, 2_000_000);
    }

    #[test]
    fn test_short_seed() {
        let options = parse(&["-s", "1", "pong.ch8"]).unwrap();
        assert_eq!(options.seed, Some(1));
    }

    #[test]
    fn test_help() {
        let err = parse(&["--help"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayHelp);
    }

    #[test]
    fn test_missing_rom() {
        assert!(parse(&[]).is_err());
        assert!(parse(&["--seed", "1"]).is_err());
    }

    #[test]
    fn test_bad_values() {
        assert!(parse(&["pong.ch8", "--seed"]).is_err());
        assert!(parse(&["pong.ch8", "--seed", "x"]).is_err());
        assert!(parse(&["pong.ch8", "--hz", "0"]).is_err());
        assert!(parse(&["pong.ch8", "extra.ch8"]).is_err());
    }
}
