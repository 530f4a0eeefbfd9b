use std::{
    io::{self, BufRead, Write},
    process,
    str::FromStr,
};

use clap::{App, Arg, ArgMatches};
use log::{debug, info};
use once_cell::sync::Lazy;
use rand::{rngs::StdRng, SeedableRng};
use regex::Regex;

use battlegrid::{
    fleet::{random_fleet, STANDARD_FLEET},
    board::{MAX_CELLS, MAX_COLUMNS},
    Bounds, Coordinate, Grid, Position, ShotResult,
};

mod logging;

/// Layout used when no ships are given on the command line.
///
/// ```text
///    A B C D E F G H I J
///  1               @
///  2 @             @
///  3         @     @
///  4               @
///  5   @ @
///  6
///  7           @       @
///  8           @       @
///  9                   @
/// 10       @ @ @ @ @
/// ```
const CLASSIC_LAYOUT: [&str; 7] = ["A2", "E3", "H1-H4", "B5-C5", "F7-F8", "J7-J9", "D10-H10"];

fn main() -> io::Result<()> {
    logging::init_logging();

    let matches = app().get_matches();

    let mut grid = match build_grid(&matches) {
        Ok(grid) => grid,
        Err(msg) => {
            eprintln!("error: {}", msg);
            process::exit(1);
        }
    };
    info!(
        "playing on rows 1-{} and columns A-{} with {} ships",
        grid.bounds().last_row(),
        grid.bounds().last_column(),
        grid.ships().count()
    );

    let stdin = io::stdin();
    let mut input = InputReader::new(stdin.lock());
    println!("Type help or ? for commands.");
    while let Some(cmd) = input.read_input_lower(">", |line| match parse_command(line) {
        Ok(cmd) => Some(cmd),
        Err(msg) => {
            println!("{}", msg);
            None
        }
    })? {
        debug!("command: {:?}", cmd);
        match cmd {
            Command::Shoot(row, column) => match grid.shoot(row, &column) {
                Ok(result) => {
                    println!("{}", describe(result));
                    if result.sunk && grid.all_sunk() {
                        println!("all ships sunk");
                    }
                }
                Err(err) => println!("{}", err),
            },
            Command::Reset => {
                grid.reset_ships();
                println!("all hits cleared");
            }
            Command::Status => show_status(&grid),
            Command::Destroy => {
                grid.destroy();
                println!("all ships removed");
            }
            Command::Help => println!(
                "Available Commands:
    shoot <row> <column>    fire at a cell, e.g. \"shoot 4 H\". \"fire\" works too.
    <coordinate>            fire at a cell given as e.g. \"H4\" or \"4H\".
    status                  list every ship with its hits.
    reset                   clear all hits to play the same grid again.
    destroy                 remove every ship from the grid.
    quit                    leave."
            ),
            Command::Quit => break,
        }
    }
    Ok(())
}

/// Clap validator checking that a value parses as `T`.
fn validate<T>(value: &str) -> Result<(), String>
where
    T: FromStr,
    T::Err: ToString,
{
    value.parse::<T>().map(|_| ()).map_err(|err| err.to_string())
}

/// Command line arguments accepted by the game.
fn app() -> App<'static, 'static> {
    App::new("Battlegrid")
        .version("0.1")
        .about("Fire at a battleship grid from the command line.")
        .arg(
            Arg::with_name("ship")
                .short("s")
                .long("ship")
                .value_name("POSITION")
                .help("place a ship, e.g. H1-H4 or 2A; may be repeated")
                .takes_value(true)
                .multiple(true)
                .number_of_values(1)
                .validator(|v| validate::<Position>(&v)),
        )
        .arg(
            Arg::with_name("random")
                .short("r")
                .long("random")
                .help("lay out the standard fleet at random")
                .conflicts_with("ship"),
        )
        .arg(
            Arg::with_name("seed")
                .long("seed")
                .value_name("SEED")
                .help("seed for --random")
                .takes_value(true)
                .requires("random")
                .validator(|v| validate::<u64>(&v)),
        )
        .arg(
            Arg::with_name("rows")
                .long("rows")
                .value_name("ROWS")
                .help("number of rows on the grid")
                .takes_value(true)
                .default_value("10")
                .validator(|v| validate::<usize>(&v)),
        )
        .arg(
            Arg::with_name("columns")
                .long("columns")
                .value_name("COLUMNS")
                .help("number of lettered columns on the grid, at most 26")
                .takes_value(true)
                .default_value("10")
                .validator(|v| validate::<usize>(&v)),
        )
}

/// Get a validated argument, parsed as `T`.
fn parse_arg<T: FromStr>(matches: &ArgMatches, name: &str) -> Option<T> {
    matches.value_of(name).and_then(|v| v.parse().ok())
}

/// Build the grid described by the command line arguments.
fn build_grid(matches: &ArgMatches) -> Result<Grid, String> {
    let rows = parse_arg(matches, "rows").unwrap_or(10);
    let columns = parse_arg(matches, "columns").unwrap_or(10);
    let bounds = Bounds::try_new(rows, columns).ok_or_else(|| {
        format!(
            "a grid needs 1 to {} columns and at most {} cells, got {}x{}",
            MAX_COLUMNS, MAX_CELLS, rows, columns
        )
    })?;

    let fleet = if matches.is_present("random") {
        let mut rng = match parse_arg::<u64>(matches, "seed") {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        random_fleet(&mut rng, &bounds, &STANDARD_FLEET).map_err(|err| err.to_string())?
    } else if let Some(ships) = matches.values_of("ship") {
        ships
            .map(|s| s.parse::<Position>())
            .collect::<Result<Vec<Position>, _>>()
            .map_err(|err| err.to_string())?
    } else {
        CLASSIC_LAYOUT
            .iter()
            .map(|s| s.parse())
            .collect::<Result<Vec<Position>, _>>()
            .map_err(|err| err.to_string())?
    };
    Grid::with_bounds(bounds, fleet).map_err(|err| err.to_string())
}

/// A command read from the player.
#[derive(Debug, Clone, Eq, PartialEq)]
enum Command {
    /// Fire at a row and a column, the column exactly as typed.
    Shoot(i32, String),
    Reset,
    Status,
    Destroy,
    Help,
    Quit,
}

/// Parse one lowercased line of input.
fn parse_command(line: &str) -> Result<Command, String> {
    /// Matcher for explicit shots.
    static SHOOT: Lazy<Regex> = Lazy::new(|| {
        Regex::new(
            r"^(?x)(?:shoot|fire)\s+
        (?P<row>-?[0-9]+)(?:\s*,\s*|\s+)
        (?P<column>\S+)$",
        )
        .expect("shoot pattern is valid")
    });

    match line {
        "?" | "help" | "h" => Ok(Command::Help),
        "reset" => Ok(Command::Reset),
        "status" | "ships" => Ok(Command::Status),
        "destroy" => Ok(Command::Destroy),
        "quit" | "exit" | "q" => Ok(Command::Quit),
        other => {
            if let Some(captures) = SHOOT.captures(other) {
                let row = &captures["row"];
                let row: i32 = row
                    .parse()
                    .map_err(|_| format!("invalid row: {}", row))?;
                Ok(Command::Shoot(row, captures["column"].to_ascii_uppercase()))
            } else if let Ok(coord) = other.parse::<Coordinate>() {
                Ok(Command::Shoot(coord.row, coord.column.to_string()))
            } else {
                Err(format!("Invalid command \"{}\". Use '?' for help", other))
            }
        }
    }
}

fn describe(result: ShotResult) -> &'static str {
    match result {
        ShotResult { hit: false, .. } => "miss",
        ShotResult { sunk: false, .. } => "hit",
        ShotResult { .. } => "hit, sunk",
    }
}

/// Print one line per ship with its placement and damage.
fn show_status(grid: &Grid) {
    for ship in grid.ships() {
        println!(
            "#{} {}: {}/{} hits{}",
            ship.index(),
            ship.position(),
            ship.hits(),
            ship.len(),
            if ship.sunk() { ", sunk" } else { "" }
        );
    }
    println!(
        "{} of {} ships afloat",
        grid.remaining(),
        grid.ships().count()
    );
}

/// Helper to read input from the player.
struct InputReader<B> {
    read: B,
    buf: String,
}

impl<B> InputReader<B> {
    fn new(read: B) -> Self {
        Self {
            read,
            buf: String::new(),
        }
    }
}

impl<B: BufRead> InputReader<B> {
    /// Repeatedly tries to read input until the input checker returns `Some`. Converts
    /// to ascii lower before running the checker. Returns `None` at end of input.
    fn read_input_lower<F, T>(&mut self, prompt: &str, mut checker: F) -> io::Result<Option<T>>
    where
        F: FnMut(&str) -> Option<T>,
    {
        loop {
            if !self.read_input_inner(prompt)? {
                return Ok(None);
            }
            self.buf.make_ascii_lowercase();
            let line = self.buf.trim();
            if line.is_empty() {
                continue;
            }
            if let Some(val) = checker(line) {
                return Ok(Some(val));
            }
        }
    }

    /// Helper to print the prompt, clear the string buffer and read a line. Returns false
    /// once the input is exhausted.
    fn read_input_inner(&mut self, prompt: &str) -> io::Result<bool> {
        print!("{} ", prompt);
        io::stdout().flush()?;
        self.buf.clear();
        if self.read.read_line(&mut self.buf)? == 0 {
            println!();
            return Ok(false);
        }
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_shots() {
        assert_eq!(
            parse_command("shoot 4 h"),
            Ok(Command::Shoot(4, "H".to_string()))
        );
        assert_eq!(
            parse_command("fire 10,d"),
            Ok(Command::Shoot(10, "D".to_string()))
        );
        assert_eq!(
            parse_command("shoot 10 cc"),
            Ok(Command::Shoot(10, "CC".to_string()))
        );
        assert_eq!(
            parse_command("shoot -1 a"),
            Ok(Command::Shoot(-1, "A".to_string()))
        );
        assert_eq!(parse_command("h4"), Ok(Command::Shoot(4, "H".to_string())));
        assert_eq!(parse_command("7j"), Ok(Command::Shoot(7, "J".to_string())));
        assert!(parse_command("shoot 99999999999 a").is_err());
    }

    #[test]
    fn parses_keywords() {
        assert_eq!(parse_command("?"), Ok(Command::Help));
        assert_eq!(parse_command("reset"), Ok(Command::Reset));
        assert_eq!(parse_command("status"), Ok(Command::Status));
        assert_eq!(parse_command("destroy"), Ok(Command::Destroy));
        assert_eq!(parse_command("quit"), Ok(Command::Quit));
        assert!(parse_command("launch missiles").is_err());
    }

    #[test]
    fn classic_layout_builds() {
        let fleet = CLASSIC_LAYOUT
            .iter()
            .map(|s| s.parse())
            .collect::<Result<Vec<Position>, _>>()
            .unwrap();
        let grid = Grid::new(fleet).unwrap();
        assert_eq!(grid.ships().map(|ship| ship.len()).sum::<usize>(), 18);
    }

    #[test]
    fn build_grid_reports_oversized_bounds() {
        let matches = app().get_matches_from(vec![
            "battlegrid",
            "--rows",
            "2000000000",
            "--columns",
            "26",
        ]);
        let msg = build_grid(&matches).unwrap_err();
        assert!(msg.contains("2000000000x26"), "{}", msg);
    }

    #[test]
    fn build_grid_uses_requested_bounds() {
        let matches = app().get_matches_from(vec![
            "battlegrid",
            "--rows",
            "15",
            "--columns",
            "20",
            "--ship",
            "15T",
        ]);
        let grid = build_grid(&matches).unwrap();
        assert_eq!(grid.bounds().last_row(), 15);
        assert_eq!(grid.bounds().last_column(), 'T');
        assert_eq!(grid.remaining(), 1);
    }

    #[test]
    fn describes_results() {
        assert_eq!(describe(ShotResult::MISS), "miss");
        assert_eq!(describe(ShotResult { hit: true, sunk: false }), "hit");
        assert_eq!(describe(ShotResult { hit: true, sunk: true }), "hit, sunk");
    }

    #[test]
    fn input_reader_skips_rejected_lines() {
        let mut input = InputReader::new(&b"bogus\n\nSTATUS\n"[..]);
        let cmd = input
            .read_input_lower(">", |line| parse_command(line).ok())
            .unwrap();
        assert_eq!(cmd, Some(Command::Status));
        assert_eq!(
            input
                .read_input_lower(">", |line| parse_command(line).ok())
                .unwrap(),
            None
        );
    }
}
