#![warn(clippy::pedantic)]

mod config;
mod net;

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand};
use color_eyre::eyre::WrapErr;
use config::CliConfig;
use cube_core::{CubieCube, FaceCube, MoveSequence, SymmetryTable};
use env_logger::TimestampPrecision;
use itertools::Itertools;
use log::{LevelFilter, debug};

/// Inspect and manipulate Rubik's cube states
#[derive(Parser)]
#[command(version, about, long_about = None)]
struct Cli {
    /// The configuration file to use, in TOML format. Defaults to
    /// `<config dir>/cube/config.toml` if it exists.
    #[arg(long, short = 'c', value_name = "CONFIG")]
    config: Option<PathBuf>,

    /// Increase logging verbosity (can be repeated)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    /// Never paint the net in color
    #[arg(long)]
    plain: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print a cube as an unfolded net.
    Show {
        /// 54 facelets, e.g. "UUUUUUUUURRRRRRRRRFFFFFFFFFDDDDDDDDDLLLLLLLLLBBBBBBBBB".
        facelets: String,
    },
    /// Print the pieces of a cube and whether it can be solved.
    Cubie {
        /// 54 facelets
        facelets: String,
    },
    /// Apply a move sequence to the solved cube.
    Scramble {
        /// The move sequence, e.g. "R U' F2".
        moves: String,
        /// Also print the net
        #[arg(long)]
        net: bool,
    },
    /// Print the inverse of a cube.
    Invert {
        /// 54 facelets
        facelets: String,
    },
    /// List the symmetries and antisymmetries of a cube.
    Symmetries {
        /// 54 facelets
        facelets: String,
    },
    /// Print a uniformly random solvable cube.
    Random {
        /// Seed for the random number generator
        #[arg(long)]
        seed: Option<u64>,
        /// Also print the net
        #[arg(long)]
        net: bool,
    },
    /// Read a cube given as 54 color names of the configured scheme.
    Colors {
        /// The color of every facelet, in facelet order
        #[arg(num_args = 54, required = true)]
        tokens: Vec<String>,
    },
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();

    env_logger::Builder::new()
        .filter_level(match cli.verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        })
        .format_timestamp(Some(TimestampPrecision::Millis))
        .init();

    let config = CliConfig::load(cli.config.as_deref())?;
    let color = config.color && !cli.plain;
    let print_net = |cube: &FaceCube| {
        if color {
            print!("{}", net::paint(cube, &config.scheme));
        } else {
            print!("{}", cube.to_2d_string());
        }
    };

    match cli.command {
        Commands::Show { facelets } => {
            print_net(&parse_facelets(&facelets)?);
        }
        Commands::Cubie { facelets } => {
            let cube = parse_cubie(&facelets)?;
            println!("{cube}");
            println!("corner parity: {}", cube.corner_parity());
            println!("edge parity: {}", cube.edge_parity());
            match cube.verify() {
                Ok(()) => println!("solvable"),
                Err(e) => println!("not solvable: {e}"),
            }
        }
        Commands::Scramble { moves, net } => {
            let moves = moves
                .parse::<MoveSequence>()
                .wrap_err_with(|| format!("Failed to parse the move sequence {moves:?}"))?;
            debug!("Applying {} moves", moves.len());
            let cube = moves.cubie_cube().to_facelet_cube();
            println!("{cube}");
            if net {
                print_net(&cube);
            }
        }
        Commands::Invert { facelets } => {
            println!("{}", parse_cubie(&facelets)?.invert().to_facelet_cube());
        }
        Commands::Symmetries { facelets } => {
            let cube = parse_cubie(&facelets)?;
            let (symmetries, antisymmetries): (Vec<_>, Vec<_>) = cube
                .symmetries(SymmetryTable::get())
                .into_iter()
                .partition(|&j| j < cube_core::SYM_COUNT);
            println!("symmetries: {}", symmetries.iter().join(" "));
            println!("antisymmetries: {}", antisymmetries.iter().join(" "));
        }
        Commands::Random { seed, net } => {
            let mut rng = match seed {
                Some(seed) => fastrand::Rng::with_seed(seed),
                None => fastrand::Rng::new(),
            };
            let cube = CubieCube::random(&mut rng).to_facelet_cube();
            println!("{cube}");
            if net {
                print_net(&cube);
            }
        }
        Commands::Colors { tokens } => {
            let cube = FaceCube::from_colors(&tokens, &config.scheme)
                .wrap_err("Failed to read the colors")?;
            println!("{cube}");
        }
    }

    Ok(())
}

fn parse_facelets(facelets: &str) -> color_eyre::Result<FaceCube> {
    facelets
        .parse()
        .wrap_err_with(|| format!("Invalid cube {facelets:?}"))
}

fn parse_cubie(facelets: &str) -> color_eyre::Result<CubieCube> {
    parse_facelets(facelets)?
        .to_cubie_cube()
        .wrap_err_with(|| format!("Cannot find the pieces of {facelets:?}"))
}
