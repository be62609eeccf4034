#![deny(unsafe_code)]
//! CLI binary for the planetgen noise and texture pipeline.
//!
//! Subcommands:
//! - `noise` — render seeded gradient noise to a grayscale PNG
//! - `planet` — render a full biome-colored planet texture PNG
//! - `biomes` — print the biome classification table

mod error;

use clap::{Parser, Subcommand};
use error::CliError;
use planetgen_perlin::{sample_octaves, OctaveParams};
use planetgen_texture::{biome, planet, snapshot};
use std::path::PathBuf;
use std::process;

#[derive(Parser)]
#[command(name = "planetgen", about = "Seeded planet texture generator")]
struct Cli {
    /// Output as JSON instead of human-readable text.
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Render gradient noise to a grayscale PNG.
    Noise {
        /// Lattice cells along each axis.
        #[arg(short, long, default_value_t = 4)]
        res: usize,

        /// Output width in pixels (multiple of the resolution).
        #[arg(short = 'W', long, default_value_t = 256)]
        width: usize,

        /// Output height in pixels (multiple of the resolution).
        #[arg(short = 'H', long, default_value_t = 256)]
        height: usize,

        /// Number of octaves to sum.
        #[arg(long, default_value_t = 1)]
        octaves: u32,

        /// Amplitude multiplier per octave.
        #[arg(long, default_value_t = 0.5)]
        persistence: f64,

        /// Frequency multiplier per octave.
        #[arg(long, default_value_t = 2.0)]
        lacunarity: f64,

        /// Make the noise tile seamlessly along both axes.
        #[arg(long)]
        tile: bool,

        /// Noise seed for deterministic output.
        #[arg(long, default_value_t = 42)]
        seed: u64,

        /// Output file path.
        #[arg(short, long, default_value = "noise.png")]
        output: PathBuf,
    },
    /// Render a biome-colored planet texture PNG.
    Planet {
        /// Square texture edge length in pixels.
        #[arg(short, long, default_value_t = 1024)]
        size: usize,

        /// Base lattice resolution.
        #[arg(short, long, default_value_t = 8)]
        res: usize,

        /// Number of octaves per noise map.
        #[arg(long, default_value_t = 6)]
        octaves: u32,

        /// Amplitude multiplier per octave.
        #[arg(long, default_value_t = 0.55)]
        persistence: f64,

        /// Noise seed; omit for a fresh random planet.
        #[arg(long)]
        seed: Option<u64>,

        /// Output file path.
        #[arg(short, long, default_value = "planet.png")]
        output: PathBuf,
    },
    /// Print the biome classification table.
    Biomes,
}

fn run(cli: Cli) -> Result<(), CliError> {
    match cli.command {
        Command::Noise {
            res,
            width,
            height,
            octaves,
            persistence,
            lacunarity,
            tile,
            seed,
            output,
        } => {
            let params = OctaveParams {
                octaves,
                persistence,
                lacunarity,
            };
            let field =
                sample_octaves(res, res, width, height, &params, (tile, tile), seed)?;
            snapshot::write_field_png(&field, &output)?;

            if cli.json {
                let info = serde_json::json!({
                    "res": res,
                    "width": width,
                    "height": height,
                    "octaves": octaves,
                    "seed": seed,
                    "tile": tile,
                    "output": output.display().to_string(),
                });
                println!("{}", serde_json::to_string_pretty(&info)?);
            } else {
                eprintln!(
                    "rendered noise ({width}x{height}, res {res}, {octaves} octave(s), seed {seed}) -> {}",
                    output.display()
                );
            }
        }
        Command::Planet {
            size,
            res,
            octaves,
            persistence,
            seed,
            output,
        } => {
            let params = planet::PlanetParams {
                size,
                res,
                octaves,
                persistence,
                seed,
                ..planet::PlanetParams::default()
            };
            let texture = planet::generate(&params)?;
            snapshot::write_png(&texture, &output)?;

            if cli.json {
                let info = serde_json::json!({
                    "size": size,
                    "res": res,
                    "octaves": octaves,
                    "seed": seed,
                    "output": output.display().to_string(),
                });
                println!("{}", serde_json::to_string_pretty(&info)?);
            } else {
                eprintln!(
                    "rendered planet ({size}x{size}, res {res}, seed {}) -> {}",
                    seed.map_or_else(|| "random".to_string(), |s| s.to_string()),
                    output.display()
                );
            }
        }
        Command::Biomes => {
            if cli.json {
                println!("{}", serde_json::to_string_pretty(biome::BIOMES)?);
            } else {
                println!("Biomes (applied in order, later matches win):");
                for b in biome::BIOMES {
                    println!("  {:<12} {}", b.name, b.color_hex);
                }
            }
        }
    }

    Ok(())
}

fn main() {
    let cli = Cli::parse();
    let json_mode = cli.json;
    if let Err(e) = run(cli) {
        if json_mode {
            let j = serde_json::json!({"error": e.to_string(), "exit_code": e.exit_code()});
            eprintln!("{}", serde_json::to_string_pretty(&j).unwrap_or_default());
        } else {
            eprintln!("error: {e}");
        }
        process::exit(e.exit_code());
    }
}
