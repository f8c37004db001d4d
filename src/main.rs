//! Summerfall - Entry Point
//!
//! Loads the generator config and preset library, generates one floor and
//! prints it.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;

use summerfall::data::export_default_data;
use summerfall::{Floor, Generator, GeneratorConfig, PresetLibrary};

#[derive(Parser, Debug)]
#[command(name = "summerfall", version, about = "Generate a floor of Castle Summerfall")]
struct Args {
    /// Number of room columns
    #[arg(long, default_value_t = 4)]
    width: usize,

    /// Number of room rows
    #[arg(long, default_value_t = 4)]
    height: usize,

    /// Seed for reproducible floors
    #[arg(long)]
    seed: Option<u64>,

    /// Preset manifest, overriding the one named in the config
    #[arg(long)]
    manifest: Option<PathBuf>,

    /// Generator config file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Print the floor as JSON
    #[arg(long)]
    json: bool,

    /// Write the built-in presets and a manifest to this directory, then exit
    #[arg(long, value_name = "DIR")]
    export_defaults: Option<PathBuf>,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();

    if let Some(dir) = &args.export_defaults {
        export_default_data(dir).with_context(|| format!("exporting presets to {}", dir.display()))?;
        log::info!("Exported built-in presets to {}", dir.display());
        return Ok(());
    }

    let mut config = match &args.config {
        Some(path) => GeneratorConfig::load(path).with_context(|| format!("loading config {}", path.display()))?,
        None => GeneratorConfig::default(),
    };
    if let Some(manifest) = args.manifest {
        config = config.with_manifest(manifest);
    }

    let library = PresetLibrary::load_or_default(&config.manifest_path);
    for issue in library.validate() {
        log::warn!("{}", issue);
    }

    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let generator = Generator::new(&library, &config);
    let floor = generator.generate_floor(args.width, args.height, &mut rng);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&floor)?);
    } else {
        print_summary(&floor);
    }
    Ok(())
}

fn print_summary(floor: &Floor) {
    println!("Floor {}x{}", floor.width(), floor.height());
    for ((x, y), room) in floor.rooms() {
        let mut marks = String::new();
        if room.is_boss {
            marks.push_str(" [boss]");
        }
        if room.has_stairs {
            marks.push_str(" [stairs]");
        }
        println!("({}, {}){} {}", x, y, marks, room.description);

        for item in &room.items {
            match item.inventory() {
                Some(inventory) => println!("    {} ({} inside)", item.name, inventory.len()),
                None => println!("    {}", item.name),
            }
        }
        for npc in floor.npcs_at(x, y) {
            let mark = if npc.alliance.is_hostile() { '!' } else { '?' };
            println!("    {} {} ({})", mark, npc.name, npc.alliance.name());
        }
    }
}
