//! Command line interface for generating pseudo-random `calt` features.
//!
//! Reads a TOML configuration and a glyph inventory (a font, or a text file
//! listing glyph names) and writes the feature code to stdout.

use std::path::Path;

use calt_gen::{Config, GlyphInventory, RenderMode};
use miette::miette;

fn main() -> miette::Result<()> {
    let args = flags::Args::from_env().map_err(|e| miette!("{e}"))?;
    init_logging(args.verbose);

    let mut config = Config::load(&args.config)
        .map_err(|e| miette!("failed to load config '{}': {e}", args.config.display()))?;
    apply_overrides(&mut config, &args);

    let inventory = load_inventory(&args)?;
    log::info!("loaded {} glyphs", inventory.len());

    let feature = calt_gen::compile(&config, &inventory).map_err(|e| miette!("{e}"))?;
    match &args.output {
        Some(path) => write_output(path, &feature),
        None => {
            println!("{feature}");
            Ok(())
        }
    }
}

fn init_logging(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();
}

fn apply_overrides(config: &mut Config, args: &flags::Args) {
    if let Some(seed) = args.seed {
        config.seed = seed;
    }
    if let Some(depth) = args.depth {
        config.depth = depth;
    }
    if let Some(partitions) = args.partitions {
        config.partitions = partitions;
    }
    if args.feature {
        config.mode = RenderMode::Feature;
    }
}

fn load_inventory(args: &flags::Args) -> miette::Result<GlyphInventory> {
    let (path, result) = match (&args.glyphs, &args.font) {
        (Some(path), None) => (path, GlyphInventory::load_text(path)),
        (None, Some(path)) => (path, GlyphInventory::load_font(path)),
        (Some(_), Some(_)) => return Err(miette!("pass only one of --glyphs and --font")),
        (None, None) => return Err(miette!("one of --glyphs or --font is required")),
    };
    result.map_err(|e| miette!("failed to load glyphs from '{}': {e}", path.display()))
}

fn write_output(path: &Path, feature: &str) -> miette::Result<()> {
    log::info!("writing {} bytes to {}", feature.len(), path.display());
    std::fs::write(path, feature)
        .map_err(|e| miette!("error writing '{}': {e}", path.display()))
}

mod flags {
    use std::path::PathBuf;

    xflags::xflags! {
        /// Generate a pseudo-random contextual alternates feature
        cmd args {
            /// TOML file with the glyph sets and settings
            required -c, --config config: PathBuf
            /// Text file listing the exported glyph names
            optional -g, --glyphs glyphs: PathBuf
            /// Compiled font to read the glyph names from
            optional -f, --font font: PathBuf
            /// Override the partition seed
            optional --seed seed: u64
            /// Override the lookahead depth
            optional --depth depth: usize
            /// Override the number of partitions
            optional -p, --partitions partitions: i64
            /// Wrap the output in a complete feature block
            optional --feature
            /// Write to this file instead of stdout
            optional -o, --output output: PathBuf
            /// Log progress
            optional -v, --verbose
        }
    }
}
