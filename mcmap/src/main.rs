use libmcmap::{MapMetadata, DATA_VERSION, PREVIEW_FILE_NAME};
use mcmap::{default_image_output, image_to_map, map_to_image};
use std::path::PathBuf;
use tracing::{info, Level};

use anyhow::Result;
use clap::{Parser, Subcommand};

#[cfg(not(debug_assertions))]
const DEFAULT_DEBUG_LEVEL: u8 = 1;
#[cfg(debug_assertions)]
const DEFAULT_DEBUG_LEVEL: u8 = 99;

#[derive(Parser)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Turn debugging information on
    #[arg(short, long, default_value_t = DEFAULT_DEBUG_LEVEL, action = clap::ArgAction::Count)]
    verbosity: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// converts an image to a map data file (map_<id>.dat)
    #[command(name = "imgmap")]
    ImageToMap {
        /// The image
        img_file: PathBuf,
        /// The map id, used in the output file name
        #[arg(short, long, default_value_t = 0)]
        id: u32,
        /// The directory the map file is written to
        #[arg(short, long, default_value = ".")]
        output_dir: PathBuf,
        /// Also write a png of the quantized map
        #[arg(short, long, num_args = 0..=1, default_missing_value = PREVIEW_FILE_NAME)]
        preview: Option<PathBuf>,
        /// DataVersion stamped into the map file
        #[arg(long, default_value_t = DATA_VERSION)]
        data_version: i32,
        /// Quantize on all cores
        #[arg(long)]
        parallel: bool,
    },

    /// renders a map data file to a png
    #[command(name = "mapimg")]
    MapToImage {
        /// The map data file
        map_file: PathBuf,
        /// The output file name
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}
fn main() -> Result<()> {
    let cli = Cli::parse();
    let level = match cli.verbosity {
        0 => Level::ERROR,
        1 => Level::WARN,
        2 => Level::INFO,
        3 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_file(true)
        .with_line_number(true)
        .init();

    match cli.command {
        Commands::ImageToMap {
            img_file,
            id,
            output_dir,
            preview,
            data_version,
            parallel,
        } => {
            let metadata = MapMetadata::builder().data_version(data_version).build();
            let written = image_to_map(
                &img_file,
                &output_dir,
                id,
                preview.as_deref(),
                metadata,
                parallel,
            )?;
            info!("map written to {}", written.display());
        }
        Commands::MapToImage { map_file, output } => {
            let output = output.unwrap_or_else(|| default_image_output(&map_file));
            info!("output name: {}", output.display());
            map_to_image(&map_file, &output)?;
        }
    }
    Ok(())
}
