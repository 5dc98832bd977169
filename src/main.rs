use std::fs;
use std::path::PathBuf;
use std::process;

use clap::Parser;
use wad_tools::{level_to_svg, parse_wad};

#[derive(Parser, Debug)]
#[command(name = "wad-tools", about = "Render the levels of a WAD archive as SVG maps")]
struct Args {
    /// Input WAD file path
    #[arg(value_name = "FILE")]
    input: PathBuf,

    /// Directory the per-level SVG files are written into
    #[arg(long, default_value = ".")]
    out_dir: PathBuf,

    /// Output viewport width
    #[arg(long, default_value_t = 1024)]
    width: u32,

    /// Output viewport height
    #[arg(long, default_value_t = 1024)]
    height: u32,
}

fn main() {
    let args = Args::parse();

    let buffer = match fs::read(&args.input) {
        Ok(buffer) => buffer,
        Err(e) => {
            eprintln!("Error reading input file '{}': {}", args.input.display(), e);
            process::exit(2);
        }
    };

    let wad = match parse_wad(&buffer) {
        Ok(wad) => wad,
        Err(e) => {
            eprintln!("Error parsing WAD file: {}", e);
            process::exit(3);
        }
    };

    if wad.levels.is_empty() {
        eprintln!("No levels found in '{}'", args.input.display());
        process::exit(4);
    }

    for level in &wad.levels {
        let svg = match level_to_svg(level, args.width, args.height) {
            Ok(svg) => svg,
            Err(e) => {
                eprintln!("Error rendering level {}: {}", level.name, e);
                process::exit(5);
            }
        };

        let output_path = args.out_dir.join(format!("{}.svg", level.name));
        match fs::write(&output_path, &svg) {
            Ok(_) => {
                println!(
                    "Successfully rendered '{}' to '{}'",
                    level.name,
                    output_path.display()
                );
            }
            Err(e) => {
                eprintln!(
                    "Error writing output file '{}': {}",
                    output_path.display(),
                    e
                );
                process::exit(6);
            }
        }
    }
}
