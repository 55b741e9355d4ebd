mod canvas;
mod collage;
mod encode;
mod errors;
mod layout;
mod normalize;
mod selection;
mod timer;

use crate::{
    collage::create_collage,
    selection::Selection,
};

use clap::{ ArgAction, Parser };

use tracing::{ info, warn };

use tracing_subscriber::EnvFilter;

use std::{
    num::NonZeroUsize,
    path::PathBuf,
};

pub const DEFAULT_OUTPUT: &str = "collage.jpg";

#[derive(Parser, Debug)]
#[clap(author, version, about = "Arrange images into a grid collage", long_about = None)]
struct Args {
    /// Images to arrange, in placement order
    images: Vec<PathBuf>,
    /// Extra images appended after the others; non-images and repeats are skipped
    #[arg(short, long, num_args = 1..)]
    add: Vec<PathBuf>,
    /// Output file; .png writes PNG, anything else JPEG
    #[arg(short, long, default_value = DEFAULT_OUTPUT)]
    output: PathBuf,
    /// Images per row: "auto" or a positive number
    #[arg(short = 'r', long, default_value = "auto", value_parser = parse_per_row)]
    per_row: PerRow,
    /// Print the grid layout as JSON
    #[arg(long)]
    print_layout: bool,
    /// Open the collage when done
    #[arg(long)]
    open: bool,
    /// More logging (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct PerRow(Option<NonZeroUsize>);

fn parse_per_row(s: &str) -> Result<PerRow, String> {
    if s.eq_ignore_ascii_case("auto") {
        return Ok(PerRow(None));
    }
    s.parse::<NonZeroUsize>()
        .map(|n| PerRow(Some(n)))
        .map_err(|_| format!("expected \"auto\" or a positive number, got \"{s}\""))
}

fn init_logging(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default)),
        )
        .with_target(false)
        .init();
}

pub fn main() -> Result<(), String> {
    let args = Args::parse();
    init_logging(args.verbose);

    let mut selection = Selection::new();
    selection.replace(args.images);
    if !args.add.is_empty() {
        let added = selection.append_dropped(args.add);
        info!("Added {} image(s), total {}", added, selection.len());
    }

    if !selection.can_export() {
        return Err("No images: please select images first".to_string());
    }

    let layout = create_collage(selection.paths(), &args.output, args.per_row.0)
        .map_err(|e| format!("Failed to create collage: {e}"))?;

    if args.print_layout {
        let json = serde_json::to_string_pretty(&layout).map_err(|e| e.to_string())?;
        println!("{json}");
    }
    println!("Collage saved to {}", args.output.display());

    if args.open {
        if let Err(e) = open::that(&args.output) {
            warn!("Could not open {}: {}", args.output.display(), e);
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn per_row_values() {
        assert_eq!(parse_per_row("auto"), Ok(PerRow(None)));
        assert_eq!(parse_per_row("Auto"), Ok(PerRow(None)));
        assert_eq!(parse_per_row("3"), Ok(PerRow(NonZeroUsize::new(3))));
        assert!(parse_per_row("0").is_err());
        assert!(parse_per_row("-2").is_err());
        assert!(parse_per_row("many").is_err());
    }

    #[test]
    fn args_defaults() {
        let args = Args::try_parse_from(["collagemaker", "a.jpg", "b.png"]).unwrap();
        assert_eq!(args.images, vec![PathBuf::from("a.jpg"), PathBuf::from("b.png")]);
        assert_eq!(args.output, PathBuf::from(DEFAULT_OUTPUT));
        assert_eq!(args.per_row, PerRow(None));
        assert!(!args.open && !args.print_layout);
    }

    #[test]
    fn args_added_and_per_row() {
        let args = Args::try_parse_from([
            "collagemaker", "-r", "2", "-o", "out.png", "a.jpg", "--add", "c.jpg", "d.gif",
        ]).unwrap();
        assert_eq!(args.per_row, PerRow(NonZeroUsize::new(2)));
        assert_eq!(args.output, PathBuf::from("out.png"));
        assert_eq!(args.images, vec![PathBuf::from("a.jpg")]);
        assert_eq!(args.add, vec![PathBuf::from("c.jpg"), PathBuf::from("d.gif")]);
    }

    #[test]
    fn zero_per_row_is_rejected() {
        assert!(Args::try_parse_from(["collagemaker", "-r", "0", "a.jpg"]).is_err());
    }
}
