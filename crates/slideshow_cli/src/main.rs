//! Slideshow CLI - resolve image sequences and animation geometry
//!
//! ```bash
//! slideshow resolve /renders/shot_0001.png
//! slideshow resolve --mime --ext png /photos/holiday
//! slideshow resolve --json /renders/shot_%04d.png?begin:1
//! slideshow geometry --preset "Pan and zoom" --ttl 50
//! slideshow lumas
//! ```

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{ArgAction, Parser, Subcommand};

use slideshow_core::animation::generate_geometry;
use slideshow_core::clip::Timecode;
use slideshow_core::config::{ConfigManager, Settings};
use slideshow_core::logging::init_tracing;
use slideshow_core::models::{AnimationPreset, SelectionMethod, SequenceSpec};
use slideshow_core::sequence::{
    find_luma_files, preview_pattern_matches, spec_from_resource, LocalFs, SequenceResolver,
};

#[derive(Parser)]
#[command(name = "slideshow")]
#[command(about = "Resolve slideshow image sequences and pan/zoom geometry")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Config file (created with defaults if missing)
    #[arg(short, long, default_value = ".config/slideshow.toml", global = true)]
    config: PathBuf,

    /// More log output (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve a folder, filename pattern or stored resource into images
    Resolve {
        /// Folder (with --mime), example frame, or canonical resource
        path: String,

        /// Take every file with the extension in the folder
        #[arg(long)]
        mime: bool,

        /// Extension for --mime (default: configured image type)
        #[arg(long)]
        ext: Option<String>,

        /// List folder matches of the pattern instead of probing
        #[arg(long, conflicts_with = "mime")]
        preview: bool,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print the keyframe geometry of an animation preset
    Geometry {
        /// Preset name, e.g. "Pan", "Zoom, low-pass"
        #[arg(short, long, default_value = "Pan")]
        preset: String,

        /// Frames per image (default: configured image duration)
        #[arg(short, long)]
        ttl: Option<u32>,

        /// Frame rate used to read configured durations
        #[arg(long, default_value_t = 25.0)]
        fps: f64,
    },

    /// List luma transition files in the configured folders
    Lumas,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = ConfigManager::new(&cli.config);
    config
        .load_or_create()
        .with_context(|| format!("Failed to load config {}", cli.config.display()))?;
    let settings = config.settings().clone();

    let mut level = settings.logging.level;
    for _ in 0..cli.verbose {
        level = level.more_verbose();
    }
    init_tracing(level, settings.logging.with_target);

    tracing::debug!("Config: {}", config.path().display());
    tracing::debug!("Core version: {}", slideshow_core::version());

    match cli.command {
        Commands::Resolve {
            path,
            mime,
            ext,
            preview,
            json,
        } => run_resolve(&settings, &path, mime, ext, preview, json),
        Commands::Geometry { preset, ttl, fps } => run_geometry(&settings, &preset, ttl, fps),
        Commands::Lumas => run_lumas(&settings),
    }
}

fn run_resolve(
    settings: &Settings,
    path: &str,
    mime: bool,
    ext: Option<String>,
    preview: bool,
    json: bool,
) -> Result<()> {
    if preview {
        let files = preview_pattern_matches(&LocalFs, path)
            .with_context(|| format!("Invalid pattern '{}'", path))?;
        return print_files(&files, json);
    }

    let spec = if mime {
        let ext = ext.unwrap_or_else(|| settings.slideshow.image_type.extension().to_string());
        SequenceSpec::mime(path, ext)
    } else {
        spec_from_resource(path).with_context(|| format!("Invalid pattern '{}'", path))?
    };

    let resolver = SequenceResolver::new(settings.slideshow.resolver_options());
    let result = resolver.resolve(&spec);

    if result.is_empty() {
        tracing::warn!("No images found for {}", result.canonical_path);
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        println!("{}", result.canonical_path);
        for file in &result.files {
            println!("  {}", file.display());
        }
        let label = match spec.method {
            SelectionMethod::Mime => "image",
            SelectionMethod::Pattern => "frame",
        };
        println!("{} {}(s) found", result.len(), label);
    }
    Ok(())
}

fn run_geometry(settings: &Settings, preset: &str, ttl: Option<u32>, fps: f64) -> Result<()> {
    let preset: AnimationPreset = match preset.parse() {
        Ok(preset) => preset,
        Err(e) => bail!(e),
    };

    let ttl = match ttl {
        Some(ttl) => ttl,
        None => {
            let tc = Timecode::new(fps)?;
            settings.slideshow.default_ttl(SelectionMethod::Mime, &tc)?
        }
    };

    let geometry = generate_geometry(preset, ttl);
    if geometry.is_empty() {
        println!("{}: no animation, ttl {}", preset, geometry.ttl);
    } else {
        println!("{}", geometry);
        println!("ttl {}", geometry.ttl);
    }
    Ok(())
}

fn run_lumas(settings: &Settings) -> Result<()> {
    let folders = settings.slideshow.luma_paths();
    if folders.is_empty() {
        bail!("No luma folders configured (slideshow.luma_folders)");
    }
    let files = find_luma_files(&LocalFs, &folders);
    print_files(&files, false)
}

fn print_files(files: &[PathBuf], json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(files)?);
    } else {
        for file in files {
            println!("{}", file.display());
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_resolve_flags() {
        let cli = Cli::parse_from(["slideshow", "resolve", "--mime", "--ext", "png", "/photos"]);
        match cli.command {
            Commands::Resolve { path, mime, ext, .. } => {
                assert_eq!(path, "/photos");
                assert!(mime);
                assert_eq!(ext.as_deref(), Some("png"));
            }
            _ => panic!("expected resolve"),
        }
    }

    #[test]
    fn parses_geometry_defaults() {
        let cli = Cli::parse_from(["slideshow", "-vv", "geometry", "--ttl", "10"]);
        assert_eq!(cli.verbose, 2);
        match cli.command {
            Commands::Geometry { preset, ttl, fps } => {
                assert_eq!(preset, "Pan");
                assert_eq!(ttl, Some(10));
                assert_eq!(fps, 25.0);
            }
            _ => panic!("expected geometry"),
        }
    }
}
