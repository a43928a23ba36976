//! Design Garden CLI
//!
//! Thin shell around designgarden-core: feeds selections into the theme store,
//! prints state and layout suggestions, and writes the applied stylesheet.
//!
//! ## Usage
//!
//! ```bash
//! # List the built-in palettes and font pairings
//! designgarden palettes
//! designgarden fonts
//!
//! # Show the saved theme and its layout suggestions
//! designgarden show
//!
//! # Preview suggestions for any combination without saving
//! designgarden suggest --palette "Ocean Blue" --font Technical
//!
//! # Select, apply and save; optionally write the stylesheet
//! designgarden apply --palette "Sunset Orange" --font Elegant --css-out theme.css
//! designgarden apply --custom-primary "262 83% 60%"
//! designgarden apply --toggle-dark
//!
//! # Print the stylesheet for the saved theme
//! designgarden css
//!
//! # Go back to the defaults
//! designgarden reset
//! ```

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use designgarden_core::catalog::{self, font_pairings, palettes};
use designgarden_core::{
    hsl_css, recommended, suggest_layouts, GardenError, HeadlessDocument, LayoutSuggestion,
    RedbStore, ThemeState, ThemeStore,
};

/// Name of the preference database inside the data directory
const STORE_FILE: &str = "preferences.redb";

/// Design Garden - theme customizer
#[derive(Parser)]
#[command(name = "designgarden")]
#[command(version = "0.1.0")]
#[command(about = "Design Garden - pick a palette and font pairing, preview layouts, apply")]
struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Data directory (default: platform data dir/designgarden)
    #[arg(short, long, global = true)]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List color palettes
    Palettes,

    /// List font pairings
    Fonts,

    /// Show the saved theme and layout suggestions
    Show,

    /// Layout suggestions for a palette/font combination (nothing is saved)
    Suggest {
        /// Palette name (default: saved palette)
        #[arg(short, long)]
        palette: Option<String>,
        /// Font pairing name (default: saved font pairing)
        #[arg(short, long)]
        font: Option<String>,
    },

    /// Select and apply a theme, then save it
    Apply {
        /// Palette name
        #[arg(short, long)]
        palette: Option<String>,
        /// Font pairing name
        #[arg(short, long)]
        font: Option<String>,
        /// Override the primary color (format: "H S% L%")
        #[arg(short, long)]
        custom_primary: Option<String>,
        /// Flip dark mode
        #[arg(long)]
        toggle_dark: bool,
        /// Write the resulting stylesheet to this file
        #[arg(long)]
        css_out: Option<PathBuf>,
    },

    /// Print the stylesheet for the saved theme
    Css,

    /// Restore and save the default theme
    Reset,
}

fn setup_logging(verbosity: u8) {
    let filter = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter)),
        )
        .init();
}

/// Get the default data directory (<data dir>/designgarden)
fn default_data_dir() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("designgarden")
}

fn open_store(data_dir: &Path) -> Result<RedbStore> {
    let path = data_dir.join(STORE_FILE);
    RedbStore::open(&path).with_context(|| format!("Failed to open {}", path.display()))
}

/// Turn a catalog lookup error into a message listing the valid names.
fn explain_unknown(err: GardenError) -> anyhow::Error {
    let valid: Vec<&str> = match err {
        GardenError::UnknownPalette(_) => palettes().iter().map(|p| p.name.as_str()).collect(),
        GardenError::UnknownFontPairing(_) => {
            font_pairings().iter().map(|f| f.name.as_str()).collect()
        }
        _ => return err.into(),
    };
    anyhow::anyhow!("{}. Must be one of: {}", err, valid.join(", "))
}

fn print_state(state: &ThemeState) {
    let theme = &state.theme;
    println!("Theme: {}", theme.name);
    println!("  primary:    {}", hsl_css(&theme.primary));
    println!("  secondary:  {}", hsl_css(&theme.secondary));
    println!("  accent:     {}", hsl_css(&theme.accent));
    println!("  background: {}", hsl_css(&theme.background));
    println!("  foreground: {}", hsl_css(&theme.foreground));
    println!("Font pairing: {}", state.font_pairing.name);
    println!("  display: {}", state.font_pairing.display);
    println!("  body:    {}", state.font_pairing.body);
    println!("Dark mode: {}", if state.dark_mode { "on" } else { "off" });
}

fn print_suggestions(suggestions: &[LayoutSuggestion]) {
    println!("Layout suggestions:");
    for layout in suggestions {
        let marker = if layout.suitable { "★" } else { " " };
        println!("  {} {:<11} {}", marker, layout.name, layout.description);
        println!("      {}", layout.preview_class);
    }
    let names: Vec<&str> = recommended(suggestions).iter().map(|s| s.name).collect();
    println!("Recommended: {}", names.join(", "));
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose);

    let data_dir = cli.data_dir.unwrap_or_else(default_data_dir);
    tracing::debug!(data_dir = %data_dir.display(), "using data directory");

    match cli.command {
        Commands::Palettes => {
            let store = ThemeStore::hydrate(open_store(&data_dir)?);
            let active = &store.state().theme.name;

            for palette in palettes() {
                let marker = if &palette.name == active { "*" } else { " " };
                println!("{} {:<15} {}", marker, palette.name, hsl_css(&palette.primary));
            }
            if store.state().theme.is_custom() {
                println!(
                    "* {:<15} {}",
                    store.state().theme.name,
                    hsl_css(&store.state().theme.primary)
                );
            }
        }

        Commands::Fonts => {
            let store = ThemeStore::hydrate(open_store(&data_dir)?);
            let active = &store.state().font_pairing.name;

            for pairing in font_pairings() {
                let marker = if &pairing.name == active { "*" } else { " " };
                println!("{} {:<10} {} / {}", marker, pairing.name, pairing.display, pairing.body);
            }
        }

        Commands::Show => {
            let store = ThemeStore::hydrate(open_store(&data_dir)?);
            print_state(store.state());
            println!();
            print_suggestions(store.suggestions());
        }

        Commands::Suggest { palette, font } => {
            let store = ThemeStore::hydrate(open_store(&data_dir)?);
            let palette = match palette {
                Some(name) => catalog::find_palette(&name).map_err(explain_unknown)?.clone(),
                None => store.state().theme.clone(),
            };
            let font = match font {
                Some(name) => catalog::find_font_pairing(&name)
                    .map_err(explain_unknown)?
                    .clone(),
                None => store.state().font_pairing.clone(),
            };

            println!("Palette: {}  Font pairing: {}", palette.name, font.name);
            print_suggestions(&suggest_layouts(&palette, &font));
        }

        Commands::Apply {
            palette,
            font,
            custom_primary,
            toggle_dark,
            css_out,
        } => {
            // Resolve names before touching anything so a typo changes nothing
            let palette = palette
                .map(|name| catalog::find_palette(&name).map(Clone::clone))
                .transpose()
                .map_err(explain_unknown)?;
            let font = font
                .map(|name| catalog::find_font_pairing(&name).map(Clone::clone))
                .transpose()
                .map_err(explain_unknown)?;

            let mut doc = HeadlessDocument::seeded(&catalog::default_palette());
            let mut store = ThemeStore::restore(open_store(&data_dir)?, &mut doc);
            store.subscribe(|event| println!("{}", event.notice()));

            if let Some(palette) = palette {
                store.set_palette(palette);
            }
            if let Some(font) = font {
                store.set_font_pairing(font);
            }
            if let Some(primary) = custom_primary {
                store.set_custom_primary_color(primary);
            }
            if toggle_dark {
                store.toggle_dark_mode();
            }

            store.apply_theme(&mut doc);

            println!();
            print_state(store.state());

            if let Some(path) = css_out {
                std::fs::write(&path, doc.to_stylesheet())
                    .with_context(|| format!("Failed to write {}", path.display()))?;
                println!("Stylesheet written to {}", path.display());
            }
        }

        Commands::Css => {
            let mut doc = HeadlessDocument::seeded(&catalog::default_palette());
            ThemeStore::restore(open_store(&data_dir)?, &mut doc);
            print!("{}", doc.to_stylesheet());
        }

        Commands::Reset => {
            let mut store = ThemeStore::new(open_store(&data_dir)?);
            store.apply_theme(&mut HeadlessDocument::new());
            println!("Theme reset to defaults");
            print_state(store.state());
        }
    }

    Ok(())
}
