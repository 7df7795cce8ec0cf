use std::path::PathBuf;

use clap::{Parser, Subcommand};
use colour_engine::{
    format_as, generate_harmony, generate_shade_ramp, nearest_name, ColourFormat, HarmonyKind,
    Oklch, PaletteEntry, SHADE_STEPS,
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use colourpicker::error::AppError;
use colourpicker::input::parse_colour;
use colourpicker::models::{AppConfig, ColourScheme, RecentColours, CONFIG_ENV_VAR};
use colourpicker::services::{ColourPicker, JsonFileStore, PaletteView};

#[derive(Parser)]
#[command(name = "colourpicker")]
#[command(about = "OKLCH colour picker - inspect colours, convert formats, build palettes")]
struct Cli {
    /// YAML config file (defaults to $COLOURPICKER_CONFIG)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Render palette colours as oklch() for wide-gamut displays
    #[arg(long, global = true)]
    wide_gamut: bool,

    /// Output format: hex, rgb, hsl or oklch
    #[arg(long, global = true)]
    format: Option<ColourFormat>,

    /// Colour scheme: light, dark or system
    #[arg(long, global = true)]
    scheme: Option<ColourScheme>,

    /// Print JSON instead of text
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Show every format, the gamut and the nearest name for a colour
    Inspect {
        /// Colour as hex, oklch(), rgb(), hsl(), a name or "l c h"
        #[arg(required = true, num_args = 1.., allow_hyphen_values = true)]
        colour: Vec<String>,

        /// Also add the colour to the recent colours
        #[arg(long)]
        save: bool,
    },
    /// Print the 11-step shade ramp of a colour
    Shades {
        #[arg(required = true, num_args = 1.., allow_hyphen_values = true)]
        colour: Vec<String>,

        /// Invert lightness, as for a light colour scheme
        #[arg(long)]
        invert: bool,
    },
    /// Print harmony strips rotated from a colour's hue
    Harmony {
        #[arg(required = true, num_args = 1.., allow_hyphen_values = true)]
        colour: Vec<String>,

        /// monochromatic, complementary, triadic or analogous
        #[arg(long, default_value_t = HarmonyKind::Monochromatic)]
        kind: HarmonyKind,
    },
    /// Generate random starting colours
    Random {
        #[arg(long, default_value_t = 1)]
        count: usize,

        /// Seed for reproducible output
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Manage the recent colours
    Recent {
        #[command(subcommand)]
        action: Option<RecentAction>,
    },
}

#[derive(Subcommand)]
enum RecentAction {
    /// List recent colours, newest first
    List,
    /// Add a colour to the front of the list
    Add {
        #[arg(required = true, num_args = 1.., allow_hyphen_values = true)]
        colour: Vec<String>,
    },
    /// Forget all recent colours
    Clear,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Minimal logging for CLI
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "colourpicker=warn,colour_engine=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().without_time())
        .init();

    let mut config = AppConfig::load(cli.config.as_deref());
    if let Some(format) = cli.format {
        config.format = format;
    }
    if let Some(scheme) = cli.scheme {
        config.scheme = scheme;
    }
    config.wide_gamut |= cli.wide_gamut;

    let result = match cli.command {
        Some(Commands::Inspect { colour, save }) => run_inspect(&config, &colour, save, cli.json),
        Some(Commands::Shades { colour, invert }) => {
            run_shades(&config, &colour, invert, cli.json)
        }
        Some(Commands::Harmony { colour, kind }) => run_harmony(&config, &colour, kind, cli.json),
        Some(Commands::Random { count, seed }) => run_random(&config, count, seed, cli.json),
        Some(Commands::Recent { action }) => {
            run_recent(&config, action.unwrap_or(RecentAction::List), cli.json)
        }
        None => {
            run_status_command(&config);
            Ok(())
        }
    };

    Ok(result?)
}

fn read_colour(words: &[String]) -> Result<Oklch, AppError> {
    Ok(parse_colour(&words.join(" "))?)
}

fn print_json<T: serde::Serialize>(value: &T) -> Result<(), AppError> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn print_entries(entries: &[PaletteEntry]) {
    for entry in entries {
        println!("  {:<24} {}", entry.id, entry.css);
    }
}

/// Show one colour in every format
fn run_inspect(
    config: &AppConfig,
    words: &[String],
    save: bool,
    json: bool,
) -> Result<(), AppError> {
    let colour = read_colour(words)?;
    let picker = ColourPicker::from_config(config, colour);
    let view = picker.view()?;

    if save {
        let store = JsonFileStore::new(&config.history_file);
        let mut recent = RecentColours::load(&store)?;
        recent.add(colour);
        recent.save(&store)?;
        tracing::info!(count = recent.len(), "Saved colour to recent colours");
    }

    if json {
        return print_json(&view);
    }

    print_view(&view, picker.format());
    Ok(())
}

fn print_view(view: &PaletteView, format: ColourFormat) {
    println!("{}", view.name);
    println!("  current  {}", view.string_for(format));
    println!("  space    {}", view.space);
    println!("  hex      {}", view.hex);
    println!("  rgb      {}", view.rgb);
    println!("  hsl      {}", view.hsl);
    println!("  oklch    {}", view.oklch);
    println!("  display  {}", view.display);
    println!("  text     {}", view.contrast);

    println!("\nShades:");
    print_entries(&view.shades);

    println!("\nSliders:");
    println!("  lightness 0.5  {}", view.sliders.lightness05);
    println!("  chroma 0       {}", view.sliders.chroma0);
    println!("  chroma 0.4     {}", view.sliders.chroma04);
    println!("  hue 0          {}", view.sliders.hue0);
}

/// Print the shade ramp of a colour
fn run_shades(
    config: &AppConfig,
    words: &[String],
    invert: bool,
    json: bool,
) -> Result<(), AppError> {
    let colour = read_colour(words)?;
    let picker = ColourPicker::from_config(config, colour);
    let invert = invert || picker.effective_scheme() == ColourScheme::Light;
    let ramp = generate_shade_ramp(&colour, &SHADE_STEPS, invert, config.wide_gamut)?;

    if json {
        return print_json(&ramp);
    }

    println!("Shades of {}:", format_as(&colour, config.format)?);
    print_entries(&ramp);
    Ok(())
}

/// Print harmony strips for a colour
fn run_harmony(
    config: &AppConfig,
    words: &[String],
    kind: HarmonyKind,
    json: bool,
) -> Result<(), AppError> {
    let colour = read_colour(words)?;
    let strips = generate_harmony(&colour, kind, config.wide_gamut)?;

    if json {
        return print_json(&strips);
    }

    println!("{kind} harmony of {}:", format_as(&colour, config.format)?);
    for strip in &strips {
        match strip.hue {
            Some(hue) => println!("\nHue {hue}:"),
            None => println!("\nNo hue:"),
        }
        print_entries(&strip.entries);
    }
    Ok(())
}

/// Print random colours from the configured sampler
fn run_random(
    config: &AppConfig,
    count: usize,
    seed: Option<u64>,
    json: bool,
) -> Result<(), AppError> {
    let colours: Vec<Oklch> = match seed {
        Some(seed) => {
            let mut rng = StdRng::seed_from_u64(seed);
            (0..count).map(|_| config.sampler.sample_with(&mut rng)).collect()
        }
        None => {
            let mut rng = rand::thread_rng();
            (0..count).map(|_| config.sampler.sample_with(&mut rng)).collect()
        }
    };

    if json {
        return print_json(&colours);
    }

    for colour in &colours {
        println!("{:<40} {}", format_as(colour, config.format)?, nearest_name(colour));
    }
    Ok(())
}

/// List, extend or clear the recent colours
fn run_recent(config: &AppConfig, action: RecentAction, json: bool) -> Result<(), AppError> {
    let store = JsonFileStore::new(&config.history_file);
    let mut recent = RecentColours::load(&store)?;

    match action {
        RecentAction::List => {}
        RecentAction::Add { colour } => {
            recent.add(read_colour(&colour)?);
            recent.save(&store)?;
        }
        RecentAction::Clear => {
            recent.clear();
            recent.save(&store)?;
        }
    }

    if json {
        return print_json(&recent);
    }

    if recent.is_empty() {
        println!("No recent colours");
    }
    for colour in recent.list() {
        println!("{:<40} {}", format_as(colour, config.format)?, nearest_name(colour));
    }
    Ok(())
}

/// Show version and effective settings
fn run_status_command(config: &AppConfig) {
    const VERSION: &str = env!("CARGO_PKG_VERSION");

    let config_file = std::env::var(CONFIG_ENV_VAR).ok();

    println!("colourpicker v{VERSION}");
    println!("OKLCH colour picker for the terminal\n");

    println!("Environment Variables:");
    println!(
        "  {CONFIG_ENV_VAR} = {}",
        config_file.as_deref().unwrap_or("(not set)")
    );

    println!("\nSettings:");
    println!("  format       = {}", config.format);
    println!("  scheme       = {}", config.scheme);
    println!("  wide gamut   = {}", config.wide_gamut);
    println!("  history file = {}", config.history_file.display());

    let store = JsonFileStore::new(&config.history_file);
    match RecentColours::load(&store) {
        Ok(recent) => println!("  recent       = {} colour(s)", recent.len()),
        Err(e) => println!("  recent       = unreadable ({e})"),
    }

    println!("\nRun 'colourpicker --help' for commands.");
}
