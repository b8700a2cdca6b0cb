//! huedo: control Philips Hue lights from the command line.
//!
//! Run with: huedo --help

use std::path::PathBuf;
use std::time::Duration;

use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use serde_json::Value;
use tracing_subscriber::EnvFilter;

use huedo::{
    Brightness, Error, Hue, HueClient, HueConfig, Light, LightState, Method, PairingOptions, PowerMode,
    Saturation, ToggleTarget,
};

#[derive(Parser)]
#[command(name = "huedo", version)]
#[command(about = "Control Philips Hue lights from the command line", long_about = None)]
struct Cli {
    /// Config file holding the bridge address and username
    #[arg(short, long, global = true, env = "HUEDO_CONFIG")]
    config: Option<PathBuf>,

    /// Log more (-v info, -vv debug, -vvv trace); RUST_LOG overrides
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Pair with a bridge and store its username
    Init {
        /// IP address of the bridge
        hub_ip: String,

        /// Pairing requests to send before giving up
        #[arg(long, default_value_t = 30, value_parser = clap::value_parser!(u32).range(1..))]
        attempts: u32,

        /// Seconds between pairing requests
        #[arg(long, default_value_t = 1)]
        interval: u64,
    },

    /// List lights on the bridge or configured light groups
    List {
        #[arg(value_enum)]
        thing: Thing,
    },

    /// Toggle a light by id, or every light in a configured group
    Toggle {
        /// Light id or light group name
        target: ToggleTarget,
    },

    /// Show details of a single light
    Show {
        light_id: u32,
    },

    /// Set the state of a single light
    Set {
        light_id: u32,

        /// Power state (on/off)
        #[arg(long)]
        state: Option<PowerMode>,

        /// Hue (0-65535)
        #[arg(long)]
        hue: Option<u16>,

        /// Brightness (1-254)
        #[arg(long, value_parser = clap::value_parser!(u8).range(1..=254))]
        brightness: Option<u8>,

        /// Saturation (0-254)
        #[arg(long, value_parser = clap::value_parser!(u8).range(0..=254))]
        saturation: Option<u8>,
    },

    /// Send a request straight to the bridge and print the JSON reply
    Raw {
        /// Resource path below the username, e.g. `lights/1/state`
        fragment: String,

        /// HTTP method
        #[arg(default_value = "GET", value_parser = Method::parse)]
        method: Method,

        /// JSON request body
        #[arg(default_value = "{}")]
        body: String,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum Thing {
    Lights,
    Groups,
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run(cli: Cli) -> Result<(), Error> {
    let config = match &cli.config {
        Some(path) => HueConfig::load(path)?,
        None => HueConfig::load_default()?,
    };

    let mut client = HueClient::from_config(config)?;

    match cli.command {
        Commands::Init {
            hub_ip,
            attempts,
            interval,
        } => {
            let options = PairingOptions {
                attempts,
                interval: Duration::from_secs(interval),
            };
            println!("Press the link button on the bridge at {}...", hub_ip);
            client.pair(&hub_ip, &options)?;

            let path = client
                .config()
                .path()
                .map(|p| p.display().to_string())
                .unwrap_or_default();
            println!("Paired with bridge at {}; credentials saved to {}", hub_ip, path);
        }

        Commands::List {
            thing: Thing::Lights,
        } => {
            let lights = client.get_lights()?;
            let mut rows = vec![vec!["ID".to_string(), "Name".to_string()]];
            rows.extend(
                lights
                    .iter()
                    .map(|(id, light)| vec![id.to_string(), light.name().to_string()]),
            );
            print_table(&rows, true);
        }

        Commands::List {
            thing: Thing::Groups,
        } => list_groups(client.config()),

        Commands::Toggle { target } => {
            client.toggle(&target)?;
            println!("Toggled {}", target);
        }

        Commands::Show { light_id } => {
            let light = client.get_light_info(light_id)?;
            print_table(&light_details(&light), false);
        }

        Commands::Set {
            light_id,
            state,
            hue,
            brightness,
            saturation,
        } => {
            let mut light_state = LightState::new();
            if let Some(power) = state {
                light_state.power(&power);
            }
            if let Some(hue) = hue.and_then(Hue::create) {
                light_state.hue(&hue);
            }
            if let Some(brightness) = brightness.and_then(Brightness::create) {
                light_state.brightness(&brightness);
            }
            if let Some(saturation) = saturation.and_then(Saturation::create) {
                light_state.saturation(&saturation);
            }

            if !light_state.is_valid() {
                println!("Nothing to set for light {}", light_id);
                return Ok(());
            }

            client.set_light_state(light_id, &light_state)?;
            println!("Light {} updated", light_id);
        }

        Commands::Raw {
            fragment,
            method,
            body,
        } => {
            let body: Value = serde_json::from_str(&body).map_err(Error::InvalidBody)?;
            let res = client.call(method, &fragment, Some(&body))?;
            println!("{}", res);
        }
    }

    Ok(())
}

fn light_details(light: &Light) -> Vec<Vec<String>> {
    let status = light.status();
    let or_na = |v: Option<String>| v.unwrap_or_else(|| "N/A".to_string());

    vec![
        vec!["Name:".to_string(), light.name().to_string()],
        vec![
            "Software Version:".to_string(),
            or_na(light.software_version().map(String::from)),
        ],
        vec![
            "State:".to_string(),
            if status.is_on() { "On" } else { "Off" }.to_string(),
        ],
        vec![
            "Hue:".to_string(),
            or_na(status.hue().map(|h| h.value().to_string())),
        ],
        vec![
            "Brightness:".to_string(),
            or_na(status.raw_brightness().map(|b| b.to_string())),
        ],
        vec![
            "Saturation:".to_string(),
            or_na(status.saturation().map(|s| s.value().to_string())),
        ],
    ]
}

fn list_groups(config: &HueConfig) {
    if config.lightgroups.is_empty() {
        println!("No light groups configured.");
        return;
    }

    let mut rows = vec![vec!["Name".to_string(), "Lights".to_string()]];
    for (name, group) in &config.lightgroups {
        let lights: Vec<String> = group.lights.iter().map(u32::to_string).collect();
        rows.push(vec![name.clone(), lights.join(", ")]);
    }
    print_table(&rows, true);
}

/// Prints a borderless table, optionally underlining the first row.
fn print_table(rows: &[Vec<String>], header: bool) {
    let columns = rows.iter().map(Vec::len).max().unwrap_or(0);
    let widths: Vec<usize> = (0..columns)
        .map(|c| {
            rows.iter()
                .filter_map(|row| row.get(c))
                .map(|cell| cell.chars().count())
                .max()
                .unwrap_or(0)
        })
        .collect();

    for (i, row) in rows.iter().enumerate() {
        let line: Vec<String> = row
            .iter()
            .zip(&widths)
            .map(|(cell, width)| format!("{:<width$}", cell, width = *width))
            .collect();
        println!("{}", line.join("  ").trim_end());

        if header && i == 0 {
            let rule = widths.iter().sum::<usize>() + 2 * widths.len().saturating_sub(1);
            println!("{}", "-".repeat(rule));
        }
    }
}
