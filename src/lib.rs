//! # huedo
//!
//! A small blocking client for the Philips Hue bridge's local HTTP API.
//!
//! The crate pairs with a bridge, keeps the bridge address and username in a
//! YAML config file, and maps each operation onto a single REST call.
//!
//! ## Quick Start
//!
//! ```no_run
//! use huedo::{Brightness, HueClient, LightState, PowerMode};
//!
//! fn dim_desk() -> Result<(), huedo::Error> {
//!     // Reads ~/.config/huedo.yaml (or $HUEDO_CONFIG)
//!     let client = HueClient::new()?;
//!
//!     let mut state = LightState::from(&PowerMode::On);
//!     state.brightness(&Brightness::create(64).unwrap());
//!     client.set_light_state(1, &state)?;
//!     Ok(())
//! }
//! ```
//!
//! ## Pairing
//!
//! A bridge only hands out a username after its link button is pressed.
//! [`HueClient::pair`] keeps asking for one until the button is pressed or the
//! [`PairingOptions`] run out, then saves it to the config file.
//!
//! ```no_run
//! use huedo::{HueClient, PairingOptions};
//!
//! let mut client = HueClient::new()?;
//! let username = client.pair("192.168.1.20", &PairingOptions::default())?;
//! # Ok::<(), huedo::Error>(())
//! ```
//!
//! ## Communication
//!
//! Requests go to `https://<bridge>/api/<username>/<resource>`. The bridge
//! presents a self-signed certificate, which [`HttpTransport`] accepts.
//! Other transports can be plugged in through the [`Transport`] trait.

mod client;
mod config;
mod errors;
mod light;
mod method;
mod response;
mod state;
mod status;
mod target;
pub mod transport;
mod types;

// Re-export public API
pub use client::{HueClient, PairingOptions};
pub use config::{CONFIG_ENV, HubConfig, HueConfig, LightGroup, default_config_path};
pub use errors::Error;
pub use light::{Light, Lights};
pub use method::Method;
pub use response::{ApiError, ApiResult, LINK_BUTTON_NOT_PRESSED};
pub use state::LightState;
pub use status::LightStatus;
pub use target::ToggleTarget;
pub use transport::{HttpTransport, Reply, Transport};
pub use types::{Brightness, Hue, PowerMode, Saturation};
