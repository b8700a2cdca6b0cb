//! Bridge client.

use std::thread;
use std::time::Duration;

use log::{debug, info, warn};
use serde_json::{Value, json};

use crate::config::HueConfig;
use crate::errors::Error;
use crate::light::{Light, Lights};
use crate::method::Method;
use crate::response::{self, ApiResult, LINK_BUTTON_NOT_PRESSED};
use crate::state::LightState;
use crate::target::ToggleTarget;
use crate::transport::{HttpTransport, Transport};
use crate::types::PowerMode;

type Result<T> = std::result::Result<T, Error>;

/// How long [`HueClient::pair`] keeps asking the bridge for a username.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PairingOptions {
    /// Number of pairing requests before giving up
    pub attempts: u32,
    /// Pause between requests
    pub interval: Duration,
}

impl PairingOptions {
    const ATTEMPTS: u32 = 30;
    const INTERVAL_MS: u64 = 1000;
}

impl Default for PairingOptions {
    fn default() -> Self {
        PairingOptions {
            attempts: Self::ATTEMPTS,
            interval: Duration::from_millis(Self::INTERVAL_MS),
        }
    }
}

/// A client for one Hue bridge.
///
/// The client owns the loaded [`HueConfig`] and sends every request through
/// a [`Transport`], by default a blocking HTTPS client.
///
/// # Example
///
/// ```no_run
/// use huedo::HueClient;
///
/// let client = HueClient::new()?;
/// for (id, light) in client.get_lights()?.iter() {
///     println!("{id}: {}", light.name());
/// }
/// client.toggle_light(1)?;
/// # Ok::<(), huedo::Error>(())
/// ```
#[derive(Debug)]
pub struct HueClient<T = HttpTransport> {
    config: HueConfig,
    transport: T,
}

impl HueClient<HttpTransport> {
    /// Create a client from the config file at its default location.
    pub fn new() -> Result<Self> {
        Ok(HueClient {
            config: HueConfig::load_default()?,
            transport: HttpTransport::new()?,
        })
    }

    /// Create a client from an already loaded config.
    pub fn from_config(config: HueConfig) -> Result<Self> {
        Ok(HueClient {
            config,
            transport: HttpTransport::new()?,
        })
    }
}

impl<T: Transport> HueClient<T> {
    pub fn with_transport(config: HueConfig, transport: T) -> Self {
        HueClient { config, transport }
    }

    pub fn config(&self) -> &HueConfig {
        &self.config
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Ask the bridge for a new username once and store it.
    ///
    /// The link button on the bridge must have been pressed shortly before
    /// this call. Returns the new username.
    pub fn create_user(&mut self, hub_ip: &str) -> Result<String> {
        let body = json!({ "devicetype": device_type() });
        let url = format!("https://{}/api", hub_ip);
        let reply = self.call_url(Method::Post, &url, Some(&body))?;

        let username = match response::first_result(&reply)? {
            ApiResult::Success(success) => success
                .get("username")
                .and_then(Value::as_str)
                .map(String::from)
                .ok_or_else(|| Error::UnexpectedResponse(reply.to_string()))?,
            ApiResult::Error(err) => return Err(err.into()),
        };

        self.config.update_user(hub_ip, &username)?;
        info!("paired with bridge at {}", hub_ip);
        Ok(username)
    }

    /// Pair with the bridge, retrying until the link button is pressed.
    ///
    /// Only the bridge's "link button not pressed" error is retried; any
    /// other failure ends pairing immediately. At least one request is
    /// always sent.
    pub fn pair(&mut self, hub_ip: &str, options: &PairingOptions) -> Result<String> {
        let attempts = options.attempts.max(1);
        for attempt in 1..=attempts {
            match self.create_user(hub_ip) {
                Err(e) if e.bridge_kind() == Some(LINK_BUTTON_NOT_PRESSED) => {
                    warn!("link button not pressed (attempt {}/{})", attempt, attempts);
                    if attempt < attempts {
                        thread::sleep(options.interval);
                    }
                }
                result => return result,
            }
        }

        Err(Error::LinkButtonTimeout { attempts })
    }

    /// Returns all lights known to the bridge.
    pub fn get_lights(&self) -> Result<Lights> {
        self.get("lights")
    }

    /// Returns a single light.
    pub fn get_light_info(&self, light: u32) -> Result<Light> {
        self.get(&format!("lights/{}", light))
    }

    pub fn light_is_on(&self, light: u32) -> Result<bool> {
        Ok(self.get_light_info(light)?.is_on())
    }

    /// Flip a light's power state. Returns the new state.
    pub fn toggle_light(&self, light: u32) -> Result<PowerMode> {
        let power = PowerMode::from(!self.light_is_on(light)?);
        debug!("toggling light {} {}", light, power);
        self.set_light_state(light, &LightState::from(&power))?;
        Ok(power)
    }

    /// Toggle every light of a configured group, each from its own state.
    pub fn toggle_lightgroup(&self, name: &str) -> Result<()> {
        let group = self.config.get_lightgroup(name)?;
        for light in &group.lights {
            self.toggle_light(*light)?;
        }
        Ok(())
    }

    pub fn toggle(&self, target: &ToggleTarget) -> Result<()> {
        match target {
            ToggleTarget::Light(light) => self.toggle_light(*light).map(|_| ()),
            ToggleTarget::Group(name) => self.toggle_lightgroup(name),
        }
    }

    /// Apply a state change to a light.
    ///
    /// A state with no attributes set sends nothing.
    pub fn set_light_state(&self, light: u32, state: &LightState) -> Result<()> {
        if !state.is_valid() {
            debug!("no attributes to set on light {}", light);
            return Ok(());
        }

        let body = serde_json::to_value(state).map_err(Error::JsonDump)?;
        info!("setting light {} to state {}", light, body);
        let reply = self.call(Method::Put, &format!("lights/{}/state", light), Some(&body))?;
        response::check(&reply)
    }

    /// Send a request for a resource fragment such as `lights/1` and return
    /// the bridge's JSON unchanged.
    pub fn call(&self, method: Method, fragment: &str, body: Option<&Value>) -> Result<Value> {
        if !self.config.is_paired() {
            return Err(Error::NotConfigured);
        }
        self.call_url(method, &self.config.build_url(fragment), body)
    }

    /// Send a request to a full URL and return the bridge's JSON unchanged.
    ///
    /// Empty bodies (`None` or `{}`) are not sent.
    pub fn call_url(&self, method: Method, url: &str, body: Option<&Value>) -> Result<Value> {
        let body = body.filter(|b| !is_empty_body(b));
        let reply = self.transport.send(method, url, body)?;

        if !reply.is_ok() {
            return Err(Error::UnexpectedStatus {
                status: reply.status,
                body: reply.body,
            });
        }

        serde_json::from_str(&reply.body).map_err(Error::JsonLoad)
    }

    fn get<R: serde::de::DeserializeOwned>(&self, fragment: &str) -> Result<R> {
        let reply = self.call(Method::Get, fragment, None)?;
        response::check(&reply)?;
        serde_json::from_value(reply).map_err(Error::JsonLoad)
    }
}

fn is_empty_body(body: &Value) -> bool {
    match body {
        Value::Null => true,
        Value::Object(map) => map.is_empty(),
        _ => false,
    }
}

fn device_type() -> String {
    format!("huedo#{}", std::env::consts::OS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LightGroup;
    use crate::transport::Reply;
    use crate::transport::fake::{FakeTransport, Sent};
    use crate::types::Brightness;

    fn paired() -> HueConfig {
        HueConfig::paired("10.0.0.2", "abc")
    }

    fn client(transport: FakeTransport) -> HueClient<FakeTransport> {
        HueClient::with_transport(paired(), transport)
    }

    fn light(on: bool) -> Value {
        json!({"name": "Desk", "swversion": "1.50.2", "state": {"on": on, "bri": 100}})
    }

    #[test]
    fn test_call_returns_json_unchanged() {
        let body = json!({"1": {"name": "Desk", "state": {"on": true}, "whatever": [1, 2]}});
        let client = client(FakeTransport::new().reply(body.clone()));

        assert_eq!(client.call(Method::Get, "lights", None).unwrap(), body);
        assert_eq!(
            client.transport().sent(),
            vec![Sent {
                method: Method::Get,
                url: "https://10.0.0.2/api/abc/lights".into(),
                body: None,
            }]
        );
    }

    #[test]
    fn test_call_skips_empty_body() {
        let client = client(FakeTransport::new().reply(json!([])));
        client
            .call(Method::Put, "lights/1/state", Some(&json!({})))
            .unwrap();
        assert_eq!(client.transport().sent()[0].body, None);
    }

    #[test]
    fn test_call_unexpected_status() {
        let client = client(FakeTransport::new().reply_raw(Reply::new(404, "not found")));
        assert_eq!(
            client.call(Method::Get, "nope", None).unwrap_err(),
            Error::UnexpectedStatus {
                status: 404,
                body: "not found".into()
            }
        );
    }

    #[test]
    fn test_call_invalid_json() {
        let client = client(FakeTransport::new().reply_raw(Reply::new(200, "<html>")));
        assert!(matches!(
            client.call(Method::Get, "lights", None),
            Err(Error::JsonLoad(_))
        ));
    }

    #[test]
    fn test_unpaired_does_no_io() {
        let client = HueClient::with_transport(HueConfig::default(), FakeTransport::new());
        assert_eq!(client.get_lights().unwrap_err(), Error::NotConfigured);
        assert!(client.transport().sent().is_empty());
    }

    #[test]
    fn test_toggle_light_sends_negation() {
        let client = client(
            FakeTransport::new()
                .reply(light(true))
                .reply(json!([{"success": {"/lights/3/state/on": false}}])),
        );

        assert_eq!(client.toggle_light(3).unwrap(), PowerMode::Off);

        let sent = client.transport().sent();
        assert_eq!(sent[0].method, Method::Get);
        assert_eq!(sent[0].url, "https://10.0.0.2/api/abc/lights/3");
        assert_eq!(sent[1].method, Method::Put);
        assert_eq!(sent[1].url, "https://10.0.0.2/api/abc/lights/3/state");
        assert_eq!(sent[1].body, Some(json!({"on": false})));
    }

    #[test]
    fn test_toggle_missing_light() {
        let client = client(FakeTransport::new().reply(json!([
            {"error": {"type": 3, "address": "/lights/9", "description": "resource, /lights/9, not available"}}
        ])));

        let err = client.toggle_light(9).unwrap_err();
        assert_eq!(err.bridge_kind(), Some(3));
        assert_eq!(client.transport().sent().len(), 1);
    }

    #[test]
    fn test_toggle_lightgroup() {
        let mut config = paired();
        config
            .lightgroups
            .insert("kitchen".into(), LightGroup { lights: vec![1, 2] });
        let transport = FakeTransport::new()
            .reply(light(true))
            .reply(json!([{"success": {}}]))
            .reply(light(false))
            .reply(json!([{"success": {}}]));
        let client = HueClient::with_transport(config, transport);

        client
            .toggle(&ToggleTarget::Group("kitchen".into()))
            .unwrap();

        let puts: Vec<Sent> = client
            .transport()
            .sent()
            .into_iter()
            .filter(|s| s.method == Method::Put)
            .collect();
        assert_eq!(puts[0].url, "https://10.0.0.2/api/abc/lights/1/state");
        assert_eq!(puts[0].body, Some(json!({"on": false})));
        assert_eq!(puts[1].url, "https://10.0.0.2/api/abc/lights/2/state");
        assert_eq!(puts[1].body, Some(json!({"on": true})));
    }

    #[test]
    fn test_toggle_unknown_group() {
        let client = client(FakeTransport::new());
        assert_eq!(
            client.toggle_lightgroup("attic").unwrap_err(),
            Error::LightGroupNotFound("attic".into())
        );
    }

    #[test]
    fn test_set_empty_state_sends_nothing() {
        let client = client(FakeTransport::new());
        client.set_light_state(1, &LightState::new()).unwrap();
        assert!(client.transport().sent().is_empty());
    }

    #[test]
    fn test_set_light_state_surfaces_bridge_error() {
        let client = client(FakeTransport::new().reply(json!([
            {"error": {"type": 201, "address": "/lights/1/state/bri", "description": "parameter, bri, is not modifiable. Device is set to off."}}
        ])));

        let err = client
            .set_light_state(1, &LightState::from(&Brightness::create(5).unwrap()))
            .unwrap_err();
        assert_eq!(err.bridge_kind(), Some(201));
        assert_eq!(client.transport().sent()[0].body, Some(json!({"bri": 5})));
    }

    #[test]
    fn test_get_lights() {
        let client = client(FakeTransport::new().reply(json!({
            "1": {"name": "Desk", "state": {"on": true}},
            "2": {"name": "Hall", "state": {"on": false}}
        })));

        let lights = client.get_lights().unwrap();
        assert_eq!(lights.len(), 2);
        assert_eq!(lights.get("2").unwrap().name(), "Hall");
    }

    #[test]
    fn test_create_user_saves_config() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("huedo.yaml");
        let transport =
            FakeTransport::new().reply(json!([{"success": {"username": "new-user"}}]));
        let mut client = HueClient::with_transport(HueConfig::load(&path).unwrap(), transport);

        assert_eq!(client.create_user("192.168.1.20").unwrap(), "new-user");

        let sent = client.transport().sent();
        assert_eq!(sent[0].method, Method::Post);
        assert_eq!(sent[0].url, "https://192.168.1.20/api");
        assert_eq!(sent[0].body, Some(json!({"devicetype": device_type()})));

        let saved = HueConfig::load(&path).unwrap();
        assert_eq!(saved.hub.ip, "192.168.1.20");
        assert_eq!(saved.hub.user, "new-user");
        assert!(client.config().is_paired());
    }

    #[test]
    fn test_create_user_unexpected_reply() {
        let mut client = client(FakeTransport::new().reply(json!({"weird": true})));
        assert!(matches!(
            client.create_user("10.0.0.2"),
            Err(Error::UnexpectedResponse(_))
        ));
    }

    fn not_pressed() -> Value {
        json!([{"error": {"type": 101, "address": "", "description": "link button not pressed"}}])
    }

    #[test]
    fn test_pair_retries_until_button_pressed() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("huedo.yaml");
        let transport = FakeTransport::new()
            .reply(not_pressed())
            .reply(not_pressed())
            .reply(json!([{"success": {"username": "pressed"}}]));
        let mut client = HueClient::with_transport(HueConfig::load(&path).unwrap(), transport);
        let options = PairingOptions {
            attempts: 5,
            interval: Duration::ZERO,
        };

        assert_eq!(client.pair("10.0.0.7", &options).unwrap(), "pressed");
        assert_eq!(client.transport().sent().len(), 3);
    }

    #[test]
    fn test_pair_gives_up() {
        let transport = FakeTransport::new()
            .reply(not_pressed())
            .reply(not_pressed());
        let mut client = HueClient::with_transport(HueConfig::default(), transport);
        let options = PairingOptions {
            attempts: 2,
            interval: Duration::ZERO,
        };

        assert_eq!(
            client.pair("10.0.0.7", &options).unwrap_err(),
            Error::LinkButtonTimeout { attempts: 2 }
        );
        assert!(!client.config().is_paired());
    }

    #[test]
    fn test_pair_stops_on_other_errors() {
        let transport = FakeTransport::new().reply_raw(Reply::new(500, "boom"));
        let mut client = HueClient::with_transport(HueConfig::default(), transport);

        assert!(matches!(
            client.pair("10.0.0.7", &PairingOptions::default()),
            Err(Error::UnexpectedStatus { status: 500, .. })
        ));
        assert_eq!(client.transport().sent().len(), 1);
    }

    #[test]
    fn test_pair_stops_on_other_bridge_errors() {
        let transport = FakeTransport::new().reply(json!([
            {"error": {"type": 7, "address": "/devicetype", "description": "invalid value"}}
        ]));
        let mut client = HueClient::with_transport(HueConfig::default(), transport);
        let options = PairingOptions {
            attempts: 5,
            interval: Duration::ZERO,
        };

        let err = client.pair("10.0.0.7", &options).unwrap_err();
        assert_eq!(err.bridge_kind(), Some(7));
        assert_eq!(client.transport().sent().len(), 1);
        assert!(!client.config().is_paired());
    }

    #[test]
    fn test_pair_zero_attempts_still_asks_once() {
        let transport = FakeTransport::new().reply(not_pressed());
        let mut client = HueClient::with_transport(HueConfig::default(), transport);
        let options = PairingOptions {
            attempts: 0,
            interval: Duration::ZERO,
        };

        assert_eq!(
            client.pair("10.0.0.7", &options).unwrap_err(),
            Error::LinkButtonTimeout { attempts: 1 }
        );
        assert_eq!(client.transport().sent().len(), 1);
    }

    #[test]
    fn test_create_user_unknown_item_shape() {
        let mut client = client(FakeTransport::new().reply(json!([{"foo": 1}])));
        assert_eq!(
            client.create_user("10.0.0.2").unwrap_err(),
            Error::UnexpectedResponse(r#"[{"foo":1}]"#.into())
        );
    }

    #[test]
    fn test_create_user_ignores_trailing_items() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("huedo.yaml");
        let transport =
            FakeTransport::new().reply(json!([{"success": {"username": "u"}}, {"foo": 1}]));
        let mut client = HueClient::with_transport(HueConfig::load(&path).unwrap(), transport);

        assert_eq!(client.create_user("10.0.0.2").unwrap(), "u");
    }
}
