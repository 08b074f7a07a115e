//! Core runtime configuration.
//!
//! Configuration is resolved once at process startup and then passed into the router and
//! handlers. Nothing here is read from the environment during request handling; the binaries
//! read the variables and hand the raw values to the `*_from_env_values` helpers below.

use crate::constants::{DEFAULT_PORT, DEFAULT_PUBLIC_HOST, SERVICE_VERSION};
use crate::{MoatError, MoatResult};

/// Core configuration resolved at startup.
#[derive(Clone, Debug)]
pub struct CoreConfig {
    port: String,
    public_host: String,
    version: String,
}

impl CoreConfig {
    /// Create a new `CoreConfig`.
    ///
    /// `port` is normalised to the `:<port>` form.
    pub fn new(port: &str, public_host: impl Into<String>) -> MoatResult<Self> {
        let public_host = public_host.into();
        if public_host.trim().is_empty() {
            return Err(MoatError::InvalidInput(
                "public_host cannot be empty".into(),
            ));
        }

        let port = normalise_port(port);
        let digits = port.trim_start_matches(':');
        if digits.parse::<u16>().is_err() {
            return Err(MoatError::InvalidInput(format!(
                "port '{digits}' is not a valid TCP port"
            )));
        }

        Ok(Self {
            port,
            public_host: public_host.trim().to_owned(),
            version: SERVICE_VERSION.to_owned(),
        })
    }

    /// Listening port in `:<port>` form.
    pub fn port(&self) -> &str {
        &self.port
    }

    /// Socket address to bind: all interfaces on the configured port.
    pub fn bind_addr(&self) -> String {
        format!("0.0.0.0{}", self.port)
    }

    pub fn public_host(&self) -> &str {
        &self.public_host
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    /// Startup banner lines, including a sample request against the token endpoint.
    pub fn banner(&self) -> [String; 2] {
        [
            format!(
                "ORCID v3 Mock Service running on {} (Version: {})",
                self.port, self.version
            ),
            format!(
                "Try: curl -X POST http://localhost{}/oauth/token -d 'client_id=APP-123&grant_type=client_credentials'",
                self.port
            ),
        ]
    }
}

impl Default for CoreConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT.to_owned(),
            public_host: DEFAULT_PUBLIC_HOST.to_owned(),
            version: SERVICE_VERSION.to_owned(),
        }
    }
}

fn normalise_port(port: &str) -> String {
    let port = port.trim();
    if port.starts_with(':') {
        port.to_owned()
    } else {
        format!(":{port}")
    }
}

/// Pick the listening port from the raw `MOAT_PORT` and `PORT` values.
///
/// The first non-empty value wins and is normalised to a leading colon. If both are unset or
/// blank the default `:8080` is returned.
pub fn port_from_env_values(moat_port: Option<String>, port: Option<String>) -> String {
    [moat_port, port]
        .into_iter()
        .flatten()
        .map(|v| v.trim().to_owned())
        .find(|v| !v.is_empty())
        .map(|v| normalise_port(&v))
        .unwrap_or_else(|| DEFAULT_PORT.to_owned())
}

/// Public host from the raw `MOAT_PUBLIC_HOST` value, defaulting to `api.orcid.org`.
pub fn public_host_from_env_value(value: Option<String>) -> String {
    value
        .map(|v| v.trim().to_owned())
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| DEFAULT_PUBLIC_HOST.to_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn moat_port_takes_precedence() {
        assert_eq!(
            port_from_env_values(Some("9090".into()), Some("7070".into())),
            ":9090"
        );
    }

    #[test]
    fn falls_back_to_port_then_default() {
        assert_eq!(port_from_env_values(None, Some("7070".into())), ":7070");
        assert_eq!(port_from_env_values(Some("  ".into()), Some(":7070".into())), ":7070");
        assert_eq!(port_from_env_values(None, None), ":8080");
        assert_eq!(port_from_env_values(Some(String::new()), Some(String::new())), ":8080");
    }

    #[test]
    fn leading_colon_is_not_doubled() {
        assert_eq!(port_from_env_values(Some(":3000".into()), None), ":3000");
    }

    #[test]
    fn bind_addr_listens_on_all_interfaces() {
        let cfg = CoreConfig::new("8080", "api.orcid.org").expect("config");
        assert_eq!(cfg.port(), ":8080");
        assert_eq!(cfg.bind_addr(), "0.0.0.0:8080");
    }

    #[test]
    fn rejects_bad_port_and_empty_host() {
        assert!(matches!(
            CoreConfig::new(":http", "api.orcid.org"),
            Err(MoatError::InvalidInput(_))
        ));
        assert!(matches!(
            CoreConfig::new(":8080", "   "),
            Err(MoatError::InvalidInput(_))
        ));
    }

    #[test]
    fn public_host_defaults() {
        assert_eq!(public_host_from_env_value(None), "api.orcid.org");
        assert_eq!(public_host_from_env_value(Some(" ".into())), "api.orcid.org");
        assert_eq!(
            public_host_from_env_value(Some("sandbox.orcid.org".into())),
            "sandbox.orcid.org"
        );
    }

    #[test]
    fn banner_mentions_port_and_version() {
        let cfg = CoreConfig::default();
        let [running, hint] = cfg.banner();
        assert!(running.contains(":8080"));
        assert!(running.contains(SERVICE_VERSION));
        assert!(hint.contains("http://localhost:8080/oauth/token"));
    }
}
