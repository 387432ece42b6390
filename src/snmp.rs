//! Blocking SNMPv1 get-only session.
//!
//! The EEPROM protocol only ever needs `get(oid) -> octet string`, so the
//! rest of the crate talks to the agent through the [`SnmpGet`] trait and
//! [`SnmpSession`] is an `async-snmp` client driven by a current-thread
//! runtime.

use crate::constants::*;
use crate::error::{CounterError, Result};
use crate::oid::Oid;
use async_snmp::{Auth, Client, Retry, UdpClient, Value};
use bytes::Bytes;
use std::time::Duration;
use tokio::runtime::{Builder, Runtime};

/// The one SNMP primitive the device protocol relies on
pub trait SnmpGet {
    /// Issue a get-request for `oid` and return the raw octet-string value.
    fn get(&mut self, oid: &Oid) -> Result<Bytes>;
}

impl<T: SnmpGet + ?Sized> SnmpGet for Box<T> {
    fn get(&mut self, oid: &Oid) -> Result<Bytes> {
        (**self).get(oid)
    }
}

impl<T: SnmpGet + ?Sized> SnmpGet for &mut T {
    fn get(&mut self, oid: &Oid) -> Result<Bytes> {
        (**self).get(oid)
    }
}

/// Connection settings for one device
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionConfig {
    pub host: String,
    pub port: u16,
    pub community: String,
    pub timeout: Duration,
}

impl SessionConfig {
    pub fn new(host: impl Into<String>) -> Self {
        SessionConfig {
            host: host.into(),
            ..Default::default()
        }
    }

    pub fn port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    pub fn community(mut self, community: impl Into<String>) -> Self {
        self.community = community.into();
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// `host:port`, bracketing bare IPv6 literals
    pub fn target(&self) -> String {
        if self.host.contains(':') && !self.host.starts_with('[') {
            format!("[{}]:{}", self.host, self.port)
        } else {
            format!("{}:{}", self.host, self.port)
        }
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        SessionConfig {
            host: "127.0.0.1".to_string(),
            port: DEFAULT_PORT,
            community: DEFAULT_COMMUNITY.to_string(),
            timeout: Duration::from_millis(TIMEOUT_MS),
        }
    }
}

/// SNMPv1 community session to one agent
pub struct SnmpSession {
    runtime: Runtime,
    client: UdpClient,
    target: String,
}

impl SnmpSession {
    /// Open a UDP client towards the agent. Requests are never retried.
    pub fn connect(config: &SessionConfig) -> Result<Self> {
        let runtime = Builder::new_current_thread().enable_all().build()?;
        let target = config.target();

        let client = runtime
            .block_on(
                Client::builder(target.clone(), Auth::v1(config.community.as_str()))
                    .timeout(config.timeout)
                    .retry(Retry::none())
                    .connect(),
            )
            .map_err(transport_error)?;

        log::debug!("SNMP session to {} (community {:?})", target, config.community);

        Ok(SnmpSession {
            runtime,
            client,
            target,
        })
    }

    pub fn peer(&self) -> &str {
        &self.target
    }
}

impl SnmpGet for SnmpSession {
    fn get(&mut self, oid: &Oid) -> Result<Bytes> {
        let request = async_snmp::Oid::from_slice(oid.arcs());
        let varbind = self
            .runtime
            .block_on(self.client.get(&request))
            .map_err(transport_error)?;
        octet_string(oid, varbind.value)
    }
}

/// Every client-side failure is a session-level failure
fn transport_error(err: Box<async_snmp::Error>) -> CounterError {
    match *err {
        async_snmp::Error::Timeout { .. } => CounterError::Transport("request timed out".to_string()),
        other => CounterError::Transport(other.to_string()),
    }
}

/// The device answers every request with an octet string
fn octet_string(oid: &Oid, value: Value) -> Result<Bytes> {
    match value {
        Value::OctetString(data) => Ok(data),
        other => Err(CounterError::MalformedResponse(format!(
            "expected octet string for {}, got {}",
            oid, other
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::net::UdpSocket;

    #[test]
    fn config_defaults() {
        let config = SessionConfig::new("10.0.0.5");
        assert_eq!(config.port, 161);
        assert_eq!(config.community, "public");
        assert_eq!(config.timeout, Duration::from_millis(2000));
        assert_eq!(config.target(), "10.0.0.5:161");
    }

    #[test]
    fn ipv6_target_is_bracketed() {
        assert_eq!(SessionConfig::new("::1").port(1161).target(), "[::1]:1161");
        assert_eq!(SessionConfig::new("[::1]").target(), "[::1]:161");
    }

    #[test]
    fn octet_string_is_passed_through() {
        let oid = Oid::new(&[1, 3, 6, 1]);
        let value = Value::OctetString(Bytes::from_static(b"\x02EPSON\x03"));
        assert_eq!(&octet_string(&oid, value).unwrap()[..], b"\x02EPSON\x03");
    }

    #[test]
    fn other_values_are_malformed() {
        let oid = Oid::new(&[1, 3, 6, 1]);
        assert!(matches!(
            octet_string(&oid, Value::Integer(7)),
            Err(CounterError::MalformedResponse(_))
        ));
        assert!(matches!(
            octet_string(&oid, Value::NoSuchObject),
            Err(CounterError::MalformedResponse(_))
        ));
    }

    #[test]
    fn silence_times_out() {
        // Bound but never answers
        let agent = UdpSocket::bind("127.0.0.1:0").unwrap();
        let addr = agent.local_addr().unwrap();
        let mut session = SnmpSession::connect(
            &SessionConfig::new("127.0.0.1")
                .port(addr.port())
                .timeout(Duration::from_millis(100)),
        )
        .unwrap();
        let err = session.get(&Oid::new(&[1, 3, 6, 1])).unwrap_err();
        assert!(matches!(err, CounterError::Transport(ref m) if m == "request timed out"));
    }
}
