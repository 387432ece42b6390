//! Single-byte EEPROM access through the vendor OID subtree.

use crate::constants::*;
use crate::error::{CounterError, Result};
use crate::frame::{check_ack, decode_ascii, decode_read_frame, strip_boundary};
use crate::labels::{describe_oid, escape_bytes};
use crate::oid::Oid;
use crate::snmp::{SessionConfig, SnmpGet, SnmpSession};
use crate::types::RegisterOffset;

/// Main device interface
///
/// Every operation is a plain SNMP get, issued one at a time and awaited
/// before the next one is sent.
pub struct Device<S> {
    session: S,
    info_root: Oid,
    read_root: Oid,
    write_root: Oid,
}

impl Device<SnmpSession> {
    /// Open a session to the device described by `config`
    pub fn connect(config: &SessionConfig) -> Result<Self> {
        let session = SnmpSession::connect(config)?;
        log::info!("Connected to {}", session.peer());
        Ok(Device::new(session))
    }
}

impl<S: SnmpGet> Device<S> {
    /// Wrap an existing SNMP session
    pub fn new(session: S) -> Self {
        let vendor = Oid::new(VENDOR_ROOT);
        Device {
            session,
            info_root: vendor.clone(),
            read_root: vendor.extend(EEPROM_READ_SUFFIX),
            write_root: vendor.extend(EEPROM_WRITE_SUFFIX),
        }
    }

    pub fn session(&self) -> &S {
        &self.session
    }

    pub fn into_session(self) -> S {
        self.session
    }

    pub(crate) fn info_oid(&self, suffix: &[u32]) -> Oid {
        self.info_root.extend(suffix)
    }

    /// OID reading the EEPROM byte at `offset`
    pub fn read_oid(&self, offset: RegisterOffset) -> Oid {
        self.read_root.extend(&offset.arcs())
    }

    /// OID writing `value` to the EEPROM byte at `offset`
    pub fn write_oid(&self, offset: RegisterOffset, value: u8) -> Oid {
        let [low, high] = offset.arcs();
        let mut arcs = vec![low, high, value as u32];
        arcs.extend_from_slice(&EEPROM_WRITE_MAGIC);
        self.write_root.extend(&arcs)
    }

    /// Issue one get and return the text between the boundary bytes
    pub(crate) fn request_text(&mut self, oid: &Oid) -> Result<String> {
        let oid_text = oid.to_string();
        log::debug!("get_req {}", describe_oid(&oid_text));

        let raw = self.session.get(oid)?;
        log::debug!("get_res {} [{}]", describe_oid(&oid_text), escape_bytes(&raw));

        decode_ascii(strip_boundary(&raw)?)
    }

    /// Read one EEPROM byte
    pub fn read_byte(&mut self, offset: RegisterOffset) -> Result<u8> {
        let oid = self.read_oid(offset);
        let text = self.request_text(&oid)?;
        decode_read_frame(&text)
    }

    /// Write one EEPROM byte; the device answers with an acknowledgement
    pub fn write_byte(&mut self, offset: RegisterOffset, value: u8) -> Result<()> {
        let oid = self.write_oid(offset, value);
        let text = self.request_text(&oid)?;
        check_ack(&text).map_err(|err| match err {
            CounterError::WriteNotAcknowledged { response, .. } => CounterError::WriteNotAcknowledged {
                context: format!(" for {} ({})", describe_oid(&oid.to_string()), offset),
                response,
            },
            other => other,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bytes::Bytes;
    use std::collections::VecDeque;

    /// Replays canned responses and records requested OIDs
    #[derive(Default)]
    struct Replay {
        requests: Vec<String>,
        responses: VecDeque<Result<Bytes>>,
    }

    impl SnmpGet for Replay {
        fn get(&mut self, oid: &Oid) -> Result<Bytes> {
            self.requests.push(oid.to_string());
            self.responses
                .pop_front()
                .unwrap_or_else(|| Err(CounterError::Transport("no response queued".into())))
        }
    }

    fn device_with(responses: Vec<Result<Bytes>>) -> Device<Replay> {
        Device::new(Replay {
            requests: Vec::new(),
            responses: responses.into(),
        })
    }

    #[test]
    fn read_byte_builds_oid_and_decodes_frame() {
        let mut device = device_with(vec![Ok(Bytes::from_static(b"\x02@BDC PS\r\nEE:00185E;\x03"))]);
        assert_eq!(device.read_byte(RegisterOffset(0x18)).unwrap(), 0x5E);
        assert_eq!(
            device.session().requests,
            vec!["1.3.6.1.4.1.1248.1.2.2.44.1.1.2.1.124.124.7.0.133.5.65.190.160.24.0"]
        );
    }

    #[test]
    fn write_byte_builds_command_oid() {
        let mut device = device_with(vec![Ok(Bytes::from_static(b"\x02||:42:OK;\x03"))]);
        device.write_byte(RegisterOffset(0x2E), 94).unwrap();
        assert_eq!(
            device.session().requests,
            vec![
                "1.3.6.1.4.1.1248.1.2.2.44.1.1.2.1.124.124.16.0.133.5.66.189.33.46.0.94.81.112.109.122.121.102.111.98"
            ]
        );
    }

    #[test]
    fn write_without_ack_names_the_register() {
        let mut device = device_with(vec![Ok(Bytes::from_static(b"\x02||:42:NG;\x03"))]);
        let err = device.write_byte(RegisterOffset(0x1C), 0).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Write not acknowledged for housekeeping-a := 0 (0x001C): got \"||:42:NG;\""
        );
    }

    #[test]
    fn transport_error_propagates() {
        let mut device = device_with(vec![Err(CounterError::Transport("request timed out".into()))]);
        assert!(matches!(
            device.read_byte(RegisterOffset(0x18)),
            Err(CounterError::Transport(_))
        ));
    }

    #[test]
    fn unframed_value_is_malformed() {
        let mut device = device_with(vec![Ok(Bytes::from_static(b"x"))]);
        assert!(matches!(
            device.read_byte(RegisterOffset(0x18)),
            Err(CounterError::MalformedResponse(_))
        ));
    }

    #[test]
    fn missing_boundary_bytes_break_the_frame() {
        let mut device = device_with(vec![Ok(Bytes::from_static(b"@BDC PS\r\nEE:00185E;"))]);
        assert!(matches!(
            device.read_byte(RegisterOffset(0x18)),
            Err(CounterError::FrameMismatch { .. })
        ));
    }
}
