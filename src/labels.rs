//! Human-readable names for vendor OIDs and escaped rendering of raw bytes.
//!
//! Used for debug logging and error messages only. Each entry pairs a
//! compiled matcher with a name template; `*` in the template is replaced by
//! the matcher's captures in order.

use crate::constants::*;
use crate::types::Register;
use regex::Regex;
use std::sync::LazyLock;

/// Escaped regex fragment matching `arcs` joined with dots
fn arcs_pattern(arcs: &[u32]) -> String {
    let joined = arcs.iter().map(u32::to_string).collect::<Vec<_>>().join(".");
    regex::escape(&joined)
}

struct Label {
    matcher: Regex,
    template: String,
    captures: usize,
}

impl Label {
    fn new(pattern: String, template: impl Into<String>) -> Self {
        let template = template.into();
        let matcher = Regex::new(&format!("^{}$", pattern)).expect("valid label pattern");
        let captures = matcher.captures_len() - 1;
        debug_assert_eq!(captures, template.matches('*').count());
        Label {
            matcher,
            template,
            captures,
        }
    }

    fn render(&self, oid: &str) -> Option<String> {
        let caps = self.matcher.captures(oid)?;
        let mut out = String::with_capacity(self.template.len() + 8);
        let mut next = 1;
        for ch in self.template.chars() {
            if ch == '*' && next <= self.captures {
                out.push_str(caps.get(next).map_or("", |m| m.as_str()));
                next += 1;
            } else {
                out.push(ch);
            }
        }
        Some(out)
    }
}

static LABELS: LazyLock<Vec<Label>> = LazyLock::new(|| {
    let vendor = arcs_pattern(VENDOR_ROOT);
    let read_root = format!(r"{}\.{}", vendor, arcs_pattern(EEPROM_READ_SUFFIX));
    let write_root = format!(r"{}\.{}", vendor, arcs_pattern(EEPROM_WRITE_SUFFIX));
    let magic = arcs_pattern(&EEPROM_WRITE_MAGIC);

    let mut labels = vec![
        Label::new(
            format!(r"{}\.{}", vendor, arcs_pattern(FIRMWARE_VERSION_SUFFIX)),
            "firmware-version",
        ),
        Label::new(
            format!(r"{}\.{}", vendor, arcs_pattern(DEVICE_STATUS_SUFFIX)),
            "device-status",
        ),
    ];
    for register in Register::ALL {
        let address = arcs_pattern(&register.offset().arcs());
        labels.push(Label::new(format!(r"{}\.{}", read_root, address), register.label()));
        labels.push(Label::new(
            format!(r"{}\.{}\.(\d+)\.{}", write_root, address, magic),
            format!("{} := *", register.label()),
        ));
    }
    // Any other EEPROM address
    labels.push(Label::new(format!(r"{}\.(\d+)\.(\d+)", read_root), "eeprom[*.*]"));
    labels.push(Label::new(
        format!(r"{}\.(\d+)\.(\d+)\.(\d+)\.{}", write_root, magic),
        "eeprom[*.*] := *",
    ));
    labels
});

/// Symbolic name for a known OID, or the OID itself
pub fn describe_oid(oid: &str) -> String {
    LABELS
        .iter()
        .find_map(|label| label.render(oid))
        .unwrap_or_else(|| oid.to_string())
}

/// Render bytes as printable ASCII, escaping everything else
pub fn escape_bytes(data: &[u8]) -> String {
    let mut out = String::with_capacity(data.len());
    for &byte in data {
        match byte {
            b'\t' => out.push_str("\\t"),
            0x0B => out.push_str("\\v"),
            0x0C => out.push_str("\\f"),
            b'\n' => out.push_str("\\n"),
            b'\r' => out.push_str("\\r"),
            0x07 => out.push_str("\\a"),
            0x08 => out.push_str("\\b"),
            0x00 => out.push_str("\\0"),
            b'\\' => out.push_str("\\\\"),
            0x20..=0x7E => out.push(byte as char),
            _ => out.push_str(&format!("\\x{:02x}", byte)),
        }
    }
    out
}
