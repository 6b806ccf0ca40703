//! Test-only MaxMind DB writer.
//!
//! Builds small but valid `.mmdb` files so resolver and pipeline tests run
//! against the real reader. Records are 24 bits wide. Trees are IPv6
//! (`ip_version` 6) by default, with IPv4 networks stored under `::/96` where
//! the reader looks for them; `ipv4_only()` builds a 32-bit IPv4 tree instead.

use std::net::IpAddr;
use std::path::Path;

const DATA_SECTION_SEPARATOR: [u8; 16] = [0; 16];
const METADATA_START_MARKER: &[u8] = b"\xAB\xCD\xEFMaxMind.com";

/// A value in the MaxMind DB data format.
#[derive(Debug, Clone)]
pub(crate) enum MmdbValue {
    String(String),
    Double(f64),
    Uint16(u16),
    Uint32(u32),
    Uint64(u64),
    Map(Vec<(String, MmdbValue)>),
    Array(Vec<MmdbValue>),
}

impl MmdbValue {
    pub(crate) fn string(value: &str) -> Self {
        MmdbValue::String(value.to_string())
    }

    pub(crate) fn map(entries: Vec<(&str, MmdbValue)>) -> Self {
        MmdbValue::Map(
            entries
                .into_iter()
                .map(|(key, value)| (key.to_string(), value))
                .collect(),
        )
    }

    fn encode(&self, out: &mut Vec<u8>) {
        match self {
            MmdbValue::String(s) => {
                write_control(out, 2, s.len());
                out.extend_from_slice(s.as_bytes());
            }
            MmdbValue::Double(d) => {
                write_control(out, 3, 8);
                out.extend_from_slice(&d.to_be_bytes());
            }
            MmdbValue::Uint16(v) => write_uint(out, 5, u64::from(*v)),
            MmdbValue::Uint32(v) => write_uint(out, 6, u64::from(*v)),
            MmdbValue::Uint64(v) => write_uint(out, 9, *v),
            MmdbValue::Map(entries) => {
                write_control(out, 7, entries.len());
                for (key, value) in entries {
                    MmdbValue::String(key.clone()).encode(out);
                    value.encode(out);
                }
            }
            MmdbValue::Array(items) => {
                write_control(out, 11, items.len());
                for item in items {
                    item.encode(out);
                }
            }
        }
    }
}

/// Writes a control byte (plus extended type and size bytes).
fn write_control(out: &mut Vec<u8>, type_num: u8, size: usize) {
    let (size_bits, size_bytes): (u8, Vec<u8>) = if size < 29 {
        (size as u8, Vec::new())
    } else if size < 29 + 256 {
        (29, vec![(size - 29) as u8])
    } else {
        let rest = size - 285;
        (30, vec![(rest >> 8) as u8, rest as u8])
    };

    if type_num <= 7 {
        out.push((type_num << 5) | size_bits);
    } else {
        out.push(size_bits);
        out.push(type_num - 7);
    }
    out.extend_from_slice(&size_bytes);
}

/// Unsigned integers use the minimal number of big-endian bytes.
fn write_uint(out: &mut Vec<u8>, type_num: u8, value: u64) {
    let bytes = value.to_be_bytes();
    let leading_zeros = bytes.iter().take_while(|b| **b == 0).count();
    let payload = &bytes[leading_zeros..];
    write_control(out, type_num, payload.len());
    out.extend_from_slice(payload);
}

#[derive(Debug, Clone, Copy)]
enum Slot {
    Empty,
    Node(usize),
    Data(usize),
}

/// Builder for a test index.
pub(crate) struct MmdbBuilder {
    database_type: String,
    ipv4_only: bool,
    networks: Vec<(IpAddr, u8, MmdbValue)>,
}

impl MmdbBuilder {
    pub(crate) const BUILD_EPOCH: u64 = 1_700_000_000;

    pub(crate) fn new(database_type: &str) -> Self {
        Self {
            database_type: database_type.to_string(),
            ipv4_only: false,
            networks: Vec::new(),
        }
    }

    /// Builds an IPv4 tree (`ip_version` 4). The reader rejects IPv6
    /// lookups against it.
    pub(crate) fn ipv4_only(mut self) -> Self {
        self.ipv4_only = true;
        self
    }

    /// Adds a network in CIDR form (`"8.8.8.0/24"`, `"2001:db8::/32"`).
    /// Networks must not overlap.
    pub(crate) fn insert(mut self, cidr: &str, value: MmdbValue) -> Self {
        let (addr, prefix) = cidr.split_once('/').expect("network must be in CIDR form");
        let addr: IpAddr = addr.parse().expect("network address must parse");
        let prefix: u8 = prefix.parse().expect("prefix length must parse");
        self.networks.push((addr, prefix, value));
        self
    }

    /// Tree key and depth of a network.
    fn tree_position(&self, addr: IpAddr, prefix: u8) -> (u128, u8) {
        match (addr, self.ipv4_only) {
            (IpAddr::V4(v4), true) => (u128::from(u32::from(v4)), prefix),
            (IpAddr::V4(v4), false) => (u128::from(u32::from(v4)), prefix + 96),
            (IpAddr::V6(v6), false) => (u128::from(v6), prefix),
            (IpAddr::V6(_), true) => panic!("IPv6 network in an IPv4-only index"),
        }
    }

    pub(crate) fn build(&self) -> Vec<u8> {
        let tree_width: u8 = if self.ipv4_only { 32 } else { 128 };
        let mut data = Vec::new();
        let mut nodes: Vec<[Slot; 2]> = vec![[Slot::Empty; 2]];

        for (addr, prefix, value) in &self.networks {
            let (key, bits) = self.tree_position(*addr, *prefix);
            assert!(bits > 0 && bits <= tree_width, "prefix length out of range");

            let offset = data.len();
            value.encode(&mut data);

            let mut node = 0;
            for depth in 0..bits {
                let bit = ((key >> (tree_width - 1 - depth)) & 1) as usize;
                if depth + 1 == bits {
                    nodes[node][bit] = Slot::Data(offset);
                    break;
                }
                node = match nodes[node][bit] {
                    Slot::Node(next) => next,
                    _ => {
                        nodes.push([Slot::Empty; 2]);
                        let next = nodes.len() - 1;
                        nodes[node][bit] = Slot::Node(next);
                        next
                    }
                };
            }
        }

        let node_count = nodes.len();
        let record_value = |slot: Slot| -> usize {
            match slot {
                Slot::Empty => node_count,
                Slot::Node(index) => index,
                Slot::Data(offset) => node_count + DATA_SECTION_SEPARATOR.len() + offset,
            }
        };

        let mut out = Vec::with_capacity(node_count * 6 + data.len() + 256);
        for [left, right] in &nodes {
            for record in [record_value(*left), record_value(*right)] {
                assert!(record < 1 << 24, "record does not fit in 24 bits");
                out.extend_from_slice(&(record as u32).to_be_bytes()[1..]);
            }
        }
        out.extend_from_slice(&DATA_SECTION_SEPARATOR);
        out.extend_from_slice(&data);
        out.extend_from_slice(METADATA_START_MARKER);

        MmdbValue::map(vec![
            ("binary_format_major_version", MmdbValue::Uint16(2)),
            ("binary_format_minor_version", MmdbValue::Uint16(0)),
            ("build_epoch", MmdbValue::Uint64(Self::BUILD_EPOCH)),
            ("database_type", MmdbValue::string(&self.database_type)),
            (
                "description",
                MmdbValue::map(vec![("en", MmdbValue::string("test fixture"))]),
            ),
            (
                "ip_version",
                MmdbValue::Uint16(if self.ipv4_only { 4 } else { 6 }),
            ),
            ("languages", MmdbValue::Array(vec![MmdbValue::string("en")])),
            ("node_count", MmdbValue::Uint32(node_count as u32)),
            ("record_size", MmdbValue::Uint16(24)),
        ])
        .encode(&mut out);

        out
    }

    pub(crate) fn write_to(&self, path: &Path) {
        std::fs::write(path, self.build()).expect("Failed to write test index");
    }
}

/// City index with one fully populated network, one country-only network,
/// and one IPv6 network. `8.8.8.8` is deliberately absent.
pub(crate) fn city_fixture() -> MmdbBuilder {
    MmdbBuilder::new("GeoLite2-City")
        .insert(
            "81.2.69.0/24",
            MmdbValue::map(vec![
                (
                    "city",
                    MmdbValue::map(vec![(
                        "names",
                        MmdbValue::map(vec![("en", MmdbValue::string("London"))]),
                    )]),
                ),
                (
                    "country",
                    MmdbValue::map(vec![
                        ("geoname_id", MmdbValue::Uint32(2635167)),
                        ("iso_code", MmdbValue::string("GB")),
                    ]),
                ),
                (
                    "location",
                    MmdbValue::map(vec![
                        ("accuracy_radius", MmdbValue::Uint16(10)),
                        ("latitude", MmdbValue::Double(51.5142)),
                        ("longitude", MmdbValue::Double(-0.0931)),
                        ("time_zone", MmdbValue::string("Europe/London")),
                    ]),
                ),
            ]),
        )
        .insert(
            "175.16.199.0/24",
            MmdbValue::map(vec![(
                "country",
                MmdbValue::map(vec![("iso_code", MmdbValue::string("CN"))]),
            )]),
        )
        .insert(
            "2001:db8::/32",
            MmdbValue::map(vec![
                (
                    "country",
                    MmdbValue::map(vec![("iso_code", MmdbValue::string("SE"))]),
                ),
                (
                    "location",
                    MmdbValue::map(vec![
                        ("accuracy_radius", MmdbValue::Uint16(100)),
                        ("latitude", MmdbValue::Double(59.3247)),
                        ("longitude", MmdbValue::Double(18.056)),
                        ("time_zone", MmdbValue::string("Europe/Stockholm")),
                    ]),
                ),
            ]),
        )
        .insert(
            "203.0.113.0/24",
            MmdbValue::map(vec![(
                "location",
                MmdbValue::map(vec![("latitude", MmdbValue::string("north"))]),
            )]),
        )
}

/// IPv4-only City index with the fully populated London network.
pub(crate) fn ipv4_city_fixture() -> MmdbBuilder {
    MmdbBuilder::new("GeoLite2-City").ipv4_only().insert(
        "81.2.69.0/24",
        MmdbValue::map(vec![
            (
                "country",
                MmdbValue::map(vec![("iso_code", MmdbValue::string("GB"))]),
            ),
            (
                "location",
                MmdbValue::map(vec![
                    ("accuracy_radius", MmdbValue::Uint16(10)),
                    ("latitude", MmdbValue::Double(51.5142)),
                    ("longitude", MmdbValue::Double(-0.0931)),
                    ("time_zone", MmdbValue::string("Europe/London")),
                ]),
            ),
        ]),
    )
}

/// ASN index with a well-formed record, a record without organization, a
/// record whose organization is not a string, and a record that is not a map.
pub(crate) fn asn_fixture() -> MmdbBuilder {
    MmdbBuilder::new("GeoLite2-ASN")
        .insert(
            "8.8.8.0/24",
            MmdbValue::map(vec![
                ("autonomous_system_number", MmdbValue::Uint32(15169)),
                ("autonomous_system_organization", MmdbValue::string("Google LLC")),
            ]),
        )
        .insert(
            "81.2.69.0/24",
            MmdbValue::map(vec![
                ("autonomous_system_number", MmdbValue::Uint32(20712)),
                (
                    "autonomous_system_organization",
                    MmdbValue::string("Andrews & Arnold Ltd"),
                ),
            ]),
        )
        .insert(
            "1.1.1.0/24",
            MmdbValue::map(vec![("autonomous_system_number", MmdbValue::Uint32(13335))]),
        )
        .insert(
            "9.9.9.0/24",
            MmdbValue::map(vec![(
                "autonomous_system_organization",
                MmdbValue::Uint32(19281),
            )]),
        )
        .insert("4.4.4.0/24", MmdbValue::string("Level 3"))
}
