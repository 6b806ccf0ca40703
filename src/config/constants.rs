//! Configuration constants.
//!
//! Default locations of the run's inputs and output, plus the fixed store query.

/// Default node store (SQLite file written by the crawler)
pub const DEFAULT_STORE_PATH: &str = "crawler.db";

/// Default GeoLite2 City index
pub const DEFAULT_GEO_DB_PATH: &str = "GeoLite2-City.mmdb";

/// Default GeoLite2 ASN index
pub const DEFAULT_ASN_DB_PATH: &str = "GeoLite2-ASN.mmdb";

/// Default output artifact, served next to the map page
pub const DEFAULT_OUTPUT_PATH: &str = "html/nodes.json";

/// Columns decoded from each stored node row, in query order
pub const NODE_COLUMNS: [&str; 10] = [
    "ID",
    "IP",
    "Now",
    "ClientType",
    "NetworkID",
    "Country",
    "City",
    "Coordinates",
    "LastSeen",
    "FirstSeen",
];

/// Select-all query over the crawler's node table
pub const SELECT_NODES_QUERY: &str = "SELECT ID, IP, Now, ClientType, NetworkID, Country, City, Coordinates, LastSeen, FirstSeen FROM nodes";

/// Exit code for a successful run that violated the `--fail-on` policy
pub const EXIT_CODE_POLICY_FAILURE: i32 = 2;
