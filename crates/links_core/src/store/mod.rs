// Persistence for venue and round records
// MessagePack + LZ4 compression with versioning and integrity checks

pub mod error;
pub mod format;
pub mod manager;

pub use error::StoreError;
pub use format::{
    current_timestamp, decode_round, decode_venue, encode_round, encode_venue, RoundRecord,
    VenueRecord,
};
pub use manager::VenueStore;

/// Schema version written into every venue record. Records claiming a
/// higher version are rejected as unsupported.
pub const VENUE_VERSION: u32 = 1;

/// Schema version for persisted round records.
pub const ROUND_VERSION: u32 = 1;
