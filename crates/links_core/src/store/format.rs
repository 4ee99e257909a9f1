//! Record formats and the encode/decode pipeline.
//!
//! Payloads are MessagePack with named fields, LZ4-compressed with a
//! prepended size, followed by a trailing SHA-256 checksum. Named fields
//! keep records self-describing: fields added later decode as their serde
//! defaults, unknown fields are ignored, and the one deliberately
//! non-defaultable field (`RoundRecord::players`) fails decode when
//! missing.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use lz4_flex::{compress_prepend_size, decompress_size_prepended};
use rmp_serde::{from_slice, to_vec_named};
use sha2::{Digest, Sha256};
use time::OffsetDateTime;

use super::error::StoreError;
use super::{ROUND_VERSION, VENUE_VERSION};
use crate::course::CourseSummary;
use crate::model::venue::Venue;
use crate::scorecard::Scorecard;

const CHECKSUM_LEN: usize = 32;

/// Persisted venue wrapper with an explicit schema version.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct VenueRecord {
    pub version: u32,
    /// Unix milliseconds at encode time.
    pub saved_at: u64,
    pub venue: Venue,
}

impl VenueRecord {
    pub fn new(venue: Venue) -> Self {
        Self { version: VENUE_VERSION, saved_at: current_timestamp(), venue }
    }
}

/// Persisted record of one played round.
///
/// Carries the course summary, never the full venue, so a round remains
/// readable after the venue file changes or disappears.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct RoundRecord {
    pub version: u32,
    pub saved_at: u64,
    pub course: CourseSummary,
    /// The round's player group. No default: a record without it is
    /// unusable and must fail decode.
    pub players: Vec<String>,
    #[serde(default)]
    pub cards: Vec<Scorecard>,
}

impl RoundRecord {
    pub fn new(course: CourseSummary, players: Vec<String>) -> Self {
        Self {
            version: ROUND_VERSION,
            saved_at: current_timestamp(),
            course,
            players,
            cards: Vec::new(),
        }
    }
}

/// Encode a venue record: MessagePack, LZ4, trailing checksum.
pub fn encode_venue(record: &VenueRecord) -> Result<Vec<u8>, StoreError> {
    pack(record)
}

/// Decode a venue record, verifying checksum and version.
///
/// The decoded venue is re-normalized so a hand-edited record cannot carry
/// stale affinity references into the model.
pub fn decode_venue(bytes: &[u8]) -> Result<VenueRecord, StoreError> {
    let mut record: VenueRecord = unpack(bytes)?;
    if record.version > VENUE_VERSION {
        return Err(StoreError::UnsupportedVersion {
            found: record.version,
            supported: VENUE_VERSION,
        });
    }
    record.venue.normalize_affinities();
    Ok(record)
}

pub fn encode_round(record: &RoundRecord) -> Result<Vec<u8>, StoreError> {
    pack(record)
}

pub fn decode_round(bytes: &[u8]) -> Result<RoundRecord, StoreError> {
    let record: RoundRecord = unpack(bytes)?;
    if record.version > ROUND_VERSION {
        return Err(StoreError::UnsupportedVersion {
            found: record.version,
            supported: ROUND_VERSION,
        });
    }
    Ok(record)
}

fn pack<T: Serialize>(value: &T) -> Result<Vec<u8>, StoreError> {
    // 1. Serialize to MessagePack with field names
    let msgpack = to_vec_named(value).map_err(StoreError::Serialization)?;

    // 2. Compress with LZ4 (size prepended for easy decompression)
    let compressed = compress_prepend_size(&msgpack);

    // 3. Add SHA256 checksum at the end
    let mut hasher = Sha256::new();
    hasher.update(&compressed);
    let checksum = hasher.finalize();

    let mut result = compressed;
    result.extend_from_slice(&checksum);

    Ok(result)
}

fn unpack<T: DeserializeOwned>(bytes: &[u8]) -> Result<T, StoreError> {
    // Minimum size: LZ4 size header + checksum
    if bytes.len() < 4 + CHECKSUM_LEN {
        return Err(StoreError::Corrupted);
    }

    let (payload, checksum_bytes) = bytes.split_at(bytes.len() - CHECKSUM_LEN);

    let mut hasher = Sha256::new();
    hasher.update(payload);
    let calculated = hasher.finalize();
    if &calculated[..] != checksum_bytes {
        return Err(StoreError::ChecksumMismatch);
    }

    let msgpack = decompress_size_prepended(payload).map_err(|_| StoreError::Decompression)?;
    from_slice(&msgpack).map_err(StoreError::Deserialization)
}

pub fn current_timestamp() -> u64 {
    (OffsetDateTime::now_utc().unix_timestamp_nanos() / 1_000_000) as u64
}
