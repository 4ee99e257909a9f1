//! Directory-rooted venue file store.

use std::fs::{self, remove_file, rename, File};
use std::io::{Read, Write};
use std::path::{Path, PathBuf};

use super::error::StoreError;
use super::format::{decode_venue, encode_venue, VenueRecord};
use crate::model::venue::{Venue, VenueId};

const VENUE_EXT: &str = "venue";

/// Loads and saves venue records under one root directory, keyed by venue
/// id. Writes go through a temp file and rename so a crash mid-write never
/// leaves a truncated record behind.
pub struct VenueStore {
    root: PathBuf,
}

impl VenueStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn venue_path(&self, id: VenueId) -> PathBuf {
        self.root.join(format!("{}.{}", id, VENUE_EXT))
    }

    pub fn exists(&self, id: VenueId) -> bool {
        self.venue_path(id).exists()
    }

    pub fn save(&self, venue: &Venue) -> Result<(), StoreError> {
        fs::create_dir_all(&self.root)?;

        let record = VenueRecord::new(venue.clone());
        let bytes = encode_venue(&record)?;

        let path = self.venue_path(venue.id);
        let tmp = path.with_extension("tmp");
        {
            let mut file = File::create(&tmp)?;
            file.write_all(&bytes)?;
            file.sync_all()?;
        }
        rename(&tmp, &path)?;

        log::info!("Saved venue '{}' to {}", venue.name, path.display());
        Ok(())
    }

    pub fn load(&self, id: VenueId) -> Result<Venue, StoreError> {
        let path = self.venue_path(id);
        let record = Self::load_record(&path)?;

        log::info!("Loaded venue '{}' from {}", record.venue.name, path.display());
        Ok(record.venue)
    }

    pub fn delete(&self, id: VenueId) -> Result<(), StoreError> {
        let path = self.venue_path(id);
        if path.exists() {
            remove_file(&path)?;
            log::info!("Deleted venue record {}", path.display());
        }
        Ok(())
    }

    /// Ids of every venue record under the root.
    pub fn list(&self) -> Result<Vec<VenueId>, StoreError> {
        let mut ids = Vec::new();
        if !self.root.exists() {
            return Ok(ids);
        }
        for entry in fs::read_dir(&self.root)? {
            let path = entry?.path();
            if path.extension().and_then(|e| e.to_str()) != Some(VENUE_EXT) {
                continue;
            }
            if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
                if let Ok(id) = stem.parse::<VenueId>() {
                    ids.push(id);
                }
            }
        }
        ids.sort();
        Ok(ids)
    }

    fn load_record(path: &Path) -> Result<VenueRecord, StoreError> {
        if !path.exists() {
            return Err(StoreError::FileNotFound { path: path.display().to_string() });
        }
        let mut bytes = Vec::new();
        File::open(path)?.read_to_end(&mut bytes)?;
        decode_venue(&bytes)
    }
}
