//! # Calculation Store
//!
//! Persistence of saved calculations. The calculators never touch storage;
//! callers build a [`SavedCalculation`] and hand it to a [`CalculationStore`].
//!
//! ## File Format
//!
//! One JSON object with a list per shape:
//!
//! ```json
//! { "Circle": [], "Square": [ { ... } ], "Rectangle": [], "Oval": [], "Triangle": [] }
//! ```
//!
//! Loading is forgiving: unknown keys are dropped, a missing bucket or a
//! bucket that is not a list comes back empty, and a malformed record is
//! skipped with a warning (it is gone after the next save).
//!
//! Changes go through [`CalculationStore::update`], a single load-modify-save.
//! [`JsonFileStore`] holds its file lock across all of it, so two writers
//! cannot both load the same file and lose one another's record.
//!
//! ## Example
//!
//! ```rust
//! use calc_core::calculations::{calculate, CalcOptions, HollowSectionInput, MaterialParams, SectionSpec};
//! use calc_core::record::SavedCalculation;
//! use calc_core::store::{save_record, CalculationStore, MemoryStore};
//!
//! let input = HollowSectionInput {
//!     section: SectionSpec::Square { od_mm: 25.0 },
//!     params: MaterialParams::new(1.0, 7850.0),
//! };
//! let result = calculate(&input, CalcOptions::default()).unwrap();
//!
//! let mut store = MemoryStore::default();
//! save_record(&mut store, SavedCalculation::new(&input, &result, None)).unwrap();
//! assert_eq!(store.load().unwrap().len(), 1);
//! ```

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;
use tracing::{info, warn};

use crate::calculations::ShapeKind;
use crate::errors::{CalcError, CalcResult};
use crate::file_io::{read_to_string, write_atomic, FileLock};
use crate::record::SavedCalculation;

/// Saved calculations grouped by shape.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SavedCalcs {
    buckets: BTreeMap<ShapeKind, Vec<SavedCalculation>>,
}

impl SavedCalcs {
    /// Empty collection
    pub fn new() -> Self {
        SavedCalcs::default()
    }

    /// Append a record to its shape's bucket, returning its index there
    pub fn push(&mut self, record: SavedCalculation) -> usize {
        let bucket = self.buckets.entry(record.shape).or_default();
        bucket.push(record);
        bucket.len() - 1
    }

    /// Remove the record at `index` in a shape's bucket
    pub fn remove(&mut self, shape: ShapeKind, index: usize) -> CalcResult<SavedCalculation> {
        match self.buckets.get_mut(&shape) {
            Some(bucket) if index < bucket.len() => Ok(bucket.remove(index)),
            _ => Err(CalcError::RecordNotFound {
                shape: shape.to_string(),
                index,
            }),
        }
    }

    /// Record at `index` in a shape's bucket
    pub fn get(&self, shape: ShapeKind, index: usize) -> CalcResult<&SavedCalculation> {
        self.bucket(shape).get(index).ok_or(CalcError::RecordNotFound {
            shape: shape.to_string(),
            index,
        })
    }

    /// All records of one shape, oldest first
    pub fn bucket(&self, shape: ShapeKind) -> &[SavedCalculation] {
        self.buckets.get(&shape).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Total number of records
    pub fn len(&self) -> usize {
        self.buckets.values().map(Vec::len).sum()
    }

    /// True when no records are stored
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Build from an arbitrary JSON value, keeping only well-formed records.
    pub fn from_value(value: Value) -> Self {
        let mut saved = SavedCalcs::new();
        let Value::Object(mut map) = value else {
            return saved;
        };
        for shape in ShapeKind::ALL {
            let Some(Value::Array(items)) = map.remove(shape.as_str()) else {
                continue;
            };
            let records = items
                .into_iter()
                .enumerate()
                .filter_map(|(index, item)| match serde_json::from_value::<SavedCalculation>(item) {
                    Ok(record) => Some(record),
                    Err(e) => {
                        warn!(%shape, index, error = %e, "skipping malformed saved calculation");
                        None
                    }
                })
                .collect();
            saved.buckets.insert(shape, records);
        }
        saved
    }
}

impl Serialize for SavedCalcs {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(ShapeKind::ALL.len()))?;
        for shape in ShapeKind::ALL {
            map.serialize_entry(shape.as_str(), self.bucket(shape))?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for SavedCalcs {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Value::deserialize(deserializer).map(SavedCalcs::from_value)
    }
}

/// Storage collaborator for saved calculations.
pub trait CalculationStore {
    /// Load every saved calculation
    fn load(&self) -> CalcResult<SavedCalcs>;

    /// Replace the stored collection
    fn save(&mut self, saved: &SavedCalcs) -> CalcResult<()>;

    /// Load, apply `change`, and save as one step. Nothing is saved when
    /// `change` fails.
    fn update<T, F>(&mut self, change: F) -> CalcResult<T>
    where
        F: FnOnce(&mut SavedCalcs) -> CalcResult<T>,
        Self: Sized,
    {
        let mut saved = self.load()?;
        let out = change(&mut saved)?;
        self.save(&saved)?;
        Ok(out)
    }
}

/// Append one record to a store. Returns its index within its shape bucket.
pub fn save_record<S: CalculationStore>(store: &mut S, record: SavedCalculation) -> CalcResult<usize> {
    let name = record.name.clone();
    let shape = record.shape;
    let index = store.update(|saved| Ok(saved.push(record)))?;
    info!(%shape, index, name = %name, "calculation saved");
    Ok(index)
}

/// Delete one record from a store and return it.
pub fn delete_record<S: CalculationStore>(
    store: &mut S,
    shape: ShapeKind,
    index: usize,
) -> CalcResult<SavedCalculation> {
    let removed = store.update(|saved| saved.remove(shape, index))?;
    info!(%shape, index, name = %removed.name, "calculation deleted");
    Ok(removed)
}

/// Store backed by a local JSON file.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// Store at `path`; the file is created on first save
    pub fn new(path: impl Into<PathBuf>) -> Self {
        JsonFileStore { path: path.into() }
    }

    /// Path of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read(&self) -> CalcResult<SavedCalcs> {
        if !self.path.exists() {
            return Ok(SavedCalcs::new());
        }
        let contents = read_to_string(&self.path)?;
        serde_json::from_str(&contents).map_err(|e| CalcError::SerializationError {
            reason: format!("Invalid JSON in {}: {}", self.path.display(), e),
        })
    }

    fn write(&self, saved: &SavedCalcs) -> CalcResult<()> {
        let json = serde_json::to_string_pretty(saved)?;
        write_atomic(&self.path, json.as_bytes())
    }
}

impl CalculationStore for JsonFileStore {
    fn load(&self) -> CalcResult<SavedCalcs> {
        self.read()
    }

    fn save(&mut self, saved: &SavedCalcs) -> CalcResult<()> {
        let _lock = FileLock::acquire(&self.path)?;
        self.write(saved)
    }

    fn update<T, F>(&mut self, change: F) -> CalcResult<T>
    where
        F: FnOnce(&mut SavedCalcs) -> CalcResult<T>,
        Self: Sized,
    {
        let _lock = FileLock::acquire(&self.path)?;
        let mut saved = self.read()?;
        let out = change(&mut saved)?;
        self.write(&saved)?;
        Ok(out)
    }
}

/// In-memory store, for tests and embedding.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    saved: SavedCalcs,
}

impl CalculationStore for MemoryStore {
    fn load(&self) -> CalcResult<SavedCalcs> {
        Ok(self.saved.clone())
    }

    fn save(&mut self, saved: &SavedCalcs) -> CalcResult<()> {
        self.saved = saved.clone();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculations::{calculate, CalcOptions, HollowSectionInput, MaterialParams, SectionSpec};
    use std::thread;
    use std::time::Duration;
    use tempfile::tempdir;

    fn record(section: SectionSpec) -> SavedCalculation {
        let input = HollowSectionInput {
            section,
            params: MaterialParams::new(1.0, 7850.0),
        };
        let result = calculate(&input, CalcOptions::default()).unwrap();
        SavedCalculation::new(&input, &result, None)
    }

    #[test]
    fn test_buckets_by_shape() {
        let mut saved = SavedCalcs::new();
        assert_eq!(saved.push(record(SectionSpec::Circle { od_mm: 25.0 })), 0);
        assert_eq!(saved.push(record(SectionSpec::Circle { od_mm: 30.0 })), 1);
        assert_eq!(saved.push(record(SectionSpec::TriangleEquilateral { side_mm: 25.0 })), 0);
        assert_eq!(saved.len(), 3);
        assert_eq!(saved.bucket(ShapeKind::Circle).len(), 2);
        assert!(saved.bucket(ShapeKind::Oval).is_empty());
    }

    #[test]
    fn test_remove_out_of_range() {
        let mut saved = SavedCalcs::new();
        saved.push(record(SectionSpec::Square { od_mm: 25.0 }));
        assert_eq!(
            saved.remove(ShapeKind::Square, 3),
            Err(CalcError::RecordNotFound {
                shape: "Square".to_string(),
                index: 3
            })
        );
        assert!(saved.remove(ShapeKind::Square, 0).is_ok());
        assert!(saved.is_empty());
    }

    #[test]
    fn test_serializes_every_bucket() {
        let json = serde_json::to_value(SavedCalcs::new()).unwrap();
        for shape in ShapeKind::ALL {
            assert_eq!(json[shape.as_str()], Value::Array(vec![]));
        }
    }

    #[test]
    fn test_normalizes_partial_file() {
        let json = r#"{ "Circle": "oops", "Hexagon": [1, 2], "Square": [] }"#;
        let saved: SavedCalcs = serde_json::from_str(json).unwrap();
        assert!(saved.is_empty());

        let not_an_object: SavedCalcs = serde_json::from_str("[]").unwrap();
        assert!(not_an_object.is_empty());
    }

    #[test]
    fn test_memory_store_save_and_delete() {
        let mut store = MemoryStore::default();
        save_record(&mut store, record(SectionSpec::Oval { major_mm: 40.0, minor_mm: 25.0 })).unwrap();
        let index = save_record(&mut store, record(SectionSpec::Oval { major_mm: 50.0, minor_mm: 30.0 })).unwrap();
        assert_eq!(index, 1);

        let removed = delete_record(&mut store, ShapeKind::Oval, 0).unwrap();
        assert_eq!(removed.inputs["major"], 40.0);
        let left = store.load().unwrap();
        assert_eq!(left.bucket(ShapeKind::Oval)[0].inputs["major"], 50.0);
    }

    #[test]
    fn test_json_file_store_roundtrip() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("assets").join("saved_calcs.json");
        let mut store = JsonFileStore::new(&path);

        assert!(store.load().unwrap().is_empty());

        let rec = record(SectionSpec::Rectangle {
            length_mm: 40.0,
            width_mm: 25.0,
        });
        save_record(&mut store, rec.clone()).unwrap();

        let reopened = JsonFileStore::new(&path);
        let loaded = reopened.load().unwrap();
        let back = loaded.get(ShapeKind::Rectangle, 0).unwrap();
        assert_eq!(back.id, rec.id);
        assert_eq!(back.name, "Rectangle | 40 × 25 × t 1 mm");
        assert_eq!(back.inputs, rec.inputs);
        assert_eq!(back.area_mm2, 126.0);
        assert!(FileLock::acquire(&path).is_ok());
    }

    #[test]
    fn test_skips_malformed_record() {
        let good = serde_json::to_value(record(SectionSpec::Square { od_mm: 25.0 })).unwrap();
        let json = serde_json::json!({
            "Square": [good, { "shape": "Square", "weight": "heavy" }],
            "Circle": [42],
        });
        let saved = SavedCalcs::from_value(json);
        assert_eq!(saved.len(), 1);
        assert_eq!(saved.bucket(ShapeKind::Square)[0].inputs["OD"], 25.0);
    }

    #[test]
    fn test_update_refused_while_locked() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("saved_calcs.json");
        let mut store = JsonFileStore::new(&path);
        save_record(&mut store, record(SectionSpec::Circle { od_mm: 25.0 })).unwrap();

        let held = FileLock::acquire(&path).unwrap();
        let err = save_record(&mut store, record(SectionSpec::Circle { od_mm: 30.0 })).unwrap_err();
        assert_eq!(err.error_code(), "FILE_LOCKED");
        let err = delete_record(&mut store, ShapeKind::Circle, 0).unwrap_err();
        assert_eq!(err.error_code(), "FILE_LOCKED");
        drop(held);

        let saved = store.load().unwrap();
        assert_eq!(saved.len(), 1);
        assert_eq!(saved.bucket(ShapeKind::Circle)[0].inputs["OD"], 25.0);
    }

    #[test]
    fn test_failed_change_saves_nothing() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("saved_calcs.json");
        let mut store = JsonFileStore::new(&path);

        let err = delete_record(&mut store, ShapeKind::Oval, 0).unwrap_err();
        assert_eq!(err.error_code(), "RECORD_NOT_FOUND");
        assert!(!path.exists());
    }

    #[test]
    fn test_concurrent_savers_keep_every_record() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("saved_calcs.json");

        let workers: Vec<_> = (0..8)
            .map(|i| {
                let path = path.clone();
                thread::spawn(move || {
                    let mut store = JsonFileStore::new(&path);
                    let rec = record(SectionSpec::Circle { od_mm: 20.0 + i as f64 });
                    loop {
                        match save_record(&mut store, rec.clone()) {
                            Ok(_) => break,
                            Err(CalcError::FileLocked { .. }) => thread::sleep(Duration::from_millis(1)),
                            Err(e) => panic!("save failed: {}", e),
                        }
                    }
                })
            })
            .collect();
        for worker in workers {
            worker.join().unwrap();
        }

        let saved = JsonFileStore::new(&path).load().unwrap();
        assert_eq!(saved.bucket(ShapeKind::Circle).len(), 8);
    }

    #[test]
    fn test_json_file_store_rejects_garbage() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("saved_calcs.json");
        std::fs::write(&path, "not json").unwrap();
        let err = JsonFileStore::new(&path).load().unwrap_err();
        assert_eq!(err.error_code(), "SERIALIZATION_ERROR");
    }
}
