//! In-memory seed/lookup store.
//!
//! `RecordStore` is a cheap, cloneable handle over a reader/writer-locked table of records
//! keyed by ORCID iD. It is constructed at startup, seeded once, and injected into the HTTP
//! layer as state. Locks are held only long enough to clone a value out.
//!
//! Each seeded identifier also gets empty per-kind activity slots (`work`, `employment`)
//! holding raw submitted bodies by put-code. The request read paths do not consult them yet.

use crate::activity::ActivityKind;
use crate::{MoatError, MoatResult};
use orcid::{Person, Record};
use orcid_types::PutCode;
use std::collections::{BTreeMap, HashMap};
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

type ActivitySlots = HashMap<ActivityKind, BTreeMap<PutCode, Vec<u8>>>;

#[derive(Debug, Default)]
struct Tables {
    records: BTreeMap<String, Record>,
    activities: HashMap<String, ActivitySlots>,
}

#[derive(Clone, Debug, Default)]
pub struct RecordStore {
    tables: Arc<RwLock<Tables>>,
}

impl RecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> MoatResult<RwLockReadGuard<'_, Tables>> {
        self.tables.read().map_err(|_| MoatError::LockPoisoned)
    }

    fn write(&self) -> MoatResult<RwLockWriteGuard<'_, Tables>> {
        self.tables.write().map_err(|_| MoatError::LockPoisoned)
    }

    /// Insert records under the write lock, keyed by identifier path.
    ///
    /// A record with an identifier already present replaces the old one. Activity slots are
    /// created for new identifiers and left alone for existing ones.
    pub fn seed(&self, records: impl IntoIterator<Item = Record>) -> MoatResult<()> {
        let mut tables = self.write()?;
        let mut count = 0usize;
        for record in records {
            let id = record.orcid_identifier.path.clone();
            tables.activities.entry(id.clone()).or_insert_with(|| {
                ActivityKind::ALL
                    .into_iter()
                    .map(|kind| (kind, BTreeMap::new()))
                    .collect()
            });
            tables.records.insert(id, record);
            count += 1;
        }
        tracing::debug!(count, total = tables.records.len(), "seeded record store");
        Ok(())
    }

    pub fn record(&self, orcid: &str) -> MoatResult<Option<Record>> {
        Ok(self.read()?.records.get(orcid).cloned())
    }

    pub fn person(&self, orcid: &str) -> MoatResult<Option<Person>> {
        Ok(self.read()?.records.get(orcid).map(|r| r.person.clone()))
    }

    /// Like [`RecordStore::record`], but absence is a `NotFound` error.
    pub fn require_record(&self, orcid: &str) -> MoatResult<Record> {
        self.record(orcid)?.ok_or_else(|| MoatError::NotFound {
            kind: "Record",
            id: orcid.to_owned(),
        })
    }

    /// Like [`RecordStore::person`], but absence is a `NotFound` error.
    pub fn require_person(&self, orcid: &str) -> MoatResult<Person> {
        self.person(orcid)?.ok_or_else(|| MoatError::NotFound {
            kind: "Person",
            id: orcid.to_owned(),
        })
    }

    /// Seeded identifiers in ascending order.
    pub fn ids(&self) -> MoatResult<Vec<String>> {
        Ok(self.read()?.records.keys().cloned().collect())
    }

    pub fn len(&self) -> MoatResult<usize> {
        Ok(self.read()?.records.len())
    }

    pub fn is_empty(&self) -> MoatResult<bool> {
        Ok(self.read()?.records.is_empty())
    }

    /// Store a raw activity body in the identifier's slot.
    ///
    /// # Errors
    ///
    /// Returns `MoatError::NotFound` if the identifier was never seeded.
    pub fn record_activity(
        &self,
        orcid: &str,
        kind: ActivityKind,
        put_code: PutCode,
        body: Vec<u8>,
    ) -> MoatResult<()> {
        let mut tables = self.write()?;
        let slots = tables
            .activities
            .get_mut(orcid)
            .ok_or_else(|| MoatError::NotFound {
                kind: "Record",
                id: orcid.to_owned(),
            })?;
        slots.entry(kind).or_default().insert(put_code, body);
        Ok(())
    }

    /// Raw body previously stored with [`RecordStore::record_activity`].
    pub fn activity(
        &self,
        orcid: &str,
        kind: ActivityKind,
        put_code: PutCode,
    ) -> MoatResult<Option<Vec<u8>>> {
        let tables = self.read()?;
        Ok(tables
            .activities
            .get(orcid)
            .and_then(|slots| slots.get(&kind))
            .and_then(|slot| slot.get(&put_code))
            .cloned())
    }
}
