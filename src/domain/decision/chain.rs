//! The decision set - an arena of records keyed by id.
//!
//! Chain pointers are stored as ids, never as references, and every walk
//! is bounded by the set size plus a visited set. A malformed chain is
//! reported as an error, never silently repaired.

use std::collections::{HashMap, HashSet};
use tracing::{error, info};

use crate::domain::foundation::{DecisionId, Timestamp};

use super::errors::ChainError;
use super::events::DecisionEvent;
use super::record::Decision;

/// The full collection of decision records, owned by the caller.
///
/// The set is the single write surface of the core: records are inserted
/// whole and replaced whole, and the supersession commit is the only
/// operation that touches two records together.
#[derive(Debug, Clone, Default)]
pub struct DecisionSet {
    records: HashMap<DecisionId, Decision>,
    /// Lineage roots halted after a post-commit integrity failure.
    poisoned: HashSet<DecisionId>,
    events: Vec<DecisionEvent>,
}

impl DecisionSet {
    /// Creates an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a record, rejecting duplicate ids.
    pub fn insert(&mut self, decision: Decision) -> Result<(), ChainError> {
        let id = decision.id();
        if self.records.contains_key(&id) {
            return Err(ChainError::CorruptChain {
                id,
                reason: "duplicate decision id".to_string(),
            });
        }
        self.events.push(DecisionEvent::Created {
            decision_id: id,
            at: decision.created_at(),
        });
        self.records.insert(id, decision);
        Ok(())
    }

    /// Looks up a record by id.
    pub fn get(&self, id: DecisionId) -> Option<&Decision> {
        self.records.get(&id)
    }

    /// Looks up a record by id, failing if absent.
    pub fn require(&self, id: DecisionId) -> Result<&Decision, ChainError> {
        self.records
            .get(&id)
            .ok_or(ChainError::UnknownDecision { id })
    }

    /// Number of records in the set.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns true if the set holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Iterates over all records, in no particular order.
    pub fn decisions(&self) -> impl Iterator<Item = &Decision> {
        self.records.values()
    }

    /// Takes accumulated domain events, clearing the internal buffer.
    pub fn take_events(&mut self) -> Vec<DecisionEvent> {
        std::mem::take(&mut self.events)
    }

    /// Returns true if the lineage containing `id` has been halted after
    /// an integrity failure.
    pub fn is_poisoned(&self, id: DecisionId) -> bool {
        match self.lineage_root(id) {
            Ok(root) => self.poisoned.contains(&root.id()),
            Err(_) => false,
        }
    }

    // ───────────────────────────────────────────────────────────────
    // Chain traversal
    // ───────────────────────────────────────────────────────────────

    /// Walks `previous` pointers to the first decision of the lineage.
    pub fn lineage_root(&self, id: DecisionId) -> Result<&Decision, ChainError> {
        self.walk(id, |d| d.previous_id())
    }

    /// Walks `next` pointers to the current tip of the lineage.
    pub fn active_tip(&self, id: DecisionId) -> Result<&Decision, ChainError> {
        self.walk(id, |d| d.next_id())
    }

    /// Bounded pointer walk with cycle detection. Returns the last record
    /// reached before the pointer runs out.
    fn walk(
        &self,
        start: DecisionId,
        step: impl Fn(&Decision) -> Option<DecisionId>,
    ) -> Result<&Decision, ChainError> {
        let mut current = self.require(start)?;
        let mut visited = HashSet::from([start]);

        // The bound is the set size: a linear chain can never be longer.
        for _ in 0..self.records.len() {
            let Some(next_id) = step(current) else {
                return Ok(current);
            };
            if !visited.insert(next_id) {
                return Err(ChainError::CorruptChain {
                    id: next_id,
                    reason: "cycle detected".to_string(),
                });
            }
            current = self.records.get(&next_id).ok_or(ChainError::CorruptChain {
                id: next_id,
                reason: "dangling chain pointer".to_string(),
            })?;
        }
        Err(ChainError::CorruptChain {
            id: start,
            reason: "walk exceeded set size".to_string(),
        })
    }

    /// Full history of the lineage containing `id`, oldest first.
    ///
    /// Walks back to the lineage root, then forward to the tip. Repeated
    /// calls over an unchanged set return identical sequences.
    pub fn history(&self, id: DecisionId) -> Result<Vec<&Decision>, ChainError> {
        let root = self.lineage_root(id)?;
        let mut ordered = vec![root];
        let mut visited = HashSet::from([root.id()]);
        let mut current = root;

        while let Some(next_id) = current.next_id() {
            if !visited.insert(next_id) {
                return Err(ChainError::CorruptChain {
                    id: next_id,
                    reason: "cycle detected".to_string(),
                });
            }
            current = self.records.get(&next_id).ok_or(ChainError::CorruptChain {
                id: next_id,
                reason: "dangling chain pointer".to_string(),
            })?;
            ordered.push(current);
        }
        Ok(ordered)
    }

    /// Lazy, restartable traversal of the lineage containing `id`,
    /// oldest first. Clone the iterator to restart it.
    pub fn history_iter(&self, id: DecisionId) -> Result<HistoryIter<'_>, ChainError> {
        let root = self.lineage_root(id)?;
        Ok(HistoryIter {
            set: self,
            cursor: Some(root.id()),
            remaining: self.records.len(),
        })
    }

    // ───────────────────────────────────────────────────────────────
    // Invariant verification
    // ───────────────────────────────────────────────────────────────

    /// Verifies the lineage containing `id`: pointer symmetry on every
    /// link and exactly one active record, at the tip.
    pub fn verify_lineage(&self, id: DecisionId) -> Result<(), ChainError> {
        let ordered = self.history(id)?;
        let mut active_count = 0usize;

        for pair in ordered.windows(2) {
            let (a, b) = (pair[0], pair[1]);
            if a.next_id() != Some(b.id()) || b.previous_id() != Some(a.id()) {
                return Err(ChainError::ChainIntegrity {
                    id: a.id(),
                    detail: format!("asymmetric link between {} and {}", a.id(), b.id()),
                });
            }
        }

        for d in &ordered {
            if d.is_active() {
                active_count += 1;
                if d.next_id().is_some() {
                    return Err(ChainError::ChainIntegrity {
                        id: d.id(),
                        detail: "active decision has a successor pointer".to_string(),
                    });
                }
            }
        }

        if active_count != 1 {
            let tip = ordered.last().expect("history is never empty");
            return Err(ChainError::ChainIntegrity {
                id: tip.id(),
                detail: format!("lineage has {} active decisions, expected 1", active_count),
            });
        }
        Ok(())
    }

    /// Applies a supersession commit: replaces the original with its
    /// superseded copy and inserts the successor, together.
    ///
    /// Both records are built and checked before the set is touched, so a
    /// caller can never observe only one of the two writes. A failed
    /// post-commit verification poisons the lineage.
    pub(crate) fn commit_supersession(
        &mut self,
        superseded: Decision,
        successor: Decision,
    ) -> Result<(), ChainError> {
        let original_id = superseded.id();
        let successor_id = successor.id();
        let root_id = self.lineage_root(original_id)?.id();

        if self.poisoned.contains(&root_id) {
            return Err(ChainError::LineagePoisoned { root: root_id });
        }
        if self.records.contains_key(&successor_id) {
            return Err(ChainError::CorruptChain {
                id: successor_id,
                reason: "duplicate decision id".to_string(),
            });
        }

        self.records.insert(original_id, superseded);
        self.records.insert(successor_id, successor);

        if let Err(e) = self.verify_lineage(successor_id) {
            self.poisoned.insert(root_id);
            error!(
                lineage = %root_id,
                original = %original_id,
                successor = %successor_id,
                "post-commit chain verification failed; lineage halted"
            );
            return Err(e);
        }

        let at = Timestamp::now();
        self.events.push(DecisionEvent::Superseded {
            decision_id: original_id,
            successor_id,
            at,
        });
        self.events.push(DecisionEvent::Created {
            decision_id: successor_id,
            at,
        });
        info!(original = %original_id, successor = %successor_id, "decision superseded");
        Ok(())
    }
}

impl FromIterator<Decision> for DecisionSet {
    /// Builds a set from records, keeping the last record per id.
    fn from_iter<I: IntoIterator<Item = Decision>>(iter: I) -> Self {
        let mut set = Self::new();
        for decision in iter {
            set.records.insert(decision.id(), decision);
        }
        set
    }
}

/// Lazy forward walk over one lineage, oldest first.
///
/// Bounded by the set size; a dangling pointer simply ends the iteration
/// (use [`DecisionSet::history`] when corruption must surface as an error).
#[derive(Debug, Clone)]
pub struct HistoryIter<'a> {
    set: &'a DecisionSet,
    cursor: Option<DecisionId>,
    remaining: usize,
}

impl<'a> Iterator for HistoryIter<'a> {
    type Item = &'a Decision;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        let id = self.cursor.take()?;
        let record = self.set.get(id)?;
        self.cursor = record.next_id();
        Some(record)
    }
}
