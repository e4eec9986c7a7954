//! Geometry memoization keyed by the content of records and chart request.

use std::collections::HashMap;
use std::sync::Arc;

use indexmap::IndexMap;
use rayon::prelude::*;
use sha2::{Digest, Sha256};

use crate::chart::{ChartGeometry, ChartRequest, compute_geometry};
use crate::record::Record;

/// SHA-256 over the serialized records and request.
///
/// Identical inputs always produce the same key, so a cached geometry can stand in
/// for recomputation.
#[must_use]
pub fn geometry_key(records: &[Record], request: &ChartRequest) -> String {
    let records_json = serde_json::to_string(records).unwrap_or_default();
    let request_json = serde_json::to_string(request).unwrap_or_default();
    let mut hasher = Sha256::new();
    hasher.update(records_json.as_bytes());
    hasher.update([0u8]);
    hasher.update(request_json.as_bytes());
    format!("{:x}", hasher.finalize())
}

/// Cache of computed geometry.
#[derive(Debug, Default)]
pub struct GeometryCache {
    entries: HashMap<String, Arc<ChartGeometry>>,
    hits: usize,
    misses: usize,
}

impl GeometryCache {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Cached geometry for `key`, if any.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<Arc<ChartGeometry>> {
        self.entries.get(key).cloned()
    }

    /// Return the cached geometry for these inputs, computing it on a miss.
    pub fn get_or_compute(
        &mut self,
        records: &[Record],
        request: &ChartRequest,
    ) -> Arc<ChartGeometry> {
        let key = geometry_key(records, request);
        if let Some(hit) = self.entries.get(&key) {
            self.hits += 1;
            return Arc::clone(hit);
        }
        self.misses += 1;
        let geometry = Arc::new(compute_geometry(records, request));
        self.entries.insert(key, Arc::clone(&geometry));
        geometry
    }

    /// Compute geometry for many jobs, each distinct input once, in parallel.
    ///
    /// Results come back in job order.
    pub fn compute_all(&mut self, jobs: &[(&[Record], &ChartRequest)]) -> Vec<Arc<ChartGeometry>> {
        let keys: Vec<String> = jobs
            .par_iter()
            .map(|(records, request)| geometry_key(records, request))
            .collect();

        let mut pending: IndexMap<&str, usize> = IndexMap::new();
        for (index, key) in keys.iter().enumerate() {
            if self.entries.contains_key(key) || pending.contains_key(key.as_str()) {
                self.hits += 1;
            } else {
                pending.insert(key.as_str(), index);
            }
        }
        self.misses += pending.len();

        let pending: Vec<(&str, usize)> = pending.into_iter().collect();
        let computed: Vec<(String, ChartGeometry)> = pending
            .par_iter()
            .map(|&(key, index)| {
                let (records, request) = jobs[index];
                (key.to_string(), compute_geometry(records, request))
            })
            .collect();
        for (key, geometry) in computed {
            self.entries.insert(key, Arc::new(geometry));
        }

        keys.iter()
            .filter_map(|key| self.entries.get(key).cloned())
            .collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub const fn hits(&self) -> usize {
        self.hits
    }

    #[must_use]
    pub const fn misses(&self) -> usize {
        self.misses
    }
}

#[cfg(test)]
#[path = "memo_tests.rs"]
mod tests;
