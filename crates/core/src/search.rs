//! Canned registry search.

use crate::constants::{MOCK_AUTHENTICATED_ORCID, REGISTRY_HOST, SEARCH_FAILURE_TRIGGER};
use crate::{MoatError, MoatResult};
use orcid::{OrcidIdentifier, Search, SearchResult};

/// Run a search for `q`.
///
/// Every query returns the same single hit. A query containing `error` simulates an upstream
/// failure instead.
pub fn search(q: Option<&str>) -> MoatResult<Search> {
    let q = q.unwrap_or_default();
    if q.contains(SEARCH_FAILURE_TRIGGER) {
        tracing::warn!(q, "simulating search failure");
        return Err(MoatError::SimulatedUpstream("Search failed".into()));
    }

    let result = vec![SearchResult {
        orcid_identifier: OrcidIdentifier::new(MOCK_AUTHENTICATED_ORCID, REGISTRY_HOST),
    }];
    Ok(Search {
        num_found: result.len() as u64,
        result,
    })
}
