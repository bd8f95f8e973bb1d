use std::collections::HashMap;

use serde::Serialize;

use super::domain::{ResultId, ScoredResult};

/// How a freshly allocated result set maps onto rows already persisted for the event.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct UpsertPlan {
    pub inserts: Vec<ScoredResult>,
    pub updates: Vec<ScoredResult>,
    pub unchanged: Vec<ResultId>,
}

impl UpsertPlan {
    pub fn is_noop(&self) -> bool {
        self.inserts.is_empty() && self.updates.is_empty()
    }
}

/// Partitions `allocated` by whether each id is already in `stored`, preserving input order.
/// Re-submitting an unchanged sheet produces a plan with nothing to write.
pub fn plan_upsert(allocated: Vec<ScoredResult>, stored: &[ScoredResult]) -> UpsertPlan {
    let known: HashMap<&ResultId, &ScoredResult> =
        stored.iter().map(|result| (&result.id, result)).collect();

    let mut plan = UpsertPlan::default();
    for result in allocated {
        match known.get(&result.id) {
            None => plan.inserts.push(result),
            Some(existing) if **existing == result => plan.unchanged.push(result.id),
            Some(_) => plan.updates.push(result),
        }
    }
    plan
}
