use std::cmp::Ordering as CmpOrdering;
use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

use async_trait::async_trait;
use serde_json::Value;

use business::domain::gateway::{
    Collection, DataGateway, Direction, Filter, GatewayError, Row, Select, validate_filters,
    validate_row,
};

use crate::rows::project;

/// In-process gateway used for local development and tests.
///
/// Every call yields to the scheduler first, so concurrent callers interleave the
/// way they would against a remote service.
#[derive(Debug, Default)]
pub struct MemoryGateway {
    state: Mutex<MemoryState>,
}

#[derive(Debug, Default)]
struct MemoryState {
    tables: HashMap<Collection, Vec<Row>>,
    last_ids: HashMap<Collection, i64>,
}

impl MemoryGateway {
    pub fn new() -> Self {
        Self::default()
    }

    fn state(&self) -> MutexGuard<'_, MemoryState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

fn values_equal(left: &Value, right: &Value) -> bool {
    match (left, right) {
        (Value::Number(l), Value::Number(r)) => l.as_f64() == r.as_f64(),
        _ => left == right,
    }
}

/// Ascending order with NULLs last.
fn compare_values(left: &Value, right: &Value) -> CmpOrdering {
    match (left, right) {
        (Value::Number(l), Value::Number(r)) => l
            .as_f64()
            .partial_cmp(&r.as_f64())
            .unwrap_or(CmpOrdering::Equal),
        (Value::String(l), Value::String(r)) => l.cmp(r),
        (Value::Bool(l), Value::Bool(r)) => l.cmp(r),
        (Value::Null, Value::Null) => CmpOrdering::Equal,
        (Value::Null, _) => CmpOrdering::Greater,
        (_, Value::Null) => CmpOrdering::Less,
        _ => CmpOrdering::Equal,
    }
}

fn matches(row: &Row, filters: &[Filter]) -> bool {
    filters.iter().all(|filter| {
        let value = row.get(filter.column()).unwrap_or(&Value::Null);
        match filter {
            Filter::Eq(_, expected) => values_equal(value, expected),
            Filter::In(_, candidates) => candidates.iter().any(|c| values_equal(value, c)),
        }
    })
}

#[async_trait]
impl DataGateway for MemoryGateway {
    async fn select(
        &self,
        collection: Collection,
        query: &Select,
    ) -> Result<Vec<Row>, GatewayError> {
        tokio::task::yield_now().await;
        query.validate(collection)?;

        let state = self.state();
        let mut rows: Vec<&Row> = state
            .tables
            .get(&collection)
            .map(|rows| rows.iter().filter(|row| matches(row, &query.filters)).collect())
            .unwrap_or_default();

        rows.sort_by(|a, b| {
            query
                .ordering
                .iter()
                .map(|ordering| {
                    let left = a.get(&ordering.column).unwrap_or(&Value::Null);
                    let right = b.get(&ordering.column).unwrap_or(&Value::Null);
                    match ordering.direction {
                        Direction::Ascending => compare_values(left, right),
                        Direction::Descending => compare_values(right, left),
                    }
                })
                .find(|ordering| *ordering != CmpOrdering::Equal)
                .unwrap_or(CmpOrdering::Equal)
        });

        let limit = query.limit.unwrap_or(usize::MAX);
        Ok(rows
            .into_iter()
            .take(limit)
            .map(|row| project(row.clone(), &query.columns))
            .collect())
    }

    async fn insert(&self, collection: Collection, rows: &[Row]) -> Result<Vec<Row>, GatewayError> {
        tokio::task::yield_now().await;
        for row in rows {
            validate_row(collection, row)?;
        }

        let mut state = self.state();
        let mut inserted = Vec::with_capacity(rows.len());
        for row in rows {
            let mut stored = row.clone();
            let last_id = state.last_ids.entry(collection).or_insert(0);
            match stored.get("id").and_then(Value::as_i64) {
                Some(id) => *last_id = (*last_id).max(id),
                None => {
                    *last_id += 1;
                    stored.insert("id".to_string(), Value::from(*last_id));
                }
            }
            inserted.push(stored);
        }
        state
            .tables
            .entry(collection)
            .or_default()
            .extend(inserted.iter().cloned());

        Ok(inserted)
    }

    async fn update(
        &self,
        collection: Collection,
        changes: &Row,
        filters: &[Filter],
    ) -> Result<u64, GatewayError> {
        tokio::task::yield_now().await;
        if filters.is_empty() {
            return Err(GatewayError::UnfilteredMutation);
        }
        validate_row(collection, changes)?;
        validate_filters(collection, filters)?;

        let mut state = self.state();
        let mut affected = 0;
        if let Some(rows) = state.tables.get_mut(&collection) {
            for row in rows.iter_mut().filter(|row| matches(row, filters)) {
                for (column, value) in changes {
                    row.insert(column.clone(), value.clone());
                }
                affected += 1;
            }
        }
        Ok(affected)
    }

    async fn delete(&self, collection: Collection, filters: &[Filter]) -> Result<u64, GatewayError> {
        tokio::task::yield_now().await;
        if filters.is_empty() {
            return Err(GatewayError::UnfilteredMutation);
        }
        validate_filters(collection, filters)?;

        let mut state = self.state();
        let Some(rows) = state.tables.get_mut(&collection) else {
            return Ok(0);
        };
        let before = rows.len();
        rows.retain(|row| !matches(row, filters));
        Ok((before - rows.len()) as u64)
    }
}
