//! Contract of the remote data gateway.
//!
//! The gateway executes filtered queries and mutations against named relational
//! collections. Rows travel as JSON objects so that every adapter (SQL, hosted HTTP
//! data API, in-memory) speaks the same shape.

use async_trait::async_trait;
use serde_json::{Map, Value};
use strum_macros::{AsRefStr, Display, EnumString};

/// A decoded row: column name to JSON value.
pub type Row = Map<String, Value>;

/// Named relational collections used by the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, AsRefStr, EnumString)]
#[strum(serialize_all = "snake_case")]
pub enum Collection {
    ProductOnList,
    Pantry,
    Product,
}

impl Collection {
    /// Columns known for this collection, primary key first.
    pub fn columns(&self) -> &'static [&'static str] {
        match self {
            Collection::ProductOnList => &[
                "id",
                "shopping_list_id",
                "product_id",
                "quantity",
                "is_bought",
            ],
            Collection::Pantry => &["id", "owner_id", "product_id", "quantity"],
            Collection::Product => &["id", "name", "category_id"],
        }
    }

    /// Fails with `UnknownColumn` when `column` is not part of this collection.
    pub fn check_column(&self, column: &str) -> Result<(), GatewayError> {
        if self.columns().contains(&column) {
            Ok(())
        } else {
            Err(GatewayError::UnknownColumn(format!("{}.{}", self, column)))
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Filter {
    /// `column = value`; a `Null` value compares with `IS NULL`.
    Eq(String, Value),
    /// `column IN (values)`; an empty set matches nothing.
    In(String, Vec<Value>),
}

impl Filter {
    pub fn eq(column: &str, value: impl Into<Value>) -> Self {
        Filter::Eq(column.to_string(), value.into())
    }

    pub fn one_of<V: Into<Value>>(column: &str, values: impl IntoIterator<Item = V>) -> Self {
        Filter::In(
            column.to_string(),
            values.into_iter().map(Into::into).collect(),
        )
    }

    pub fn column(&self) -> &str {
        match self {
            Filter::Eq(column, _) | Filter::In(column, _) => column,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Ascending,
    Descending,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Ordering {
    pub column: String,
    pub direction: Direction,
}

/// A `select` request: projected columns (empty means all), filters joined with AND,
/// ordering and an optional limit.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Select {
    pub columns: Vec<String>,
    pub filters: Vec<Filter>,
    pub ordering: Vec<Ordering>,
    pub limit: Option<usize>,
}

impl Select {
    pub fn all() -> Self {
        Self::default()
    }

    pub fn columns(columns: &[&str]) -> Self {
        Self {
            columns: columns.iter().map(|c| c.to_string()).collect(),
            ..Self::default()
        }
    }

    pub fn filter(mut self, filter: Filter) -> Self {
        self.filters.push(filter);
        self
    }

    pub fn order_by(mut self, column: &str, direction: Direction) -> Self {
        self.ordering.push(Ordering {
            column: column.to_string(),
            direction,
        });
        self
    }

    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Checks every referenced column against the collection.
    pub fn validate(&self, collection: Collection) -> Result<(), GatewayError> {
        for column in &self.columns {
            collection.check_column(column)?;
        }
        validate_filters(collection, &self.filters)?;
        for ordering in &self.ordering {
            collection.check_column(&ordering.column)?;
        }
        Ok(())
    }
}

pub fn validate_filters(collection: Collection, filters: &[Filter]) -> Result<(), GatewayError> {
    for filter in filters {
        collection.check_column(filter.column())?;
    }
    Ok(())
}

/// Checks the columns of a row to be written and rejects an empty row.
pub fn validate_row(collection: Collection, row: &Row) -> Result<(), GatewayError> {
    if row.is_empty() {
        return Err(GatewayError::EmptyRow);
    }
    for column in row.keys() {
        collection.check_column(column)?;
    }
    Ok(())
}

/// Gateway errors, with code-style identifiers like the rest of the domain.
#[derive(Debug, thiserror::Error)]
pub enum GatewayError {
    #[error("gateway.unknown_column")]
    UnknownColumn(String),
    #[error("gateway.empty_row")]
    EmptyRow,
    #[error("gateway.unfiltered_mutation")]
    UnfilteredMutation,
    #[error("gateway.unsupported_value")]
    UnsupportedValue(String),
    #[error("gateway.request_failed")]
    RequestFailed(String),
    #[error("gateway.decode_failed")]
    DecodeFailed(String),
}

#[async_trait]
pub trait DataGateway: Send + Sync {
    async fn select(&self, collection: Collection, query: &Select)
    -> Result<Vec<Row>, GatewayError>;
    /// Inserts the rows and returns their stored representation (ids assigned).
    async fn insert(&self, collection: Collection, rows: &[Row]) -> Result<Vec<Row>, GatewayError>;
    /// Applies `changes` to every row matching `filters`, returns the affected count.
    async fn update(
        &self,
        collection: Collection,
        changes: &Row,
        filters: &[Filter],
    ) -> Result<u64, GatewayError>;
    /// Deletes every row matching `filters`, returns the affected count.
    async fn delete(&self, collection: Collection, filters: &[Filter]) -> Result<u64, GatewayError>;
}
