use async_trait::async_trait;
use serde_json::Value;
use sqlx::types::Json;
use sqlx::{PgPool, Postgres, QueryBuilder};

use business::domain::gateway::{
    Collection, DataGateway, Direction, Filter, GatewayError, Row, Select, validate_filters,
    validate_row,
};

use crate::rows::project;

/// Gateway over a PostgreSQL database.
///
/// Column names are checked against the collection before they reach SQL; every value
/// is sent as a bound parameter. Rows are decoded through `to_jsonb`.
pub struct PostgresGateway {
    pool: PgPool,
}

impl PostgresGateway {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn request_failed(e: sqlx::Error) -> GatewayError {
    tracing::error!("Database request failed: {e}");
    GatewayError::RequestFailed(e.to_string())
}

fn push_value(builder: &mut QueryBuilder<'static, Postgres>, value: &Value) -> Result<(), GatewayError> {
    match value {
        Value::Null => {
            builder.push("NULL");
        }
        Value::Bool(b) => {
            builder.push_bind(*b);
        }
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                builder.push_bind(i);
            } else if let Some(f) = n.as_f64() {
                builder.push_bind(f);
            } else {
                return Err(GatewayError::UnsupportedValue(n.to_string()));
            }
        }
        Value::String(s) => {
            builder.push_bind(s.clone());
        }
        other => return Err(GatewayError::UnsupportedValue(other.to_string())),
    }
    Ok(())
}

fn push_filters(
    builder: &mut QueryBuilder<'static, Postgres>,
    filters: &[Filter],
) -> Result<(), GatewayError> {
    for (index, filter) in filters.iter().enumerate() {
        builder.push(if index == 0 { " WHERE " } else { " AND " });
        match filter {
            Filter::Eq(column, Value::Null) => {
                builder.push(column).push(" IS NULL");
            }
            Filter::Eq(column, value) => {
                builder.push(column).push(" = ");
                push_value(builder, value)?;
            }
            Filter::In(_, values) if values.is_empty() => {
                builder.push("FALSE");
            }
            Filter::In(column, values) => {
                builder.push(column).push(" IN (");
                for (position, value) in values.iter().enumerate() {
                    if position > 0 {
                        builder.push(", ");
                    }
                    push_value(builder, value)?;
                }
                builder.push(")");
            }
        }
    }
    Ok(())
}

fn select_query(
    collection: Collection,
    query: &Select,
) -> Result<QueryBuilder<'static, Postgres>, GatewayError> {
    query.validate(collection)?;

    let mut builder = QueryBuilder::new(format!("SELECT to_jsonb(t) FROM {} AS t", collection));
    push_filters(&mut builder, &query.filters)?;

    for (index, ordering) in query.ordering.iter().enumerate() {
        builder.push(if index == 0 { " ORDER BY " } else { ", " });
        builder.push(&ordering.column);
        builder.push(match ordering.direction {
            Direction::Ascending => " ASC",
            Direction::Descending => " DESC",
        });
    }

    if let Some(limit) = query.limit {
        builder.push(" LIMIT ");
        builder.push_bind(limit as i64);
    }
    Ok(builder)
}

fn insert_query(
    collection: Collection,
    row: &Row,
) -> Result<QueryBuilder<'static, Postgres>, GatewayError> {
    validate_row(collection, row)?;

    let columns: Vec<&str> = row.keys().map(String::as_str).collect();
    let mut builder = QueryBuilder::new(format!(
        "INSERT INTO {} AS t ({}) VALUES (",
        collection,
        columns.join(", ")
    ));
    for (position, value) in row.values().enumerate() {
        if position > 0 {
            builder.push(", ");
        }
        push_value(&mut builder, value)?;
    }
    builder.push(") RETURNING to_jsonb(t)");
    Ok(builder)
}

fn update_query(
    collection: Collection,
    changes: &Row,
    filters: &[Filter],
) -> Result<QueryBuilder<'static, Postgres>, GatewayError> {
    if filters.is_empty() {
        return Err(GatewayError::UnfilteredMutation);
    }
    validate_row(collection, changes)?;
    validate_filters(collection, filters)?;

    let mut builder = QueryBuilder::new(format!("UPDATE {} SET ", collection));
    for (position, (column, value)) in changes.iter().enumerate() {
        if position > 0 {
            builder.push(", ");
        }
        builder.push(column).push(" = ");
        push_value(&mut builder, value)?;
    }
    push_filters(&mut builder, filters)?;
    Ok(builder)
}

fn delete_query(
    collection: Collection,
    filters: &[Filter],
) -> Result<QueryBuilder<'static, Postgres>, GatewayError> {
    if filters.is_empty() {
        return Err(GatewayError::UnfilteredMutation);
    }
    validate_filters(collection, filters)?;

    let mut builder = QueryBuilder::new(format!("DELETE FROM {}", collection));
    push_filters(&mut builder, filters)?;
    Ok(builder)
}

#[async_trait]
impl DataGateway for PostgresGateway {
    async fn select(
        &self,
        collection: Collection,
        query: &Select,
    ) -> Result<Vec<Row>, GatewayError> {
        let mut builder = select_query(collection, query)?;
        let rows: Vec<Json<Row>> = builder
            .build_query_scalar()
            .fetch_all(&self.pool)
            .await
            .map_err(request_failed)?;

        Ok(rows
            .into_iter()
            .map(|Json(row)| project(row, &query.columns))
            .collect())
    }

    async fn insert(&self, collection: Collection, rows: &[Row]) -> Result<Vec<Row>, GatewayError> {
        let mut tx = self.pool.begin().await.map_err(request_failed)?;
        let mut inserted = Vec::with_capacity(rows.len());
        for row in rows {
            let mut builder = insert_query(collection, row)?;
            let Json(stored): Json<Row> = builder
                .build_query_scalar()
                .fetch_one(&mut *tx)
                .await
                .map_err(request_failed)?;
            inserted.push(stored);
        }
        tx.commit().await.map_err(request_failed)?;
        Ok(inserted)
    }

    async fn update(
        &self,
        collection: Collection,
        changes: &Row,
        filters: &[Filter],
    ) -> Result<u64, GatewayError> {
        let mut builder = update_query(collection, changes, filters)?;
        let result = builder
            .build()
            .execute(&self.pool)
            .await
            .map_err(request_failed)?;
        Ok(result.rows_affected())
    }

    async fn delete(&self, collection: Collection, filters: &[Filter]) -> Result<u64, GatewayError> {
        let mut builder = delete_query(collection, filters)?;
        let result = builder
            .build()
            .execute(&self.pool)
            .await
            .map_err(request_failed)?;
        Ok(result.rows_affected())
    }
}
