use async_trait::async_trait;
use reqwest::{Method, Response};
use serde_json::Value;

use business::domain::gateway::{
    Collection, DataGateway, Filter, GatewayError, Row, Select, validate_filters, validate_row,
};

use crate::client::PostgrestClient;
use crate::query::{QueryParams, filter_params, select_params};

/// Gateway over a hosted PostgREST data API.
///
/// Mutations ask for `return=representation` so inserts come back with their ids and
/// updates and deletes can report how many rows they touched.
pub struct PostgrestGateway {
    client: PostgrestClient,
}

impl PostgrestGateway {
    pub fn new(client: PostgrestClient) -> Self {
        Self { client }
    }

    async fn send(
        &self,
        method: Method,
        collection: Collection,
        params: &QueryParams,
        body: Option<Value>,
    ) -> Result<Vec<Row>, GatewayError> {
        let mut request = self
            .client
            .authorize(
                self.client
                    .client
                    .request(method.clone(), self.client.table_url(collection.as_ref())),
            )
            .query(params);
        if method != Method::GET {
            request = request.header("Prefer", "return=representation");
        }
        if let Some(body) = body {
            request = request.json(&body);
        }

        let response = request.send().await.map_err(|e| {
            tracing::error!("Request to {} failed: {e}", collection);
            GatewayError::RequestFailed(e.to_string())
        })?;

        Self::decode(collection, response).await
    }

    async fn decode(collection: Collection, response: Response) -> Result<Vec<Row>, GatewayError> {
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::error!("Data API answered {status} for {collection}: {body}");
            return Err(GatewayError::RequestFailed(format!("{status}: {body}")));
        }

        let rows: Vec<Value> = response
            .json()
            .await
            .map_err(|e| GatewayError::DecodeFailed(e.to_string()))?;
        rows.into_iter()
            .map(|row| match row {
                Value::Object(row) => Ok(row),
                other => Err(GatewayError::DecodeFailed(format!(
                    "expected an object, got {other}"
                ))),
            })
            .collect()
    }
}

fn mutation_params(collection: Collection, filters: &[Filter]) -> Result<QueryParams, GatewayError> {
    if filters.is_empty() {
        return Err(GatewayError::UnfilteredMutation);
    }
    validate_filters(collection, filters)?;
    filter_params(filters)
}

#[async_trait]
impl DataGateway for PostgrestGateway {
    async fn select(
        &self,
        collection: Collection,
        query: &Select,
    ) -> Result<Vec<Row>, GatewayError> {
        query.validate(collection)?;
        let params = select_params(query)?;
        self.send(Method::GET, collection, &params, None).await
    }

    async fn insert(&self, collection: Collection, rows: &[Row]) -> Result<Vec<Row>, GatewayError> {
        if rows.is_empty() {
            return Ok(Vec::new());
        }
        for row in rows {
            validate_row(collection, row)?;
        }
        let body = Value::Array(rows.iter().cloned().map(Value::Object).collect());
        self.send(Method::POST, collection, &Vec::new(), Some(body))
            .await
    }

    async fn update(
        &self,
        collection: Collection,
        changes: &Row,
        filters: &[Filter],
    ) -> Result<u64, GatewayError> {
        let params = mutation_params(collection, filters)?;
        validate_row(collection, changes)?;
        let updated = self
            .send(
                Method::PATCH,
                collection,
                &params,
                Some(Value::Object(changes.clone())),
            )
            .await?;
        Ok(updated.len() as u64)
    }

    async fn delete(&self, collection: Collection, filters: &[Filter]) -> Result<u64, GatewayError> {
        let params = mutation_params(collection, filters)?;
        let deleted = self
            .send(Method::DELETE, collection, &params, None)
            .await?;
        Ok(deleted.len() as u64)
    }
}
