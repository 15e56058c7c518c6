use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use business::domain::errors::RepositoryError;
use business::domain::gateway::Row;

/// Serializes an entity into a gateway row.
pub fn to_row<T: Serialize>(entity: &T) -> Result<Row, RepositoryError> {
    match serde_json::to_value(entity) {
        Ok(Value::Object(row)) => Ok(row),
        Ok(other) => Err(RepositoryError::decode_failed(format!(
            "expected an object, got {other}"
        ))),
        Err(e) => Err(RepositoryError::decode_failed(e.to_string())),
    }
}

/// Decodes a gateway row into an entity.
pub fn from_row<T: DeserializeOwned>(row: Row) -> Result<T, RepositoryError> {
    serde_json::from_value(Value::Object(row))
        .map_err(|e| RepositoryError::decode_failed(e.to_string()))
}

/// Keeps only `columns` (all of them when empty), in that order.
pub fn project(row: Row, columns: &[String]) -> Row {
    if columns.is_empty() {
        return row;
    }
    columns
        .iter()
        .map(|column| {
            (
                column.clone(),
                row.get(column).cloned().unwrap_or(Value::Null),
            )
        })
        .collect()
}

pub fn from_rows<T: DeserializeOwned>(rows: Vec<Row>) -> Result<Vec<T>, RepositoryError> {
    rows.into_iter().map(from_row).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use serde_json::json;

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Sample {
        id: i64,
        quantity: f64,
    }

    #[test]
    fn should_decode_integer_json_into_float_field() {
        let row = json!({"id": 7, "quantity": 300}).as_object().cloned().unwrap();

        let sample: Sample = from_row(row).unwrap();

        assert_eq!(sample, Sample { id: 7, quantity: 300.0 });
    }

    #[test]
    fn should_report_missing_columns() {
        let row = json!({"id": 7}).as_object().cloned().unwrap();

        let result: Result<Sample, _> = from_row(row);

        assert!(matches!(result, Err(RepositoryError::DecodeFailed(_))));
    }

    #[test]
    fn should_encode_entity_as_row() {
        let row = to_row(&Sample { id: 1, quantity: 2.5 }).unwrap();

        assert_eq!(row.get("quantity"), Some(&json!(2.5)));
    }

    #[test]
    fn should_project_requested_columns_only() {
        let row = json!({"id": 1, "name": "Rice", "category_id": 2})
            .as_object()
            .cloned()
            .unwrap();

        let projected = project(row, &["name".to_string(), "missing".to_string()]);

        assert_eq!(projected.len(), 2);
        assert_eq!(projected["name"], json!("Rice"));
        assert_eq!(projected["missing"], Value::Null);
    }

    #[test]
    fn should_reject_non_object_values() {
        assert!(to_row(&42).is_err());
    }
}
