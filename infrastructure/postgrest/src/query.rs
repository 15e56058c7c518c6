//! Rendering of gateway queries into PostgREST query parameters.
//!
//! Filters become `column=op.value` pairs, e.g. `shopping_list_id=eq.1` or
//! `id=in.(3,9)`. Values inside `in.(...)` lists are quoted when they are strings.

use serde_json::Value;

use business::domain::gateway::{Direction, Filter, GatewayError, Select};

pub type QueryParams = Vec<(String, String)>;

fn scalar(value: &Value) -> Result<String, GatewayError> {
    match value {
        Value::Bool(b) => Ok(b.to_string()),
        Value::Number(n) => Ok(n.to_string()),
        Value::String(s) => Ok(s.clone()),
        other => Err(GatewayError::UnsupportedValue(other.to_string())),
    }
}

fn list_item(value: &Value) -> Result<String, GatewayError> {
    match value {
        Value::String(s) => Ok(format!(
            "\"{}\"",
            s.replace('\\', "\\\\").replace('"', "\\\"")
        )),
        Value::Null => Ok("null".to_string()),
        other => scalar(other),
    }
}

pub fn filter_params(filters: &[Filter]) -> Result<QueryParams, GatewayError> {
    filters
        .iter()
        .map(|filter| {
            let rendered = match filter {
                Filter::Eq(_, Value::Null) => "is.null".to_string(),
                Filter::Eq(_, value) => format!("eq.{}", scalar(value)?),
                Filter::In(_, values) => {
                    let items = values
                        .iter()
                        .map(list_item)
                        .collect::<Result<Vec<_>, _>>()?;
                    format!("in.({})", items.join(","))
                }
            };
            Ok((filter.column().to_string(), rendered))
        })
        .collect()
}

pub fn select_params(query: &Select) -> Result<QueryParams, GatewayError> {
    let columns = if query.columns.is_empty() {
        "*".to_string()
    } else {
        query.columns.join(",")
    };

    let mut params = vec![("select".to_string(), columns)];
    params.extend(filter_params(&query.filters)?);

    if !query.ordering.is_empty() {
        let order = query
            .ordering
            .iter()
            .map(|ordering| match ordering.direction {
                Direction::Ascending => format!("{}.asc", ordering.column),
                Direction::Descending => format!("{}.desc", ordering.column),
            })
            .collect::<Vec<_>>()
            .join(",");
        params.push(("order".to_string(), order));
    }

    if let Some(limit) = query.limit {
        params.push(("limit".to_string(), limit.to_string()));
    }
    Ok(params)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn pair(key: &str, value: &str) -> (String, String) {
        (key.to_string(), value.to_string())
    }

    #[test]
    fn should_render_select_with_filters_order_and_limit() {
        let query = Select::columns(&["id", "quantity"])
            .filter(Filter::eq("shopping_list_id", 1))
            .filter(Filter::eq("is_bought", true))
            .order_by("id", Direction::Ascending)
            .order_by("quantity", Direction::Descending)
            .limit(5);

        let params = select_params(&query).unwrap();

        assert_eq!(
            params,
            vec![
                pair("select", "id,quantity"),
                pair("shopping_list_id", "eq.1"),
                pair("is_bought", "eq.true"),
                pair("order", "id.asc,quantity.desc"),
                pair("limit", "5"),
            ]
        );
    }

    #[test]
    fn should_select_everything_when_no_columns_given() {
        let params = select_params(&Select::all()).unwrap();

        assert_eq!(params, vec![pair("select", "*")]);
    }

    #[test]
    fn should_render_membership_with_quoted_strings() {
        let params = filter_params(&[
            Filter::one_of("id", vec![3i64, 9]),
            Filter::one_of("owner_id", vec!["uid,1", "say \"hi\""]),
        ])
        .unwrap();

        assert_eq!(params[0], pair("id", "in.(3,9)"));
        assert_eq!(params[1], pair("owner_id", r#"in.("uid,1","say \"hi\"")"#));
    }

    #[test]
    fn should_render_empty_membership_and_null_equality() {
        let params = filter_params(&[
            Filter::one_of("id", Vec::<i64>::new()),
            Filter::eq("category_id", Value::Null),
        ])
        .unwrap();

        assert_eq!(params, vec![pair("id", "in.()"), pair("category_id", "is.null")]);
    }

    #[test]
    fn should_keep_decimal_quantities_as_written() {
        let params = filter_params(&[Filter::eq("quantity", 2.5)]).unwrap();

        assert_eq!(params, vec![pair("quantity", "eq.2.5")]);
    }

    #[test]
    fn should_reject_nested_values() {
        let result = filter_params(&[Filter::eq("owner_id", json!({"a": 1}))]);

        assert!(matches!(result, Err(GatewayError::UnsupportedValue(_))));
    }
}
