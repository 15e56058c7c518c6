use std::collections::{BTreeMap, HashMap};

use crate::domain::shared::value_objects::{Quantity, QuantityError};

use super::model::LineItem;

/// Display entry for all rows of one product in a list.
#[derive(Debug, Clone, PartialEq)]
pub struct AggregatedListItem {
    pub product_id: i64,
    pub display_name: String,
    pub product_category_id: Option<i64>,
    pub total_quantity: Quantity,
    pub all_bought: bool,
    pub line_item_ids: Vec<i64>,
}

/// Collapses raw rows into one entry per product id.
///
/// Quantities are summed in input order and the bought flag is the AND over the
/// group. Not-bought entries come first, each partition sorted by display name.
/// Fails when a group total is too large to represent.
pub fn aggregate(items: &[LineItem]) -> Result<Vec<AggregatedListItem>, QuantityError> {
    let mut positions: HashMap<i64, usize> = HashMap::new();
    let mut aggregated: Vec<AggregatedListItem> = Vec::new();

    for item in items {
        match positions.get(&item.product_id) {
            Some(&index) => {
                let entry = &mut aggregated[index];
                entry.total_quantity = entry.total_quantity.checked_add(item.quantity)?;
                entry.all_bought = entry.all_bought && item.is_bought;
                entry.line_item_ids.push(item.id);
            }
            None => {
                positions.insert(item.product_id, aggregated.len());
                aggregated.push(AggregatedListItem {
                    product_id: item.product_id,
                    display_name: item.product_name.clone(),
                    product_category_id: item.product_category_id,
                    total_quantity: item.quantity,
                    all_bought: item.is_bought,
                    line_item_ids: vec![item.id],
                });
            }
        }
    }

    aggregated.sort_by(|a, b| {
        a.all_bought
            .cmp(&b.all_bought)
            .then_with(|| {
                a.display_name
                    .to_lowercase()
                    .cmp(&b.display_name.to_lowercase())
            })
            .then_with(|| a.display_name.cmp(&b.display_name))
            .then_with(|| a.product_id.cmp(&b.product_id))
    });

    Ok(aggregated)
}

/// Sums quantities per product id, keyed in ascending product id order.
pub fn sum_quantities_by_product(
    items: &[LineItem],
) -> Result<BTreeMap<i64, Quantity>, QuantityError> {
    let mut totals: BTreeMap<i64, Quantity> = BTreeMap::new();
    for item in items {
        match totals.get_mut(&item.product_id) {
            Some(total) => *total = total.checked_add(item.quantity)?,
            None => {
                totals.insert(item.product_id, item.quantity);
            }
        }
    }
    Ok(totals)
}
