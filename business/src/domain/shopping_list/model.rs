use crate::domain::shared::value_objects::Quantity;

/// One raw row of a shopping list.
///
/// Several rows of the same list may share a `product_id`; they are duplicates merged
/// for display by the aggregator, not separate entities.
#[derive(Debug, Clone, PartialEq)]
pub struct LineItem {
    pub id: i64,
    pub shopping_list_id: i64,
    pub product_id: i64,
    pub product_name: String,
    pub product_category_id: Option<i64>,
    pub quantity: Quantity,
    pub is_bought: bool,
}

/// A line item about to be added to a list. New items are never bought.
#[derive(Debug, Clone, PartialEq)]
pub struct NewLineItem {
    pub shopping_list_id: i64,
    pub product_id: i64,
    pub quantity: Quantity,
    pub is_bought: bool,
}

impl NewLineItem {
    pub fn new(shopping_list_id: i64, product_id: i64, quantity: Quantity) -> Self {
        Self {
            shopping_list_id,
            product_id,
            quantity,
            is_bought: false,
        }
    }
}

impl LineItem {
    /// Constructor for data already persisted in the repository (no validation).
    pub fn from_repository(
        id: i64,
        shopping_list_id: i64,
        product_id: i64,
        product_name: String,
        product_category_id: Option<i64>,
        quantity: Quantity,
        is_bought: bool,
    ) -> Self {
        Self {
            id,
            shopping_list_id,
            product_id,
            product_name,
            product_category_id,
            quantity,
            is_bought,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_default_new_item_to_not_bought() {
        let item = NewLineItem::new(1, 7, Quantity::new(2.0).unwrap());

        assert!(!item.is_bought);
        assert_eq!(item.shopping_list_id, 1);
        assert_eq!(item.product_id, 7);
    }
}
