use poem_openapi::{Enum, Object};

use business::domain::shopping_list::aggregator::AggregatedListItem;
use business::domain::shopping_list::model::LineItem;
use business::domain::shopping_list::use_cases::transfer_bought::TransferOutcome;

#[derive(Debug, Clone, Object)]
pub struct AddItemRequest {
    /// Catalog product to add
    pub product_id: i64,
    /// Amount as typed by the user; `,` and `.` are both accepted as decimal separator
    pub quantity: String,
}

#[derive(Debug, Clone, Object)]
pub struct UpdateItemRequest {
    /// New amount, same format as when adding
    #[oai(skip_serializing_if_is_none)]
    pub quantity: Option<String>,
    #[oai(skip_serializing_if_is_none)]
    pub is_bought: Option<bool>,
}

#[derive(Debug, Clone, Object)]
pub struct SetProductBoughtRequest {
    pub is_bought: bool,
}

/// One raw row of a shopping list
#[derive(Debug, Clone, Object)]
pub struct LineItemResponse {
    pub id: i64,
    pub shopping_list_id: i64,
    pub product_id: i64,
    pub product_name: String,
    #[oai(skip_serializing_if_is_none)]
    pub product_category_id: Option<i64>,
    pub quantity: f64,
    pub is_bought: bool,
}

impl From<LineItem> for LineItemResponse {
    fn from(item: LineItem) -> Self {
        Self {
            id: item.id,
            shopping_list_id: item.shopping_list_id,
            product_id: item.product_id,
            product_name: item.product_name,
            product_category_id: item.product_category_id,
            quantity: item.quantity.value(),
            is_bought: item.is_bought,
        }
    }
}

/// All rows of one product merged for display
#[derive(Debug, Clone, Object)]
pub struct AggregatedItemResponse {
    pub product_id: i64,
    pub display_name: String,
    #[oai(skip_serializing_if_is_none)]
    pub product_category_id: Option<i64>,
    pub total_quantity: f64,
    /// True only when every merged row is bought
    pub all_bought: bool,
    /// Rows merged into this entry
    pub line_item_ids: Vec<i64>,
}

impl From<AggregatedListItem> for AggregatedItemResponse {
    fn from(item: AggregatedListItem) -> Self {
        Self {
            product_id: item.product_id,
            display_name: item.display_name,
            product_category_id: item.product_category_id,
            total_quantity: item.total_quantity.value(),
            all_bought: item.all_bought,
            line_item_ids: item.line_item_ids,
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct SetProductBoughtResponse {
    /// Number of rows updated
    pub count: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Enum)]
#[oai(rename_all = "snake_case")]
pub enum TransferStatus {
    NothingToTransfer,
    OwnerUnresolved,
    Transferred,
}

#[derive(Debug, Clone, Object)]
pub struct TransferBoughtResponse {
    pub status: TransferStatus,
    /// Distinct products written to the pantry
    pub products: u64,
    /// Bought rows removed from the list
    pub removed_rows: u64,
}

impl From<TransferOutcome> for TransferBoughtResponse {
    fn from(outcome: TransferOutcome) -> Self {
        match outcome {
            TransferOutcome::NothingToTransfer => Self {
                status: TransferStatus::NothingToTransfer,
                products: 0,
                removed_rows: 0,
            },
            TransferOutcome::OwnerUnresolved => Self {
                status: TransferStatus::OwnerUnresolved,
                products: 0,
                removed_rows: 0,
            },
            TransferOutcome::Transferred {
                products,
                removed_rows,
            } => Self {
                status: TransferStatus::Transferred,
                products: products as u64,
                removed_rows,
            },
        }
    }
}
