use std::sync::Arc;

use poem_openapi::{OpenApi, param::Path, payload::Json};

use business::domain::shared::value_objects::Quantity;
use business::domain::shopping_list::use_cases::add_item::{AddItemParams, AddItemUseCase};
use business::domain::shopping_list::use_cases::delete_item::{
    DeleteItemParams, DeleteItemUseCase,
};
use business::domain::shopping_list::use_cases::get_aggregated::{
    GetAggregatedItemsParams, GetAggregatedItemsUseCase,
};
use business::domain::shopping_list::use_cases::get_items::{GetItemsParams, GetItemsUseCase};
use business::domain::shopping_list::use_cases::set_product_bought::{
    SetProductBoughtParams, SetProductBoughtUseCase,
};
use business::domain::shopping_list::use_cases::transfer_bought::{
    TransferBoughtParams, TransferBoughtUseCase,
};
use business::domain::shopping_list::use_cases::update_item::{
    UpdateItemParams, UpdateItemUseCase,
};

use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::security::FirebaseBearer;
use crate::api::shopping_list::dto::{
    AddItemRequest, AggregatedItemResponse, LineItemResponse, SetProductBoughtRequest,
    SetProductBoughtResponse, TransferBoughtResponse, UpdateItemRequest,
};
use crate::api::tags::ApiTags;

pub struct ShoppingListApi {
    get_items_use_case: Arc<dyn GetItemsUseCase>,
    get_aggregated_use_case: Arc<dyn GetAggregatedItemsUseCase>,
    add_item_use_case: Arc<dyn AddItemUseCase>,
    update_item_use_case: Arc<dyn UpdateItemUseCase>,
    delete_item_use_case: Arc<dyn DeleteItemUseCase>,
    set_product_bought_use_case: Arc<dyn SetProductBoughtUseCase>,
    transfer_bought_use_case: Arc<dyn TransferBoughtUseCase>,
}

impl ShoppingListApi {
    pub fn new(
        get_items_use_case: Arc<dyn GetItemsUseCase>,
        get_aggregated_use_case: Arc<dyn GetAggregatedItemsUseCase>,
        add_item_use_case: Arc<dyn AddItemUseCase>,
        update_item_use_case: Arc<dyn UpdateItemUseCase>,
        delete_item_use_case: Arc<dyn DeleteItemUseCase>,
        set_product_bought_use_case: Arc<dyn SetProductBoughtUseCase>,
        transfer_bought_use_case: Arc<dyn TransferBoughtUseCase>,
    ) -> Self {
        Self {
            get_items_use_case,
            get_aggregated_use_case,
            add_item_use_case,
            update_item_use_case,
            delete_item_use_case,
            set_product_bought_use_case,
            transfer_bought_use_case,
        }
    }
}

/// Shopping list API
///
/// Raw list rows, their per-product aggregation and the move of bought items
/// into the pantry.
#[OpenApi]
impl ShoppingListApi {
    /// List raw rows
    ///
    /// Returns every row of the list, duplicates included, ordered by row id.
    #[oai(
        path = "/shopping-lists/:list_id/items",
        method = "get",
        tag = "ApiTags::ShoppingLists"
    )]
    async fn get_items(&self, _auth: FirebaseBearer, list_id: Path<i64>) -> GetItemsResponse {
        match self
            .get_items_use_case
            .execute(GetItemsParams { list_id: list_id.0 })
            .await
        {
            Ok(items) => GetItemsResponse::Ok(Json(items.into_iter().map(Into::into).collect())),
            Err(err) => {
                let (_status, json) = err.into_error_response();
                GetItemsResponse::InternalError(json)
            }
        }
    }

    /// List aggregated items
    ///
    /// One entry per product with summed quantity. Entries not yet bought come
    /// first, each group sorted by product name.
    #[oai(
        path = "/shopping-lists/:list_id/items/aggregated",
        method = "get",
        tag = "ApiTags::ShoppingLists"
    )]
    async fn get_aggregated(
        &self,
        _auth: FirebaseBearer,
        list_id: Path<i64>,
    ) -> GetAggregatedItemsResponse {
        match self
            .get_aggregated_use_case
            .execute(GetAggregatedItemsParams { list_id: list_id.0 })
            .await
        {
            Ok(items) => GetAggregatedItemsResponse::Ok(Json(
                items.into_iter().map(Into::into).collect(),
            )),
            Err(err) => {
                let (_status, json) = err.into_error_response();
                GetAggregatedItemsResponse::InternalError(json)
            }
        }
    }

    /// Add an item
    ///
    /// Always inserts a new row, even when the product is already on the list.
    #[oai(
        path = "/shopping-lists/:list_id/items",
        method = "post",
        tag = "ApiTags::ShoppingLists"
    )]
    async fn add_item(
        &self,
        _auth: FirebaseBearer,
        list_id: Path<i64>,
        body: Json<AddItemRequest>,
    ) -> AddItemResponse {
        let quantity = match Quantity::parse(&body.0.quantity) {
            Ok(quantity) => quantity,
            Err(err) => return AddItemResponse::BadRequest(err.into_error_response().1),
        };

        let params = AddItemParams {
            list_id: list_id.0,
            product_id: body.0.product_id,
            quantity,
        };

        match self.add_item_use_case.execute(params).await {
            Ok(item) => AddItemResponse::Created(Json(item.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => AddItemResponse::BadRequest(json),
                    404 => AddItemResponse::NotFound(json),
                    _ => AddItemResponse::InternalError(json),
                }
            }
        }
    }

    /// Update a row
    ///
    /// Changes the quantity and/or bought flag of a single row.
    #[oai(
        path = "/shopping-list-items/:id",
        method = "put",
        tag = "ApiTags::ShoppingLists"
    )]
    async fn update_item(
        &self,
        _auth: FirebaseBearer,
        id: Path<i64>,
        body: Json<UpdateItemRequest>,
    ) -> UpdateItemResponse {
        let quantity = match body.0.quantity.as_deref().map(Quantity::parse).transpose() {
            Ok(quantity) => quantity,
            Err(err) => return UpdateItemResponse::BadRequest(err.into_error_response().1),
        };

        let params = UpdateItemParams {
            id: id.0,
            quantity,
            is_bought: body.0.is_bought,
        };

        match self.update_item_use_case.execute(params).await {
            Ok(item) => UpdateItemResponse::Ok(Json(item.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => UpdateItemResponse::BadRequest(json),
                    404 => UpdateItemResponse::NotFound(json),
                    _ => UpdateItemResponse::InternalError(json),
                }
            }
        }
    }

    /// Delete a row
    #[oai(
        path = "/shopping-list-items/:id",
        method = "delete",
        tag = "ApiTags::ShoppingLists"
    )]
    async fn delete_item(&self, _auth: FirebaseBearer, id: Path<i64>) -> DeleteItemResponse {
        match self
            .delete_item_use_case
            .execute(DeleteItemParams { id: id.0 })
            .await
        {
            Ok(()) => DeleteItemResponse::NoContent,
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => DeleteItemResponse::NotFound(json),
                    _ => DeleteItemResponse::InternalError(json),
                }
            }
        }
    }

    /// Mark a product bought
    ///
    /// Sets the bought flag on every row of the product in the list, which is what
    /// ticking an aggregated entry does.
    #[oai(
        path = "/shopping-lists/:list_id/products/:product_id/bought",
        method = "put",
        tag = "ApiTags::ShoppingLists"
    )]
    async fn set_product_bought(
        &self,
        _auth: FirebaseBearer,
        list_id: Path<i64>,
        product_id: Path<i64>,
        body: Json<SetProductBoughtRequest>,
    ) -> SetProductBoughtApiResponse {
        let params = SetProductBoughtParams {
            list_id: list_id.0,
            product_id: product_id.0,
            is_bought: body.0.is_bought,
        };

        match self.set_product_bought_use_case.execute(params).await {
            Ok(count) => SetProductBoughtApiResponse::Ok(Json(SetProductBoughtResponse { count })),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => SetProductBoughtApiResponse::NotFound(json),
                    _ => SetProductBoughtApiResponse::InternalError(json),
                }
            }
        }
    }

    /// Move bought items to the pantry
    ///
    /// Adds the bought quantities of the list to the caller's pantry and removes the
    /// bought rows. Runs for the same list are queued, never interleaved.
    #[oai(
        path = "/shopping-lists/:list_id/transfer-bought",
        method = "post",
        tag = "ApiTags::ShoppingLists"
    )]
    async fn transfer_bought(
        &self,
        auth: FirebaseBearer,
        list_id: Path<i64>,
    ) -> TransferBoughtApiResponse {
        let params = TransferBoughtParams {
            list_id: list_id.0,
            owner: auth.owner(),
        };

        match self.transfer_bought_use_case.execute(params).await {
            Ok(outcome) => TransferBoughtApiResponse::Ok(Json(outcome.into())),
            Err(err) => {
                let (_status, json) = err.into_error_response();
                TransferBoughtApiResponse::InternalError(json)
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetItemsResponse {
    #[oai(status = 200)]
    Ok(Json<Vec<LineItemResponse>>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetAggregatedItemsResponse {
    #[oai(status = 200)]
    Ok(Json<Vec<AggregatedItemResponse>>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum AddItemResponse {
    #[oai(status = 201)]
    Created(Json<LineItemResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum UpdateItemResponse {
    #[oai(status = 200)]
    Ok(Json<LineItemResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum DeleteItemResponse {
    #[oai(status = 204)]
    NoContent,
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum SetProductBoughtApiResponse {
    #[oai(status = 200)]
    Ok(Json<SetProductBoughtResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum TransferBoughtApiResponse {
    #[oai(status = 200)]
    Ok(Json<TransferBoughtResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
