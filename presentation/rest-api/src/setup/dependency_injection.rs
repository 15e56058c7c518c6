use std::sync::Arc;

use business::domain::gateway::DataGateway;
use business::domain::shopping_list::list_lock::{ListLocks, OwnerLocks};
use logger::TracingLogger;
use persistence::pantry::repository::GatewayPantryRepository;
use persistence::product::repository::GatewayProductRepository;
use persistence::shopping_list::repository::GatewayShoppingListRepository;

use business::application::pantry::delete::DeletePantryEntryUseCaseImpl;
use business::application::pantry::get_all::GetPantryUseCaseImpl;
use business::application::pantry::update_quantity::UpdatePantryQuantityUseCaseImpl;
use business::application::shopping_list::add_item::AddItemUseCaseImpl;
use business::application::shopping_list::delete_item::DeleteItemUseCaseImpl;
use business::application::shopping_list::get_aggregated::GetAggregatedItemsUseCaseImpl;
use business::application::shopping_list::get_items::GetItemsUseCaseImpl;
use business::application::shopping_list::set_product_bought::SetProductBoughtUseCaseImpl;
use business::application::shopping_list::transfer_bought::TransferBoughtUseCaseImpl;
use business::application::shopping_list::update_item::UpdateItemUseCaseImpl;

use crate::api::health::routes::Api as HealthApi;
use crate::api::pantry::routes::PantryApi;
use crate::api::shopping_list::routes::ShoppingListApi;

pub struct DependencyContainer {
    pub health_api: HealthApi,
    pub shopping_list_api: ShoppingListApi,
    pub pantry_api: PantryApi,
}

impl DependencyContainer {
    /// Wires every repository to the one injected gateway.
    pub fn new(gateway: Arc<dyn DataGateway>) -> Self {
        let logger = Arc::new(TracingLogger);
        let list_locks = Arc::new(ListLocks::new());
        let owner_locks = Arc::new(OwnerLocks::new());

        // Infrastructure adapters
        let product_repository = Arc::new(GatewayProductRepository::new(gateway.clone()));
        let shopping_list_repository = Arc::new(GatewayShoppingListRepository::new(
            gateway.clone(),
            product_repository.clone(),
        ));
        let pantry_repository = Arc::new(GatewayPantryRepository::new(gateway));

        // Shopping list use cases
        let get_items_use_case = Arc::new(GetItemsUseCaseImpl {
            repository: shopping_list_repository.clone(),
            logger: logger.clone(),
        });
        let get_aggregated_use_case = Arc::new(GetAggregatedItemsUseCaseImpl {
            repository: shopping_list_repository.clone(),
            logger: logger.clone(),
        });
        let add_item_use_case = Arc::new(AddItemUseCaseImpl {
            repository: shopping_list_repository.clone(),
            product_repository,
            logger: logger.clone(),
        });
        let update_item_use_case = Arc::new(UpdateItemUseCaseImpl {
            repository: shopping_list_repository.clone(),
            logger: logger.clone(),
        });
        let delete_item_use_case = Arc::new(DeleteItemUseCaseImpl {
            repository: shopping_list_repository.clone(),
            logger: logger.clone(),
        });
        let set_product_bought_use_case = Arc::new(SetProductBoughtUseCaseImpl {
            repository: shopping_list_repository.clone(),
            logger: logger.clone(),
        });
        let transfer_bought_use_case = Arc::new(TransferBoughtUseCaseImpl {
            repository: shopping_list_repository,
            pantry_repository: pantry_repository.clone(),
            list_locks,
            owner_locks,
            logger: logger.clone(),
        });

        // Pantry use cases
        let get_pantry_use_case = Arc::new(GetPantryUseCaseImpl {
            repository: pantry_repository.clone(),
            logger: logger.clone(),
        });
        let update_pantry_quantity_use_case = Arc::new(UpdatePantryQuantityUseCaseImpl {
            repository: pantry_repository.clone(),
            logger: logger.clone(),
        });
        let delete_pantry_entry_use_case = Arc::new(DeletePantryEntryUseCaseImpl {
            repository: pantry_repository,
            logger,
        });

        let shopping_list_api = ShoppingListApi::new(
            get_items_use_case,
            get_aggregated_use_case,
            add_item_use_case,
            update_item_use_case,
            delete_item_use_case,
            set_product_bought_use_case,
            transfer_bought_use_case,
        );
        let pantry_api = PantryApi::new(
            get_pantry_use_case,
            update_pantry_quantity_use_case,
            delete_pantry_entry_use_case,
        );

        Self {
            health_api: HealthApi::new(),
            shopping_list_api,
            pantry_api,
        }
    }
}
