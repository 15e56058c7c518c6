pub mod application {
    pub mod pantry {
        pub mod delete;
        pub mod get_all;
        pub mod update_quantity;
    }
    pub mod shopping_list {
        pub mod add_item;
        pub mod delete_item;
        pub mod get_aggregated;
        pub mod get_items;
        pub mod set_product_bought;
        pub mod transfer_bought;
        pub mod update_item;
    }
}

pub mod domain {
    pub mod errors;
    pub mod gateway;
    pub mod logger;
    pub mod shared {
        pub mod value_objects;
    }
    pub mod pantry {
        pub mod errors;
        pub mod model;
        pub mod repository;
        pub mod use_cases {
            pub mod delete;
            pub mod get_all;
            pub mod update_quantity;
        }
    }
    pub mod product {
        pub mod model;
        pub mod repository;
    }
    pub mod shopping_list {
        pub mod aggregator;
        pub mod errors;
        pub mod list_lock;
        pub mod model;
        pub mod repository;
        pub mod use_cases {
            pub mod add_item;
            pub mod delete_item;
            pub mod get_aggregated;
            pub mod get_items;
            pub mod set_product_bought;
            pub mod transfer_bought;
            pub mod update_item;
        }
    }
}
