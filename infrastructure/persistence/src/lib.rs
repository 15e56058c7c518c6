pub mod db;
pub mod memory_gateway;
pub mod postgres_gateway;
pub mod rows;
pub mod pantry {
    pub mod entity;
    pub mod repository;
}
pub mod product {
    pub mod entity;
    pub mod repository;
}
pub mod shopping_list {
    pub mod entity;
    pub mod repository;
}
