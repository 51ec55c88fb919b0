pub mod health;
pub mod ingredient_analysis;
pub mod sample_product;
pub mod server;
