pub mod common;
pub mod ingredient_analysis;
pub mod sample_product;
