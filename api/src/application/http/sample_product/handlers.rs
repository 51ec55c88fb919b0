pub mod get_sample_products;
