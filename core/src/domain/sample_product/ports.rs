use crate::domain::sample_product::entities::SampleProduct;

pub trait SampleProductService: Send + Sync {
    fn get_sample_products(&self) -> Vec<SampleProduct>;
}
