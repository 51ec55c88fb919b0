use crate::domain::{
    common::services::Service,
    ingredient_analysis::ports::LLMClient,
    sample_product::{entities::SampleProduct, ports::SampleProductService},
};

pub fn sample_products() -> Vec<SampleProduct> {
    vec![
        SampleProduct::new(
            "1",
            "Energy Drink",
            "Carbonated Water, High Fructose Corn Syrup, Citric Acid, Natural Flavors, Caffeine, Sodium Benzoate, Red 40",
        ),
        SampleProduct::new(
            "2",
            "Organic Almond Milk",
            "Almond Base (Filtered Water, Almonds), Sea Salt, Locust Bean Gum, Sunflower Lecithin, Gellan Gum, Vitamin A Palmitate, Ergocalciferol (Vitamin D2)",
        ),
        SampleProduct::new(
            "3",
            "Potato Chips",
            "Potatoes, Vegetable Oil (Sunflower, Corn, and/or Canola Oil), Salt",
        ),
    ]
}

impl<LLM> SampleProductService for Service<LLM>
where
    LLM: LLMClient,
{
    fn get_sample_products(&self) -> Vec<SampleProduct> {
        sample_products()
    }
}
