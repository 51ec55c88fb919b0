/// Text accepted by the analysis service, already reduced to a single input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalyzeIngredientsInput {
    pub text: String,
}

impl AnalyzeIngredientsInput {
    /// Picks the ingredient list when present, otherwise the product name.
    ///
    /// Absent and empty strings are treated the same way.
    pub fn select(ingredients_text: Option<String>, product_name: Option<String>) -> Option<Self> {
        ingredients_text
            .filter(|text| !text.is_empty())
            .or_else(|| product_name.filter(|name| !name.is_empty()))
            .map(|text| Self { text })
    }
}
