// DTOs for Product
#[derive(Debug, Clone)]
pub struct ProductCreate {
    pub name: String,
    pub price: f64,
    pub stock: Option<u32>,
}

#[derive(Debug, Clone, Default)]
pub struct ProductPatch {
    pub price: Option<f64>,
    /// Replaces the stock level, creating the inventory record if missing.
    pub stock: Option<u32>,
}
