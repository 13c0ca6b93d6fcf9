use serde_json::Value;

/// Source of raw menu data handed to the catalog operations.
pub trait MenuProvider: Send + Sync {
    fn thalis(&self) -> &[Value];
    fn customer_name(&self) -> Option<&str>;
}
