// ============================================================================
// Order Business Rule Errors
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum OrderError {
    #[error("Flavor cannot be empty")]
    EmptyFlavor,

    #[error("Pickup date is not one of the offered options: {0:?}")]
    UnknownPickupDate(String),

    #[error("Order is incomplete: {0} not chosen")]
    Incomplete(&'static str),
}
