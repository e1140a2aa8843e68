// ============================================================================
// Order Commands - Represent user intent
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OrderCommand {
    SetQuantity(u32),
    SetFlavor(String),
    SetDate(String),
    ResetOrder,
}

impl OrderCommand {
    pub fn name(&self) -> &'static str {
        match self {
            OrderCommand::SetQuantity(_) => "SetQuantity",
            OrderCommand::SetFlavor(_) => "SetFlavor",
            OrderCommand::SetDate(_) => "SetDate",
            OrderCommand::ResetOrder => "ResetOrder",
        }
    }
}
