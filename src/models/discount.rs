//! Discount line entry model.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One line item on the payslip body.
///
/// A line carries an event code, a free-text description and an earning
/// ("vencimento") and/or a discount amount. The caller guarantees at least
/// one of the two amounts is present; the engine preserves insertion order
/// for display and ignores order for the totals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiscountEntry {
    /// The event code for this line.
    pub code: String,
    /// Free-text description of the line.
    pub description: String,
    /// The earning amount, when the line pays something.
    pub earning: Option<Decimal>,
    /// The discount amount, when the line deducts something.
    pub discount: Option<Decimal>,
}
