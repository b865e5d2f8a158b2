//! Formatting layer for the Payslip Calculation Engine.
//!
//! Contains the Brazilian-locale monetary parser/formatter consumed by
//! every calculation path, plus the reference-month and CNPJ helpers used
//! for the payslip header.

mod document;
mod monetary;
mod reference;

pub use document::format_cnpj;
pub use monetary::{
    format_amount, parse_amount, parse_line_item, reformat_amount, reformat_line_item,
};
pub use reference::reference_month;
