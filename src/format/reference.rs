//! Reference-month formatting for the payslip header.

use chrono::{Datelike, NaiveDate};

/// Portuguese month names, uppercase, as printed on the payslip.
const MONTHS: [&str; 12] = [
    "JANEIRO",
    "FEVEREIRO",
    "MARÇO",
    "ABRIL",
    "MAIO",
    "JUNHO",
    "JULHO",
    "AGOSTO",
    "SETEMBRO",
    "OUTUBRO",
    "NOVEMBRO",
    "DEZEMBRO",
];

/// Formats an issue date as `"MONTH / YEAR"` for the payslip header.
///
/// The input is expected as `dd/mm/yyyy`. Anything that does not parse as a
/// date is returned unchanged, so free-text references ("13º SALÁRIO") pass
/// through.
///
/// # Example
///
/// ```
/// use holerite_engine::format::reference_month;
///
/// assert_eq!(reference_month("10/03/2025"), "MARÇO / 2025");
/// assert_eq!(reference_month("13º SALÁRIO"), "13º SALÁRIO");
/// ```
pub fn reference_month(input: &str) -> String {
    match NaiveDate::parse_from_str(input, "%d/%m/%Y") {
        Ok(date) => format!("{} / {}", MONTHS[date.month0() as usize], date.year()),
        Err(_) => input.to_string(),
    }
}
