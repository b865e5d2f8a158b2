//! CNPJ document formatting for the payslip header.

/// Applies the CNPJ mask `XX.XXX.XXX/XXXX-XX` progressively.
///
/// Non-digit characters are stripped first, so the function can be invoked
/// on every keystroke: a partially-typed CNPJ keeps its partial mask.
///
/// # Example
///
/// ```
/// use holerite_engine::format::format_cnpj;
///
/// assert_eq!(format_cnpj("12345678000190"), "12.345.678/0001-90");
/// assert_eq!(format_cnpj("12345"), "12.345");
/// ```
pub fn format_cnpj(input: &str) -> String {
    let digits: String = input.chars().filter(|c| c.is_ascii_digit()).collect();

    let mut formatted = String::new();
    formatted.push_str(&digits[..digits.len().min(2)]);
    if digits.len() >= 3 {
        formatted.push('.');
        formatted.push_str(&digits[2..digits.len().min(5)]);
    }
    if digits.len() >= 6 {
        formatted.push('.');
        formatted.push_str(&digits[5..digits.len().min(8)]);
    }
    if digits.len() >= 9 {
        formatted.push('/');
        formatted.push_str(&digits[8..digits.len().min(12)]);
    }
    if digits.len() >= 13 {
        formatted.push('-');
        formatted.push_str(&digits[12..digits.len().min(14)]);
    }
    formatted
}
