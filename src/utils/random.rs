use rand::Rng;

/// Draws a random number in `[0, 10^digits)` and left-pads it with zeros.
///
/// # Examples
///
/// ```
/// let code = elearn_service::utils::random::generate_numeric_code(6); // e.g. "004217"
/// assert_eq!(code.len(), 6);
/// ```
pub fn generate_numeric_code(digits: u32) -> String {
    let upper = 10u64.pow(digits);
    let draw = rand::rng().random_range(0..upper);
    format!("{:0width$}", draw, width = digits as usize)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric_code_is_zero_padded() {
        for _ in 0..100 {
            let code = generate_numeric_code(6);
            assert_eq!(code.len(), 6);
            assert!(code.chars().all(|c| c.is_ascii_digit()));
        }
    }
}
