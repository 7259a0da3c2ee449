pub fn truncate(text: &str, max_len: usize) -> String {
    if text.chars().count() <= max_len {
        text.to_string()
    } else {
        let truncated: String = text.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", truncated)
    }
}

/// Upper-case the first character only ("men's clothing" -> "Men's clothing")
pub fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

pub fn format_price(price: f64) -> String {
    format!("${:.2}", price)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capitalize_first_letter_only() {
        assert_eq!(capitalize("men's clothing"), "Men's clothing");
        assert_eq!(capitalize("tools"), "Tools");
        assert_eq!(capitalize(""), "");
    }

    #[test]
    fn test_truncate_adds_ellipsis() {
        assert_eq!(truncate("Torque Wrench 1/2in", 10), "Torque ...");
        assert_eq!(truncate("Hammer", 10), "Hammer");
    }

    #[test]
    fn test_price_has_two_decimals() {
        assert_eq!(format_price(9.9), "$9.90");
        assert_eq!(format_price(109.0), "$109.00");
    }
}
