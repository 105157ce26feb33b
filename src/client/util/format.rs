use chrono::NaiveDateTime;

/// `2025-10-17 14:03`
pub fn datetime(value: &NaiveDateTime) -> String {
    value.format("%Y-%m-%d %H:%M").to_string()
}

/// `#025`
pub fn dex_number(id: i32) -> String {
    format!("#{id:03}")
}
