use eframe::egui::Color32;

/// Parse `#rrggbb` (leading `#` optional).
pub fn parse_hex(hex: &str) -> Option<Color32> {
    let digits = hex.strip_prefix('#').unwrap_or(hex);
    if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    let [_, r, g, b] = u32::from_str_radix(digits, 16).ok()?.to_be_bytes();
    Some(Color32::from_rgb(r, g, b))
}

pub fn hex_or(hex: &str, fallback: Color32) -> Color32 {
    parse_hex(hex).unwrap_or(fallback)
}
