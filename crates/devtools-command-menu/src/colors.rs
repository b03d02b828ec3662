//! Category tag colors

/// Material palette used to tint category tags
pub const MATERIAL_PALETTE_COLORS: [&str; 17] = [
    "#F44336", "#E91E63", "#9C27B0", "#673AB7", "#3F51B5", "#03A9F4", "#00BCD4", "#009688",
    "#4CAF50", "#8BC34A", "#CDDC39", "#FFC107", "#FF9800", "#FF5722", "#795548", "#9E9E9E",
    "#607D8B",
];

// 2^32 - 5
const HASH_PRIME: u128 = 4_294_967_291;
const HASH_Z: u128 = 0x5033_d967;
const HASH_Z2: u128 = 0x59d2_f15d;

/// Stable string hash over UTF-16 code units
///
/// Polynomial hash modulo the prime `2^32 - 5` (Woelfel). The empty string
/// hashes to 0.
pub fn string_hash(s: &str) -> u32 {
    if s.is_empty() {
        return 0;
    }

    let mut sum: u128 = 0;
    let mut zi: u128 = 1;
    for unit in s.encode_utf16() {
        let xi = u128::from(unit) * HASH_Z2;
        sum = (sum + zi * xi) % HASH_PRIME;
        zi = (zi * HASH_Z) % HASH_PRIME;
    }
    sum = (sum + zi * (HASH_PRIME - 1)) % HASH_PRIME;

    // Fold into a signed 32-bit value and take its magnitude
    (sum as u32 as i32).unsigned_abs()
}

/// Deterministic tag color for a category
pub fn category_color(category: &str) -> &'static str {
    let index = string_hash(category) as usize % MATERIAL_PALETTE_COLORS.len();
    MATERIAL_PALETTE_COLORS[index]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_string_hashes_to_zero() {
        assert_eq!(string_hash(""), 0);
        assert_eq!(category_color(""), MATERIAL_PALETTE_COLORS[0]);
    }

    #[test]
    fn test_hash_is_stable() {
        assert_eq!(string_hash("Panel"), string_hash("Panel"));
        assert_eq!(category_color("Drawer"), category_color("Drawer"));
    }

    #[test]
    fn test_hash_depends_on_order() {
        assert_ne!(string_hash("ab"), string_hash("ba"));
    }

    #[test]
    fn test_single_character_hash() {
        // s = x0 + z * (p - 1) with x0 = 'a' * z2, reduced mod p
        let expected = (97 * HASH_Z2 + HASH_Z * (HASH_PRIME - 1)) % HASH_PRIME;
        assert_eq!(string_hash("a"), (expected as u32 as i32).unsigned_abs());
    }

    #[test]
    fn test_color_comes_from_palette() {
        for category in ["Panel", "Drawer", "Appearance", "Console", "Network", "Δ"] {
            assert!(MATERIAL_PALETTE_COLORS.contains(&category_color(category)));
        }
    }
}
