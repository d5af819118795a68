//! Fixed-width banners and separators for delimiting console sections.

/// Center `insert` in a line of `fill` characters, `width` characters
/// total. When the padding does not split evenly, the extra character goes
/// on the right. An insert at least `width` wide is returned unchanged.
pub fn center(insert: &str, width: usize, fill: char) -> String {
    let insert_width = insert.chars().count();
    if insert_width >= width {
        return insert.to_string();
    }
    let padding = width - insert_width;
    let left = padding / 2;
    let right = padding - left;
    let mut line = String::with_capacity(width);
    line.extend(std::iter::repeat(fill).take(left));
    line.push_str(insert);
    line.extend(std::iter::repeat(fill).take(right));
    line
}

/// A full-width line of `fill` characters.
pub fn separator(width: usize, fill: char) -> String {
    std::iter::repeat(fill).take(width).collect()
}

/// The `=== title ===` heading used by every demonstration.
pub fn section(title: &str) -> String {
    format!("=== {title} ===")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_center_double_width_40() {
        let line = center("DOUBLE", 40, '-');
        assert_eq!(line.len(), 40);
        assert_eq!(line, format!("{}DOUBLE{}", "-".repeat(17), "-".repeat(17)));
    }

    #[test]
    fn test_center_length_equals_width() {
        for width in [10, 21, 40, 79] {
            assert_eq!(center("hub", width, '*').chars().count(), width);
        }
    }

    #[test]
    fn test_center_odd_remainder_goes_right() {
        assert_eq!(center("ab", 7, '-'), "--ab---");
    }

    #[test]
    fn test_center_oversized_insert_unchanged() {
        assert_eq!(center("much too long", 5, '-'), "much too long");
    }

    #[test]
    fn test_separator() {
        assert_eq!(separator(6, '='), "======");
    }

    #[test]
    fn test_section() {
        assert_eq!(section("Key Points"), "=== Key Points ===");
    }
}
