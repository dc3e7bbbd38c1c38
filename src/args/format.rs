//! Plain-text rendering of products for terminal output.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use shopup::catalog::Product;

/// Display width of the name column.
const NAME_COLUMN: usize = 32;

/// What: Fit `s` into exactly `width` terminal columns.
///
/// Details:
/// - Longer text is cut and ends with `…`; shorter text is padded with spaces.
/// - Width is measured in display columns, not bytes or chars.
pub fn fit_width(s: &str, width: usize) -> String {
    if s.width() <= width {
        let mut out = s.to_string();
        out.push_str(&" ".repeat(width - s.width()));
        return out;
    }
    let mut out = String::new();
    let mut used = 0;
    for c in s.chars() {
        let w = c.width().unwrap_or(0);
        if used + w + 1 > width {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push('…');
    used += 1;
    out.push_str(&" ".repeat(width.saturating_sub(used)));
    out
}

/// What: One-line product summary for result lists.
///
/// Output:
/// - `id  name  ₹price unit` plus the original price and discount when on offer.
pub fn product_line(p: &Product) -> String {
    let mut line = format!(
        "{:>4}  {}  ₹{} / {}",
        p.id,
        fit_width(&p.name, NAME_COLUMN),
        p.price,
        p.unit
    );
    if let Some(orig) = p.original_price {
        line.push_str(&format!("  (was ₹{orig}"));
        if let Some(d) = p.discount {
            line.push_str(&format!(", {d}% off"));
        }
        line.push(')');
    }
    if !p.in_stock {
        line.push_str("  [out of stock]");
    }
    line
}

/// Multi-line product detail block.
pub fn product_details(p: &Product, category_name: Option<&str>) -> String {
    let mut out = format!("{} ({})\n", p.name, p.id);
    out.push_str(&format!("  Price:     ₹{} / {}\n", p.price, p.unit));
    if let Some(saved) = p.savings() {
        out.push_str(&format!("  You save:  ₹{saved}\n"));
    }
    out.push_str(&format!(
        "  Category:  {}\n",
        category_name.unwrap_or(&p.category)
    ));
    if !p.delivery_time.is_empty() {
        out.push_str(&format!("  Delivery:  {}\n", p.delivery_time));
    }
    out.push_str(&format!(
        "  In stock:  {}\n",
        if p.in_stock { "yes" } else { "no" }
    ));
    out.push_str(&format!("  {}", p.description));
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn milk() -> Product {
        Product {
            id: "2".into(),
            name: "Amul Taza Toned Fresh Milk".into(),
            price: 68,
            original_price: None,
            unit: "1 litre".into(),
            category: "dairy-bakery".into(),
            description: "Fresh toned milk.".into(),
            delivery_time: "8 mins".into(),
            discount: None,
            in_stock: true,
            image: String::new(),
        }
    }

    #[test]
    fn fit_width_pads_and_truncates() {
        assert_eq!(fit_width("tea", 6), "tea   ");
        assert_eq!(fit_width("bananas", 5), "bana…");
        assert_eq!(fit_width("bananas", 5).width(), 5);
        assert_eq!(fit_width("", 0), "");
    }

    #[test]
    fn fit_width_counts_display_columns() {
        let s = fit_width("牛乳パック", 6);
        assert_eq!(s.width(), 6);
        assert!(s.ends_with('…') || s.ends_with(' '));
    }

    #[test]
    fn product_line_shows_offer() {
        let mut p = milk();
        assert!(product_line(&p).contains("₹68 / 1 litre"));
        assert!(!product_line(&p).contains("was"));
        p.original_price = Some(80);
        p.discount = Some(15);
        assert!(product_line(&p).ends_with("(was ₹80, 15% off)"));
        p.in_stock = false;
        assert!(product_line(&p).ends_with("[out of stock]"));
    }

    #[test]
    fn details_include_category_name_and_savings() {
        let mut p = milk();
        p.original_price = Some(75);
        let d = product_details(&p, Some("Dairy & Bakery"));
        assert!(d.contains("Category:  Dairy & Bakery"));
        assert!(d.contains("You save:  ₹7"));
        assert!(d.contains("Delivery:  8 mins"));
    }
}
