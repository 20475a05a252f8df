//! Cart presentation: view structs and the itemized list template.
//!
//! Rendering is a pure projection of the item list; calling it repeatedly
//! produces identical output and accumulates nothing. Surfaces receive the
//! same three values the page updates: count, formatted total, and the
//! itemized list (or the empty-state message).

use askama::Template;

use sundial_core::{CartItem, Price};

use crate::filters;

/// Display data for one cart line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartItemView {
    /// Current position in the cart; removal controls embed this index.
    pub index: usize,
    pub name: String,
    /// Customization detail line, when any options are set.
    pub details: Option<String>,
    pub quantity: u32,
    /// Unit price; the template formats it with the `money` filter.
    pub price: Price,
    /// Resolved image URL (placeholder substituted when absent).
    pub image: String,
}

impl CartItemView {
    fn from_item(index: usize, item: &CartItem) -> Self {
        Self {
            index,
            name: item.name.clone(),
            details: (!item.customization.is_empty()).then(|| item.customization.display()),
            quantity: item.quantity,
            price: item.price,
            image: item.image_or_placeholder().to_string(),
        }
    }
}

/// Display data for the whole cart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartView {
    /// Number of line items (not summed quantities).
    pub count: usize,
    /// Formatted total, e.g. `$13,000`.
    pub total: String,
    pub items: Vec<CartItemView>,
}

impl CartView {
    /// Project the item list into display data.
    #[must_use]
    pub fn project(items: &[CartItem], total: Price) -> Self {
        Self {
            count: items.len(),
            total: total.display(),
            items: items
                .iter()
                .enumerate()
                .map(|(i, item)| CartItemView::from_item(i, item))
                .collect(),
        }
    }

    /// Render the itemized list, or the empty-state message when the cart
    /// holds nothing.
    ///
    /// # Errors
    ///
    /// Returns [`askama::Error`] if template rendering fails.
    pub fn items_html(&self) -> Result<String, askama::Error> {
        CartListTemplate { items: &self.items }.render()
    }
}

/// Itemized cart list template.
#[derive(Template)]
#[template(path = "cart_items.html")]
struct CartListTemplate<'a> {
    items: &'a [CartItemView],
}

/// A presentation surface the cart projects onto.
///
/// The page tags count, total, and list elements with fixed class names and
/// updates all of them on every mutation; surfaces registered with the
/// manager receive the same treatment.
pub trait CartSurface {
    /// Show the line-item count.
    fn show_count(&mut self, count: usize);

    /// Show the formatted total.
    fn show_total(&mut self, total: &str);

    /// Show the rendered itemized list (or empty-state message).
    fn show_items(&mut self, items_html: &str);
}

#[cfg(test)]
mod tests {
    use super::*;
    use sundial_core::{Customization, ProductId};

    fn chrono_item() -> CartItem {
        CartItem {
            id: ProductId::new("507f1f77bcf86cd799439011"),
            name: "Chrono".to_string(),
            price: Price::new(500),
            image: None,
            quantity: 1,
            customization: Customization::new(),
        }
    }

    #[test]
    fn empty_cart_renders_the_empty_state_message() {
        let view = CartView::project(&[], Price::new(0));
        let html = view.items_html().expect("render");
        assert!(html.contains(r#"<p class="empty-msg">Your cart is empty</p>"#));
        assert_eq!(view.count, 0);
        assert_eq!(view.total, "$0");
    }

    #[test]
    fn rendered_list_carries_name_price_and_index() {
        let items = vec![chrono_item()];
        let view = CartView::project(&items, Price::new(500));
        let html = view.items_html().expect("render");
        assert!(html.contains("Chrono"));
        assert!(html.contains("$500"));
        assert!(html.contains(r#"data-index="0""#));
        assert!(!html.contains("empty-msg"));
    }

    #[test]
    fn money_filter_formats_the_unit_price() {
        let mut item = chrono_item();
        item.price = Price::new(12500);
        let view = CartView::project(std::slice::from_ref(&item), Price::new(12500));
        let html = view.items_html().expect("render");
        assert!(html.contains(r#"<span class="item-price">$12,500</span>"#));
    }

    #[test]
    fn customization_details_appear_when_present() {
        let mut item = chrono_item();
        item.customization.set("Dial", "Onyx");
        let view = CartView::project(std::slice::from_ref(&item), Price::new(500));
        let html = view.items_html().expect("render");
        assert!(html.contains("Dial: Onyx"));
    }

    #[test]
    fn projection_is_idempotent() {
        let items = vec![chrono_item(), chrono_item()];
        let first = CartView::project(&items, Price::new(1000));
        let second = CartView::project(&items, Price::new(1000));
        assert_eq!(first, second);
        assert_eq!(
            first.items_html().expect("render"),
            second.items_html().expect("render")
        );
    }

    #[test]
    fn placeholder_image_is_substituted() {
        let view = CartView::project(&[chrono_item()], Price::new(500));
        let html = view.items_html().expect("render");
        assert!(html.contains("assets/favicon.svg"));
    }
}
