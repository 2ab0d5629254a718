//! Cart line type and derived totals.
//!
//! Cart lines are not stored directly: the persisted cart is a flat sequence
//! of product ids where repetition encodes quantity (`[7,7,7,9]` is three
//! units of product 7 and one of product 9). A [`CartLine`] is what that
//! sequence becomes once product details have been fetched and quantities
//! grouped back in.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use crate::types::product::Product;

/// A product plus the quantity of it in the cart.
///
/// Invariant: `quantity >= 1`. A line that would drop to zero is removed
/// from the cart entirely rather than kept at zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartLine {
    /// The product this line refers to.
    pub product: Product,
    /// Units of the product in the cart.
    pub quantity: u32,
}

impl CartLine {
    /// Price of this line: unit price times quantity, unrounded.
    #[must_use]
    pub fn line_price(&self) -> Decimal {
        self.product.price * Decimal::from(self.quantity)
    }
}

/// Sum of `price * quantity` over all lines, rounded to 2 decimal places.
///
/// Uses midpoint-away-from-zero rounding, the conventional rounding for
/// displayed money amounts.
#[must_use]
pub fn total_price(lines: &[CartLine]) -> Decimal {
    lines
        .iter()
        .map(CartLine::line_price)
        .sum::<Decimal>()
        .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Sum of quantities over all lines.
#[must_use]
pub fn total_item_count(lines: &[CartLine]) -> u32 {
    lines.iter().map(|line| line.quantity).sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::id::ProductId;
    use crate::types::product::Rating;

    fn product(id: u64, price: &str) -> Product {
        Product {
            id: ProductId::new(id),
            title: format!("Product {id}"),
            price: price.parse().expect("valid decimal"),
            category: "test".to_string(),
            description: String::new(),
            image: String::new(),
            rating: Rating::default(),
        }
    }

    #[test]
    fn test_line_price_multiplies_quantity() {
        let line = CartLine {
            product: product(1, "19.99"),
            quantity: 3,
        };
        assert_eq!(line.line_price(), "59.97".parse::<Decimal>().expect("dec"));
    }

    #[test]
    fn test_total_price_sums_and_rounds() {
        let lines = vec![
            CartLine {
                product: product(1, "10.004"),
                quantity: 1,
            },
            CartLine {
                product: product(2, "0.001"),
                quantity: 1,
            },
        ];
        // 10.005 rounds away from zero to 10.01.
        assert_eq!(total_price(&lines), "10.01".parse::<Decimal>().expect("dec"));
    }

    #[test]
    fn test_total_price_empty_cart_is_zero() {
        assert_eq!(total_price(&[]), Decimal::ZERO);
    }

    #[test]
    fn test_total_item_count_sums_quantities() {
        let lines = vec![
            CartLine {
                product: product(3, "5.00"),
                quantity: 2,
            },
            CartLine {
                product: product(5, "1.25"),
                quantity: 1,
            },
        ];
        assert_eq!(total_item_count(&lines), 3);
    }
}
