//! Order summary and checkout receipt.

use crate::cart_actor::CartError;
use crate::lifecycle::CheckoutConfig;
use crate::model::{round_money, CartId, CartLineView};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Subtotal, fees, tax and total of a checkout.
///
/// Fields hold exact values; call [`OrderSummary::rounded`] for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderSummary {
    pub subtotal: Decimal,
    pub delivery_fee: Decimal,
    pub service_fee: Decimal,
    pub tax: Decimal,
    pub total: Decimal,
}

impl OrderSummary {
    /// `total = subtotal + delivery + service + subtotal × tax_rate`.
    ///
    /// `delivery_fee` is the restaurant's own fee, if it sets one; otherwise the
    /// configured default applies.
    ///
    /// # Errors
    /// [`CartError::AmountOverflow`] if the tax or total leaves `Decimal`'s range.
    pub fn compute(
        subtotal: Decimal,
        config: &CheckoutConfig,
        delivery_fee: Option<Decimal>,
    ) -> Result<Self, CartError> {
        let delivery_fee = delivery_fee.unwrap_or(config.delivery_fee);
        let tax = subtotal
            .checked_mul(config.tax_rate)
            .ok_or(CartError::AmountOverflow)?;
        let total = [delivery_fee, config.service_fee, tax]
            .into_iter()
            .try_fold(subtotal, Decimal::checked_add)
            .ok_or(CartError::AmountOverflow)?;
        Ok(Self {
            subtotal,
            delivery_fee,
            service_fee: config.service_fee,
            tax,
            total,
        })
    }

    /// Delivery, service and tax together, as the checkout dialog shows them.
    pub fn fees_and_tax(&self) -> Decimal {
        self.delivery_fee + self.service_fee + self.tax
    }

    /// Every field rounded to cents independently.
    pub fn rounded(&self) -> Self {
        Self {
            subtotal: round_money(self.subtotal),
            delivery_fee: round_money(self.delivery_fee),
            service_fee: round_money(self.service_fee),
            tax: round_money(self.tax),
            total: round_money(self.total),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethod {
    #[default]
    Card,
    CashOnDelivery,
}

/// What the customer confirms in the checkout dialog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckoutRequest {
    pub payment_method: PaymentMethod,
    pub delivery_address: String,
    pub notes: Option<String>,
    /// Restaurant-supplied delivery fee overriding the configured default.
    pub delivery_fee: Option<Decimal>,
}

impl CheckoutRequest {
    pub fn new(delivery_address: impl Into<String>) -> Self {
        Self {
            payment_method: PaymentMethod::default(),
            delivery_address: delivery_address.into(),
            notes: None,
            delivery_fee: None,
        }
    }

    pub fn pay_with(mut self, payment_method: PaymentMethod) -> Self {
        self.payment_method = payment_method;
        self
    }

    pub fn notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }

    pub fn delivery_fee(mut self, fee: Decimal) -> Self {
        self.delivery_fee = Some(fee);
        self
    }
}

/// Receipt of a placed order. Nothing is persisted; the cart is emptied.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlacedOrder {
    pub cart_id: CartId,
    pub customer: String,
    pub lines: Vec<CartLineView>,
    pub summary: OrderSummary,
    pub payment_method: PaymentMethod,
    pub delivery_address: String,
    pub notes: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dec(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    #[test]
    fn test_default_fees_and_tax() {
        let summary = OrderSummary::compute(dec("25.50"), &CheckoutConfig::default(), None).unwrap();
        assert_eq!(summary.delivery_fee, dec("3.99"));
        assert_eq!(summary.service_fee, dec("2.50"));
        assert_eq!(summary.tax, dec("2.04"));
        assert_eq!(summary.total, dec("34.03"));
        assert_eq!(summary.fees_and_tax(), dec("8.53"));
    }

    #[test]
    fn test_restaurant_delivery_fee_wins() {
        let summary = OrderSummary::compute(dec("10.00"), &CheckoutConfig::default(), Some(dec("1.49"))).unwrap();
        assert_eq!(summary.delivery_fee, dec("1.49"));
        assert_eq!(summary.total, dec("14.79"));
    }

    #[test]
    fn test_rounding_is_for_display_only() {
        // 12.99 * 0.08 = 1.0392
        let summary = OrderSummary::compute(dec("12.99"), &CheckoutConfig::default(), None).unwrap();
        assert_eq!(summary.tax, dec("1.0392"));
        assert_eq!(summary.total, dec("20.5192"));

        let shown = summary.rounded();
        assert_eq!(shown.tax, dec("1.04"));
        assert_eq!(shown.total, dec("20.52"));
    }

    #[test]
    fn test_rounded_parts_add_up_to_rounded_total() {
        let shown = OrderSummary::compute(dec("12.99"), &CheckoutConfig::default(), None)
            .unwrap()
            .rounded();
        assert_eq!(shown.fees_and_tax(), dec("7.53"));
        assert_eq!(shown.subtotal + shown.fees_and_tax(), shown.total);
    }

    #[test]
    fn test_total_past_decimal_range_is_an_error() {
        let near_max = Decimal::MAX - dec("1");
        assert_eq!(
            OrderSummary::compute(near_max, &CheckoutConfig::default(), None),
            Err(CartError::AmountOverflow)
        );

        let no_tax = CheckoutConfig {
            tax_rate: Decimal::ZERO,
            ..CheckoutConfig::default()
        };
        assert_eq!(
            OrderSummary::compute(Decimal::MAX, &no_tax, Some(Decimal::ZERO)),
            Err(CartError::AmountOverflow)
        );
    }

    #[test]
    fn test_empty_subtotal_still_pays_fees() {
        let summary = OrderSummary::compute(Decimal::ZERO, &CheckoutConfig::default(), None).unwrap();
        assert_eq!(summary.tax, Decimal::ZERO);
        assert_eq!(summary.total, dec("6.49"));
    }
}
