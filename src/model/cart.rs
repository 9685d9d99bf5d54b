//! The shopping cart of one customer session.
//!
//! A [`Cart`] stores item references and quantities only. Prices are looked up
//! through a [`PriceBook`] every time a total is read, so a catalog price change
//! shows up in the next total.

use crate::cart_actor::CartError;
use crate::model::{MenuItem, MenuItemId};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt::Display;

/// Type-safe identifier for carts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CartId(pub u32);

impl From<u32> for CartId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for CartId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "cart_{}", self.0)
    }
}

/// One item in the cart. `quantity` is never zero.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLine {
    pub item_id: MenuItemId,
    pub quantity: u32,
    pub special_instructions: Option<String>,
}

/// Source of current unit prices.
pub trait PriceBook {
    fn unit_price(&self, id: &MenuItemId) -> Option<Decimal>;
}

impl PriceBook for HashMap<MenuItemId, MenuItem> {
    fn unit_price(&self, id: &MenuItemId) -> Option<Decimal> {
        self.get(id).map(|item| item.price)
    }
}

impl PriceBook for HashMap<MenuItemId, Decimal> {
    fn unit_price(&self, id: &MenuItemId) -> Option<Decimal> {
        self.get(id).copied()
    }
}

/// A customer's in-progress selection.
///
/// Lines keep insertion order and there is at most one line per item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cart {
    pub id: CartId,
    pub customer: String,
    lines: Vec<CartLine>,
}

/// Payload for opening a cart at session start.
#[derive(Debug, Clone)]
pub struct CartCreate {
    pub customer: String,
}

impl Cart {
    pub fn new(id: CartId, customer: impl Into<String>) -> Self {
        Self {
            id,
            customer: customer.into(),
            lines: Vec::new(),
        }
    }

    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn line(&self, item_id: &MenuItemId) -> Option<&CartLine> {
        self.lines.iter().find(|line| line.item_id == *item_id)
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    fn position(&self, item_id: &MenuItemId) -> Option<usize> {
        self.lines.iter().position(|line| line.item_id == *item_id)
    }

    /// Adds one unit of `item`, returning the line's new quantity.
    ///
    /// Availability is not checked here.
    pub fn add_item(&mut self, item: &MenuItem) -> u32 {
        match self.position(&item.id) {
            Some(index) => {
                let line = &mut self.lines[index];
                line.quantity = line.quantity.saturating_add(1);
                line.quantity
            }
            None => {
                self.lines.push(CartLine {
                    item_id: item.id,
                    quantity: 1,
                    special_instructions: None,
                });
                1
            }
        }
    }

    /// Sets a line's quantity. Zero or less removes the line; an item without a
    /// line is left alone.
    ///
    /// Returns the line's quantity afterwards, `None` if no line remains.
    pub fn update_quantity(&mut self, item_id: &MenuItemId, quantity: i32) -> Option<u32> {
        let index = self.position(item_id)?;
        if quantity <= 0 {
            self.lines.remove(index);
            return None;
        }
        // positive i32 always fits
        let quantity = quantity.unsigned_abs();
        self.lines[index].quantity = quantity;
        Some(quantity)
    }

    /// Returns whether a line was removed.
    pub fn remove_item(&mut self, item_id: &MenuItemId) -> bool {
        match self.position(item_id) {
            Some(index) => {
                self.lines.remove(index);
                true
            }
            None => false,
        }
    }

    /// Returns whether a line existed to annotate. Empty text clears the note.
    pub fn set_instructions(&mut self, item_id: &MenuItemId, instructions: Option<String>) -> bool {
        let Some(index) = self.position(item_id) else {
            return false;
        };
        self.lines[index].special_instructions = instructions.filter(|text| !text.trim().is_empty());
        true
    }

    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// Sum of quantities, not the number of lines.
    pub fn total_items(&self) -> u64 {
        self.lines.iter().map(|line| u64::from(line.quantity)).sum()
    }

    /// Sum of `unit price × quantity` at the prices `prices` reports now.
    ///
    /// # Errors
    /// [`CartError::PriceUnavailable`] if a line's item has no price, and
    /// [`CartError::AmountOverflow`] if the sum leaves `Decimal`'s range.
    pub fn total_price<P>(&self, prices: &P) -> Result<Decimal, CartError>
    where
        P: PriceBook + ?Sized,
    {
        self.lines.iter().try_fold(Decimal::ZERO, |total, line| {
            let unit = prices
                .unit_price(&line.item_id)
                .ok_or(CartError::PriceUnavailable(line.item_id))?;
            line_total(unit, line)
                .and_then(|amount| total.checked_add(amount))
                .ok_or(CartError::AmountOverflow)
        })
    }

    /// Joins each line with its catalog record.
    pub fn view(&self, catalog: &HashMap<MenuItemId, MenuItem>) -> Result<CartView, CartError> {
        let lines = self
            .lines
            .iter()
            .map(|line| -> Result<CartLineView, CartError> {
                let item = catalog
                    .get(&line.item_id)
                    .cloned()
                    .ok_or(CartError::PriceUnavailable(line.item_id))?;
                Ok(CartLineView {
                    line_total: line_total(item.price, line).ok_or(CartError::AmountOverflow)?,
                    item,
                    quantity: line.quantity,
                    special_instructions: line.special_instructions.clone(),
                })
            })
            .collect::<Result<Vec<_>, _>>()?;
        let subtotal = lines
            .iter()
            .try_fold(Decimal::ZERO, |total, line| total.checked_add(line.line_total))
            .ok_or(CartError::AmountOverflow)?;

        Ok(CartView {
            cart_id: self.id,
            total_items: self.total_items(),
            subtotal,
            lines,
        })
    }
}

fn line_total(unit: Decimal, line: &CartLine) -> Option<Decimal> {
    unit.checked_mul(Decimal::from(line.quantity))
}

/// A cart line joined with the live catalog record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartLineView {
    pub item: MenuItem,
    pub quantity: u32,
    pub special_instructions: Option<String>,
    pub line_total: Decimal,
}

/// What a cart page renders.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartView {
    pub cart_id: CartId,
    pub lines: Vec<CartLineView>,
    pub total_items: u64,
    pub subtotal: Decimal,
}
