//! Monthly payment calculator
//!
//! Closed-form amortization over a fixed term. All amounts are dollars.

use serde::Serialize;
use thiserror::Error;

use crate::suggest::format_price;

pub const DEFAULT_TERM_MONTHS: u32 = 60;

#[derive(Debug, Error, PartialEq)]
pub enum PaymentError {
    #[error("Term must be at least one month")]
    ZeroTerm,

    #[error("{field} cannot be negative")]
    Negative { field: &'static str },

    #[error("{field} must be a finite number")]
    NotFinite { field: &'static str },

    #[error("Down payment and trade-in ({credit:.2}) exceed the price with tax ({taxed_price:.2})")]
    CreditExceedsPrice { credit: f64, taxed_price: f64 },
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PaymentInput {
    pub price: f64,
    pub down_payment: f64,
    pub trade_in: f64,
    pub apr_percent: f64,
    pub term_months: u32,
    pub sales_tax_percent: f64,
}

impl PaymentInput {
    pub fn new(price: f64) -> Self {
        Self {
            price,
            down_payment: 0.0,
            trade_in: 0.0,
            apr_percent: 0.0,
            term_months: DEFAULT_TERM_MONTHS,
            sales_tax_percent: 0.0,
        }
    }

    fn validate(&self) -> Result<(), PaymentError> {
        if self.term_months == 0 {
            return Err(PaymentError::ZeroTerm);
        }
        let fields = [
            ("price", self.price),
            ("down payment", self.down_payment),
            ("trade-in", self.trade_in),
            ("APR", self.apr_percent),
            ("sales tax", self.sales_tax_percent),
        ];
        for (field, value) in fields {
            if !value.is_finite() {
                return Err(PaymentError::NotFinite { field });
            }
            if value < 0.0 {
                return Err(PaymentError::Negative { field });
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PaymentBreakdown {
    pub amount_financed: f64,
    pub monthly_payment: f64,
    pub total_interest: f64,
    /// Everything paid: down payment, trade-in and all installments
    pub total_cost: f64,
}

pub fn calculate_payment(input: &PaymentInput) -> Result<PaymentBreakdown, PaymentError> {
    input.validate()?;

    let taxed_price = input.price * (1.0 + input.sales_tax_percent / 100.0);
    let credit = input.down_payment + input.trade_in;
    if credit > taxed_price {
        return Err(PaymentError::CreditExceedsPrice {
            credit,
            taxed_price,
        });
    }

    let principal = taxed_price - credit;
    let months = f64::from(input.term_months);
    let monthly_rate = input.apr_percent / 100.0 / 12.0;

    let monthly_payment = if monthly_rate == 0.0 {
        principal / months
    } else {
        let growth = (1.0 + monthly_rate).powf(months);
        principal * monthly_rate * growth / (growth - 1.0)
    };

    let paid = monthly_payment * months;
    Ok(PaymentBreakdown {
        amount_financed: principal,
        monthly_payment,
        total_interest: paid - principal,
        total_cost: paid + credit,
    })
}

/// Dollars and cents with thousands separators, "$1,234.50"
pub fn format_money(amount: f64) -> String {
    let cents = (amount * 100.0).round().max(0.0) as u64;
    let dollars = u32::try_from(cents / 100).unwrap_or(u32::MAX);
    format!("{}.{:02}", format_price(dollars), cents % 100)
}

#[cfg(test)]
#[path = "payment_tests.rs"]
mod payment_tests;
