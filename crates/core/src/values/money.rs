//! Monetary amount
//!
//! A signed decimal amount split into whole `units` and fractional `nanos`
//! (10^-9 units), tagged with an ISO 4217 currency code.
//!
//! ## Sign agreement
//!
//! - `units > 0` implies `nanos >= 0`
//! - `units < 0` implies `nanos <= 0`
//! - `units == 0` allows either sign
//!
//! So $-1.75 is `(units = -1, nanos = -750_000_000)`.
//!
//! The wire converter copies the triple verbatim and does not enforce sign
//! agreement; producers are trusted. Use [`Money::new`] when the amount comes
//! from somewhere that should be checked.

use crate::error::{Error, MoneyError, Result};
use crate::traits::WireConvert;
use commerce_wire as wire;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Largest magnitude allowed in `nanos`
pub const MAX_NANOS: i32 = 999_999_999;

/// Monetary amount with currency
///
/// Field names are the stored document and JSON names; zero fields are omitted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Money {
    /// ISO 4217 currency code; empty when unknown
    #[serde(rename = "currencyCode", default, skip_serializing_if = "String::is_empty")]
    pub currency_code: String,
    /// Whole units
    #[serde(rename = "units", default, skip_serializing_if = "is_zero_i64")]
    pub units: i64,
    /// Fractional nano units, same sign as `units` when `units != 0`
    #[serde(rename = "nanos", default, skip_serializing_if = "is_zero_i32")]
    pub nanos: i32,
}

fn is_zero_i64(v: &i64) -> bool {
    *v == 0
}

fn is_zero_i32(v: &i32) -> bool {
    *v == 0
}

impl Money {
    /// Create a validated amount
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidMoney` if nanos is out of range, units and nanos
    /// disagree in sign, or a non-empty currency code is not three uppercase
    /// ASCII letters.
    pub fn new(currency_code: impl Into<String>, units: i64, nanos: i32) -> Result<Self> {
        let money = Self::new_unchecked(currency_code, units, nanos);
        money.validate()?;
        Ok(money)
    }

    /// Create an amount without validation
    ///
    /// This is what the wire converter does. Use `new()` for untrusted input.
    pub fn new_unchecked(currency_code: impl Into<String>, units: i64, nanos: i32) -> Self {
        Money {
            currency_code: currency_code.into(),
            units,
            nanos,
        }
    }

    /// Check range, sign agreement and currency code shape
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidMoney` describing the first failed check.
    pub fn validate(&self) -> Result<()> {
        if !(-MAX_NANOS..=MAX_NANOS).contains(&self.nanos) {
            return Err(MoneyError::NanosOutOfRange { nanos: self.nanos }.into());
        }

        if !self.signs_agree() {
            return Err(Error::InvalidMoney(MoneyError::SignMismatch {
                units: self.units,
                nanos: self.nanos,
            }));
        }

        let code = self.currency_code.as_str();
        let well_formed = code.len() == 3 && code.bytes().all(|b| b.is_ascii_uppercase());
        if !code.is_empty() && !well_formed {
            return Err(MoneyError::InvalidCurrencyCode(self.currency_code.clone()).into());
        }

        Ok(())
    }

    /// True when units and nanos do not have opposite signs
    #[inline]
    pub fn signs_agree(&self) -> bool {
        !((self.units > 0 && self.nanos < 0) || (self.units < 0 && self.nanos > 0))
    }

    /// ISO 4217 currency code
    #[inline]
    pub fn currency_code(&self) -> &str {
        &self.currency_code
    }

    /// Whole units
    #[inline]
    pub const fn units(&self) -> i64 {
        self.units
    }

    /// Fractional nano units
    #[inline]
    pub const fn nanos(&self) -> i32 {
        self.nanos
    }

    /// True when the amount is zero, regardless of currency
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.units == 0 && self.nanos == 0
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let negative = self.units < 0 || self.nanos < 0;
        let sign = if negative { "-" } else { "" };
        write!(
            f,
            "{}{}.{:09}",
            sign,
            self.units.unsigned_abs(),
            self.nanos.unsigned_abs()
        )?;
        if !self.currency_code.is_empty() {
            write!(f, " {}", self.currency_code)?;
        }
        Ok(())
    }
}

// ============================================================================
// Wire conversion
// ============================================================================

impl WireConvert for Money {
    type Wire = wire::Money;

    fn from_wire_message(pb: &wire::Money) -> Self {
        Money::from(pb.clone())
    }

    fn to_wire(&self) -> wire::Money {
        wire::Money {
            currency_code: self.currency_code.clone(),
            units: self.units,
            nanos: self.nanos,
        }
    }
}

impl From<wire::Money> for Money {
    fn from(pb: wire::Money) -> Self {
        let money = Money::new_unchecked(pb.currency_code, pb.units, pb.nanos);
        if !money.signs_agree() {
            tracing::debug!(
                units = money.units,
                nanos = money.nanos,
                "passing through money with disagreeing signs"
            );
        }
        money
    }
}

impl From<&wire::Money> for Money {
    fn from(pb: &wire::Money) -> Self {
        Money::from_wire_message(pb)
    }
}

impl From<&Money> for wire::Money {
    fn from(money: &Money) -> Self {
        money.to_wire()
    }
}

impl From<Money> for wire::Money {
    fn from(money: Money) -> Self {
        wire::Money {
            currency_code: money.currency_code,
            units: money.units,
            nanos: money.nanos,
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
