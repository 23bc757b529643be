use crate::types::AmountError;
use rust_decimal::Decimal;
use serde::{de, Deserialize, Deserializer, Serialize};
use std::fmt;
use std::fmt::{Display, Formatter};
use std::ops::{AddAssign, SubAssign};
use std::str::FromStr;
use tracing::{error, warn};

const DISPLAY_DECIMAL_PLACES: u32 = 2;

/// A currency value as read from an uploaded file.
///
/// Amounts keep the exact decimal written in the file. Arithmetic is checked, an
/// overflow is logged and leaves the left-hand side unchanged.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize)]
#[serde(transparent)]
pub struct Amount(Decimal);

impl Amount {
    pub const ZERO: Amount = Amount(Decimal::ZERO);

    pub fn new(value: Decimal) -> Self {
        Amount(value)
    }

    pub fn value(&self) -> Decimal {
        self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    pub fn is_negative(&self) -> bool {
        self.0.is_sign_negative() && !self.0.is_zero()
    }

    pub fn checked_add(self, rhs: Amount) -> Option<Amount> {
        self.0.checked_add(rhs.0).map(Amount)
    }

    pub fn checked_sub(self, rhs: Amount) -> Option<Amount> {
        self.0.checked_sub(rhs.0).map(Amount)
    }

    /// Parses `value` permissively: an empty or unparsable value becomes zero.
    ///
    /// NOTE: This is a policy choice carried over from the upload flow. A corrupt amount
    ///       never rejects its row, it only contributes nothing to the totals. Two cases
    ///       follow from `Decimal` parsing: digit separators such as `1_000` are accepted
    ///       as `1000`, and values outside the `Decimal` range (about 7.9e28) become zero.
    pub fn or_zero(value: &str) -> Self {
        if value.trim().is_empty() {
            return Amount::ZERO;
        }

        match Amount::from_str(value) {
            Ok(amount) => amount,
            Err(error) => {
                warn!("Defaulting unparsable amount '{value}' to zero: {error}");
                Amount::ZERO
            }
        }
    }
}

impl AddAssign<Amount> for Amount {
    fn add_assign(&mut self, rhs: Amount) {
        if let Some(new_val) = self.checked_add(rhs) {
            self.0 = new_val.0;
        } else {
            error!("Total overflowed adding {} to {}, keeping the previous total", rhs, self)
        }
    }
}

impl SubAssign<Amount> for Amount {
    fn sub_assign(&mut self, rhs: Amount) {
        if let Some(new_val) = self.checked_sub(rhs) {
            self.0 = new_val.0;
        } else {
            error!("Total overflowed subtracting {} from {}, keeping the previous total", rhs, self)
        }
    }
}

impl Display for Amount {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        let rounded = self.0.round_dp(DISPLAY_DECIMAL_PLACES);
        write!(formatter, "{:.prec$}", rounded, prec = DISPLAY_DECIMAL_PLACES as usize)
    }
}

impl FromStr for Amount {
    type Err = AmountError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let value = value.trim();

        if value.is_empty() {
            return Err(AmountError::InvalidFormat("Value is an empty string".to_string()));
        }

        let decimal = match Decimal::from_str(value) {
            Ok(decimal) => decimal,
            Err(_) => Decimal::from_scientific(value)?
        };

        Ok(Amount(decimal))
    }
}

impl<'de> Deserialize<'de> for Amount {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        Amount::from_str(&value).map_err(de::Error::custom)
    }
}
