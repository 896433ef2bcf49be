/* Copyright © 2024-2025 Adam Train <adam@trainrelay.net>
 *
 * This program is free software: you can redistribute it and/or modify
 * it under the terms of the GNU General Public License as published by
 * the Free Software Foundation, either version 3 of the License, or
 * (at your option) any later version.
 *
 * This program is distributed in the hope that it will be useful,
 * but WITHOUT ANY WARRANTY; without even the implied warranty of
 * MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
 * GNU General Public License for more details.
 *
 * You should have received a copy of the GNU General Public License
 * along with this program. If not, see <https://www.gnu.org/licenses/>.
 */
use anyhow::{bail, Error};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Currencies a loan may be denominated in. No conversion happens between
/// them; the currency only travels alongside the figures for display.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Currency {
	USD,
	EUR,
	GBP,
}

impl Currency {
	pub const ALL: [Currency; 3] = [Currency::USD, Currency::EUR, Currency::GBP];

	/// Exact, case-sensitive match on the currency code
	pub fn from_str(s: &str) -> Result<Self, Error> {
		match s {
			"USD" => Ok(Currency::USD),
			"EUR" => Ok(Currency::EUR),
			"GBP" => Ok(Currency::GBP),
			_ => bail!(
				"Invalid currency. Valid options are: {}",
				Currency::ALL
					.iter()
					.map(|c| c.code())
					.collect::<Vec<_>>()
					.join(", ")
			),
		}
	}

	pub fn code(&self) -> &'static str {
		match self {
			Currency::USD => "USD",
			Currency::EUR => "EUR",
			Currency::GBP => "GBP",
		}
	}
}

impl fmt::Display for Currency {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}", self.code())
	}
}

/// Everything needed to price one loan. Rates are in percentage points,
/// so 5.0 means 5%.
///
/// Nothing here is checked against anything else: an end date before the
/// start date, or a zero principal, is carried through as given.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LoanInput {
	pub start_date: NaiveDate,
	pub end_date: NaiveDate,
	pub loan_amount: f64,
	pub loan_currency: Currency,
	pub base_interest_rate: f64,
	pub margin: f64,
}

impl LoanInput {
	pub fn new(
		start_date: NaiveDate,
		end_date: NaiveDate,
		loan_amount: f64,
		loan_currency: Currency,
		base_interest_rate: f64,
		margin: f64,
	) -> Self {
		Self {
			start_date,
			end_date,
			loan_amount,
			loan_currency,
			base_interest_rate,
			margin,
		}
	}

	/// False when any amount or rate is infinite or NaN
	pub fn is_finite(&self) -> bool {
		[self.loan_amount, self.base_interest_rate, self.margin]
			.iter()
			.all(|n| n.is_finite())
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_currency_from_str() {
		assert_eq!(Currency::from_str("USD").unwrap(), Currency::USD);
		assert_eq!(Currency::from_str("EUR").unwrap(), Currency::EUR);
		assert_eq!(Currency::from_str("GBP").unwrap(), Currency::GBP);
	}

	#[test]
	fn test_currency_is_case_sensitive() {
		assert!(Currency::from_str("usd").is_err());
		assert!(Currency::from_str(" USD").is_err());
	}

	#[test]
	fn test_currency_error_lists_options() {
		let err = Currency::from_str("JPY").unwrap_err();
		assert_eq!(
			err.to_string(),
			"Invalid currency. Valid options are: USD, EUR, GBP"
		);
	}

	#[test]
	fn test_currency_serializes_as_code() {
		assert_eq!(serde_json::to_string(&Currency::GBP).unwrap(), "\"GBP\"");
	}

	#[test]
	fn test_is_finite() {
		let day = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
		let loan = |amount, margin| {
			LoanInput::new(day, day, amount, Currency::USD, 5., margin)
		};
		assert!(loan(1000., 1.).is_finite());
		assert!(!loan(f64::INFINITY, 1.).is_finite());
		assert!(!loan(1000., f64::NAN).is_finite());
	}
}
