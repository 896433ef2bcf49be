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
use crate::loan::input::Currency;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Interest figures derived from a single loan input. A value object; a
/// revised input gets a fresh output rather than an edited one.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LoanOutput {
	/// Interest per day on the base rate alone
	pub daily_base_interest: f64,
	/// Interest per day on base rate plus margin
	pub daily_total_interest: f64,
	/// The date as of which the daily figures are quoted, i.e. the start date
	pub accrual_date: NaiveDate,
	/// Depends on when the calculation ran, so two outputs for the same
	/// input can legitimately differ here
	pub days_since_start: i64,
	pub total_interest: f64,
	pub loan_currency: Currency,
}

impl LoanOutput {
	/// False when a figure overflowed or came from a non-finite input
	pub fn is_finite(&self) -> bool {
		[
			self.daily_base_interest,
			self.daily_total_interest,
			self.total_interest,
		]
		.iter()
		.all(|n| n.is_finite())
	}
}

#[cfg(test)]
impl LoanOutput {
	/// Equality on everything except the clock-dependent field. Amounts
	/// only need to agree to within float noise, since they may have been
	/// through a text round trip.
	pub fn same_figures(&self, other: &LoanOutput) -> bool {
		close(self.daily_base_interest, other.daily_base_interest)
			&& close(self.daily_total_interest, other.daily_total_interest)
			&& close(self.total_interest, other.total_interest)
			&& self.accrual_date == other.accrual_date
			&& self.loan_currency == other.loan_currency
	}
}

#[cfg(test)]
fn close(a: f64, b: f64) -> bool {
	(a - b).abs() <= 1e-9 * a.abs().max(b.abs()).max(1.)
}

#[cfg(test)]
mod tests {
	use super::*;

	fn output(total_interest: f64, days_since_start: i64) -> LoanOutput {
		LoanOutput {
			daily_base_interest: 13.7,
			daily_total_interest: 16.85,
			accrual_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
			days_since_start,
			total_interest,
			loan_currency: Currency::USD,
		}
	}

	#[test]
	fn test_same_figures_ignores_elapsed_days() {
		assert!(output(6016.44, 10).same_figures(&output(6016.44, 400)));
	}

	#[test]
	fn test_same_figures_tolerates_float_noise() {
		let a = output(6016.4383561643845, 0);
		let b = output(6016.438356164385, 0);
		assert!(a.same_figures(&b));
		assert!(!a.same_figures(&output(6016.44, 0)));
	}

	#[test]
	fn test_is_finite() {
		assert!(output(6016.44, 31).is_finite());
		assert!(!output(f64::INFINITY, 31).is_finite());
		assert!(!output(f64::NAN, 31).is_finite());
	}
}
