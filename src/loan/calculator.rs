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
use crate::loan::input::LoanInput;
use crate::loan::output::LoanOutput;
use crate::util::clock::Clock;
use chrono::NaiveDate;
use log::{debug, warn};

/// Day count used for the base daily figure and for the loan term.
pub const DAYS_PER_YEAR: f64 = 365.;

/// Day count used for the daily figure that includes margin. Yes, 356 and
/// not 365; saved request files already carry numbers computed this way,
/// so changing it would make old and new figures disagree.
pub const DAILY_TOTAL_DIVISOR: f64 = 356.;

/// Simple (never compounded) interest on a loan input. Stateless apart from
/// the clock used for the elapsed-days figure.
pub struct InterestCalculator<C: Clock> {
	clock: C,
}

impl<C: Clock> InterestCalculator<C> {
	pub fn new(clock: C) -> Self {
		Self { clock }
	}

	pub fn calculate(&self, input: &LoanInput) -> LoanOutput {
		let total_days = total_loan_days(input);
		if total_days < 0 {
			warn!(
				"End date {} precedes start date {}; total interest will be negative",
				input.end_date, input.start_date
			);
		}

		let output = LoanOutput {
			daily_base_interest: daily_base_interest(input),
			daily_total_interest: daily_total_interest(input),
			accrual_date: input.start_date,
			days_since_start: days_since_start(input, self.clock.today()),
			total_interest: total_interest(input),
			loan_currency: input.loan_currency,
		};

		if !output.is_finite() {
			warn!(
				"Interest on {} {} is out of range and cannot be saved",
				input.loan_amount, input.loan_currency
			);
		}

		debug!(
			"Calculated {} days of interest on {} {}: {:?}",
			total_days, input.loan_amount, input.loan_currency, output
		);

		output
	}
}

/// Base rate plus margin, as a fraction rather than percentage points
pub fn effective_rate(input: &LoanInput) -> f64 {
	(input.base_interest_rate + input.margin) / 100.
}

pub fn daily_base_interest(input: &LoanInput) -> f64 {
	(input.loan_amount * input.base_interest_rate / 100.) / DAYS_PER_YEAR
}

pub fn daily_total_interest(input: &LoanInput) -> f64 {
	(input.loan_amount * effective_rate(input)) / DAILY_TOTAL_DIVISOR
}

/// Negative when the end date comes first.
pub fn total_loan_days(input: &LoanInput) -> i64 {
	whole_days_between(&input.start_date, &input.end_date)
}

pub fn days_since_start(input: &LoanInput, today: NaiveDate) -> i64 {
	whole_days_between(&input.start_date, &today)
}

pub fn total_interest(input: &LoanInput) -> f64 {
	input.loan_amount
		* effective_rate(input)
		* (total_loan_days(input) as f64 / DAYS_PER_YEAR)
}

fn whole_days_between(from: &NaiveDate, to: &NaiveDate) -> i64 {
	to.signed_duration_since(*from).num_days()
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::loan::input::Currency;
	use crate::util::clock::FixedClock;
	use test_log::test;

	const TOLERANCE: f64 = 1e-9;

	fn date(s: &str) -> NaiveDate {
		NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
	}

	fn input(start: &str, end: &str, amount: f64, rate: f64, margin: f64) -> LoanInput {
		LoanInput::new(
			date(start),
			date(end),
			amount,
			Currency::USD,
			rate,
			margin,
		)
	}

	fn reference() -> LoanInput {
		input("2024-01-01", "2025-01-01", 100000., 5., 1.)
	}

	fn assert_close(actual: f64, expected: f64) {
		assert!(
			(actual - expected).abs() < TOLERANCE,
			"expected {}, got {}",
			expected,
			actual
		);
	}

	#[test]
	fn test_daily_base_interest() {
		assert_close(daily_base_interest(&reference()), 100000. * 5. / 100. / 365.);
		assert_close(daily_base_interest(&reference()), 13.698630136986301);

		let small = input("2024-01-01", "2024-02-01", 2500., 3.25, 0.5);
		assert_close(daily_base_interest(&small), 2500. * 3.25 / 100. / 365.);
	}

	#[test]
	fn test_daily_base_interest_ignores_margin() {
		let wide = input("2024-01-01", "2025-01-01", 100000., 5., 40.);
		assert_close(
			daily_base_interest(&wide),
			daily_base_interest(&reference()),
		);
	}

	#[test]
	fn test_effective_rate() {
		assert_close(effective_rate(&reference()), 0.06);
		assert_close(
			effective_rate(&input("2024-01-01", "2024-01-02", 1., -1., 0.25)),
			-0.0075,
		);
	}

	#[test]
	fn test_daily_total_interest_divides_by_356() {
		assert_eq!(DAILY_TOTAL_DIVISOR, 356.);
		assert_close(daily_total_interest(&reference()), 100000. * 0.06 / 356.);
		assert_close(daily_total_interest(&reference()), 16.853932584269664);

		// Would be 16.4383... had the divisor been 365
		assert!((daily_total_interest(&reference()) - 6000. / 365.).abs() > 0.4);
	}

	#[test]
	fn test_total_loan_days_spans_leap_year() {
		assert_eq!(total_loan_days(&reference()), 366);
		assert_eq!(
			total_loan_days(&input("2023-01-01", "2024-01-01", 1., 1., 1.)),
			365
		);
	}

	#[test]
	fn test_same_day_loan_accrues_nothing() {
		let same = input("2024-03-15", "2024-03-15", 100000., 5., 1.);
		assert_eq!(total_loan_days(&same), 0);
		assert_eq!(total_interest(&same), 0.);
	}

	#[test]
	fn test_reversed_dates_go_negative() {
		let reversed = input("2025-01-01", "2024-01-01", 100000., 5., 1.);
		assert_eq!(total_loan_days(&reversed), -366);
		assert!(total_interest(&reversed) < 0.);
		assert_close(
			total_interest(&reversed),
			-total_interest(&reference()),
		);
	}

	#[test]
	fn test_total_interest() {
		let total = total_interest(&reference());
		assert_close(total, 100000. * 0.06 * (366. / 365.));
		assert_eq!(format!("{:.2}", total), "6016.44");
	}

	#[test]
	fn test_days_since_start() {
		let loan = reference();
		assert_eq!(days_since_start(&loan, date("2024-01-01")), 0);
		assert_eq!(days_since_start(&loan, date("2024-03-01")), 60);
		assert_eq!(days_since_start(&loan, date("2023-12-25")), -7);
	}

	#[test]
	fn test_calculate() {
		let calculator = InterestCalculator::new(FixedClock(date("2024-07-01")));
		let loan = reference();
		let output = calculator.calculate(&loan);

		assert_close(output.daily_base_interest, daily_base_interest(&loan));
		assert_close(output.daily_total_interest, daily_total_interest(&loan));
		assert_close(output.total_interest, total_interest(&loan));
		assert_eq!(output.accrual_date, loan.start_date);
		assert_eq!(output.days_since_start, 182);
		assert_eq!(output.loan_currency, Currency::USD);
	}

	#[test]
	fn test_calculate_depends_on_clock() {
		let loan = reference();
		let early = InterestCalculator::new(FixedClock(date("2024-01-02")))
			.calculate(&loan);
		let late = InterestCalculator::new(FixedClock(date("2024-01-31")))
			.calculate(&loan);

		assert_eq!(early.days_since_start, 1);
		assert_eq!(late.days_since_start, 30);
		assert!(early.same_figures(&late));
		assert_ne!(early, late);
	}

	#[test]
	fn test_calculate_tolerates_reversed_dates() {
		let calculator = InterestCalculator::new(FixedClock(date("2024-01-01")));
		let output =
			calculator.calculate(&input("2024-06-01", "2024-05-01", 1000., 2., 2.));
		assert!(output.total_interest < 0.);
		assert_eq!(output.days_since_start, -152);
	}
}
