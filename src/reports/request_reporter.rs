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
use crate::loan::output::LoanOutput;
use crate::reports::table::Table;
use crate::store::request_store::RequestStore;

pub struct RequestReporter {
	/// Decimal places for every amount shown
	precision: usize,
}

impl RequestReporter {
	pub fn new(precision: usize) -> Self {
		Self { precision }
	}

	/// The figures for a single request, one labelled line each.
	pub fn render_output(&self, output: &LoanOutput) -> String {
		let currency = output.loan_currency;

		let mut table = Table::new(2);
		table.add_row(vec![
			"Daily Interest Amount without margin:".to_string(),
			self.money(currency, output.daily_base_interest),
		]);
		table.add_row(vec![
			"Daily Interest Amount Accrued:".to_string(),
			self.money(currency, output.daily_total_interest),
		]);
		table.add_row(vec![
			"Accrual Date:".to_string(),
			output.accrual_date.to_string(),
		]);
		table.add_row(vec![
			"Number of Days elapsed since the start date of the loan:".to_string(),
			output.days_since_start.to_string(),
		]);
		table.add_row(vec![
			"Total Interest:".to_string(),
			self.money(currency, output.total_interest),
		]);
		table.right_align(vec![1]);

		table.render()
	}

	/// One row per recorded request, in ID order.
	pub fn render_store(&self, store: &RequestStore) -> String {
		let mut table = Table::new(8);

		table.add_header(vec![
			"ID",
			"Start",
			"End",
			"Amount",
			"Rate",
			"Margin",
			"Daily Total",
			"Total Interest",
		]);
		table.add_separator();

		for (id, input, output) in store.all_entries() {
			table.add_row(vec![
				id.to_string(),
				input.start_date.to_string(),
				input.end_date.to_string(),
				self.money(input.loan_currency, input.loan_amount),
				format!("{}%", input.base_interest_rate),
				format!("{}%", input.margin),
				self.money(output.loan_currency, output.daily_total_interest),
				self.money(output.loan_currency, output.total_interest),
			]);
		}

		table.right_align(vec![0, 3, 4, 5, 6, 7]);
		table.render()
	}

	fn money(&self, currency: Currency, value: f64) -> String {
		format!("{} {:.*}", currency, self.precision, value)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::loan::calculator::InterestCalculator;
	use crate::loan::input::LoanInput;
	use crate::util::clock::FixedClock;
	use chrono::NaiveDate;

	fn date(s: &str) -> NaiveDate {
		NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
	}

	fn reference() -> (LoanInput, LoanOutput) {
		let input = LoanInput::new(
			date("2024-01-01"),
			date("2025-01-01"),
			100000.,
			Currency::USD,
			5.,
			1.,
		);
		let output = InterestCalculator::new(FixedClock(date("2024-02-01")))
			.calculate(&input);
		(input, output)
	}

	#[test]
	fn test_render_output() {
		let (_, output) = reference();
		assert_eq!(
			RequestReporter::new(2).render_output(&output),
			"Daily Interest Amount without margin:                        USD 13.70\n\
			 Daily Interest Amount Accrued:                               USD 16.85\n\
			 Accrual Date:                                               2024-01-01\n\
			 Number of Days elapsed since the start date of the loan:            31\n\
			 Total Interest:                                            USD 6016.44\n"
		);
	}

	#[test]
	fn test_render_output_precision() {
		let (_, output) = reference();
		let rendered = RequestReporter::new(4).render_output(&output);
		assert!(rendered.contains("USD 13.6986\n"));
		assert!(rendered.contains("USD 6016.4384\n"));
	}

	#[test]
	fn test_render_store() {
		let mut store = RequestStore::new();
		let (input, output) = reference();
		store.create(input, output);

		let rendered = RequestReporter::new(2).render_store(&store);
		let lines: Vec<&str> = rendered.lines().collect();
		assert_eq!(lines.len(), 3);
		assert!(lines[0].contains("Total Interest"));
		assert!(lines[1].chars().all(|c| c == '-'));
		assert!(lines[2].starts_with(" 1   2024-01-01   2025-01-01"));
		assert!(lines[2].ends_with("USD 6016.44"));
	}

	#[test]
	fn test_render_empty_store() {
		let rendered = RequestReporter::new(2).render_store(&RequestStore::new());
		assert_eq!(rendered.lines().count(), 2);
	}
}
