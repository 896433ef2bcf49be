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
use crate::loan::calculator::InterestCalculator;
use crate::loan::input::{Currency, LoanInput};
use crate::reports::request_reporter::RequestReporter;
use crate::session::command::{Command, SaveChoice};
use crate::session::prompter::Prompter;
use crate::store::request_store::{RequestId, RequestStore};
use crate::util::clock::Clock;
use crate::util::date::parse_date;
use anyhow::{anyhow, bail, Error};
use log::info;
use std::io::{BufRead, Write};

/// One interactive run of the calculator. Owns the request store for its
/// whole lifetime; whoever drives the session decides what to do with the
/// store once `run` says how the user wants to leave.
pub struct Session<C: Clock, R, W> {
	store: RequestStore,
	calculator: InterestCalculator<C>,
	prompter: Prompter<R, W>,
	reporter: RequestReporter,
}

impl<C: Clock, R: BufRead, W: Write> Session<C, R, W> {
	pub fn new(
		calculator: InterestCalculator<C>,
		prompter: Prompter<R, W>,
		precision: usize,
	) -> Self {
		Self {
			store: RequestStore::new(),
			calculator,
			prompter,
			reporter: RequestReporter::new(precision),
		}
	}

	pub fn store(&self) -> &RequestStore {
		&self.store
	}

	/// Handles commands until the user exits, then returns whether they
	/// asked for their requests to be saved.
	pub fn run(&mut self) -> Result<SaveChoice, Error> {
		self.prompter.say("Welcome to the loan calculator!")?;

		loop {
			match self.next_command()? {
				Command::New => self.handle_new()?,
				Command::Edit => self.handle_edit()?,
				Command::List => self.handle_list()?,
				Command::Exit => return self.handle_exit(),
			}
		}
	}

	pub fn confirm_saved(&mut self, path: &str) -> Result<(), Error> {
		let count = self.store.len();
		self.prompter
			.say(&format!("Saved {} request(s) to {}", count, path))
	}

	pub fn farewell(&mut self) -> Result<(), Error> {
		self.prompter.say("Goodbye!")
	}

	fn next_command(&mut self) -> Result<Command, Error> {
		loop {
			let answer = self.prompter.ask(Command::PROMPT)?;
			match Command::from_str(&answer) {
				Some(command) => return Ok(command),
				None => self.prompter.say("Invalid command. Please try again.")?,
			}
		}
	}

	fn handle_new(&mut self) -> Result<(), Error> {
		let input = self.collect_input()?;
		let output = self.calculator.calculate(&input);
		let rendered = self.reporter.render_output(&output);

		let id = self.store.create(input, output);

		self.prompter.say(&format!("\nRequest ID: {}", id))?;
		self.prompter.show(&rendered)?;
		self.prompter.say("")
	}

	fn handle_edit(&mut self) -> Result<(), Error> {
		if self.store.is_empty() {
			return self
				.prompter
				.say("No requests yet. Use 'new' to create one.");
		}

		let id = self.collect_request_id()?;
		let input = self.collect_input()?;
		let output = self.calculator.calculate(&input);
		let rendered = self.reporter.render_output(&output);

		self.store.update(id, input, output)?;

		self.prompter.say(&format!("\nRequest ID: {} (updated)", id))?;
		self.prompter.show(&rendered)?;
		self.prompter.say("")
	}

	fn handle_list(&mut self) -> Result<(), Error> {
		if self.store.is_empty() {
			return self.prompter.say("No requests yet.");
		}

		let rendered = self.reporter.render_store(&self.store);
		self.prompter.say("")?;
		self.prompter.show(&rendered)?;
		self.prompter.say("")
	}

	fn handle_exit(&mut self) -> Result<SaveChoice, Error> {
		loop {
			let answer = self.prompter.ask(SaveChoice::PROMPT)?;
			match SaveChoice::from_str(&answer) {
				Some(choice) => {
					info!(
						"Session ended with {} request(s), {:?}",
						self.store.len(),
						choice
					);
					return Ok(choice);
				},
				None => self
					.prompter
					.say("Invalid response. Please try again.")?,
			}
		}
	}

	/// Asks for every field of a loan in turn, re-asking each one until it
	/// parses.
	fn collect_input(&mut self) -> Result<LoanInput, Error> {
		let p = &mut self.prompter;

		let start_date = p.ask_until("Start date [YYYY-MM-DD]: ", parse_date)?;
		let end_date = p.ask_until("End date [YYYY-MM-DD]: ", parse_date)?;
		let loan_amount = p.ask_until("Loan amount: ", parse_number)?;
		let loan_currency = p.ask_until("Loan currency: ", Currency::from_str)?;
		let base_interest_rate =
			p.ask_until("Base interest rate: ", parse_number)?;
		let margin = p.ask_until("Margin: ", parse_number)?;

		Ok(LoanInput::new(
			start_date,
			end_date,
			loan_amount,
			loan_currency,
			base_interest_rate,
			margin,
		))
	}

	fn collect_request_id(&mut self) -> Result<RequestId, Error> {
		let store = &self.store;
		self.prompter
			.ask_until("Please enter the request ID: ", |answer| {
				answer
					.parse::<RequestId>()
					.ok()
					.filter(|id| store.get(*id).is_ok())
					.ok_or_else(|| {
						anyhow!(
							"Invalid request ID. Valid IDs: {}",
							store
								.ids()
								.iter()
								.map(|id| id.to_string())
								.collect::<Vec<_>>()
								.join(", ")
						)
					})
			})
	}
}

fn parse_number(s: &str) -> Result<f64, Error> {
	let n = s
		.parse::<f64>()
		.map_err(|_| anyhow!("Expected a number, got '{}'", s))?;
	if !n.is_finite() {
		bail!("Expected a finite number, got '{}'", s);
	}
	Ok(n)
}
