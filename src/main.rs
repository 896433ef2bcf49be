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
use crate::persistence::filesystem::Filesystem;
use crate::session::command::SaveChoice;
use crate::session::handler::Session;
use crate::session::prompter::Prompter;
use crate::util::clock::SessionClock;
use crate::util::date::parse_date;
use anyhow::{bail, Error};
use clap::{ArgAction, Parser};
use log::LevelFilter;
use simple_logger::SimpleLogger;
use std::io;

mod config;
mod loan;
mod persistence;
mod reports;
mod session;
mod store;
mod util;

#[derive(Parser)]
#[command(
	name = "loancalc",
	version = "0.1",
	about = "Simple interest accrual calculator for loans"
)]
struct Cli {
	/// Custom config file location (default: ~/.config/loancalc/config.toml)
	#[arg(long)]
	config: Option<String>,

	/// File that saved requests are written to on exit
	#[arg(short, long)]
	output: Option<String>,

	/// Count elapsed days up to this date instead of today (YYYY-MM-DD)
	#[arg(long)]
	today: Option<String>,

	/// Decimal places to show for amounts
	#[arg(short, long)]
	precision: Option<usize>,

	/// Log more detail to stderr; repeat for more
	#[arg(short, long, action = ArgAction::Count)]
	verbose: u8,
}

impl Cli {
	/// Anything past this is float noise anyway
	const MAX_PRECISION: usize = 10;

	/// Extra validations on top of what clap does
	fn validate(&self) -> Result<(), Error> {
		if let Some(prec) = self.precision {
			check_precision(prec)?;
		}

		Ok(())
	}

	fn log_level(&self) -> LevelFilter {
		match self.verbose {
			0 => LevelFilter::Warn,
			1 => LevelFilter::Info,
			_ => LevelFilter::Debug,
		}
	}
}

fn check_precision(prec: usize) -> Result<(), Error> {
	if prec > Cli::MAX_PRECISION {
		bail!("Maximum precision is {}", Cli::MAX_PRECISION);
	}
	Ok(())
}

fn main() -> Result<(), Error> {
	let args = Cli::parse();
	args.validate()?;

	SimpleLogger::new().with_level(args.log_level()).init()?;

	let fs = Filesystem::new();
	let config = fs.get_config(args.config.as_ref())?;

	let output_file = args.output.clone().unwrap_or_else(|| config.output_file());
	let precision = args.precision.unwrap_or_else(|| config.precision());
	check_precision(precision)?;

	let pinned = args.today.as_deref().map(parse_date).transpose()?;
	let clock = SessionClock::new(pinned);

	let stdin = io::stdin();
	let stdout = io::stdout();
	let mut session = Session::new(
		InterestCalculator::new(clock),
		Prompter::new(stdin.lock(), stdout.lock()),
		precision,
	);

	if session.run()? == SaveChoice::Save {
		let blob = session.store().export(config.pretty_export())?;
		fs.write_export(&output_file, &blob)?;
		session.confirm_saved(&output_file)?;
	}

	session.farewell()
}
