/* Copyright © 2024-2025 Adam Train <adam@adamtrain.net>
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
use serde::Deserialize;

pub const DEFAULT_OUTPUT_FILE: &str = "loan_requests.json";
pub const DEFAULT_PRECISION: usize = 2;

#[derive(Debug, Default, Deserialize)]
pub struct Config {
	pub session: Option<Session>,
}

#[derive(Debug, Default, Deserialize)]
pub struct Session {
	/// Where saved requests are written on exit
	pub output_file: Option<String>,

	/// Decimal places shown for amounts
	pub precision: Option<usize>,

	/// Indent the saved JSON
	pub pretty_export: Option<bool>,
}

impl Config {
	pub fn output_file(&self) -> String {
		self.session
			.as_ref()
			.and_then(|s| s.output_file.clone())
			.unwrap_or_else(|| DEFAULT_OUTPUT_FILE.to_string())
	}

	pub fn precision(&self) -> usize {
		self.session
			.as_ref()
			.and_then(|s| s.precision)
			.unwrap_or(DEFAULT_PRECISION)
	}

	pub fn pretty_export(&self) -> bool {
		self.session
			.as_ref()
			.and_then(|s| s.pretty_export)
			.unwrap_or(false)
	}
}
