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

use anyhow::{bail, Error};
use chrono::NaiveDate;

/// Parses a string in the "YYYY-mm-dd" format
pub fn parse_date(date_str: &str) -> Result<NaiveDate, Error> {
	let parts: Vec<&str> = date_str.split('-').collect();
	if parts.len() != 3 {
		bail!("Date format must be YYYY-MM-DD");
	}

	// zero-padded: four-digit year, two-digit month and day
	let widths_ok = parts.iter().zip([4, 2, 2]).all(|(p, width)| {
		p.len() == width && p.chars().all(|c| c.is_ascii_digit())
	});
	if !widths_ok {
		bail!("Date format must be YYYY-MM-DD");
	}

	match NaiveDate::parse_from_str(date_str, "%Y-%m-%d") {
		Ok(date) => Ok(date),
		Err(_) => bail!("Invalid date"),
	}
}
