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
use chrono::{Local, NaiveDate};

/// Source of "today" for anything that measures elapsed time. Calculations
/// take one of these rather than reading the system clock themselves, so a
/// session can be replayed as of any date.
pub trait Clock {
	fn today(&self) -> NaiveDate;
}

/// The local wall clock.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
	fn today(&self) -> NaiveDate {
		Local::now().date_naive()
	}
}

/// A clock stuck on one date.
#[derive(Clone, Copy, Debug)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
	fn today(&self) -> NaiveDate {
		self.0
	}
}

/// Either of the above, picked at startup depending on whether the user
/// pinned a date on the command line.
#[derive(Clone, Copy, Debug)]
pub enum SessionClock {
	System(SystemClock),
	Fixed(FixedClock),
}

impl SessionClock {
	pub fn new(pinned: Option<NaiveDate>) -> Self {
		match pinned {
			Some(date) => SessionClock::Fixed(FixedClock(date)),
			None => SessionClock::System(SystemClock),
		}
	}
}

impl Clock for SessionClock {
	fn today(&self) -> NaiveDate {
		match self {
			SessionClock::System(c) => c.today(),
			SessionClock::Fixed(c) => c.today(),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_fixed_clock() {
		let date = NaiveDate::from_ymd_opt(2024, 6, 30).unwrap();
		assert_eq!(FixedClock(date).today(), date);
	}

	#[test]
	fn test_session_clock_prefers_pinned_date() {
		let date = NaiveDate::from_ymd_opt(2020, 2, 29).unwrap();
		assert_eq!(SessionClock::new(Some(date)).today(), date);
	}

	#[test]
	fn test_session_clock_defaults_to_system() {
		let clock = SessionClock::new(None);
		assert!(matches!(clock, SessionClock::System(_)));
	}
}
