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

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
	New,  // price a new loan
	Edit, // revise an existing request
	List, // show every request so far
	Exit,
}

impl Command {
	pub const PROMPT: &'static str =
		"What would you like to do? [new, edit, list, exit]: ";

	/// Case-insensitive; surrounding whitespace is ignored
	pub fn from_str(s: &str) -> Option<Self> {
		match s.trim().to_lowercase().as_str() {
			"new" => Some(Command::New),
			"edit" => Some(Command::Edit),
			"list" => Some(Command::List),
			"exit" => Some(Command::Exit),
			_ => None,
		}
	}
}

/// Yes/no answer to the save question at the end of a session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SaveChoice {
	Save,
	Discard,
}

impl SaveChoice {
	pub const PROMPT: &'static str =
		"Would you like to save your requests? [y, n]: ";

	pub fn from_str(s: &str) -> Option<Self> {
		match s.trim().to_lowercase().as_str() {
			"y" => Some(SaveChoice::Save),
			"n" => Some(SaveChoice::Discard),
			_ => None,
		}
	}
}
