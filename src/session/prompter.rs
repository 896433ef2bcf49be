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
use log::debug;
use std::io::{BufRead, Write};

/// Line-oriented question and answer over any reader/writer pair.
pub struct Prompter<R, W> {
	reader: R,
	writer: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
	pub fn new(reader: R, writer: W) -> Self {
		Self { reader, writer }
	}

	/// Shows the prompt and returns the next line, trimmed. Running out of
	/// input is an error since nothing further could ever be answered.
	pub fn ask(&mut self, prompt: &str) -> Result<String, Error> {
		write!(self.writer, "{}", prompt)?;
		self.writer.flush()?;

		let mut line = String::new();
		if self.reader.read_line(&mut line)? == 0 {
			writeln!(self.writer)?;
			bail!("Unexpected end of input");
		}

		Ok(line.trim().to_string())
	}

	/// Asks repeatedly until the answer parses, reporting each failure.
	pub fn ask_until<T, F>(&mut self, prompt: &str, mut parse: F) -> Result<T, Error>
	where
		F: FnMut(&str) -> Result<T, Error>,
	{
		loop {
			let answer = self.ask(prompt)?;
			match parse(&answer) {
				Ok(value) => return Ok(value),
				Err(e) => {
					debug!("Rejected {:?} for {:?}: {}", answer, prompt, e);
					writeln!(self.writer, "Invalid input. {}", e)?;
				},
			}
		}
	}

	pub fn say(&mut self, text: &str) -> Result<(), Error> {
		writeln!(self.writer, "{}", text)?;
		Ok(())
	}

	/// Writes pre-rendered text exactly as given.
	pub fn show(&mut self, text: &str) -> Result<(), Error> {
		write!(self.writer, "{}", text)?;
		self.writer.flush()?;
		Ok(())
	}

	#[cfg(test)]
	pub fn into_writer(self) -> W {
		self.writer
	}
}
