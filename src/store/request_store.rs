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
use anyhow::{bail, Context};
use log::info;
use std::collections::BTreeMap;
use thiserror::Error;

pub type RequestId = u32;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
	#[error("no request with ID {id}")]
	NotFound { id: RequestId },
}

/// Every loan request made during a session, keyed by ID. Each ID holds
/// only the latest input and the output computed from it; revising a
/// request throws the previous pair away.
///
/// Entries are never removed, so the store only grows.
#[derive(Debug, Default)]
pub struct RequestStore {
	requests: BTreeMap<RequestId, (LoanInput, LoanOutput)>,
}

impl RequestStore {
	pub fn new() -> Self {
		Self {
			requests: BTreeMap::new(),
		}
	}

	/// IDs are handed out as one more than the number of requests held.
	/// That is only collision-free because nothing is ever removed; a
	/// removal feature would need a real counter here.
	fn next_id(&self) -> RequestId {
		self.requests.len() as RequestId + 1
	}

	/// Records a new request under a fresh ID and returns that ID.
	pub fn create(&mut self, input: LoanInput, output: LoanOutput) -> RequestId {
		let id = self.next_id();
		self.requests.insert(id, (input, output));
		info!("Created request {}", id);
		id
	}

	/// Replaces the pair held under an existing ID. Unknown IDs are
	/// rejected and leave the store as it was.
	pub fn update(
		&mut self,
		id: RequestId,
		input: LoanInput,
		output: LoanOutput,
	) -> Result<(), StoreError> {
		match self.requests.get_mut(&id) {
			Some(entry) => {
				*entry = (input, output);
				info!("Updated request {}", id);
				Ok(())
			},
			None => Err(StoreError::NotFound { id }),
		}
	}

	pub fn get(
		&self,
		id: RequestId,
	) -> Result<&(LoanInput, LoanOutput), StoreError> {
		self.requests.get(&id).ok_or(StoreError::NotFound { id })
	}

	/// All requests in ID order
	pub fn all_entries(
		&self,
	) -> impl Iterator<Item = (RequestId, &LoanInput, &LoanOutput)> {
		self.requests
			.iter()
			.map(|(id, (input, output))| (*id, input, output))
	}

	pub fn ids(&self) -> Vec<RequestId> {
		self.requests.keys().copied().collect()
	}

	pub fn len(&self) -> usize {
		self.requests.len()
	}

	pub fn is_empty(&self) -> bool {
		self.requests.is_empty()
	}

	/// Dumps the store as JSON: an object from ID to a two-element array of
	/// input fields and output fields. There is no version marker, and the
	/// store never reads one of these back.
	///
	/// JSON has no infinity or NaN, so a request holding one is refused
	/// rather than written out as `null`.
	pub fn export(&self, pretty: bool) -> Result<Vec<u8>, anyhow::Error> {
		if let Some((id, _, _)) = self
			.all_entries()
			.find(|(_, input, output)| !input.is_finite() || !output.is_finite())
		{
			bail!("request {} has figures too large to save", id);
		}

		let blob = if pretty {
			serde_json::to_vec_pretty(&self.requests)
		} else {
			serde_json::to_vec(&self.requests)
		};

		blob.context("failed to serialize loan requests")
	}
}
