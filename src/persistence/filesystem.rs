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
use crate::config::config_file::Config;
use anyhow::{anyhow, Context, Error};
use dirs::home_dir;
use log::{debug, info};
use std::fs;
use std::fs::File;
use std::path::{Path, PathBuf};

pub struct Filesystem;

impl Filesystem {
	pub fn new() -> Self {
		Self
	}

	/// Fetches the config from the given path, or default path if none.
	/// The default file is created empty on first use; a custom path must
	/// already exist.
	pub fn get_config(
		&self,
		custom_config_path: Option<&String>,
	) -> Result<Config, Error> {
		let config_path = match &custom_config_path {
			None => {
				let home_dir = home_dir()
					.ok_or_else(|| anyhow!("Unable to determine home directory"))?;
				home_dir.join(".config/loancalc/config.toml")
			},
			Some(p) => PathBuf::from(p),
		};

		// create empty config file if it doesn't exist
		if !config_path.exists() && custom_config_path.is_none() {
			if let Some(parent) = config_path.parent() {
				fs::create_dir_all(parent)?;
			}
			File::create(config_path.clone())?;
		}

		debug!("Reading config from {}", config_path.display());
		let content = fs::read_to_string(&config_path).with_context(|| {
			format!("failed to read config {}", config_path.display())
		})?;
		let config: Config = toml::from_str(&content)
			.map_err(|e| anyhow!("failed to parse config: {}", e))?;

		Ok(config)
	}

	/// Writes a finished export in one go. Nothing is retried; the caller
	/// decides what to tell the user.
	pub fn write_export(&self, file_path: &str, blob: &[u8]) -> Result<(), Error> {
		let path = Path::new(file_path);
		fs::write(path, blob).with_context(|| {
			format!("failed to save loan requests to {}", path.display())
		})?;
		info!("Wrote {} bytes to {}", blob.len(), path.display());
		Ok(())
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use tempfile::tempdir;

	#[test]
	fn test_custom_config() {
		let dir = tempdir().unwrap();
		let path = dir.path().join("config.toml");
		fs::write(&path, "[session]\noutput_file = \"saved.json\"\n").unwrap();

		let config = Filesystem::new()
			.get_config(Some(&path.to_string_lossy().to_string()))
			.unwrap();
		assert_eq!(config.output_file(), "saved.json");
	}

	#[test]
	fn test_missing_custom_config_is_an_error() {
		let dir = tempdir().unwrap();
		let path = dir.path().join("nope.toml").to_string_lossy().to_string();
		assert!(Filesystem::new().get_config(Some(&path)).is_err());
		assert!(!Path::new(&path).exists());
	}

	#[test]
	fn test_malformed_config_is_an_error() {
		let dir = tempdir().unwrap();
		let path = dir.path().join("config.toml");
		fs::write(&path, "[session\n").unwrap();

		let err = Filesystem::new()
			.get_config(Some(&path.to_string_lossy().to_string()))
			.unwrap_err();
		assert!(err.to_string().starts_with("failed to parse config"));
	}

	#[test]
	fn test_write_export() {
		let dir = tempdir().unwrap();
		let path = dir.path().join("loan_requests.json");
		let path = path.to_string_lossy();

		Filesystem::new().write_export(&path, b"{}").unwrap();
		assert_eq!(fs::read_to_string(&*path).unwrap(), "{}");
	}

	#[test]
	fn test_write_export_to_missing_directory() {
		let dir = tempdir().unwrap();
		let path = dir.path().join("missing").join("loan_requests.json");

		let err = Filesystem::new()
			.write_export(&path.to_string_lossy(), b"{}")
			.unwrap_err();
		assert!(err.to_string().starts_with("failed to save loan requests"));
	}
}
