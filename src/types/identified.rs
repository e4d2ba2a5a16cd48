use std::fmt;

use serde::{Deserialize, Serialize};

use super::beer::format_ibu;

/// Success body of the identify endpoint. Keys other than these are ignored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IdentifyResponse {
	#[serde(skip_serializing_if = "Option::is_none")]
	pub name: Option<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub style: Option<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub ibu: Option<f64>,
}

impl IdentifyResponse {
	#[must_use]
	pub fn named(name: impl Into<String>) -> Self {
		Self {
			name: Some(name.into()),
			..Self::default()
		}
	}
}

/// Result of the most recent identify upload.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum IdentifiedBeer {
	Beer {
		name: String,
		#[serde(skip_serializing_if = "Option::is_none")]
		style: Option<String>,
		#[serde(skip_serializing_if = "Option::is_none")]
		ibu: Option<f64>,
	},
	/// The endpoint answered but did not name a beer.
	Unknown,
	/// The upload failed.
	Error,
}

impl IdentifiedBeer {
	/// Interpret a successful identify response.
	#[must_use]
	pub fn from_response(response: IdentifyResponse) -> Self {
		match response.name {
			Some(name) if !name.is_empty() => Self::Beer {
				name,
				style: response.style,
				ibu: response.ibu,
			},
			_ => Self::Unknown,
		}
	}

	#[must_use]
	pub fn name(&self) -> &str {
		match self {
			Self::Beer { name, .. } => name,
			Self::Unknown => "Unknown",
			Self::Error => "Error occurred",
		}
	}
}

impl fmt::Display for IdentifiedBeer {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.name())?;
		if let Self::Beer { style, ibu, .. } = self {
			if let Some(style) = style {
				write!(f, " - {style}")?;
			}
			if let Some(ibu) = format_ibu(*ibu) {
				write!(f, " (IBU: {ibu})")?;
			}
		}
		Ok(())
	}
}
