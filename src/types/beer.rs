use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

/// Identifier of a beer as served by the search endpoint.
///
/// The backend serves string identifiers, but numbers are accepted and kept in
/// their textual form so rows can always be keyed by a string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct BeerId(String);

impl BeerId {
	#[must_use]
	pub fn new(id: impl Into<String>) -> Self {
		Self(id.into())
	}

	#[must_use]
	pub fn as_str(&self) -> &str {
		&self.0
	}
}

impl fmt::Display for BeerId {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.0)
	}
}

impl<'de> Deserialize<'de> for BeerId {
	fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
	where
		D: Deserializer<'de>,
	{
		#[derive(Deserialize)]
		#[serde(untagged)]
		enum RawId {
			Text(String),
			Number(serde_json::Number),
			Null(()),
		}

		Ok(match RawId::deserialize(deserializer)? {
			RawId::Text(text) => Self(text),
			RawId::Number(number) => Self(number.to_string()),
			RawId::Null(()) => Self::default(),
		})
	}
}

/// A beer record returned by the search endpoint.
///
/// Only `id`, `name`, `style` and `ibu` are used for display. Every field is
/// tolerated as missing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Beer {
	pub id: BeerId,
	pub name: String,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub style: Option<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub ibu: Option<f64>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub description: Option<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub abv: Option<f64>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub bp_verified: Option<bool>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub brewer_verified: Option<bool>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub last_modified: Option<i64>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub brewer_id: Option<String>,
}

impl Beer {
	/// Build a beer carrying only the displayed fields.
	#[must_use]
	pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
		Self {
			id: BeerId::new(id),
			name: name.into(),
			..Self::default()
		}
	}

	#[must_use]
	pub fn with_style(mut self, style: impl Into<String>) -> Self {
		self.style = Some(style.into());
		self
	}

	#[must_use]
	pub fn with_ibu(mut self, ibu: f64) -> Self {
		self.ibu = Some(ibu);
		self
	}

	/// IBU label for display, hidden when absent or zero.
	#[must_use]
	pub fn ibu_label(&self) -> Option<String> {
		format_ibu(self.ibu)
	}
}

/// Format an IBU value, returning `None` when it should not be displayed.
#[must_use]
pub fn format_ibu(ibu: Option<f64>) -> Option<String> {
	match ibu {
		Some(value) if value != 0.0 && value.is_finite() => Some(value.to_string()),
		_ => None,
	}
}

impl fmt::Display for Beer {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}", self.name)?;
		if let Some(style) = &self.style {
			write!(f, " - {style}")?;
		}
		if let Some(ibu) = self.ibu_label() {
			write!(f, " (IBU: {ibu})")?;
		}
		Ok(())
	}
}
