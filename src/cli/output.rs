use anyhow::Result;
use brewpair::{AppOutcome, Beer, IdentifiedBeer};
use serde_json::json;

use super::OutputFormat;

/// One line per beer, or `No results`.
pub(crate) fn format_beers_plain(beers: &[Beer]) -> String {
	if beers.is_empty() {
		return "No results".to_string();
	}
	beers
		.iter()
		.map(ToString::to_string)
		.collect::<Vec<_>>()
		.join("\n")
}

pub(crate) fn format_beers_json(beers: &[Beer]) -> Result<String> {
	Ok(serde_json::to_string_pretty(beers)?)
}

pub(crate) fn format_identified_plain(identified: &IdentifiedBeer) -> String {
	format!("Identified Beer: {identified}")
}

pub(crate) fn format_identified_json(identified: &IdentifiedBeer) -> Result<String> {
	let payload = json!({
		"name": identified.name(),
		"identified": identified,
	});
	Ok(serde_json::to_string_pretty(&payload)?)
}

pub(crate) fn format_outcome_plain(outcome: &AppOutcome) -> String {
	let mut lines = Vec::new();
	match (&outcome.selection, outcome.accepted) {
		(Some(beer), true) => lines.push(beer.to_string()),
		(None, true) => lines.push("No selection".to_string()),
		(_, false) => lines.push(format!("Search cancelled (query: '{}')", outcome.query)),
	}
	if let Some(identified) = &outcome.identified {
		lines.push(format_identified_plain(identified));
	}
	lines.join("\n")
}

pub(crate) fn format_outcome_json(outcome: &AppOutcome) -> Result<String> {
	let payload = json!({
		"accepted": outcome.accepted,
		"query": outcome.query,
		"selection": outcome.selection,
		"identified": outcome.identified,
	});
	Ok(serde_json::to_string_pretty(&payload)?)
}

pub(crate) fn print_beers(format: OutputFormat, beers: &[Beer]) -> Result<()> {
	let text = match format {
		OutputFormat::Plain => format_beers_plain(beers),
		OutputFormat::Json => format_beers_json(beers)?,
	};
	println!("{text}");
	Ok(())
}

pub(crate) fn print_identified(format: OutputFormat, identified: &IdentifiedBeer) -> Result<()> {
	let text = match format {
		OutputFormat::Plain => format_identified_plain(identified),
		OutputFormat::Json => format_identified_json(identified)?,
	};
	println!("{text}");
	Ok(())
}

pub(crate) fn print_outcome(format: OutputFormat, outcome: &AppOutcome) -> Result<()> {
	let text = match format {
		OutputFormat::Plain => format_outcome_plain(outcome),
		OutputFormat::Json => format_outcome_json(outcome)?,
	};
	println!("{text}");
	Ok(())
}

#[cfg(test)]
mod tests {
	use serde_json::Value;

	use super::*;

	#[test]
	fn plain_beers_use_display_line() {
		let beers = vec![
			Beer::new("1", "Hop Bomb").with_style("IPA").with_ibu(65.0),
			Beer::new("2", "Session Pils").with_style("Pilsner").with_ibu(0.0),
		];
		assert_eq!(
			format_beers_plain(&beers),
			"Hop Bomb - IPA (IBU: 65)\nSession Pils - Pilsner"
		);
		assert_eq!(format_beers_plain(&[]), "No results");
	}

	#[test]
	fn json_beers_keep_backend_field_names() {
		let beers = vec![Beer::new("7", "Porter").with_style("Porter")];
		let value: Value = serde_json::from_str(&format_beers_json(&beers).unwrap()).unwrap();
		assert_eq!(value[0]["id"], "7");
		assert_eq!(value[0]["name"], "Porter");
		assert!(value[0].get("ibu").is_none());
	}

	#[test]
	fn identified_markers_print_their_labels() {
		assert_eq!(
			format_identified_plain(&IdentifiedBeer::Unknown),
			"Identified Beer: Unknown"
		);
		let value: Value =
			serde_json::from_str(&format_identified_json(&IdentifiedBeer::Error).unwrap()).unwrap();
		assert_eq!(value["name"], "Error occurred");
		assert_eq!(value["identified"]["kind"], "error");
	}

	#[test]
	fn cancelled_outcome_mentions_query() {
		let outcome = AppOutcome {
			accepted: false,
			query: "sour".into(),
			selection: None,
			identified: Some(IdentifiedBeer::Unknown),
		};
		assert_eq!(
			format_outcome_plain(&outcome),
			"Search cancelled (query: 'sour')\nIdentified Beer: Unknown"
		);

		let value: Value = serde_json::from_str(&format_outcome_json(&outcome).unwrap()).unwrap();
		assert_eq!(value["accepted"], false);
		assert!(value["selection"].is_null());
	}
}
