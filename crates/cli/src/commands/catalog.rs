use outfitter_core::{catalogs_for, TemperatureBand};

use crate::commands::CommandResult;

pub fn run(band: Option<TemperatureBand>, json_output: bool) -> CommandResult {
    let bands: Vec<TemperatureBand> = match band {
        Some(band) => vec![band],
        None => TemperatureBand::ALL.to_vec(),
    };

    if json_output {
        let catalogs: Vec<_> = bands.iter().map(|band| catalogs_for(*band)).collect();
        return match serde_json::to_value(&catalogs) {
            Ok(data) => CommandResult::success_with_data(
                "catalog",
                format!("{} band catalog(s)", catalogs.len()),
                data,
            ),
            Err(error) => CommandResult::failure("catalog", "serialization", error.to_string(), 3),
        };
    }

    let sections: Vec<String> = bands.iter().map(|band| render_band(*band)).collect();
    CommandResult::text(0, sections.join("\n\n"))
}

fn render_band(band: TemperatureBand) -> String {
    let catalogs = catalogs_for(band);
    let mut lines = vec![format!("{} {} ({})", band.emoji(), band.label(), band.range_label())];

    lines.push("outfits:".to_string());
    for (index, outfit) in catalogs.outfits.iter().enumerate() {
        lines.push(format!("  {}. {}: {}", index + 1, outfit.title, outfit.items.join(", ")));
    }
    lines.push("accessories:".to_string());
    lines.extend(numbered(&catalogs.accessories));
    lines.push("shoes:".to_string());
    lines.extend(numbered(&catalogs.shoes));

    lines.join("\n")
}

fn numbered<'a>(entries: &'a [&str]) -> impl Iterator<Item = String> + 'a {
    entries.iter().enumerate().map(|(index, entry)| format!("  {}. {entry}", index + 1))
}
