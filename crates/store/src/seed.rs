use crate::backend::RecordStore;
use crate::types::RestaurantRecord;
use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;

/// One entry of a seed file. Unlike [`RestaurantRecord`], every field is required.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SeedRecord {
    name: String,
    style: String,
    address: String,
    open_hour: String,
    close_hour: String,
    vegetarian: bool,
    deliveries: bool,
}

impl From<SeedRecord> for RestaurantRecord {
    fn from(seed: SeedRecord) -> Self {
        RestaurantRecord::new(seed.name, seed.style)
            .with_address(seed.address)
            .with_hours(seed.open_hour.trim(), seed.close_hour.trim())
            .with_vegetarian(seed.vegetarian)
            .with_deliveries(seed.deliveries)
            .normalized()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeedReport {
    pub inserted: usize,
}

/// Parses seed JSON (an array of complete records) and normalizes each entry.
pub fn parse_seed_records(raw: &str) -> Result<Vec<RestaurantRecord>> {
    let seeds: Vec<SeedRecord> =
        serde_json::from_str(raw).context("Seed data must be a JSON array of restaurant records")?;
    Ok(seeds.into_iter().map(RestaurantRecord::from).collect())
}

pub async fn load_seed_file(path: impl AsRef<Path>) -> Result<Vec<RestaurantRecord>> {
    let path = path.as_ref();
    let raw = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("Cannot read seed file {}", path.display()))?;
    parse_seed_records(&raw).with_context(|| format!("Invalid seed file {}", path.display()))
}

/// Writes records one by one, stopping at the first store failure.
pub async fn seed_store(
    store: &dyn RecordStore,
    records: Vec<RestaurantRecord>,
) -> Result<SeedReport> {
    let mut inserted = 0usize;
    for record in records {
        log::info!("Inserting: {}", record.name);
        let name = record.name.clone();
        store
            .put(record)
            .await
            .with_context(|| format!("Failed to insert '{name}' into table '{}'", store.table()))?;
        inserted += 1;
    }
    log::info!("Seeded {inserted} record(s) into table '{}'", store.table());
    Ok(SeedReport { inserted })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn normalizes_text_fields() {
        let records = parse_seed_records(
            r#"[{
                "name": "Taco Town",
                "style": "Mexican",
                "address": "12 Elm St",
                "openHour": "08:00",
                "closeHour": "20:00",
                "vegetarian": true,
                "deliveries": false
            }]"#,
        )
        .unwrap();

        assert_eq!(
            records,
            vec![RestaurantRecord::new("taco town", "mexican")
                .with_address("12 elm st")
                .with_hours("08:00", "20:00")
                .with_vegetarian(true)]
        );
    }

    #[test]
    fn rejects_incomplete_entries() {
        let err = parse_seed_records(r#"[{"name": "No Hours", "style": "french"}]"#).unwrap_err();
        assert!(format!("{err:#}").contains("JSON array"), "{err:#}");
    }
}
