use serde::{Deserialize, Deserializer};
use std::io::Read;

use crate::domain::parse_flag;

/// Raw catalog row before validation. `line` is the 1-based line in the source file.
#[derive(Debug)]
pub(crate) struct CatalogRecord {
    pub(crate) line: u64,
    pub(crate) title: String,
    pub(crate) description: String,
    pub(crate) items: Vec<String>,
    pub(crate) gender: String,
    pub(crate) min_temp: i32,
    pub(crate) max_temp: i32,
    pub(crate) rain_compatible: bool,
    pub(crate) wind_compatible: bool,
}

pub(crate) fn parse_records<R: Read>(reader: R) -> Result<Vec<CatalogRecord>, csv::Error> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    let headers = csv_reader.headers()?.clone();
    let mut records = Vec::new();

    for result in csv_reader.records() {
        let raw = result?;
        let line = raw.position().map(|position| position.line()).unwrap_or_default();
        let row: CatalogRow = raw.deserialize(Some(&headers))?;

        records.push(CatalogRecord {
            line,
            items: split_items(row.items.as_deref()),
            title: row.title,
            description: row.description.unwrap_or_default(),
            gender: row.gender,
            min_temp: row.min_temp,
            max_temp: row.max_temp,
            rain_compatible: row.rain_compatible.unwrap_or(false),
            wind_compatible: row.wind_compatible.unwrap_or(false),
        });
    }

    Ok(records)
}

#[derive(Debug, Deserialize)]
struct CatalogRow {
    title: String,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    description: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    items: Option<String>,
    gender: String,
    min_temp: i32,
    max_temp: i32,
    #[serde(default, deserialize_with = "flag")]
    rain_compatible: Option<bool>,
    #[serde(default, deserialize_with = "flag")]
    wind_compatible: Option<bool>,
}

/// Items are `;`-separated inside a single column.
fn split_items(raw: Option<&str>) -> Vec<String> {
    raw.map(|value| {
        value
            .split(';')
            .map(str::trim)
            .filter(|item| !item.is_empty())
            .map(str::to_string)
            .collect()
    })
    .unwrap_or_default()
}

fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(opt.filter(|value| !value.trim().is_empty()))
}

fn flag<'de, D>(deserializer: D) -> Result<Option<bool>, D::Error>
where
    D: Deserializer<'de>,
{
    let Some(raw) = empty_string_as_none(deserializer)? else {
        return Ok(None);
    };

    parse_flag(&raw)
        .map(Some)
        .ok_or_else(|| serde::de::Error::custom(format!("expected a yes/no flag, got '{raw}'")))
}
