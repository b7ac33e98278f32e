use serde::{Deserialize, Deserializer};

/// One entry of the learning glossary.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq)]
pub struct Term {
    pub id: String,
    pub term: String,
    pub definition: String,
    pub category: String,
    pub pronunciation: Option<String>,
    #[serde(deserialize_with = "examples_from_string")]
    pub examples: Option<Vec<String>>,
}

// Usage examples are stored as a single `|`-separated CSV field.
fn examples_from_string<'de, D>(deserializer: D) -> Result<Option<Vec<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    if raw.trim().is_empty() {
        return Ok(None);
    }
    Ok(Some(
        raw.split('|').map(|e| e.trim().to_owned()).collect(),
    ))
}
