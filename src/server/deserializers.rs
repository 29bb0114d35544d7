use serde::{Deserialize, Deserializer};

// `?page=` is best effort: anything that is not a positive number means the first page
pub fn deserialize_page<'de, D>(deserializer: D) -> Result<usize, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value
        .and_then(|v| v.trim().parse::<usize>().ok())
        .filter(|page| *page > 0)
        .unwrap_or(1))
}

#[derive(Deserialize)]
pub struct PageQuery {
    #[serde(default = "first_page", deserialize_with = "deserialize_page")]
    pub page: usize,
}

fn first_page() -> usize {
    1
}
