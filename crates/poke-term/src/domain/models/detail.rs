#[cfg(test)]
#[path = "detail_test.rs"]
mod tests;

#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct Stat {
    pub name: String,
    pub value: i64,
}

/// Full record of one catalog entry, fetched on selection.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct EntryDetail {
    pub id: i64,
    pub name: String,
    pub height: i64,
    pub weight: i64,
    pub base_experience: i64,
    pub types: Vec<String>,
    pub abilities: Vec<String>,
    pub stats: Vec<Stat>,
}

impl EntryDetail {
    /// Renders the record as the detail panel text. Types, abilities and stats
    /// keep the order the API returned them in.
    pub fn report(&self) -> String {
        let mut lines = vec![
            format!("Name: {}", self.name),
            format!("ID: {}", self.id),
            format!("Height: {}", self.height),
            format!("Weight: {}", self.weight),
            format!("Base experience: {}", self.base_experience),
            format!("Types: {}", self.types.join(", ")),
            format!("Abilities: {}", self.abilities.join(", ")),
            "Stats:".to_string(),
        ];

        for stat in &self.stats {
            lines.push(format!("  {}: {}", stat.name, stat.value));
        }

        return lines.join("\n");
    }
}
