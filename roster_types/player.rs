use serde::{Deserialize, Serialize};
use std::fmt;

/// A player on the roster.
///
/// `number`, `height`, `weight` and `age` are kept as free text, exactly as
/// stored. An `id` of 0 (or below) marks a player that hasn't been persisted yet.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Player {
    pub id: i64,
    pub name: String,
    pub number: String,
    pub position: String,
    pub height: String,
    pub weight: String,
    pub age: String,
    pub experience: i32,
    pub college: String,
}

impl Player {
    /// Returns true when the player still has to be created.
    pub fn is_new(&self) -> bool {
        self.id <= 0
    }

    /// Returns a copy of the player with the given id.
    pub fn with_id(self, id: i64) -> Self {
        Self { id, ..self }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] {} ({}) -- #{}, {}, {}lb, {}yo, {}exp -- {}",
            self.id,
            self.name,
            self.position,
            self.number,
            self.height,
            self.weight,
            self.age,
            self.experience,
            self.college
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bortles() -> Player {
        Player {
            id: 1,
            name: "Blake Bortles".to_string(),
            number: "5".to_string(),
            position: "QB".to_string(),
            height: "6-5".to_string(),
            weight: "236".to_string(),
            age: "26".to_string(),
            experience: 5,
            college: "Central Florida".to_string(),
        }
    }

    #[test]
    fn test_display_renders_one_line_summary() {
        assert_eq!(
            bortles().to_string(),
            "[1] Blake Bortles (QB) -- #5, 6-5, 236lb, 26yo, 5exp -- Central Florida"
        );
    }

    #[test]
    fn test_is_new() {
        assert!(!bortles().is_new());
        assert!(bortles().with_id(0).is_new());
        assert!(bortles().with_id(-3).is_new());
    }

    #[test]
    fn test_deserialize_missing_fields_defaults_to_zero_values() {
        let player: Player = serde_json::from_str(r#"{"name":"Jalen Ramsey"}"#).unwrap();

        assert_eq!(player.id, 0);
        assert_eq!(player.name, "Jalen Ramsey");
        assert_eq!(player.number, "");
        assert_eq!(player.experience, 0);
    }

    #[test]
    fn test_serialize_uses_plain_field_names() {
        let value = serde_json::to_value(bortles()).unwrap();

        assert_eq!(value["id"], 1);
        assert_eq!(value["number"], "5");
        assert_eq!(value["college"], "Central Florida");
    }
}
