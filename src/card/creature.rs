//! Creature card record and its JSON form

use serde::Serialize;
use serde_json::Value;

use super::attack::Attack;
use super::energy::EmptyCosts;
use super::error::{CardError, Result};
use super::fields::Fields;

const RECORD: &str = "creature card";

/// A single creature card
///
/// Records are value snapshots: the editor builds a fresh one every time the
/// form is read or a file is loaded. No field is range-checked here, that is
/// the form's job.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CreatureCard {
    pub name: String,
    pub description: String,
    pub health: i64,
    #[serde(rename = "type")]
    pub creature_type: String,
    pub creature_class: String,
    pub is_titan: bool,
    pub image_path: String,
    pub attacks: Vec<Attack>,
}

impl CreatureCard {
    /// New non-titan card with no image and no attacks
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        health: i64,
        creature_type: impl Into<String>,
        creature_class: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            health,
            creature_type: creature_type.into(),
            creature_class: creature_class.into(),
            is_titan: false,
            image_path: String::new(),
            attacks: Vec::new(),
        }
    }

    pub fn with_titan(mut self, is_titan: bool) -> Self {
        self.is_titan = is_titan;
        self
    }

    pub fn with_image_path(mut self, image_path: impl Into<String>) -> Self {
        self.image_path = image_path.into();
        self
    }

    pub fn with_attacks(mut self, attacks: Vec<Attack>) -> Self {
        self.attacks = attacks;
        self
    }

    /// Card name as a single file name component, used for default file and
    /// folder names
    ///
    /// Spaces, path separators and control characters become `_`. A name made
    /// only of dots (or no name at all) becomes underscores.
    pub fn file_stem(&self) -> String {
        let stem: String = self
            .name
            .chars()
            .map(|c| match c {
                ' ' | '/' | '\\' | ':' => '_',
                c if c.is_control() => '_',
                c => c,
            })
            .collect();

        if stem.chars().all(|c| c == '.') {
            "_".repeat(stem.len().max(1))
        } else {
            stem
        }
    }

    pub fn to_value(&self) -> serde_json::Result<Value> {
        serde_json::to_value(self)
    }

    /// Pretty JSON with 2-space indentation
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    pub fn from_value(value: &Value) -> Result<Self> {
        Self::from_value_with(value, EmptyCosts::default())
    }

    pub fn from_value_with(value: &Value, empty_costs: EmptyCosts) -> Result<Self> {
        let fields = Fields::new(RECORD, value)?;

        let name = fields.string("name")?;
        let description = fields.string("description")?;
        let health = fields.int("health")?;
        let creature_type = fields.string("type")?;
        let creature_class = fields.string("creature_class")?;

        let attacks = fields
            .array_or_empty("attacks")?
            .iter()
            .enumerate()
            .map(|(index, attack)| {
                Attack::from_value_with(attack, empty_costs).map_err(|err| {
                    CardError::InvalidAttack {
                        index,
                        source: Box::new(err),
                    }
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            name,
            description,
            health,
            creature_type,
            creature_class,
            is_titan: fields.bool_or_default("is_titan")?,
            image_path: fields.string_or_default("image_path")?,
            attacks,
        })
    }

    pub fn from_json(text: &str) -> Result<Self> {
        let value: Value =
            serde_json::from_str(text).map_err(|err| CardError::Malformed(err.to_string()))?;
        Self::from_value(&value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::EnergyCosts;
    use serde_json::json;

    fn drakon() -> CreatureCard {
        let flame = Attack::new("Flame", 20)
            .with_description("Burns")
            .with_energy_costs([("Fire", 2)].into_iter().collect());
        CreatureCard::new("Drakon", "", 50, "Fire", "Air Creature")
            .with_titan(true)
            .with_attacks(vec![flame])
    }

    #[test]
    fn test_json_roundtrip() {
        let card = drakon()
            .with_image_path("art/drakon.png")
            .with_attacks(vec![
                Attack::new("Flame", 20),
                Attack::new("Drain", -5).with_description("Steals life"),
            ]);
        let json = card.to_json().unwrap();
        assert_eq!(CreatureCard::from_json(&json).unwrap(), card);
    }

    #[test]
    fn test_attack_order_preserved() {
        let card = CreatureCard::new("Hydra", "Many heads", 120, "Water", "Sea Monster")
            .with_attacks(vec![
                Attack::new("A", 1),
                Attack::new("B", 2),
                Attack::new("C", 3),
            ]);
        let loaded = CreatureCard::from_json(&card.to_json().unwrap()).unwrap();
        let names: Vec<&str> = loaded.attacks.iter().map(|a| a.name.as_str()).collect();
        assert_eq!(names, vec!["A", "B", "C"]);
    }

    #[test]
    fn test_end_to_end_example() {
        let input = r#"{"name":"Drakon","description":"","health":50,"type":"Fire","creature_class":"Air Creature","is_titan":true,"image_path":"","attacks":[{"name":"Flame","damage":20,"description":"Burns","energy_costs":{"Fire":2}}]}"#;
        let card = CreatureCard::from_json(input).unwrap();
        assert_eq!(card, drakon());

        let original: Value = serde_json::from_str(input).unwrap();
        let emitted: Value = serde_json::from_str(&card.to_json().unwrap()).unwrap();
        assert_eq!(emitted, original);
    }

    #[test]
    fn test_missing_health_named() {
        let value = json!({
            "name": "Drakon",
            "description": "",
            "type": "Fire",
            "creature_class": "Air Creature",
        });
        let err = CreatureCard::from_value(&value).unwrap_err();
        assert_eq!(
            err,
            CardError::MissingField { record: "creature card", field: "health" }
        );
        assert!(err.to_string().contains("health"));
    }

    #[test]
    fn test_optional_fields_default() {
        let value = json!({
            "name": "Pixie",
            "description": "Small",
            "health": 0,
            "type": "Power",
            "creature_class": "Fairy",
        });
        let card = CreatureCard::from_value(&value).unwrap();
        assert_eq!(card.health, 0);
        assert!(!card.is_titan);
        assert_eq!(card.image_path, "");
        assert!(card.attacks.is_empty());
    }

    #[test]
    fn test_camel_case_keys_accepted() {
        let value = json!({
            "name": "Pixie",
            "description": "",
            "health": 10,
            "type": "Power",
            "creatureClass": "Fairy",
            "isTitan": true,
            "imagePath": "pixie.png",
            "attacks": [{ "name": "Dust", "damage": 1, "energyCosts": { "Power": 1 } }],
        });
        let card = CreatureCard::from_value(&value).unwrap();
        assert_eq!(card.creature_class, "Fairy");
        assert!(card.is_titan);
        assert_eq!(card.image_path, "pixie.png");
        assert_eq!(card.attacks[0].energy_costs().get("Power"), Some(1));
    }

    #[test]
    fn test_bad_attack_reports_index() {
        let value = json!({
            "name": "Drakon",
            "description": "",
            "health": 50,
            "type": "Fire",
            "creature_class": "Air Creature",
            "attacks": [{ "name": "Flame", "damage": 20 }, { "name": "Broken" }],
        });
        let err = CreatureCard::from_value(&value).unwrap_err();
        match &err {
            CardError::InvalidAttack { index, .. } => assert_eq!(*index, 1),
            other => panic!("unexpected error: {other:?}"),
        }
        assert_eq!(err.field(), Some("damage"));
        assert!(err.to_string().starts_with("attack #2"));
    }

    #[test]
    fn test_invalid_json_is_malformed() {
        assert!(matches!(
            CreatureCard::from_json("{ not json"),
            Err(CardError::Malformed(_))
        ));
        assert!(matches!(
            CreatureCard::from_json("[]"),
            Err(CardError::Malformed(_))
        ));
    }

    #[test]
    fn test_to_json_key_order_and_indent() {
        let json = drakon().to_json().unwrap();
        let keys = [
            "\"name\"",
            "\"description\"",
            "\"health\"",
            "\"type\"",
            "\"creature_class\"",
            "\"is_titan\"",
            "\"image_path\"",
            "\"attacks\"",
        ];
        let positions: Vec<usize> = keys.iter().map(|k| json.find(k).unwrap()).collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
        assert!(json.contains("\n  \"name\": \"Drakon\""));
    }

    #[test]
    fn test_to_value_matches_to_json() {
        let card = drakon();
        let from_text: Value = serde_json::from_str(&card.to_json().unwrap()).unwrap();
        assert_eq!(card.to_value().unwrap(), from_text);
    }

    #[test]
    fn test_loaded_partial_costs_survive_save() {
        let input = json!({
            "name": "Drakon",
            "description": "",
            "health": 50,
            "type": "Fire",
            "creature_class": "Air Creature",
            "attacks": [{ "name": "Flame", "damage": 20, "energy_costs": { "Fire": 3 } }],
        });
        let card = CreatureCard::from_value(&input).unwrap();
        let expected: EnergyCosts = [("Fire", 3)].into_iter().collect();
        assert_eq!(card.attacks[0].energy_costs(), &expected);
        assert_eq!(card.to_value().unwrap()["attacks"][0]["energy_costs"], json!({ "Fire": 3 }));
    }

    #[test]
    fn test_file_stem_replaces_spaces() {
        let card = CreatureCard::new("Big Red Dragon", "", 1, "Fire", "Air Creature");
        assert_eq!(card.file_stem(), "Big_Red_Dragon");
    }

    #[test]
    fn test_file_stem_is_single_component() {
        let stem = |name: &str| CreatureCard::new(name, "", 1, "Fire", "Fairy").file_stem();
        assert_eq!(stem("x/../.."), "x_.._..");
        assert_eq!(stem("a\\b"), "a_b");
        assert_eq!(stem(".."), "__");
        assert_eq!(stem("."), "_");
        assert_eq!(stem(""), "_");
        assert_eq!(stem("Dr. Fang"), "Dr._Fang");
    }
}
