//! Edit buffers backing the editor window
//!
//! Every widget edits a `String` here; `CardForm::to_card` is the only place
//! user input is validated and turned into a `CreatureCard`.

use thiserror::Error;

use crate::card::{Attack, CreatureCard, EnergyCosts, EnergyType};
use crate::constants::card::DEFAULT_HEALTH;

/// User input rejected before a card is built
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("{0} cannot be empty")]
    EmptyField(&'static str),

    #[error("{0} must be a valid integer")]
    NotAnInteger(&'static str),

    #[error("Attack #{}: Damage and Energy Costs must be valid integers ({field})", .index + 1)]
    AttackNotAnInteger { index: usize, field: &'static str },
}

/// Edit buffers for one attack row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttackForm {
    pub name: String,
    pub damage: String,
    pub description: String,
    /// One buffer per energy type, in `EnergyType::ALL` order
    pub energy_costs: [String; 5],
}

impl Default for AttackForm {
    fn default() -> Self {
        Self::from_attack(&Attack::new("", 0))
    }
}

impl AttackForm {
    pub fn from_attack(attack: &Attack) -> Self {
        Self {
            name: attack.name.clone(),
            damage: attack.damage.to_string(),
            description: attack.description.clone(),
            energy_costs: EnergyType::ALL
                .map(|energy| attack.energy_costs().cost(energy).unwrap_or(0).to_string()),
        }
    }

    pub fn energy_mut(&mut self, energy: EnergyType) -> &mut String {
        let idx = EnergyType::ALL
            .iter()
            .position(|e| *e == energy)
            .unwrap_or_default();
        &mut self.energy_costs[idx]
    }

    /// Rows with a blank name are dropped from the card
    pub fn is_blank(&self) -> bool {
        self.name.trim().is_empty()
    }

    fn to_attack(&self, index: usize) -> Result<Attack, ValidationError> {
        let not_int = |field| ValidationError::AttackNotAnInteger { index, field };

        let damage = parse_int(&self.damage).ok_or(not_int("Damage"))?;

        let mut energy_costs = EnergyCosts::new();
        for (energy, buffer) in EnergyType::ALL.iter().zip(&self.energy_costs) {
            let cost = parse_int(buffer).ok_or(not_int(energy.as_str()))?;
            energy_costs.set(energy.as_str(), cost);
        }

        Ok(Attack::new(self.name.clone(), damage)
            .with_description(self.description.clone())
            .with_energy_costs(energy_costs))
    }
}

/// Edit buffers for a whole card
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardForm {
    pub name: String,
    pub description: String,
    pub health: String,
    pub creature_type: String,
    pub creature_class: String,
    pub is_titan: bool,
    pub image_path: String,
    pub attacks: Vec<AttackForm>,
}

impl Default for CardForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            description: String::new(),
            health: DEFAULT_HEALTH.to_string(),
            creature_type: String::new(),
            creature_class: String::new(),
            is_titan: false,
            image_path: String::new(),
            attacks: Vec::new(),
        }
    }
}

impl CardForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clear every field for a new card
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn from_card(card: &CreatureCard) -> Self {
        Self {
            name: card.name.clone(),
            description: card.description.clone(),
            health: card.health.to_string(),
            creature_type: card.creature_type.clone(),
            creature_class: card.creature_class.clone(),
            is_titan: card.is_titan,
            image_path: card.image_path.clone(),
            attacks: card.attacks.iter().map(AttackForm::from_attack).collect(),
        }
    }

    pub fn add_attack(&mut self) {
        self.attacks.push(AttackForm::default());
    }

    pub fn remove_attack(&mut self, index: usize) -> Option<AttackForm> {
        (index < self.attacks.len()).then(|| self.attacks.remove(index))
    }

    /// Validate the buffers and build a card
    pub fn to_card(&self) -> Result<CreatureCard, ValidationError> {
        let name = required(&self.name, "Name")?;
        let description = self.description.trim();
        let health = parse_int(&self.health).ok_or(ValidationError::NotAnInteger("Health"))?;
        let creature_type = required(&self.creature_type, "Type")?;
        let creature_class = required(&self.creature_class, "Class")?;

        let attacks = self
            .attacks
            .iter()
            .enumerate()
            .filter(|(_, row)| !row.is_blank())
            .map(|(index, row)| row.to_attack(index))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(CreatureCard::new(name, description, health, creature_type, creature_class)
            .with_titan(self.is_titan)
            .with_image_path(self.image_path.clone())
            .with_attacks(attacks))
    }
}

fn required<'a>(buffer: &'a str, field: &'static str) -> Result<&'a str, ValidationError> {
    let trimmed = buffer.trim();
    if trimmed.is_empty() {
        Err(ValidationError::EmptyField(field))
    } else {
        Ok(trimmed)
    }
}

fn parse_int(buffer: &str) -> Option<i64> {
    buffer.trim().parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_form() -> CardForm {
        CardForm {
            name: "  Drakon ".to_string(),
            description: " Ancient wyrm \n".to_string(),
            health: "50".to_string(),
            creature_type: "Fire".to_string(),
            creature_class: "Air Creature".to_string(),
            is_titan: true,
            image_path: "art/drakon.png".to_string(),
            attacks: Vec::new(),
        }
    }

    #[test]
    fn test_new_form_defaults() {
        let form = CardForm::new();
        assert_eq!(form.health, "100");
        assert!(form.name.is_empty());
        assert!(!form.is_titan);
        assert!(form.attacks.is_empty());
    }

    #[test]
    fn test_to_card_trims_text() {
        let card = filled_form().to_card().unwrap();
        assert_eq!(card.name, "Drakon");
        assert_eq!(card.description, "Ancient wyrm");
        assert_eq!(card.health, 50);
        assert!(card.is_titan);
        assert_eq!(card.image_path, "art/drakon.png");
    }

    #[test]
    fn test_empty_name_rejected() {
        let mut form = filled_form();
        form.name = "   ".to_string();
        assert_eq!(form.to_card(), Err(ValidationError::EmptyField("Name")));
    }

    #[test]
    fn test_empty_type_and_class_rejected() {
        let mut form = filled_form();
        form.creature_type.clear();
        assert_eq!(form.to_card(), Err(ValidationError::EmptyField("Type")));

        let mut form = filled_form();
        form.creature_class = " ".to_string();
        assert_eq!(form.to_card(), Err(ValidationError::EmptyField("Class")));
    }

    #[test]
    fn test_non_integer_health_rejected() {
        let mut form = filled_form();
        form.health = "lots".to_string();
        assert_eq!(form.to_card(), Err(ValidationError::NotAnInteger("Health")));
        assert_eq!(
            ValidationError::NotAnInteger("Health").to_string(),
            "Health must be a valid integer"
        );
    }

    #[test]
    fn test_zero_and_negative_health_accepted() {
        let mut form = filled_form();
        form.health = "0".to_string();
        assert_eq!(form.to_card().unwrap().health, 0);
        form.health = "-20".to_string();
        assert_eq!(form.to_card().unwrap().health, -20);
    }

    #[test]
    fn test_blank_attack_rows_skipped() {
        let mut form = filled_form();
        form.add_attack();
        form.add_attack();
        form.attacks[1].name = "Flame".to_string();
        form.attacks[1].damage = "20".to_string();

        let card = form.to_card().unwrap();
        assert_eq!(card.attacks.len(), 1);
        assert_eq!(card.attacks[0].name, "Flame");
    }

    #[test]
    fn test_attack_energy_buffers_fill_all_types() {
        let mut form = filled_form();
        form.add_attack();
        form.attacks[0].name = "Flame".to_string();
        *form.attacks[0].energy_mut(EnergyType::Fire) = "2".to_string();

        let card = form.to_card().unwrap();
        let costs = card.attacks[0].energy_costs();
        assert_eq!(costs.len(), 5);
        assert_eq!(costs.cost(EnergyType::Fire), Some(2));
        assert_eq!(costs.cost(EnergyType::Water), Some(0));
    }

    #[test]
    fn test_bad_attack_damage_rejected() {
        let mut form = filled_form();
        form.add_attack();
        form.attacks[0].name = "Flame".to_string();
        form.attacks[0].damage = "a lot".to_string();
        assert_eq!(
            form.to_card(),
            Err(ValidationError::AttackNotAnInteger { index: 0, field: "Damage" })
        );
    }

    #[test]
    fn test_bad_energy_cost_rejected() {
        let mut form = filled_form();
        form.add_attack();
        form.attacks[0].name = "Flame".to_string();
        *form.attacks[0].energy_mut(EnergyType::Shadow) = "x".to_string();
        assert_eq!(
            form.to_card(),
            Err(ValidationError::AttackNotAnInteger { index: 0, field: "Shadow" })
        );
    }

    #[test]
    fn test_from_card_roundtrip() {
        let card = filled_form().to_card().unwrap().with_attacks(vec![
            Attack::new("Flame", 20).with_description("Burns"),
            Attack::new("Drain", -5),
        ]);
        let form = CardForm::from_card(&card);
        assert_eq!(form.attacks.len(), 2);
        assert_eq!(form.attacks[1].damage, "-5");
        assert_eq!(form.to_card().unwrap(), card);
    }

    #[test]
    fn test_from_card_missing_costs_show_zero() {
        let costs: EnergyCosts = [("Fire", 3)].into_iter().collect();
        let attack = Attack::new("Flame", 20).with_energy_costs(costs);
        let form = AttackForm::from_attack(&attack);
        assert_eq!(form.energy_costs, ["0", "3", "0", "0", "0"].map(String::from));
    }

    #[test]
    fn test_remove_attack() {
        let mut form = CardForm::new();
        form.add_attack();
        form.add_attack();
        form.attacks[0].name = "first".to_string();

        let removed = form.remove_attack(0).unwrap();
        assert_eq!(removed.name, "first");
        assert_eq!(form.attacks.len(), 1);
        assert!(form.remove_attack(5).is_none());
    }

    #[test]
    fn test_reset_clears_everything() {
        let mut form = filled_form();
        form.add_attack();
        form.reset();
        assert_eq!(form, CardForm::new());
    }
}
