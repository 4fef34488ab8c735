//! Attack record

use serde::Serialize;
use serde_json::Value;

use super::energy::{EmptyCosts, EnergyCosts};
use super::error::Result;
use super::fields::Fields;

const RECORD: &str = "attack";

/// An attack a creature can perform
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Attack {
    pub name: String,
    pub damage: i64,
    pub description: String,
    energy_costs: EnergyCosts,
}

impl Attack {
    /// New attack with an empty description and every energy cost at zero
    pub fn new(name: impl Into<String>, damage: i64) -> Self {
        Self {
            name: name.into(),
            damage,
            description: String::new(),
            energy_costs: EnergyCosts::zeroed(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Replace the energy costs; an empty map is completed to all types at zero
    pub fn with_energy_costs(mut self, energy_costs: EnergyCosts) -> Self {
        self.energy_costs = energy_costs.complete_if_empty();
        self
    }

    /// Cost per energy type
    ///
    /// Never empty unless the attack was read with `EmptyCosts::Preserve`.
    pub fn energy_costs(&self) -> &EnergyCosts {
        &self.energy_costs
    }

    pub fn to_value(&self) -> serde_json::Result<Value> {
        serde_json::to_value(self)
    }

    /// Read a stored attack, completing an explicit empty cost map
    pub fn from_value(value: &Value) -> Result<Self> {
        Self::from_value_with(value, EmptyCosts::default())
    }

    /// Read a stored attack with an explicit policy for `energy_costs: {}`
    ///
    /// An absent `energy_costs` key always yields every type at zero; a
    /// non-empty map is kept exactly as stored.
    pub fn from_value_with(value: &Value, empty_costs: EmptyCosts) -> Result<Self> {
        let fields = Fields::new(RECORD, value)?;

        let energy_costs = match fields.get("energy_costs") {
            None => EnergyCosts::zeroed(),
            Some(costs) => read_costs(&fields, costs)?.apply_policy(empty_costs),
        };

        Ok(Self {
            name: fields.string("name")?,
            damage: fields.int("damage")?,
            description: fields.string_or_default("description")?,
            energy_costs,
        })
    }
}

fn read_costs(fields: &Fields<'_>, value: &Value) -> Result<EnergyCosts> {
    const EXPECTED: &str = "an object of integer costs";

    let map = value
        .as_object()
        .ok_or_else(|| fields.invalid("energy_costs", EXPECTED))?;

    map.iter()
        .map(|(energy, cost)| {
            cost.as_i64()
                .map(|cost| (energy.as_str(), cost))
                .ok_or_else(|| fields.invalid("energy_costs", EXPECTED))
        })
        .collect()
}
