//! Creature card data model
//!
//! `CreatureCard` and `Attack` are plain records that convert to and from
//! the on-disk JSON form. Reading stored data is explicit, key by key, so a
//! load failure names the field at fault.

mod attack;
mod creature;
mod energy;
mod error;
mod fields;

pub use attack::Attack;
pub use creature::CreatureCard;
pub use energy::{EmptyCosts, EnergyCosts, EnergyType};
pub use error::CardError;
