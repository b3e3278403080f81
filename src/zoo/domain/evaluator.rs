//! Decides which enclosures can take in a group of animals.
//!
//! Pure with respect to the injected reference tables: nothing is written back, so the same
//! request against the same tables always gives the same answer.

use log::{debug, info};
use serde_json::Value;
use thiserror::Error;

use crate::zoo::port::tables::ReferenceTables;

use super::{
    quantity::Quantity,
    types::{AnimalSpec, Enclosure, Space, ViableEnclosure},
};

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum EvaluationError {
    #[error("invalid animal")]
    InvalidSpecies,

    #[error("invalid quantity")]
    InvalidQuantity,

    #[error("no viable enclosure")]
    NoViableEnclosure,
}

/// Outcome for a single enclosure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Assessment {
    BiomeMismatch,
    MissingRiver,
    InsufficientSpace { free: i128, needed: i128 },
    Viable(ViableEnclosure),
}

pub struct Evaluator<Tables: ReferenceTables> {
    tables: Tables,
}

impl<Tables: ReferenceTables> Evaluator<Tables> {
    pub fn new(tables: Tables) -> Self {
        Self { tables }
    }

    pub fn evaluate(
        &self,
        species: &str,
        quantity: i64,
    ) -> Result<Vec<ViableEnclosure>, EvaluationError> {
        self.evaluate_with(species, || Quantity::new(quantity))
    }

    /// Like [`Evaluator::evaluate`], for quantities that arrive as text.
    pub fn evaluate_text(
        &self,
        species: &str,
        quantity: &str,
    ) -> Result<Vec<ViableEnclosure>, EvaluationError> {
        self.evaluate_with(species, || Quantity::from_text(quantity))
    }

    /// Like [`Evaluator::evaluate`], for quantities that arrive as JSON values.
    pub fn evaluate_json(
        &self,
        species: &str,
        quantity: &Value,
    ) -> Result<Vec<ViableEnclosure>, EvaluationError> {
        self.evaluate_with(species, || Quantity::from_json(quantity))
    }

    // The species is checked before the quantity is even looked at.
    fn evaluate_with(
        &self,
        species: &str,
        quantity: impl FnOnce() -> Option<Quantity>,
    ) -> Result<Vec<ViableEnclosure>, EvaluationError> {
        let _span = tracing::debug_span!("evaluate", species).entered();

        let spec = self
            .tables
            .animal(species)
            .ok_or(EvaluationError::InvalidSpecies)?;
        let quantity = quantity().ok_or(EvaluationError::InvalidQuantity)?;

        let mut viable = self
            .tables
            .enclosures()
            .iter()
            .filter_map(|enclosure| {
                let assessment = assess(species, spec, enclosure, quantity);
                debug!("enclosure {} for {quantity} {species}: {assessment:?}", enclosure.id);
                match assessment {
                    Assessment::Viable(v) => Some(v),
                    _ => None,
                }
            })
            .collect::<Vec<_>>();

        if viable.is_empty() {
            info!("no viable enclosure for {quantity} {species}");
            return Err(EvaluationError::NoViableEnclosure);
        }

        viable.sort_by_key(|v| v.id);
        info!("{} viable enclosures for {quantity} {species}", viable.len());

        Ok(viable)
    }
}

/// Checks one enclosure against the biome, river and space rules.
///
/// Existing occupants are charged at the size of the *requested* species, whatever they
/// actually are. An enclosure shared with another species needs one extra `size` of room,
/// but that overhead is not taken off the reported free space.
pub fn assess(
    species: &str,
    spec: &AnimalSpec,
    enclosure: &Enclosure,
    quantity: Quantity,
) -> Assessment {
    if !spec.lives_in(&enclosure.biome) {
        return Assessment::BiomeMismatch;
    }

    if spec.needs_river && !enclosure.has_river {
        return Assessment::MissingRiver;
    }

    // wide enough for any u64 quantity or headcount times a u32 size
    let size = spec.size as i128;
    let occupied = enclosure.headcount() as i128 * size;
    let free = enclosure.capacity as i128 - occupied;

    let overhead = if enclosure.hosts_other_species(species) {
        size
    } else {
        0
    };
    let placed = quantity.get() as i128 * size;
    let needed = placed + overhead;

    if free < needed {
        return Assessment::InsufficientSpace { free, needed };
    }

    // free never exceeds the capacity, so what is left always fits
    let Ok(free_space) = Space::try_from(free - placed) else {
        return Assessment::InsufficientSpace { free, needed };
    };

    Assessment::Viable(ViableEnclosure {
        id: enclosure.id,
        free_space,
        total_capacity: enclosure.capacity,
    })
}
