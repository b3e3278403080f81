use std::collections::{BTreeMap, HashSet};

use thiserror::Error;

use crate::zoo::{
    domain::types::{AnimalSpec, Enclosure, EnclosureId, Species},
    port::tables::ReferenceTables,
};

/// Reference tables held in memory, never modified after construction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StaticTables {
    animals: BTreeMap<Species, AnimalSpec>,
    enclosures: Vec<Enclosure>,
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum TableError {
    #[error("species {0} is defined twice")]
    DuplicateSpecies(Species),

    #[error("species {0} has zero size")]
    ZeroSize(Species),

    #[error("enclosure ids start at 1")]
    ZeroEnclosureId,

    #[error("enclosure {0} is defined twice")]
    DuplicateEnclosure(EnclosureId),

    #[error("enclosure {0} has zero capacity")]
    ZeroCapacity(EnclosureId),

    #[error("enclosure {enclosure} lists {species} more than once")]
    DuplicateOccupant {
        enclosure: EnclosureId,
        species: Species,
    },
}

impl StaticTables {
    pub fn new(
        animals: impl IntoIterator<Item = (Species, AnimalSpec)>,
        enclosures: Vec<Enclosure>,
    ) -> Result<Self, TableError> {
        let mut animal_map = BTreeMap::new();
        for (species, spec) in animals {
            if spec.size == 0 {
                return Err(TableError::ZeroSize(species));
            }
            if animal_map.contains_key(&species) {
                return Err(TableError::DuplicateSpecies(species));
            }
            animal_map.insert(species, spec);
        }

        let mut ids = HashSet::new();
        for enclosure in &enclosures {
            if enclosure.id == 0 {
                return Err(TableError::ZeroEnclosureId);
            }
            if !ids.insert(enclosure.id) {
                return Err(TableError::DuplicateEnclosure(enclosure.id));
            }
            if enclosure.capacity == 0 {
                return Err(TableError::ZeroCapacity(enclosure.id));
            }

            let mut seen = HashSet::new();
            for occupant in &enclosure.occupants {
                if !seen.insert(&occupant.species) {
                    return Err(TableError::DuplicateOccupant {
                        enclosure: enclosure.id,
                        species: occupant.species.clone(),
                    });
                }
            }
        }

        Ok(Self {
            animals: animal_map,
            enclosures,
        })
    }

    /// The zoo as it stands today.
    pub fn zoo_default() -> Result<Self, TableError> {
        let animals = [
            ("LEAO", AnimalSpec::new(3, ["savana"])),
            ("LEOPARDO", AnimalSpec::new(2, ["savana"])),
            ("CROCODILO", AnimalSpec::new(3, ["rio"])),
            ("MACACO", AnimalSpec::new(1, ["savana", "floresta"])),
            ("GAZELA", AnimalSpec::new(2, ["savana"])),
            ("HIPOPOTAMO", AnimalSpec::new(4, ["savana", "rio"]).near_water()),
        ]
        .into_iter()
        .map(|(species, spec)| (species.to_string(), spec));

        let enclosures = vec![
            Enclosure::new(1, "savana", 10).with_occupant("MACACO", 3),
            Enclosure::new(2, "floresta", 5),
            Enclosure::new(3, "savana e rio", 7)
                .with_river()
                .with_occupant("GAZELA", 1),
            Enclosure::new(4, "rio", 8),
            Enclosure::new(5, "savana", 9).with_occupant("LEAO", 1),
        ];

        Self::new(animals, enclosures)
    }
}

impl ReferenceTables for StaticTables {
    fn animal(&self, species: &str) -> Option<&AnimalSpec> {
        self.animals.get(species)
    }

    fn enclosures(&self) -> &[Enclosure] {
        &self.enclosures
    }
}
