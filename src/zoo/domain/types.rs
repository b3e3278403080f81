use std::{collections::BTreeSet, fmt};

pub type Species = String;

pub type EnclosureId = u32;

/// Space units, see [`AnimalSpec::size`].
pub type Space = u64;

/// Habitat tag. Compound tags like "savana e rio" are a single tag of their
/// own and only match themselves.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Biome(String);

impl Biome {
    pub fn new(tag: impl Into<String>) -> Self {
        Biome(tag.into())
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AnimalSpec {
    /// Space units taken up by a single individual.
    pub size: u32,
    pub compatible_biomes: BTreeSet<Biome>,
    pub needs_river: bool,
}

impl AnimalSpec {
    pub fn new<'a>(size: u32, biomes: impl IntoIterator<Item = &'a str>) -> Self {
        AnimalSpec {
            size,
            compatible_biomes: biomes.into_iter().map(Biome::new).collect(),
            needs_river: false,
        }
    }

    pub fn near_water(mut self) -> Self {
        self.needs_river = true;
        self
    }

    pub fn lives_in(&self, biome: &Biome) -> bool {
        self.compatible_biomes.contains(biome)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Occupant {
    pub species: Species,
    pub count: u32,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Enclosure {
    pub id: EnclosureId,
    pub biome: Biome,
    pub has_river: bool,
    pub capacity: u32,
    pub occupants: Vec<Occupant>,
}

impl Enclosure {
    pub fn new(id: EnclosureId, biome: &str, capacity: u32) -> Self {
        Enclosure {
            id,
            biome: Biome::new(biome),
            has_river: false,
            capacity,
            occupants: vec![],
        }
    }

    pub fn with_river(mut self) -> Self {
        self.has_river = true;
        self
    }

    pub fn with_occupant(mut self, species: &str, count: u32) -> Self {
        self.occupants.push(Occupant {
            species: species.to_string(),
            count,
        });
        self
    }

    /// Total number of individuals, regardless of species.
    pub fn headcount(&self) -> Space {
        self.occupants.iter().map(|o| o.count as Space).sum()
    }

    pub fn hosts_other_species(&self, species: &str) -> bool {
        self.occupants.iter().any(|o| o.species != species)
    }
}

/// An enclosure that can take the requested animals.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct ViableEnclosure {
    pub id: EnclosureId,
    /// Free space left once the new animals have moved in.
    pub free_space: Space,
    pub total_capacity: u32,
}

impl fmt::Display for ViableEnclosure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Enclosure {} (free: {} total: {})",
            self.id, self.free_space, self.total_capacity
        )
    }
}
