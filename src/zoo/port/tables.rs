use crate::zoo::domain::types;

/// Read-only reference data an evaluation runs against.
///
/// Implementations must not change between the start and end of a single
/// evaluation.
pub trait ReferenceTables {
    fn animal(&self, species: &str) -> Option<&types::AnimalSpec>;

    fn enclosures(&self) -> &[types::Enclosure];
}

impl<T: ReferenceTables + ?Sized> ReferenceTables for &T {
    fn animal(&self, species: &str) -> Option<&types::AnimalSpec> {
        (**self).animal(species)
    }

    fn enclosures(&self) -> &[types::Enclosure] {
        (**self).enclosures()
    }
}
