mod species;
mod tree;

pub use species::{SpeciesInfo, SPECIES_VOCABULARY};
pub use tree::{TreeRecord, TreeStatus};
