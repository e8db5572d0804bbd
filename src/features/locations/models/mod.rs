mod hierarchy;
mod selection;

pub use hierarchy::{District, LocationHierarchy, Taluka};
pub use selection::{LocationLevel, LocationSelection, SelectionAction};
