/// Collection holding member documents
pub const MEMBERS_COLLECTION: &str = "members";

/// Collection holding collector documents
pub const COLLECTORS_COLLECTION: &str = "collectors";

/// Collection holding program documents
pub const PROGRAMS_COLLECTION: &str = "programs";

/// Synthetic dropdown value that switches a location level to manual entry
pub const OTHER_OPTION: &str = "Other";

/// Default state for new members
pub const DEFAULT_STATE: &str = "Maharashtra";

/// Marathi name of the default state
pub const DEFAULT_STATE_MARATHI: &str = "महाराष्ट्र";

/// Abbreviation used in the register export when the state has no Marathi value
pub const DEFAULT_STATE_ABBREVIATION: &str = "महा.";

/// Placeholder for empty cells in exports
pub const EMPTY_CELL: &str = "-";
