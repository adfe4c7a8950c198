use serde::Serialize;

/// Status of a tree in the stand record.
///
/// Field sheets encode status as a numeric code: 1 = alive, 2 = dead,
/// 3 = missing (relevant in stands planted with a regular step),
/// 4 = stump. The vocabulary is informational, not enforced: codes
/// outside it are preserved verbatim rather than rejected.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum TreeStatus {
    Alive,
    Dead,
    Missing,
    Stump,
    Unrecognized(String),
}

impl TreeStatus {
    /// Lenient status parse. Accepts the numeric field codes and
    /// case-insensitive status names; anything else is kept as-is.
    pub fn from_code(code: &str) -> Self {
        match code.trim().to_lowercase().as_str() {
            "1" | "alive" => TreeStatus::Alive,
            "2" | "dead" => TreeStatus::Dead,
            "3" | "missing" => TreeStatus::Missing,
            "4" | "stump" => TreeStatus::Stump,
            _ => TreeStatus::Unrecognized(code.trim().to_string()),
        }
    }

    /// Numeric field code, where the vocabulary defines one.
    pub fn code(&self) -> Option<u8> {
        match self {
            TreeStatus::Alive => Some(1),
            TreeStatus::Dead => Some(2),
            TreeStatus::Missing => Some(3),
            TreeStatus::Stump => Some(4),
            TreeStatus::Unrecognized(_) => None,
        }
    }
}

impl Default for TreeStatus {
    fn default() -> Self {
        TreeStatus::Alive
    }
}

impl std::fmt::Display for TreeStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TreeStatus::Alive => write!(f, "Alive"),
            TreeStatus::Dead => write!(f, "Dead"),
            TreeStatus::Missing => write!(f, "Missing"),
            TreeStatus::Stump => write!(f, "Stump"),
            TreeStatus::Unrecognized(code) => write!(f, "{code}"),
        }
    }
}

/// A single validated tree measurement row.
///
/// Records are immutable: fields are set once by the loader, which is
/// the only construction path, and read through accessors. Measurements
/// the source sheet omitted or garbled arrive here already normalized
/// to their documented defaults.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TreeRecord {
    tree_id: Option<String>,
    species: String,
    dbh: f64,
    height: f64,
    status: TreeStatus,
}

impl TreeRecord {
    pub(crate) fn new(
        tree_id: Option<String>,
        species: String,
        dbh: f64,
        height: f64,
        status: TreeStatus,
    ) -> Self {
        Self {
            tree_id,
            species,
            dbh,
            height,
            status,
        }
    }

    /// Identifier as written in the source table, if present.
    pub fn tree_id(&self) -> Option<&str> {
        self.tree_id.as_deref()
    }

    /// Species code; `"Unknown"` when the source omitted it.
    pub fn species(&self) -> &str {
        &self.species
    }

    /// Diameter at breast height (1.30 m) in centimeters.
    ///
    /// `0.0` stands for both "measured as zero" and "not measured";
    /// the source format does not distinguish the two.
    pub fn dbh(&self) -> f64 {
        self.dbh
    }

    /// Total height in meters; `0.0` when unmeasured.
    pub fn height(&self) -> f64 {
        self.height
    }

    /// Tree status code.
    pub fn status(&self) -> &TreeStatus {
        &self.status
    }

    /// Check if the tree is alive.
    pub fn is_alive(&self) -> bool {
        self.status == TreeStatus::Alive
    }
}

impl std::fmt::Display for TreeRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "tree {}: {}, dbh {} cm, height {} m, {}",
            self.tree_id.as_deref().unwrap_or("?"),
            self.species,
            self.dbh,
            self.height,
            self.status
        )
    }
}
