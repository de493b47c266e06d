use serde::{Deserialize, Serialize};

use super::WmoCode;

/// A named class of weather codes with an integer severity rank.
///
/// Groups in one configuration must be pairwise disjoint; this is checked
/// when the configuration is validated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeverityGroup {
    pub codes: Vec<WmoCode>,
    pub severity: i32,
    #[serde(default)]
    pub description: String,
}

impl SeverityGroup {
    pub fn new(severity: i32, description: impl Into<String>, codes: &[WmoCode]) -> Self {
        Self {
            codes: codes.to_vec(),
            severity,
            description: description.into(),
        }
    }

    pub fn contains(&self, code: WmoCode) -> bool {
        self.codes.contains(&code)
    }

    /// The group's codes in ascending order, deduplicated.
    pub fn sorted_codes(&self) -> Vec<WmoCode> {
        let mut codes = self.codes.clone();
        codes.sort_unstable();
        codes.dedup();
        codes
    }
}
