//! Region codes and display labels.

use serde::{Deserialize, Serialize};

/// A geographic scope for metric projection.
///
/// `World` is the identity scope: no regional coefficient is ever applied to
/// it. Codes outside the built-in set are carried verbatim in `Other` so the
/// projection formula can degrade to its fallback coefficient instead of
/// rejecting the input.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Region {
    #[default]
    World,
    Usa,
    Chn,
    Ind,
    Eu,
    Bra,
    Other(String),
}

impl Region {
    /// The built-in regions, in display order.
    pub fn builtin() -> [Region; 6] {
        [
            Region::World,
            Region::Usa,
            Region::Chn,
            Region::Ind,
            Region::Eu,
            Region::Bra,
        ]
    }

    /// Parse a region code. Unrecognized codes are preserved as `Other`.
    pub fn from_code(code: &str) -> Self {
        match code.trim().to_ascii_uppercase().as_str() {
            "WORLD" => Region::World,
            "USA" => Region::Usa,
            "CHN" => Region::Chn,
            "IND" => Region::Ind,
            "EU" => Region::Eu,
            "BRA" => Region::Bra,
            other => Region::Other(other.to_string()),
        }
    }

    /// The canonical code string (e.g. `"WORLD"`, `"USA"`).
    pub fn code(&self) -> &str {
        match self {
            Region::World => "WORLD",
            Region::Usa => "USA",
            Region::Chn => "CHN",
            Region::Ind => "IND",
            Region::Eu => "EU",
            Region::Bra => "BRA",
            Region::Other(code) => code,
        }
    }

    /// Human-readable label. Unknown codes fall back to the code itself.
    pub fn label(&self) -> &str {
        match self {
            Region::World => "World",
            Region::Usa => "United States",
            Region::Chn => "China",
            Region::Ind => "India",
            Region::Eu => "European Union",
            Region::Bra => "Brazil",
            Region::Other(code) => code,
        }
    }

    pub fn is_world(&self) -> bool {
        matches!(self, Region::World)
    }
}

impl std::fmt::Display for Region {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

impl From<String> for Region {
    fn from(code: String) -> Self {
        Region::from_code(&code)
    }
}

impl From<Region> for String {
    fn from(region: Region) -> Self {
        region.code().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_code_roundtrip() {
        for region in Region::builtin() {
            assert_eq!(Region::from_code(region.code()), region);
        }
    }

    #[test]
    fn test_unknown_code_preserved() {
        let region = Region::from_code("atlantis");
        assert_eq!(region, Region::Other("ATLANTIS".to_string()));
        assert_eq!(region.code(), "ATLANTIS");
        assert_eq!(region.label(), "ATLANTIS");
    }

    #[test]
    fn test_serde_as_code_string() {
        let json = serde_json::to_string(&Region::Eu).unwrap();
        assert_eq!(json, "\"EU\"");

        let region: Region = serde_json::from_str("\"usa\"").unwrap();
        assert_eq!(region, Region::Usa);
    }
}
