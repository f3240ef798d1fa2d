//! Entity kinds and the kind-to-array-field mapping.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::DomainError;

/// The kinds of sub-entity a world document can hold.
///
/// Kinds double as editor sub-view keys (`characters`, `locations`, ...)
/// and map onto the world document field that stores their array.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum EntityKind {
    Character,
    Location,
    Organization,
    Family,
    Creature,
    Race,
}

impl EntityKind {
    /// Name of the world document field holding this kind's array.
    ///
    /// Simple pluralization with `family -> families` special-cased, exactly
    /// as existing documents were written.
    pub fn field_name(&self) -> &'static str {
        match self {
            EntityKind::Character => "characters",
            EntityKind::Location => "locations",
            EntityKind::Organization => "organizations",
            EntityKind::Family => "families",
            EntityKind::Creature => "creatures",
            EntityKind::Race => "races",
        }
    }

    /// Singular label for UI copy ("Save Character", "delete this location").
    pub fn label(&self) -> &'static str {
        match self {
            EntityKind::Character => "Character",
            EntityKind::Location => "Location",
            EntityKind::Organization => "Organization",
            EntityKind::Family => "Family",
            EntityKind::Creature => "Creature",
            EntityKind::Race => "Race",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.field_name())
    }
}

impl FromStr for EntityKind {
    type Err = DomainError;

    /// Parse an editor sub-view key. Accepts both the plural field name and
    /// the singular kind name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "character" | "characters" => Ok(EntityKind::Character),
            "location" | "locations" => Ok(EntityKind::Location),
            "organization" | "organizations" => Ok(EntityKind::Organization),
            "family" | "families" => Ok(EntityKind::Family),
            "creature" | "creatures" => Ok(EntityKind::Creature),
            "race" | "races" => Ok(EntityKind::Race),
            other => Err(DomainError::UnknownKind(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_name_pluralizes_known_kinds() {
        assert_eq!(EntityKind::Character.field_name(), "characters");
        assert_eq!(EntityKind::Location.field_name(), "locations");
        assert_eq!(EntityKind::Organization.field_name(), "organizations");
        assert_eq!(EntityKind::Race.field_name(), "races");
        assert_eq!(EntityKind::Creature.field_name(), "creatures");
    }

    #[test]
    fn family_field_name_is_families() {
        assert_eq!(EntityKind::Family.field_name(), "families");
    }

    #[test]
    fn parses_singular_and_plural_keys() {
        assert_eq!(
            "characters".parse::<EntityKind>().expect("plural"),
            EntityKind::Character
        );
        assert_eq!(
            "family".parse::<EntityKind>().expect("singular"),
            EntityKind::Family
        );
    }

    #[test]
    fn unknown_key_is_rejected() {
        assert!("dashboard".parse::<EntityKind>().is_err());
    }
}
