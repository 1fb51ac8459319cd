//! The three lab domains.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Lab {
    Chemistry,
    Physics,
    Biology,
}

impl Lab {
    pub const ALL: [Lab; 3] = [Lab::Chemistry, Lab::Physics, Lab::Biology];

    pub fn name(self) -> &'static str {
        match self {
            Lab::Chemistry => "chemistry",
            Lab::Physics => "physics",
            Lab::Biology => "biology",
        }
    }

    /// Key the lab's experiment history is stored under.
    pub fn storage_key(self) -> &'static str {
        match self {
            Lab::Chemistry => "chemistry_experiments",
            Lab::Physics => "physics_experiments",
            Lab::Biology => "biology_experiments",
        }
    }
}

impl fmt::Display for Lab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(thiserror::Error, Debug, PartialEq, Eq)]
#[error("Unknown lab: {0} (expected chemistry, physics or biology)")]
pub struct UnknownLab(pub String);

impl FromStr for Lab {
    type Err = UnknownLab;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        Lab::ALL
            .into_iter()
            .find(|lab| lab.name() == wanted)
            .ok_or_else(|| UnknownLab(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_and_keys() {
        assert_eq!("Physics".parse::<Lab>(), Ok(Lab::Physics));
        assert_eq!(" biology ".parse::<Lab>(), Ok(Lab::Biology));
        assert!("geology".parse::<Lab>().is_err());
        assert_eq!(Lab::Chemistry.storage_key(), "chemistry_experiments");
        assert_eq!(Lab::Physics.to_string(), "physics");
    }
}
