use serde::{Deserialize, Serialize};

/// Three-valued answer to "does this source hold the permission node?".
///
/// `Undefined` means nobody set the node either way; callers decide whether
/// that counts as allowed (`!= False`) or denied (`== True`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tristate {
    True,
    False,
    #[default]
    Undefined,
}

impl Tristate {
    pub fn as_bool(self) -> bool {
        matches!(self, Tristate::True)
    }
}

impl From<bool> for Tristate {
    fn from(value: bool) -> Self {
        if value { Tristate::True } else { Tristate::False }
    }
}

impl From<Option<bool>> for Tristate {
    fn from(value: Option<bool>) -> Self {
        value.map(Tristate::from).unwrap_or(Tristate::Undefined)
    }
}
