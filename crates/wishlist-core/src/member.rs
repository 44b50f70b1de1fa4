//! Family Members
//!
//! The fixed roster of people who own wish lists.

/// A family member who can own wishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Member {
    Lena,
    Lea,
    Zoe,
    Holger,
}

impl Member {
    /// Roster in display order. The first entry is the default owner of a new wish.
    pub const ALL: [Member; 4] = [Member::Lena, Member::Lea, Member::Zoe, Member::Holger];

    /// Stored owner value (always lowercase)
    pub fn value(&self) -> &'static str {
        match self {
            Member::Lena => "lena",
            Member::Lea => "lea",
            Member::Zoe => "zoe",
            Member::Holger => "holger",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Member::Lena => "Lena",
            Member::Lea => "Lea",
            Member::Zoe => "Zoe",
            Member::Holger => "Holger",
        }
    }

    /// Case-insensitive lookup by stored value
    pub fn from_value(value: &str) -> Option<Self> {
        let value = value.to_lowercase();
        Self::ALL.into_iter().find(|member| member.value() == value)
    }
}

/// Display label for an owner value.
///
/// Known members get their label, unknown owners are shown as stored and an
/// empty owner becomes "Unbekannt".
pub fn owner_label(owner: &str) -> String {
    if let Some(member) = Member::from_value(owner) {
        return member.label().to_string();
    }
    if owner.is_empty() {
        "Unbekannt".to_string()
    } else {
        owner.to_string()
    }
}
