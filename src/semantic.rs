//! Semantic roles and the 29-color palette
//!
//! Role assignment classifies the ranked image colors into 13 UI roles plus
//! the 16 standard terminal slots. Rendering consumes the resulting
//! [`SemanticPalette`]; it is frozen once assignment completes.

use std::fmt;

use crate::color::Color;

/// Number of UI roles
pub const UI_ROLE_COUNT: usize = 13;
/// Number of ANSI terminal slots
pub const ANSI_ROLE_COUNT: usize = 16;
/// Total palette size
pub const ROLE_COUNT: usize = UI_ROLE_COUNT + ANSI_ROLE_COUNT;

/// A named slot in the semantic palette
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    BgPrimary,
    BgSecondary,
    BgTertiary,
    TextPrimary,
    TextSecondary,
    TextTertiary,
    AccentPrimary,
    AccentSecondary,
    ErrorColor,
    WarningColor,
    SuccessColor,
    BorderActive,
    BorderInactive,
    /// One of the 16 terminal slots, index in 0..=15
    Ansi(u8),
}

impl Role {
    /// The 13 UI roles in canonical emission order
    pub const UI_ROLES: [Role; UI_ROLE_COUNT] = [
        Role::BgPrimary,
        Role::BgSecondary,
        Role::BgTertiary,
        Role::TextPrimary,
        Role::TextSecondary,
        Role::TextTertiary,
        Role::AccentPrimary,
        Role::AccentSecondary,
        Role::ErrorColor,
        Role::WarningColor,
        Role::SuccessColor,
        Role::BorderActive,
        Role::BorderInactive,
    ];

    /// All 29 roles in canonical order: UI first, then ansi-0..ansi-15
    #[must_use]
    pub fn all() -> Vec<Role> {
        let mut roles = Vec::with_capacity(ROLE_COUNT);
        roles.extend(Self::UI_ROLES);
        roles.extend((0..ANSI_ROLE_COUNT as u8).map(Role::Ansi));
        roles
    }

    /// The config-facing name of this role, e.g. `bg-primary` or `ansi-4`
    #[must_use]
    pub fn name(&self) -> String {
        match self {
            Role::BgPrimary => "bg-primary".into(),
            Role::BgSecondary => "bg-secondary".into(),
            Role::BgTertiary => "bg-tertiary".into(),
            Role::TextPrimary => "text-primary".into(),
            Role::TextSecondary => "text-secondary".into(),
            Role::TextTertiary => "text-tertiary".into(),
            Role::AccentPrimary => "accent-primary".into(),
            Role::AccentSecondary => "accent-secondary".into(),
            Role::ErrorColor => "error-color".into(),
            Role::WarningColor => "warning-color".into(),
            Role::SuccessColor => "success-color".into(),
            Role::BorderActive => "border-active".into(),
            Role::BorderInactive => "border-inactive".into(),
            Role::Ansi(n) => format!("ansi-{n}"),
        }
    }

    /// Resolve a config-facing role name
    #[must_use]
    pub fn from_name(name: &str) -> Option<Role> {
        let role = match name {
            "bg-primary" => Role::BgPrimary,
            "bg-secondary" => Role::BgSecondary,
            "bg-tertiary" => Role::BgTertiary,
            "text-primary" => Role::TextPrimary,
            "text-secondary" => Role::TextSecondary,
            "text-tertiary" => Role::TextTertiary,
            "accent-primary" => Role::AccentPrimary,
            "accent-secondary" => Role::AccentSecondary,
            "error-color" => Role::ErrorColor,
            "warning-color" => Role::WarningColor,
            "success-color" => Role::SuccessColor,
            "border-active" => Role::BorderActive,
            "border-inactive" => Role::BorderInactive,
            other => {
                let index = other.strip_prefix("ansi-")?.parse::<u8>().ok()?;
                if index >= ANSI_ROLE_COUNT as u8 {
                    return None;
                }
                Role::Ansi(index)
            }
        };
        Some(role)
    }

    /// Dense index into the palette storage
    fn index(&self) -> usize {
        match self {
            Role::BgPrimary => 0,
            Role::BgSecondary => 1,
            Role::BgTertiary => 2,
            Role::TextPrimary => 3,
            Role::TextSecondary => 4,
            Role::TextTertiary => 5,
            Role::AccentPrimary => 6,
            Role::AccentSecondary => 7,
            Role::ErrorColor => 8,
            Role::WarningColor => 9,
            Role::SuccessColor => 10,
            Role::BorderActive => 11,
            Role::BorderInactive => 12,
            Role::Ansi(n) => UI_ROLE_COUNT + *n as usize,
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name())
    }
}

/// The complete 29-color palette produced by role assignment
///
/// Built incrementally by the assigner; [`is_complete`](Self::is_complete)
/// must hold before rendering starts.
#[derive(Debug, Clone)]
pub struct SemanticPalette {
    slots: [Option<Color>; ROLE_COUNT],
}

impl SemanticPalette {
    #[must_use]
    pub fn empty() -> Self {
        Self {
            slots: [None; ROLE_COUNT],
        }
    }

    pub fn set(&mut self, role: Role, color: Color) {
        self.slots[role.index()] = Some(color);
    }

    #[must_use]
    pub fn get(&self, role: Role) -> Option<Color> {
        self.slots[role.index()]
    }

    /// Look up by config-facing name
    #[must_use]
    pub fn get_by_name(&self, name: &str) -> Option<Color> {
        Role::from_name(name).and_then(|role| self.get(role))
    }

    /// All 29 slots populated
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.slots.iter().all(Option::is_some)
    }

    /// Roles still missing a color
    #[must_use]
    pub fn missing(&self) -> Vec<Role> {
        Role::all()
            .into_iter()
            .filter(|role| self.get(*role).is_none())
            .collect()
    }
}
