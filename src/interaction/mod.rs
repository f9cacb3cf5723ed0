use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PointerButton {
    Primary,
    /// Middle button / wheel click.
    Auxiliary,
    Secondary,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Modifiers {
    pub ctrl: bool,
    pub meta: bool,
    pub alt: bool,
    pub shift: bool,
}

impl Modifiers {
    pub const NONE: Self = Self {
        ctrl: false,
        meta: false,
        alt: false,
        shift: false,
    };

    #[must_use]
    pub const fn ctrl() -> Self {
        Self {
            ctrl: true,
            ..Self::NONE
        }
    }

    #[must_use]
    pub const fn meta() -> Self {
        Self {
            meta: true,
            ..Self::NONE
        }
    }

    /// Ctrl on most platforms, Cmd on macOS.
    #[must_use]
    pub fn has_mod_key(self) -> bool {
        self.ctrl || self.meta
    }
}

/// Pointer gesture that activated a chart element or overlay label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Activation {
    pub button: PointerButton,
    pub modifiers: Modifiers,
}

impl Activation {
    #[must_use]
    pub const fn primary() -> Self {
        Self {
            button: PointerButton::Primary,
            modifiers: Modifiers::NONE,
        }
    }

    #[must_use]
    pub const fn auxiliary() -> Self {
        Self {
            button: PointerButton::Auxiliary,
            modifiers: Modifiers::NONE,
        }
    }

    #[must_use]
    pub const fn secondary() -> Self {
        Self {
            button: PointerButton::Secondary,
            modifiers: Modifiers::NONE,
        }
    }

    #[must_use]
    pub const fn with_modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers = modifiers;
        self
    }

    /// Whether the target should open in a new or adjacent view.
    #[must_use]
    pub fn opens_new_context(self) -> bool {
        self.button == PointerButton::Auxiliary || self.modifiers.has_mod_key()
    }
}
