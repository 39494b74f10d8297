/// Modifier state and key name of a keyboard event, detached from the DOM.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyChord {
    pub key: String,
    pub ctrl: bool,
    pub meta: bool,
    pub shift: bool,
    pub alt: bool,
}

impl KeyChord {
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            ..Self::default()
        }
    }

    pub fn ctrl(mut self) -> Self {
        self.ctrl = true;
        self
    }

    pub fn meta(mut self) -> Self {
        self.meta = true;
        self
    }

    pub fn shift(mut self) -> Self {
        self.shift = true;
        self
    }

    pub fn alt(mut self) -> Self {
        self.alt = true;
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyIntent {
    ToggleTheme,
    Dismiss,
    Other,
}

/// Ctrl/Cmd + Shift + L toggles the theme; Escape dismisses open menus.
pub fn classify(chord: &KeyChord) -> KeyIntent {
    if chord.key == "Escape" {
        return KeyIntent::Dismiss;
    }
    // Alt is excluded: AltGr arrives as Ctrl+Alt and types characters.
    if (chord.ctrl || chord.meta)
        && chord.shift
        && !chord.alt
        && chord.key.eq_ignore_ascii_case("l")
    {
        return KeyIntent::ToggleTheme;
    }
    KeyIntent::Other
}
