#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PaletteKind {
    /// Alias of [`PaletteKind::Hot`].
    #[default]
    Classic,
    Hot,
    Cool,
    Viridis,
    Plasma,
    Rainbow,
    Grayscale,
}

impl PaletteKind {
    pub const ALL: &'static [Self] = &[
        Self::Classic,
        Self::Hot,
        Self::Cool,
        Self::Viridis,
        Self::Plasma,
        Self::Rainbow,
        Self::Grayscale,
    ];

    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Classic => "Classic",
            Self::Hot => "Hot",
            Self::Cool => "Cool",
            Self::Viridis => "Viridis",
            Self::Plasma => "Plasma",
            Self::Rainbow => "Rainbow",
            Self::Grayscale => "Grayscale",
        }
    }

    /// Exact lookup by display name, ignoring case.
    #[must_use]
    pub fn lookup(name: &str) -> Option<Self> {
        let name = name.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|kind| kind.display_name().eq_ignore_ascii_case(name))
    }

    /// Like [`PaletteKind::lookup`], but unknown names fall back to
    /// [`PaletteKind::Classic`] with a warning.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        Self::lookup(name).unwrap_or_else(|| {
            log::warn!("unknown palette {:?}, falling back to {}", name, Self::Classic);
            Self::Classic
        })
    }
}

impl std::fmt::Display for PaletteKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str((*self).display_name())
    }
}
