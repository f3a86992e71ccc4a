/// Platform class, decided once at startup and never re-checked.
///
/// Touch-first targets skip the sidebar scroll decoration entirely; everything
/// else counts as desktop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    Desktop,
    TouchFirst,
}

impl Platform {
    pub fn current() -> Self {
        Self::classify(std::env::consts::OS)
    }

    pub fn is_desktop(self) -> bool {
        matches!(self, Platform::Desktop)
    }

    fn classify(os: &str) -> Self {
        match os {
            "android" | "ios" => Platform::TouchFirst,
            _ => Platform::Desktop,
        }
    }
}
