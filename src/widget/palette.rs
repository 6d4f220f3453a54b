//! Color palette
//!
//! Color tokens follow the `family.shade` form used by plan producers
//! (`"teal.6"`, `"red"`), resolved to concrete CSS colors at render time.

/// Semantic hue assigned to statuses and trends
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Hue {
    Danger,
    Success,
    Warning,
    Neutral,
}

impl Hue {
    /// Color token for this hue
    pub fn token(&self) -> &'static str {
        match self {
            Hue::Danger => "red.6",
            Hue::Success => "teal.6",
            Hue::Warning => "yellow.6",
            Hue::Neutral => "blue.6",
        }
    }
}

/// Hue for a status-like segment name, case-insensitive.
///
/// Failure names map to danger, working/ok names to success, attended or
/// warning names to warning, everything else (including no name) to neutral.
pub fn status_hue(name: Option<&str>) -> Hue {
    let Some(name) = name else {
        return Hue::Neutral;
    };

    match name.trim().to_uppercase().as_str() {
        "FALLA" | "ERROR" => Hue::Danger,
        "FUNCIONANDO" | "OK" | "ACTIVO" => Hue::Success,
        "ATENDIDOS" | "WARNING" => Hue::Warning,
        _ => Hue::Neutral,
    }
}

/// Default colors cycled through for chart series without an explicit color
pub const SERIES_COLORS: [&str; 6] = [
    "indigo.6",
    "teal.6",
    "orange.6",
    "grape.6",
    "cyan.6",
    "red.6",
];

/// Color token for the series at `idx`
pub fn series_color(idx: usize) -> &'static str {
    SERIES_COLORS[idx % SERIES_COLORS.len()]
}

/// Shade-6 value of each known color family
const FAMILIES: [(&str, &str); 14] = [
    ("dark", "#25262b"),
    ("gray", "#868e96"),
    ("red", "#fa5252"),
    ("pink", "#e64980"),
    ("grape", "#be4bdb"),
    ("violet", "#7950f2"),
    ("indigo", "#4c6ef5"),
    ("blue", "#228be6"),
    ("cyan", "#15aabf"),
    ("teal", "#12b886"),
    ("green", "#40c057"),
    ("lime", "#82c91e"),
    ("yellow", "#fab005"),
    ("orange", "#fd7e14"),
];

/// Resolve a color token to a CSS color.
///
/// Known families resolve to their palette value whatever the shade; raw CSS
/// colors (`#hex`, `rgb(..)`, named colors) pass through. Anything containing
/// characters outside a plain color expression falls back to neutral.
pub fn resolve_color(token: &str) -> String {
    let token = token.trim();
    let neutral = || family_hex("blue").unwrap_or("#228be6").to_string();

    if token.is_empty() || !is_plain_color(token) {
        return neutral();
    }

    let family = token.split('.').next().unwrap_or(token).to_lowercase();
    match family_hex(&family) {
        Some(hex) => hex.to_string(),
        None => token.to_string(),
    }
}

fn family_hex(family: &str) -> Option<&'static str> {
    FAMILIES
        .iter()
        .find(|(name, _)| *name == family)
        .map(|(_, hex)| *hex)
}

fn is_plain_color(token: &str) -> bool {
    token
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || matches!(c, '#' | '.' | ',' | '(' | ')' | '%' | ' '))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_hue_keywords() {
        assert_eq!(status_hue(Some("FALLA")), Hue::Danger);
        assert_eq!(status_hue(Some("error")), Hue::Danger);
        assert_eq!(status_hue(Some("Funcionando")), Hue::Success);
        assert_eq!(status_hue(Some("ok")), Hue::Success);
        assert_eq!(status_hue(Some("ACTIVO")), Hue::Success);
        assert_eq!(status_hue(Some("atendidos")), Hue::Warning);
        assert_eq!(status_hue(Some("Warning")), Hue::Warning);
    }

    #[test]
    fn test_status_hue_fallback() {
        assert_eq!(status_hue(Some("PENDIENTE")), Hue::Neutral);
        assert_eq!(status_hue(Some("")), Hue::Neutral);
        assert_eq!(status_hue(None), Hue::Neutral);
    }

    #[test]
    fn test_status_hue_is_case_folded() {
        for name in ["falla", "FALLA", "FaLlA"] {
            assert_eq!(status_hue(Some(name)), status_hue(Some("FALLA")));
        }
    }

    #[test]
    fn test_resolve_color() {
        assert_eq!(resolve_color("red.6"), "#fa5252");
        assert_eq!(resolve_color("teal"), "#12b886");
        assert_eq!(resolve_color("Indigo.3"), "#4c6ef5");
        assert_eq!(resolve_color("#123abc"), "#123abc");
        assert_eq!(resolve_color("rgb(1, 2, 3)"), "rgb(1, 2, 3)");
        assert_eq!(resolve_color("purple"), "purple");
    }

    #[test]
    fn test_resolve_color_rejects_injection() {
        assert_eq!(resolve_color("red; background: url(x)"), "#228be6");
        assert_eq!(resolve_color("\"><script>"), "#228be6");
        assert_eq!(resolve_color(""), "#228be6");
    }

    #[test]
    fn test_series_color_cycles() {
        assert_eq!(series_color(0), SERIES_COLORS[0]);
        assert_eq!(series_color(SERIES_COLORS.len()), SERIES_COLORS[0]);
        assert_eq!(series_color(7), SERIES_COLORS[1]);
    }
}
