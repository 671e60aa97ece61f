use stylist::Style;

/// Brand accent presets. Each card or hero picks one of these instead of
/// naming colours directly.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Accent {
    Azure,
    Violet,
    Emerald,
    Amber,
    Rose,
}

impl Accent {
    #[cfg(test)]
    pub const ALL: [Accent; 5] = [Accent::Azure, Accent::Violet, Accent::Emerald, Accent::Amber, Accent::Rose];

    pub const fn gradient(self) -> (&'static str, &'static str) {
        match self {
            Accent::Azure => ("#1E90FF", "#7EB2FF"),
            Accent::Violet => ("#7C3AED", "#C084FC"),
            Accent::Emerald => ("#059669", "#34D399"),
            Accent::Amber => ("#D97706", "#FBBF24"),
            Accent::Rose => ("#E11D48", "#FB7185"),
        }
    }

    pub fn css(self) -> String {
        let (from, to) = self.gradient();
        format!(
            r#"
            --accent-from: {from};
            --accent-to: {to};
            .accent-text {{
                color: {to};
            }}
            .accent-fill {{
                background: linear-gradient(135deg, {from}, {to});
            }}
            .accent-border {{
                border-color: {from};
            }}
            "#
        )
    }

    /// Scoped class carrying this preset's custom properties and helpers.
    pub fn class_name(self) -> String {
        match Style::new(self.css()) {
            Ok(style) => style.get_class_name().to_string(),
            Err(e) => {
                log::warn!("Failed to build {:?} accent style: {}", self, e);
                String::new()
            }
        }
    }
}

/// Footprint of a card inside a bento grid.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TileSpan {
    #[default]
    Regular,
    Wide,
    Tall,
    Hero,
}

impl TileSpan {
    pub const fn class(self) -> &'static str {
        match self {
            TileSpan::Regular => "tile",
            TileSpan::Wide => "tile tile-wide",
            TileSpan::Tall => "tile tile-tall",
            TileSpan::Hero => "tile tile-wide tile-tall",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_accent_has_hex_colours() {
        for accent in Accent::ALL {
            let (from, to) = accent.gradient();
            for colour in [from, to] {
                assert_eq!(colour.len(), 7, "{accent:?}");
                assert!(colour.starts_with('#'));
                assert!(colour[1..].chars().all(|c| c.is_ascii_hexdigit()));
            }
        }
    }

    #[test]
    fn preset_css_uses_its_own_colours() {
        let css = Accent::Emerald.css();
        assert!(css.contains("--accent-from: #059669"));
        assert!(css.contains("color: #34D399"));
        assert!(!css.contains("#1E90FF"));
    }

    #[test]
    fn hero_tiles_span_both_axes() {
        assert_eq!(TileSpan::Hero.class(), "tile tile-wide tile-tall");
        assert_eq!(TileSpan::default().class(), "tile");
    }
}
