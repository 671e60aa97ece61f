use yew::prelude::*;

/// Line icons used across the site, all drawn on a 24x24 grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Icon {
    Bolt,
    Chip,
    Cloud,
    Code,
    Chart,
    Shield,
    Server,
    Users,
    Target,
    Layers,
    Globe,
    Wallet,
    Gear,
    Rocket,
    Chat,
    Clock,
}

impl Icon {
    #[cfg(test)]
    pub const ALL: [Icon; 16] = [
        Icon::Bolt,
        Icon::Chip,
        Icon::Cloud,
        Icon::Code,
        Icon::Chart,
        Icon::Shield,
        Icon::Server,
        Icon::Users,
        Icon::Target,
        Icon::Layers,
        Icon::Globe,
        Icon::Wallet,
        Icon::Gear,
        Icon::Rocket,
        Icon::Chat,
        Icon::Clock,
    ];

    pub const fn path(self) -> &'static str {
        match self {
            Icon::Bolt => "M13 2L3 14h9l-1 8 10-12h-9l1-8z",
            Icon::Chip => "M9 3v2M15 3v2M9 19v2M15 19v2M3 9h2M3 15h2M19 9h2M19 15h2M7 5h10a2 2 0 012 2v10a2 2 0 01-2 2H7a2 2 0 01-2-2V7a2 2 0 012-2zM9 9h6v6H9z",
            Icon::Cloud => "M18 10h-1.26A8 8 0 109 20h9a5 5 0 000-10z",
            Icon::Code => "M16 18l6-6-6-6M8 6l-6 6 6 6",
            Icon::Chart => "M3 3v18h18M7 15l4-4 3 3 5-6",
            Icon::Shield => "M12 22s8-4 8-10V5l-8-3-8 3v7c0 6 8 10 8 10z",
            Icon::Server => "M4 3h16a1 1 0 011 1v6a1 1 0 01-1 1H4a1 1 0 01-1-1V4a1 1 0 011-1zM4 13h16a1 1 0 011 1v6a1 1 0 01-1 1H4a1 1 0 01-1-1v-6a1 1 0 011-1zM7 7h.01M7 17h.01",
            Icon::Users => "M17 21v-2a4 4 0 00-4-4H5a4 4 0 00-4 4v2M9 11a4 4 0 100-8 4 4 0 000 8zM23 21v-2a4 4 0 00-3-3.87M16 3.13a4 4 0 010 7.75",
            Icon::Target => "M12 22a10 10 0 100-20 10 10 0 000 20zM12 18a6 6 0 100-12 6 6 0 000 12zM12 14a2 2 0 100-4 2 2 0 000 4z",
            Icon::Layers => "M12 2L2 7l10 5 10-5-10-5zM2 17l10 5 10-5M2 12l10 5 10-5",
            Icon::Globe => "M12 22a10 10 0 100-20 10 10 0 000 20zM2 12h20M12 2a15.3 15.3 0 014 10 15.3 15.3 0 01-4 10 15.3 15.3 0 01-4-10 15.3 15.3 0 014-10z",
            Icon::Wallet => "M21 12V7H5a2 2 0 010-4h14v4M3 5v14a2 2 0 002 2h16v-5M18 12a2 2 0 000 4h4v-4h-4z",
            Icon::Gear => "M12 15a3 3 0 100-6 3 3 0 000 6zM19.4 15a1.65 1.65 0 00.33 1.82l.06.06a2 2 0 11-2.83 2.83l-.06-.06a1.65 1.65 0 00-1.82-.33 1.65 1.65 0 00-1 1.51V21a2 2 0 11-4 0v-.09A1.65 1.65 0 009 19.4a1.65 1.65 0 00-1.82.33l-.06.06a2 2 0 11-2.83-2.83l.06-.06A1.65 1.65 0 004.6 15a1.65 1.65 0 00-1.51-1H3a2 2 0 110-4h.09A1.65 1.65 0 004.6 9a1.65 1.65 0 00-.33-1.82l-.06-.06a2 2 0 112.83-2.83l.06.06A1.65 1.65 0 009 4.6a1.65 1.65 0 001-1.51V3a2 2 0 114 0v.09a1.65 1.65 0 001 1.51 1.65 1.65 0 001.82-.33l.06-.06a2 2 0 112.83 2.83l-.06.06A1.65 1.65 0 0019.4 9a1.65 1.65 0 001.51 1H21a2 2 0 110 4h-.09a1.65 1.65 0 00-1.51 1z",
            Icon::Rocket => "M4.5 16.5c-1.5 1.26-2 5-2 5s3.74-.5 5-2c.71-.84.7-2.13-.09-2.91a2.18 2.18 0 00-2.91-.09zM12 15l-3-3a22 22 0 012-3.95A12.88 12.88 0 0122 2c0 2.72-.78 7.5-6 11a22.35 22.35 0 01-4 2z",
            Icon::Chat => "M21 15a2 2 0 01-2 2H7l-4 4V5a2 2 0 012-2h14a2 2 0 012 2z",
            Icon::Clock => "M12 22a10 10 0 100-20 10 10 0 000 20zM12 6v6l4 2",
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct IconProps {
    pub icon: Icon,
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(IconGlyph)]
pub fn icon_glyph(props: &IconProps) -> Html {
    html! {
        <svg class={classes!("icon", props.class.clone())} viewBox="0 0 24 24" fill="none"
            stroke="currentColor" stroke-width="1.8" stroke-linecap="round" stroke-linejoin="round"
            aria-hidden="true">
            <path d={props.icon.path()} />
        </svg>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const COMMANDS: &str = "MmLlHhVvCcSsQqTtAaZz";

    #[test]
    fn paths_are_well_formed() {
        for icon in Icon::ALL {
            let path = icon.path();
            assert!(path.starts_with('M'), "{icon:?} must start with a move-to");
            assert!(!path.contains("  "), "{icon:?} has doubled whitespace");
            assert!(!path.ends_with(' '), "{icon:?} has trailing whitespace");
            assert!(
                path.chars().all(|c| COMMANDS.contains(c) || c.is_ascii_digit() || " .,-".contains(c)),
                "{icon:?} has stray characters"
            );
        }
    }
}
