//! Styles for the tooldir CLI.
//!
//! Templates only ever name *semantic* styles (`tool-name`, `rating`,
//! `pricing-free`...). The palettes below map those names to concrete colors,
//! once for light terminals and once for dark ones, so switching themes never
//! touches a template.
//!
//! Pricing badges pick their style by name (`pricing-` plus the lower-cased
//! pricing label) so templates don't need a conditional per tier.

use console::Style;
use once_cell::sync::Lazy;
use showroom::{rgb_to_ansi256, AdaptiveTheme, ColorMode, Palette};
use tooldir::model::Pricing;

/// Style identifiers shared between templates and renderers. Most are only
/// referenced from template text.
#[allow(dead_code)]
pub mod names {
    pub const REGULAR: &str = "regular";
    pub const MUTED: &str = "muted";
    pub const FAINT: &str = "faint";
    pub const ERROR: &str = "error";
    pub const WARNING: &str = "warning";
    pub const SUCCESS: &str = "success";
    pub const INFO: &str = "info";
    pub const TITLE: &str = "title";
    pub const HEADING: &str = "heading";
    // Tool cards
    pub const TOOL_NAME: &str = "tool-name";
    pub const TOOL_ID: &str = "tool-id";
    pub const RATING: &str = "rating";
    pub const CATEGORY: &str = "category";
    pub const TAG: &str = "tag";
    pub const FEATURED: &str = "featured";
    pub const LINK: &str = "link";
    pub const TIME: &str = "time";
    pub const PRICING_FREE: &str = "pricing-free";
    pub const PRICING_FREEMIUM: &str = "pricing-freemium";
    pub const PRICING_PAID: &str = "pricing-paid";
    pub const PRICING_ENTERPRISE: &str = "pricing-enterprise";
}

/// Style name for a pricing badge.
pub fn pricing_style(pricing: Pricing) -> &'static str {
    match pricing {
        Pricing::Free => names::PRICING_FREE,
        Pricing::Freemium => names::PRICING_FREEMIUM,
        Pricing::Paid => names::PRICING_PAID,
        Pricing::Enterprise => names::PRICING_ENTERPRISE,
    }
}

pub static TOOLDIR_THEME: Lazy<AdaptiveTheme> =
    Lazy::new(|| AdaptiveTheme::new(build_light_palette(), build_dark_palette()));

pub fn palette_for(mode: ColorMode) -> Palette {
    TOOLDIR_THEME.palette(mode).clone()
}

fn build_light_palette() -> Palette {
    let regular = Style::new().black();
    let muted = Style::new().color256(rgb_to_ansi256((115, 115, 115)));
    let faint = Style::new().color256(rgb_to_ansi256((173, 173, 173)));
    let accent = Style::new().color256(rgb_to_ansi256((91, 33, 182)));
    let amber = Style::new().color256(rgb_to_ansi256((196, 140, 0)));
    let green = Style::new().color256(rgb_to_ansi256((22, 128, 61)));
    let red = Style::new().color256(rgb_to_ansi256((186, 33, 45)));
    let blue = Style::new().color256(rgb_to_ansi256((29, 78, 216)));

    Palette::new()
        .add(names::REGULAR, regular.clone())
        .add(names::MUTED, muted.clone())
        .add(names::FAINT, faint)
        .add(names::ERROR, Style::new().red().bold())
        .add(names::WARNING, Style::new().yellow().bold())
        .add(names::SUCCESS, Style::new().green())
        .add(names::INFO, muted.clone())
        .add(names::TITLE, regular.clone().bold())
        .add(names::HEADING, accent.clone().bold())
        .add(names::TOOL_NAME, regular.bold())
        .add(names::TOOL_ID, muted.clone())
        .add(names::RATING, amber.clone())
        .add(names::CATEGORY, accent)
        .add(names::TAG, muted.clone())
        .add(names::FEATURED, amber.bold())
        .add(names::LINK, blue.clone().underlined())
        .add(names::TIME, muted.italic())
        .add(names::PRICING_FREE, green)
        .add(names::PRICING_FREEMIUM, blue)
        .add(names::PRICING_PAID, red.clone())
        .add(names::PRICING_ENTERPRISE, red)
}

fn build_dark_palette() -> Palette {
    let regular = Style::new().white();
    let muted = Style::new().color256(rgb_to_ansi256((180, 180, 180)));
    let faint = Style::new().color256(rgb_to_ansi256((110, 110, 110)));
    let accent = Style::new().color256(rgb_to_ansi256((196, 181, 253)));
    let amber = Style::new().color256(rgb_to_ansi256((255, 214, 10)));
    let green = Style::new().color256(rgb_to_ansi256((134, 239, 172)));
    let red = Style::new().color256(rgb_to_ansi256((255, 138, 128)));
    let blue = Style::new().color256(rgb_to_ansi256((147, 197, 253)));

    Palette::new()
        .add(names::REGULAR, regular.clone())
        .add(names::MUTED, muted.clone())
        .add(names::FAINT, faint)
        .add(names::ERROR, Style::new().red().bold())
        .add(names::WARNING, Style::new().yellow().bold())
        .add(names::SUCCESS, Style::new().green())
        .add(names::INFO, muted.clone())
        .add(names::TITLE, regular.clone().bold())
        .add(names::HEADING, accent.clone().bold())
        .add(names::TOOL_NAME, regular.bold())
        .add(names::TOOL_ID, muted.clone())
        .add(names::RATING, amber.clone())
        .add(names::CATEGORY, accent)
        .add(names::TAG, muted.clone())
        .add(names::FEATURED, amber.bold())
        .add(names::LINK, blue.clone().underlined())
        .add(names::TIME, muted.italic())
        .add(names::PRICING_FREE, green)
        .add(names::PRICING_FREEMIUM, blue)
        .add(names::PRICING_PAID, red.clone())
        .add(names::PRICING_ENTERPRISE, red)
}
