//! # Showroom - Styled Terminal Templates
//!
//! Showroom renders terminal output from minijinja templates, with styling kept
//! out of the template text. Templates refer to *named* styles; a [`Palette`]
//! maps those names to `console::Style` values, and an [`AdaptiveTheme`] holds
//! one palette per [`ColorMode`] so the same template reads well on light and
//! dark terminals.
//!
//! ```rust
//! use showroom::{Palette, Renderer};
//! use console::Style;
//! use serde::Serialize;
//!
//! #[derive(Serialize)]
//! struct Card { name: String, rating: f64 }
//!
//! let palette = Palette::new()
//!     .add("name", Style::new().bold())
//!     .add("rating", Style::new().yellow());
//!
//! let mut renderer = Renderer::with_color(palette, false);
//! renderer
//!     .add_template("card", r#"{{ name | style("name") }} {{ rating | style("rating") }}"#)
//!     .unwrap();
//!
//! let out = renderer.render("card", &Card { name: "Beta".into(), rating: 4.8 }).unwrap();
//! assert_eq!(out, "Beta 4.8");
//! ```
//!
//! ## Filters
//!
//! - `style(name)`: applies a palette style. Unknown names are prefixed with a
//!   marker (`(!?)` by default) so typos show up in output instead of vanishing.
//! - `fit(width)`: truncates to a display width (unicode aware), appending `…`.
//!
//! ## Color detection
//!
//! [`Renderer::new`] enables ANSI codes only when stdout supports them. Use
//! [`Renderer::with_color`] to force the choice (e.g. for a `--no-color` flag).
//! [`ColorMode::detect`] asks the OS whether it is in light or dark mode.

use console::{Style, Term};
use minijinja::{Environment, Error, Value};
use serde::Serialize;
use std::collections::HashMap;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Default prefix shown when a style name is not found.
pub const DEFAULT_MISSING_STYLE_MARKER: &str = "(!?)";

/// Ellipsis appended by the `fit` filter.
pub const ELLIPSIS: char = '…';

/// Light or dark display mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorMode {
    Light,
    Dark,
}

impl ColorMode {
    /// Asks the OS for the current appearance. Falls back to `Light` when the
    /// platform has no opinion.
    pub fn detect() -> Self {
        match dark_light::detect() {
            dark_light::Mode::Dark => ColorMode::Dark,
            _ => ColorMode::Light,
        }
    }

    /// The opposite mode.
    pub fn toggled(self) -> Self {
        match self {
            ColorMode::Light => ColorMode::Dark,
            ColorMode::Dark => ColorMode::Light,
        }
    }
}

/// A set of named styles.
#[derive(Clone)]
pub struct Palette {
    styles: HashMap<String, Style>,
    missing_marker: String,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            styles: HashMap::new(),
            missing_marker: DEFAULT_MISSING_STYLE_MARKER.to_string(),
        }
    }
}

impl Palette {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the marker prepended to text styled with an unknown name.
    /// An empty marker silences it.
    pub fn missing_marker(mut self, marker: &str) -> Self {
        self.missing_marker = marker.to_string();
        self
    }

    /// Adds (or replaces) a named style.
    pub fn add(mut self, name: &str, style: Style) -> Self {
        self.styles.insert(name.to_string(), style);
        self
    }

    /// Styles `text` with ANSI codes, whether or not stdout is a terminal.
    /// The color decision belongs to the [`Renderer`].
    pub fn apply(&self, name: &str, text: &str) -> String {
        match self.styles.get(name) {
            Some(style) => style.clone().force_styling(true).apply_to(text).to_string(),
            None => self.mark_missing(text),
        }
    }

    /// Same lookup as [`Palette::apply`] but never emits ANSI codes.
    pub fn apply_plain(&self, name: &str, text: &str) -> String {
        if self.styles.contains_key(name) {
            text.to_string()
        } else {
            self.mark_missing(text)
        }
    }

    fn mark_missing(&self, text: &str) -> String {
        if self.missing_marker.is_empty() {
            text.to_string()
        } else {
            format!("{} {}", self.missing_marker, text)
        }
    }

    pub fn has(&self, name: &str) -> bool {
        self.styles.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.styles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.styles.is_empty()
    }
}

/// A light and a dark palette sharing the same style names.
#[derive(Clone)]
pub struct AdaptiveTheme {
    light: Palette,
    dark: Palette,
}

impl AdaptiveTheme {
    pub fn new(light: Palette, dark: Palette) -> Self {
        Self { light, dark }
    }

    pub fn palette(&self, mode: ColorMode) -> &Palette {
        match mode {
            ColorMode::Light => &self.light,
            ColorMode::Dark => &self.dark,
        }
    }
}

/// Whether stdout can display ANSI colors.
pub fn stdout_supports_color() -> bool {
    Term::stdout().features().colors_supported()
}

/// Holds compiled templates bound to one palette.
pub struct Renderer {
    env: Environment<'static>,
}

impl Renderer {
    /// Creates a renderer that styles output only if stdout supports color.
    pub fn new(palette: Palette) -> Self {
        Self::with_color(palette, stdout_supports_color())
    }

    pub fn with_color(palette: Palette, use_color: bool) -> Self {
        let mut env = Environment::new();
        env.set_trim_blocks(true);
        env.set_lstrip_blocks(true);
        register_filters(&mut env, palette, use_color);
        Self { env }
    }

    /// Compiles and registers a named template.
    pub fn add_template(&mut self, name: &str, source: &str) -> Result<(), Error> {
        self.env
            .add_template_owned(name.to_string(), source.to_string())
    }

    pub fn render<T: Serialize>(&self, name: &str, data: &T) -> Result<String, Error> {
        self.env.get_template(name)?.render(data)
    }
}

/// One-shot render of an inline template.
pub fn render_inline<T: Serialize>(
    template: &str,
    data: &T,
    palette: Palette,
    use_color: bool,
) -> Result<String, Error> {
    let mut renderer = Renderer::with_color(palette, use_color);
    renderer.add_template("_inline", template)?;
    renderer.render("_inline", data)
}

fn register_filters(env: &mut Environment<'static>, palette: Palette, use_color: bool) {
    env.add_filter("style", move |value: Value, name: String| -> String {
        let text = value.to_string();
        if use_color {
            palette.apply(&name, &text)
        } else {
            palette.apply_plain(&name, &text)
        }
    });
    env.add_filter("fit", |value: Value, width: usize| -> String {
        fit_to_width(&value.to_string(), width)
    });
}

/// Truncates `text` so its display width is at most `max_width`, ending with
/// an ellipsis when anything was cut.
pub fn fit_to_width(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }
    let budget = max_width.saturating_sub(1);
    let mut out = String::new();
    let mut used = 0;
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > budget {
            break;
        }
        out.push(c);
        used += w;
    }
    if max_width > 0 {
        out.push(ELLIPSIS);
    }
    out
}

/// Converts an RGB triplet to the nearest ANSI 256-color palette index.
pub fn rgb_to_ansi256((r, g, b): (u8, u8, u8)) -> u8 {
    if r == g && g == b {
        if r < 8 {
            16
        } else if r > 248 {
            231
        } else {
            232 + ((r as u16 - 8) * 24 / 247) as u8
        }
    } else {
        let red = (r as u16 * 5 / 255) as u8;
        let green = (g as u16 * 5 / 255) as u8;
        let blue = (b as u16 * 5 / 255) as u8;
        16 + 36 * red + 6 * green + blue
    }
}
