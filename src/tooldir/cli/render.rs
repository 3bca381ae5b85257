//! # Rendering Module
//!
//! Turns command results into terminal text through the `showroom` templates
//! in `templates.rs`, styled with the palette for the active color mode.
//!
//! Each `render_*` function builds a small serializable view struct first.
//! Anything that needs real computation (rating precision, relative dates,
//! column padding) is done here so the templates stay declarative.

use super::styles::{names, palette_for, pricing_style};
use super::templates::{
    CONFIG_TEMPLATE, DETAIL_TEMPLATE, FACETS_TEMPLATE, LIST_TEMPLATE, MESSAGES_TEMPLATE,
    NOT_FOUND_TEMPLATE,
};
use chrono::NaiveDate;
use serde::Serialize;
use showroom::{render_inline, ColorMode, Palette};
use tooldir::commands::browse::{result_count_label, scope_label};
use tooldir::commands::{CmdMessage, MessageLevel};
use tooldir::config::{DirectoryConfig, KEYS};
use tooldir::model::{FilterCriteria, Tool};
use tooldir::query::FacetCounts;
use tooldir::route::Route;
use unicode_width::UnicodeWidthStr;

/// Width the card description is cut to.
pub const DESCRIPTION_WIDTH: usize = 76;
/// Tags shown on a card; the detail view shows all of them.
pub const CARD_TAGS: usize = 3;

#[derive(Serialize)]
struct CardData {
    id: String,
    name: String,
    rating: String,
    pricing: String,
    pricing_style: &'static str,
    category: String,
    featured: bool,
    description: String,
    tags: Vec<String>,
    path: String,
    launched: String,
}

#[derive(Serialize)]
struct ListData {
    count_label: String,
    scope_label: String,
    description_width: usize,
    cards: Vec<CardData>,
}

#[derive(Serialize)]
struct DetailData {
    home_path: String,
    name: String,
    category: String,
    pricing: String,
    pricing_style: &'static str,
    featured: bool,
    short_description: String,
    full_description: String,
    website_host: String,
    website_url: String,
    launch_date: String,
    launched: String,
    rating: String,
    reviews: String,
    tags: Vec<String>,
}

#[derive(Serialize)]
struct NotFoundData {
    id: String,
    home_path: String,
}

#[derive(Serialize)]
struct FacetRow {
    label: String,
    count: usize,
}

#[derive(Serialize)]
struct FacetsData {
    categories: Vec<FacetRow>,
    pricing: Vec<FacetRow>,
}

#[derive(Serialize)]
struct MessageData {
    content: String,
    style: &'static str,
}

#[derive(Serialize)]
struct MessagesData {
    messages: Vec<MessageData>,
}

#[derive(Serialize)]
struct ConfigEntry {
    key: String,
    value: String,
}

#[derive(Serialize)]
struct ConfigData {
    entries: Vec<ConfigEntry>,
}

/// Renders with one palette and one color decision for the whole run.
pub struct Presenter {
    palette: Palette,
    use_color: bool,
    today: NaiveDate,
}

impl Presenter {
    pub fn new(mode: ColorMode, use_color: bool) -> Self {
        Self {
            palette: palette_for(mode),
            use_color,
            today: chrono::Local::now().date_naive(),
        }
    }

    /// Pins "today" for relative launch dates.
    #[cfg(test)]
    pub fn with_today(mut self, today: NaiveDate) -> Self {
        self.today = today;
        self
    }

    fn render<T: Serialize>(&self, template: &str, data: &T) -> String {
        render_inline(template, data, self.palette.clone(), self.use_color)
            .unwrap_or_else(|e| format!("Render error: {}\n", e))
    }

    pub fn render_tool_list(&self, tools: &[Tool], criteria: &FilterCriteria) -> String {
        let cards = tools
            .iter()
            .map(|tool| CardData {
                id: tool.id.clone(),
                name: tool.name.clone(),
                rating: format_rating(tool.rating),
                pricing: tool.pricing.to_string(),
                pricing_style: pricing_style(tool.pricing),
                category: tool.category.to_string(),
                featured: tool.is_featured(),
                description: tool.short_description.clone(),
                tags: tool
                    .tags
                    .iter()
                    .take(CARD_TAGS)
                    .map(|t| format!("#{}", t))
                    .collect(),
                path: Route::detail(tool.id.clone()).to_string(),
                launched: format_launch(tool.launch_date, self.today),
            })
            .collect();

        let data = ListData {
            count_label: result_count_label(tools.len()),
            scope_label: scope_label(criteria),
            description_width: DESCRIPTION_WIDTH,
            cards,
        };
        self.render(LIST_TEMPLATE, &data)
    }

    pub fn render_tool_detail(&self, tool: &Tool) -> String {
        let data = DetailData {
            home_path: Route::Directory.to_string(),
            name: tool.name.clone(),
            category: tool.category.to_string(),
            pricing: tool.pricing.to_string(),
            pricing_style: pricing_style(tool.pricing),
            featured: tool.is_featured(),
            short_description: tool.short_description.clone(),
            full_description: tool.full_description.clone(),
            website_host: tool.website_host().to_string(),
            website_url: tool.website_url.to_string(),
            launch_date: tool.launch_date.format("%Y-%m-%d").to_string(),
            launched: format_launch(tool.launch_date, self.today),
            rating: format_rating(tool.rating),
            reviews: format_reviews(tool.review_count),
            tags: tool.tags.clone(),
        };
        self.render(DETAIL_TEMPLATE, &data)
    }

    pub fn render_not_found(&self, id: &str) -> String {
        let data = NotFoundData {
            id: id.to_string(),
            home_path: Route::Directory.to_string(),
        };
        self.render(NOT_FOUND_TEMPLATE, &data)
    }

    pub fn render_facets(&self, counts: &FacetCounts) -> String {
        let categories: Vec<_> = counts
            .categories
            .iter()
            .map(|(c, n)| (c.to_string(), *n))
            .collect();
        let pricing: Vec<_> = counts
            .pricing
            .iter()
            .map(|(p, n)| (p.to_string(), *n))
            .collect();
        let width = categories
            .iter()
            .chain(pricing.iter())
            .map(|(label, _)| label.width())
            .max()
            .unwrap_or(0);

        let rows = |entries: Vec<(String, usize)>| -> Vec<FacetRow> {
            entries
                .into_iter()
                .map(|(label, count)| FacetRow {
                    label: pad_to_width(&label, width),
                    count,
                })
                .collect()
        };

        let data = FacetsData {
            categories: rows(categories),
            pricing: rows(pricing),
        };
        self.render(FACETS_TEMPLATE, &data)
    }

    pub fn render_config(&self, config: &DirectoryConfig) -> String {
        let width = KEYS.iter().map(|k| k.width()).max().unwrap_or(0);
        let entries = KEYS
            .iter()
            .map(|&key| ConfigEntry {
                key: pad_to_width(key, width),
                value: config.get(key).unwrap_or_default(),
            })
            .collect();
        self.render(CONFIG_TEMPLATE, &ConfigData { entries })
    }

    pub fn render_messages(&self, messages: &[CmdMessage]) -> String {
        let data = MessagesData {
            messages: messages
                .iter()
                .map(|m| MessageData {
                    content: m.content.clone(),
                    style: message_style(m.level),
                })
                .collect(),
        };
        self.render(MESSAGES_TEMPLATE, &data)
    }
}

fn message_style(level: MessageLevel) -> &'static str {
    match level {
        MessageLevel::Info => names::INFO,
        MessageLevel::Success => names::SUCCESS,
        MessageLevel::Warning => names::WARNING,
        MessageLevel::Error => names::ERROR,
    }
}

fn format_rating(rating: f64) -> String {
    format!("{:.1}", rating)
}

fn format_reviews(count: u32) -> String {
    match count {
        0 => "no reviews yet".to_string(),
        1 => "1 review".to_string(),
        n => format!("{} reviews", n),
    }
}

/// "3 months ago" style launch date. Future dates read as upcoming.
pub fn format_launch(launch: NaiveDate, today: NaiveDate) -> String {
    if launch > today {
        return "upcoming".to_string();
    }
    if launch == today {
        return "launched today".to_string();
    }
    let elapsed = (today - launch).to_std().unwrap_or_default();
    let mut formatter = timeago::Formatter::new();
    formatter.num_items(1);
    format!("launched {}", formatter.convert(elapsed))
}

fn pad_to_width(text: &str, width: usize) -> String {
    let padding = width.saturating_sub(text.width());
    format!("{}{}", text, " ".repeat(padding))
}
