// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Terminal rendering for ranked wine lists.
//!
//! Results go to stdout as a boxed table: rank, score, name, type, vintage,
//! region and price, followed by the pager line. Colors follow the terminal:
//! `SOMMELIER_THEME` ("dark"/"light") if set, else the `COLORFGBG` hint, else
//! dark. `NO_COLOR` and non-TTY stdout turn styling off entirely so piped
//! output stays plain.

use sommelier::scoring::{Contribution, Gate, ScoreExplanation, Signal};
use sommelier::{Page, WineRecord};
use std::sync::OnceLock;

/// Inner width of the result box.
pub const BOX_WIDTH: usize = 86;

const NAME_WIDTH: usize = 32;
const TYPE_WIDTH: usize = 10;
const REGION_WIDTH: usize = 18;

// ═══════════════════════════════════════════════════════════════════════════
// THEME
// ═══════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Dark,
    Light,
}

static THEME: OnceLock<Theme> = OnceLock::new();
static COLORS: OnceLock<bool> = OnceLock::new();

fn detect_theme() -> Theme {
    if let Ok(theme) = std::env::var("SOMMELIER_THEME") {
        match theme.to_lowercase().as_str() {
            "light" | "l" => return Theme::Light,
            "dark" | "d" => return Theme::Dark,
            _ => {}
        }
    }

    // "fg;bg": backgrounds 7 and up (except 8, dark gray) are light
    if let Ok(colorfgbg) = std::env::var("COLORFGBG") {
        if let Some(Ok(bg)) = colorfgbg.split(';').next_back().map(str::parse::<u8>) {
            if bg >= 7 && bg != 8 {
                return Theme::Light;
            }
        }
    }

    Theme::Dark
}

pub fn theme() -> Theme {
    *THEME.get_or_init(detect_theme)
}

pub fn use_colors() -> bool {
    *COLORS.get_or_init(|| std::env::var_os("NO_COLOR").is_none() && atty::is(atty::Stream::Stdout))
}

/// Roles rather than hues, so both palettes stay readable.
#[derive(Debug, Clone, Copy)]
pub enum Tone {
    Border,
    Heading,
    Strong,
    Good,
    Fair,
    Weak,
    Muted,
}

impl Tone {
    fn rgb(self, theme: Theme) -> (u8, u8, u8) {
        // OneDark / One Light
        match (theme, self) {
            (Theme::Dark, Tone::Border) => (92, 99, 112),
            (Theme::Dark, Tone::Heading) => (86, 182, 194),
            (Theme::Dark, Tone::Strong) => (166, 226, 46),
            (Theme::Dark, Tone::Good) => (152, 195, 121),
            (Theme::Dark, Tone::Fair) => (229, 192, 123),
            (Theme::Dark, Tone::Weak) => (224, 108, 117),
            (Theme::Dark, Tone::Muted) => (171, 178, 191),
            (Theme::Light, Tone::Border) => (160, 161, 167),
            (Theme::Light, Tone::Heading) => (1, 132, 188),
            (Theme::Light, Tone::Strong) => (68, 140, 39),
            (Theme::Light, Tone::Good) => (80, 161, 79),
            (Theme::Light, Tone::Fair) => (193, 132, 1),
            (Theme::Light, Tone::Weak) => (228, 86, 73),
            (Theme::Light, Tone::Muted) => (56, 58, 66),
        }
    }
}

const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";

/// Color `text` with `tone`, optionally bold. Plain when colors are off.
pub fn paint(tone: Tone, bold: bool, text: &str) -> String {
    if !use_colors() {
        return text.to_string();
    }
    let (r, g, b) = tone.rgb(theme());
    let weight = if bold { BOLD } else { "" };
    format!("{}\x1b[38;2;{};{};{}m{}{}", weight, r, g, b, text, RESET)
}

// ═══════════════════════════════════════════════════════════════════════════
// LAYOUT HELPERS
// ═══════════════════════════════════════════════════════════════════════════

/// Printable width, skipping ANSI escapes.
pub fn visible_len(s: &str) -> usize {
    let mut in_escape = false;
    let mut len = 0;
    for c in s.chars() {
        match c {
            '\x1b' => in_escape = true,
            'm' if in_escape => in_escape = false,
            _ if !in_escape => len += 1,
            _ => {}
        }
    }
    len
}

/// Cut to `width` characters, marking the cut with `…`.
pub fn truncate(s: &str, width: usize) -> String {
    if s.chars().count() <= width {
        return s.to_string();
    }
    let kept: String = s.chars().take(width.saturating_sub(1)).collect();
    format!("{}…", kept)
}

fn pad_right(s: &str, width: usize) -> String {
    let pad = width.saturating_sub(visible_len(s));
    format!("{}{}", s, " ".repeat(pad))
}

fn row(content: &str) {
    let border = paint(Tone::Border, false, "│");
    println!("{}{}{}", border, pad_right(content, BOX_WIDTH), border);
}

fn top(label: &str) {
    let label_part = format!("─ {} ", paint(Tone::Heading, true, label));
    let rest = BOX_WIDTH.saturating_sub(visible_len(&label_part));
    println!(
        "{}{}{}",
        paint(Tone::Border, false, "┌"),
        label_part,
        paint(Tone::Border, false, &format!("{}┐", "─".repeat(rest)))
    );
}

fn bottom() {
    println!("{}", paint(Tone::Border, false, &format!("└{}┘", "─".repeat(BOX_WIDTH))));
}

// ═══════════════════════════════════════════════════════════════════════════
// WINE FORMATTERS
// ═══════════════════════════════════════════════════════════════════════════

/// Score as a percentage, colored by strength. Blank when no query ran.
pub fn score_cell(score: Option<f64>) -> String {
    let Some(score) = score else {
        return " ".repeat(5);
    };
    let text = format!("{:>4.0}%", score * 100.0);
    let tone = if score >= 0.9 {
        Tone::Strong
    } else if score >= 0.75 {
        Tone::Good
    } else if score > 0.0 {
        Tone::Fair
    } else {
        Tone::Weak
    };
    paint(tone, false, &text)
}

fn place(wine: &WineRecord) -> String {
    match (wine.region.as_deref(), wine.country.as_deref()) {
        (Some(region), Some(country)) => format!("{}, {}", region, country),
        (Some(one), None) | (None, Some(one)) => one.to_string(),
        (None, None) => String::new(),
    }
}

fn price(wine: &WineRecord) -> String {
    wine.price.map(|p| format!("{:>8.2}", p)).unwrap_or_else(|| format!("{:>8}", "-"))
}

/// One table line for `wine` at 1-based `position`.
pub fn wine_line(position: usize, wine: &WineRecord, score: Option<f64>) -> String {
    let vintage = wine.vintage.map_or_else(|| "NV".to_string(), |v| v.to_string());
    format!(
        " {:>3}  {}  {}  {}  {:>4}  {}  {}",
        position,
        score_cell(score),
        pad_right(&paint(Tone::Muted, true, &truncate(&wine.name, NAME_WIDTH)), NAME_WIDTH),
        pad_right(&truncate(wine.wine_type.as_deref().unwrap_or("-"), TYPE_WIDTH), TYPE_WIDTH),
        vintage,
        pad_right(&truncate(&place(wine), REGION_WIDTH), REGION_WIDTH),
        price(wine),
    )
}

fn signal_label(signal: &Signal) -> String {
    match signal {
        Signal::TypeIntent => "type".to_string(),
        Signal::BodyIntent => "body".to_string(),
        Signal::GrapeIntent(grape) => format!("grape:{}", grape),
        Signal::CountryIntent => "country".to_string(),
        Signal::Vintage(year) => format!("year:{}", year),
        Signal::Text => "text".to_string(),
        Signal::Phrase => "phrase".to_string(),
    }
}

fn contribution_text(c: &Contribution) -> String {
    format!("{} {:.2}×{:.2}", signal_label(&c.signal), c.weight, c.value)
}

/// Compact one-line account of a score, for `--explain`.
pub fn explanation_line(explanation: &ScoreExplanation) -> String {
    match &explanation.gate {
        Some(Gate::Type) => paint(Tone::Weak, false, "gated: type"),
        Some(Gate::Body) => paint(Tone::Weak, false, "gated: body"),
        Some(Gate::Country) => paint(Tone::Weak, false, "gated: country"),
        Some(Gate::Coverage {
            strong_hits,
            needed,
            key_hits,
        }) => paint(
            Tone::Weak,
            false,
            &format!("gated: coverage {}/{} strong, {} key", strong_hits, needed, key_hits),
        ),
        None if explanation.contributions.is_empty() => paint(Tone::Border, false, "no signal"),
        None => paint(
            Tone::Border,
            false,
            &explanation
                .contributions
                .iter()
                .map(contribution_text)
                .collect::<Vec<_>>()
                .join("  "),
        ),
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// TABLE
// ═══════════════════════════════════════════════════════════════════════════

/// A row ready to print: wine, its score (if a query ran) and an optional
/// explanation.
pub struct ResultRow<'a> {
    pub wine: &'a WineRecord,
    pub score: Option<f64>,
    pub explanation: Option<ScoreExplanation>,
}

/// Print the boxed result table followed by the pager line.
pub fn print_results(title: &str, rows: &[ResultRow<'_>], page: &Page) {
    top(title);
    if rows.is_empty() {
        row(&paint(Tone::Muted, false, "  No wines match your filters."));
    }
    let first = page.range_start.max(1);
    for (offset, result) in rows.iter().enumerate() {
        row(&wine_line(first + offset, result.wine, result.score));
        if let Some(explanation) = &result.explanation {
            row(&format!("        {}", explanation_line(explanation)));
        }
    }
    bottom();
    println!("{}", paint(Tone::Border, false, &page.summary()));
}
