// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Terminal display utilities for the bidragsmatch CLI.
//!
//! Box-drawn shortlists in OneDark (dark terminals) or One Light (light
//! terminals). Respects `NO_COLOR` and falls back to plain text when stdout
//! is not a TTY, so piping the output stays clean.
//!
//! Line builders (`match_lines`, `keyword_line`) return strings and never
//! exceed `BOX_WIDTH` visible columns; the `print_*` functions only frame them.
//!
//! # Theme detection order
//!
//! 1. `BIDRAGSMATCH_THEME` env var ("dark" or "light")
//! 2. `COLORFGBG` env var (terminal background hint)
//! 3. Default to dark theme

use std::sync::OnceLock;

use bidragsmatch::{is_unmatchable_keyword, GrantRecord, MatchReport, SuggestedApplication};

// Box drawing constants - width between │ and │ (excluding border chars)
pub const BOX_WIDTH: usize = 72;

/// Suffix printed after keywords that can never equal a single token.
const UNMATCHABLE_NOTE: &str = "(never matches a single word)";

// ═══════════════════════════════════════════════════════════════════════════
// THEME
// ═══════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Dark,
    Light,
}

impl Theme {
    /// Parse an explicit theme name.
    fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "light" | "l" => Some(Theme::Light),
            "dark" | "d" => Some(Theme::Dark),
            _ => None,
        }
    }

    /// `COLORFGBG` is "fg;bg"; a background index above 6 is a light terminal.
    fn from_colorfgbg(value: &str) -> Option<Self> {
        let bg = value.split(';').next_back()?.parse::<u8>().ok()?;
        Some(if bg > 6 { Theme::Light } else { Theme::Dark })
    }
}

static THEME: OnceLock<Theme> = OnceLock::new();

pub fn theme() -> Theme {
    *THEME.get_or_init(|| {
        std::env::var("BIDRAGSMATCH_THEME")
            .ok()
            .and_then(|name| Theme::from_name(&name))
            .or_else(|| {
                std::env::var("COLORFGBG")
                    .ok()
                    .and_then(|v| Theme::from_colorfgbg(&v))
            })
            .unwrap_or(Theme::Dark)
    })
}

// ═══════════════════════════════════════════════════════════════════════════
// TONES
// ═══════════════════════════════════════════════════════════════════════════

pub const RESET: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";
pub const DIM: &str = "\x1b[2m";

/// Semantic colors, resolved against the OneDark / One Light palettes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    /// Unmatchable keywords
    Warn,
    /// Strong scores
    Good,
    /// Weak scores, empty keyword lists
    Weak,
    /// Box frames, rank badges
    Frame,
    /// Section labels, suggested titles
    Label,
    /// Grant names
    Text,
    /// Borders, zero scores, notes
    Muted,
    /// Report title
    Accent,
}

impl Tone {
    pub fn rgb(self, theme: Theme) -> (u8, u8, u8) {
        match (theme, self) {
            (Theme::Dark, Tone::Warn) => (224, 108, 117),   // #e06c75
            (Theme::Dark, Tone::Good) => (152, 195, 121),   // #98c379
            (Theme::Dark, Tone::Weak) => (229, 192, 123),   // #e5c07b
            (Theme::Dark, Tone::Frame) => (97, 175, 239),   // #61afef
            (Theme::Dark, Tone::Label) => (86, 182, 194),   // #56b6c2
            (Theme::Dark, Tone::Text) => (171, 178, 191),   // #abb2bf
            (Theme::Dark, Tone::Muted) => (92, 99, 112),    // #5c6370
            (Theme::Dark, Tone::Accent) => (102, 217, 239), // #66d9ef
            (Theme::Light, Tone::Warn) => (228, 86, 73),    // #e45649
            (Theme::Light, Tone::Good) => (80, 161, 79),    // #50a14f
            (Theme::Light, Tone::Weak) => (193, 132, 1),    // #c18401
            (Theme::Light, Tone::Frame) => (64, 120, 242),  // #4078f2
            (Theme::Light, Tone::Label) => (1, 132, 188),   // #0184bc
            (Theme::Light, Tone::Text) => (56, 58, 66),     // #383a42
            (Theme::Light, Tone::Muted) => (160, 161, 167), // #a0a1a7
            (Theme::Light, Tone::Accent) => (1, 112, 158),  // #01709e
        }
    }

    /// True-color foreground escape for the current theme.
    pub fn escape(self) -> String {
        let (r, g, b) = self.rgb(theme());
        format!("\x1b[38;2;{};{};{}m", r, g, b)
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// CORE UTILITIES
// ═══════════════════════════════════════════════════════════════════════════

/// Colors are on for a TTY stdout unless `NO_COLOR` is set.
pub fn use_colors() -> bool {
    std::env::var("NO_COLOR").is_err() && atty::is(atty::Stream::Stdout)
}

/// Style `text` with a tone and modifiers, or return it bare without colors.
pub fn themed(tone: Tone, modifiers: &[&str], text: &str) -> String {
    if use_colors() {
        format!("{}{}{}{}", modifiers.concat(), tone.escape(), text, RESET)
    } else {
        text.to_string()
    }
}

/// Start and end escapes for a frame character run.
fn frame(tone: Tone) -> (String, &'static str) {
    if use_colors() {
        (tone.escape(), RESET)
    } else {
        (String::new(), "")
    }
}

/// Visible columns, skipping ANSI escape sequences.
pub fn visible_len(s: &str) -> usize {
    s.split('\x1b')
        .enumerate()
        .map(|(i, part)| {
            if i == 0 {
                part.chars().count()
            } else {
                // Escape body runs up to and including the terminating 'm'
                part.find('m')
                    .map_or(0, |end| part[end + 1..].chars().count())
            }
        })
        .sum()
}

/// Shorten plain text to `max_len` characters, ending in "…" when cut.
pub fn truncate(text: &str, max_len: usize) -> String {
    if text.chars().count() <= max_len {
        text.to_string()
    } else {
        let kept: String = text.chars().take(max_len.saturating_sub(1)).collect();
        format!("{}…", kept)
    }
}

/// Right-pad a styled string to `width` visible columns.
pub fn pad_right(s: &str, width: usize) -> String {
    let pad = width.saturating_sub(visible_len(s));
    format!("{}{}", s, " ".repeat(pad))
}

// ═══════════════════════════════════════════════════════════════════════════
// BOX DRAWING
// ═══════════════════════════════════════════════════════════════════════════

/// │ content          │
pub fn row(content: &str) {
    let (on, off) = frame(Tone::Muted);
    println!("{on}│{off}{}{on}│{off}", pad_right(content, BOX_WIDTH));
}

/// ┌─ LABEL ──────────┐
pub fn section_top(label: &str) {
    let (on, off) = frame(Tone::Muted);
    let label_part = format!("─ {} ", themed(Tone::Label, &[BOLD], label));
    let rule = "─".repeat(BOX_WIDTH.saturating_sub(visible_len(&label_part)));
    println!("{on}┌{off}{label_part}{on}{rule}┐{off}");
}

/// ├──────────────────┤
pub fn section_mid() {
    let (on, off) = frame(Tone::Muted);
    println!("{on}├{}┤{off}", "─".repeat(BOX_WIDTH));
}

/// └──────────────────┘
pub fn section_bot() {
    let (on, off) = frame(Tone::Muted);
    println!("{on}└{}┘{off}", "─".repeat(BOX_WIDTH));
}

/// Centered title in a double-line box.
pub fn title(text: &str) {
    let (on, off) = frame(Tone::Frame);
    let colored = themed(Tone::Accent, &[BOLD], text);
    let total_pad = BOX_WIDTH.saturating_sub(visible_len(&colored));
    let left = " ".repeat(total_pad / 2);
    let right = " ".repeat(total_pad - total_pad / 2);
    let rule = "═".repeat(BOX_WIDTH);
    println!("{on}╔{rule}╗{off}");
    println!("{on}║{off}{left}{colored}{right}{on}║{off}");
    println!("{on}╚{rule}╝{off}");
}

// ═══════════════════════════════════════════════════════════════════════════
// LINE BUILDERS
// ═══════════════════════════════════════════════════════════════════════════

/// Score colored by strength: ≥ 0.5 good, > 0 weak, 0 muted.
pub fn score_value(score: f64) -> String {
    let text = format!("{:>6.2}", score);
    if score >= 0.5 {
        themed(Tone::Good, &[BOLD], &text)
    } else if score > 0.0 {
        themed(Tone::Weak, &[], &text)
    } else {
        themed(Tone::Muted, &[], &text)
    }
}

/// Two lines per shortlist entry: rank, name and score; then the title.
pub fn match_lines(rank: usize, m: &SuggestedApplication) -> [String; 2] {
    let badge = themed(Tone::Frame, &[BOLD], &format!("#{:<2}", rank));
    let name = themed(Tone::Text, &[BOLD], &truncate(&m.grant_name, BOX_WIDTH - 20));
    let header = format!(
        "  {} {}  score {}",
        badge,
        pad_right(&name, BOX_WIDTH - 21),
        score_value(m.score)
    );
    let title = format!(
        "     {}",
        themed(Tone::Label, &[], &truncate(&m.suggested_title, BOX_WIDTH - 6))
    );
    [header, title]
}

/// One catalog keyword, annotated when it can never match.
pub fn keyword_line(keyword: &str) -> String {
    if is_unmatchable_keyword(keyword) {
        // "  " + keyword + " " + note
        let room = BOX_WIDTH - 3 - UNMATCHABLE_NOTE.chars().count();
        format!(
            "  {} {}",
            themed(Tone::Warn, &[], &truncate(keyword, room)),
            themed(Tone::Muted, &[DIM], UNMATCHABLE_NOTE)
        )
    } else {
        format!("  {}", truncate(keyword, BOX_WIDTH - 2))
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// REPORTS
// ═══════════════════════════════════════════════════════════════════════════

pub fn print_report(report: &MatchReport) {
    title(&truncate(&report.project_title, BOX_WIDTH - 4));
    section_top("MATCHES");
    if report.matches.is_empty() {
        row(&themed(Tone::Muted, &[DIM], "  no grants in catalog"));
    }
    for (i, m) in report.matches.iter().enumerate() {
        if i > 0 {
            section_mid();
        }
        for line in match_lines(i + 1, m) {
            row(&line);
        }
    }
    section_bot();
}

pub fn print_catalog(grants: &[GrantRecord]) {
    title(&format!("{} grants", grants.len()));
    for grant in grants {
        section_top(&truncate(&grant.name, BOX_WIDTH - 6));
        if grant.keywords.is_empty() {
            row(&themed(Tone::Weak, &[], "  no keywords (always scores 0)"));
        }
        for keyword in &grant.keywords {
            row(&keyword_line(keyword));
        }
        section_bot();
    }
}
