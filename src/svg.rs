use crate::profile::{AboutCard, Row};

const START_Y: i32 = 30;
const LINE_HEIGHT: i32 = 20;
const LEFT_PADDING: f32 = 15.0;
const RIGHT_PADDING: f32 = 30.0;
const BOTTOM_PADDING: f32 = 30.0;
const CHAR_WIDTH: f32 = 9.6;
const MIN_COL_CHARS: usize = 50;

#[derive(Clone, Copy, Debug)]
pub enum Theme {
    Dark,
    Light,
}

pub struct ThemeColors {
    pub bg: &'static str,
    pub text: &'static str,
    pub key: &'static str,
    pub value: &'static str,
    pub cc: &'static str,
}

impl Theme {
    pub const ALL: [Theme; 2] = [Theme::Dark, Theme::Light];

    pub fn colors(self) -> ThemeColors {
        match self {
            Theme::Dark => ThemeColors {
                bg: "#161b22",
                text: "#c9d1d9",
                key: "#ffa657",
                value: "#a5d6ff",
                cc: "#616e7f",
            },
            Theme::Light => ThemeColors {
                bg: "#ffffff",
                text: "#24292f",
                key: "#d73a49",
                value: "#0366d6",
                cc: "#6a737d",
            },
        }
    }

    pub fn file_name(self) -> &'static str {
        match self {
            Theme::Dark => "dark_mode.svg",
            Theme::Light => "light_mode.svg",
        }
    }
}

fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

/// Splits a row into key, dot leader and value so all values end on the
/// same column.
pub fn build_stat_row(key: &str, value: &str, align_width: usize) -> (String, String, String) {
    let key_part = format!("{key}: ");
    let base_len = key_part.chars().count() + value.chars().count();
    let available = align_width.saturating_sub(base_len);

    let dots = match available {
        0 => "".to_string(),
        1 => " ".to_string(),
        2 => ". ".to_string(),
        n => ".".repeat(n),
    };

    (key_part, dots, value.to_string())
}

fn build_header_line(label: &str, align_width: usize) -> String {
    let base = format!("{label} ");
    let dash_count = align_width.saturating_sub(base.chars().count()) + 2;
    format!("{base}{}", "-".repeat(dash_count))
}

enum Line<'a> {
    Header(String),
    Blank,
    Stat(&'a Row),
}

fn card_lines(card: &AboutCard) -> Vec<Line<'_>> {
    let mut lines = vec![Line::Header(card.handle.clone())];

    for (i, section) in card.sections.iter().enumerate() {
        if i > 0 {
            lines.push(Line::Blank);
        }
        if let Some(title) = &section.title {
            lines.push(Line::Header(format!("- {title}")));
        }
        lines.extend(section.rows.iter().map(Line::Stat));
    }

    lines
}

fn align_width(card: &AboutCard) -> usize {
    card.sections
        .iter()
        .flat_map(|s| &s.rows)
        .map(|r| r.key.chars().count() + 2 + r.value.chars().count())
        .max()
        .unwrap_or(0)
        .max(MIN_COL_CHARS)
}

// Returns (tspans, width, height)
fn build_column(card: &AboutCard) -> (String, f32, f32) {
    let align_width = align_width(card);
    let lines = card_lines(card);
    let x = LEFT_PADDING;

    let mut tspans = String::new();
    for (i, line) in lines.iter().enumerate() {
        let y = START_Y + (i as i32) * LINE_HEIGHT;

        match line {
            Line::Blank => {}
            Line::Header(label) => {
                tspans.push_str(&format!(
                    r#"<tspan x="{x}" y="{y}">{}</tspan>
"#,
                    escape_xml(&build_header_line(label, align_width))
                ));
            }
            Line::Stat(row) => {
                let (k, d, v) = build_stat_row(&row.key, &row.value, align_width);
                tspans.push_str(&format!(
                    r#"<tspan x="{x}" y="{y}" class="cc">. </tspan>
<tspan class="key">{}</tspan><tspan class="cc">{}</tspan><tspan class="value">{}</tspan>
"#,
                    escape_xml(&k),
                    escape_xml(&d),
                    escape_xml(&v)
                ));
            }
        }
    }

    // Header lines run two dashes past the rows
    let width = x + (align_width as f32 + 4.0) * CHAR_WIDTH + RIGHT_PADDING;
    let height = lines.len() as f32 * LINE_HEIGHT as f32 + START_Y as f32 + BOTTOM_PADDING;

    (tspans, width, height)
}

pub fn generate_svg(card: &AboutCard, theme: Theme) -> String {
    let colors = theme.colors();
    let (tspans, w, h) = build_column(card);

    format!(
        r#"<?xml version='1.0' encoding='UTF-8'?>
<svg xmlns="http://www.w3.org/2000/svg"
     width="{w}px" height="{h}px"
     font-family="ConsolasFallback,Consolas,monospace"
     font-size="16px">

<style>
.key      {{ fill: {key}; }}
.value    {{ fill: {value}; }}
.cc       {{ fill: {cc}; }}
</style>

<rect width="{w}px" height="{h}px" fill="{bg}" rx="15"/>

<text fill="{text}">
{tspans}
</text>

</svg>
"#,
        bg = colors.bg,
        text = colors.text,
        key = colors.key,
        value = colors.value,
        cc = colors.cc,
    )
}
