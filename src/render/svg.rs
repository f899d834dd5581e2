//! Builds the SVG scene for a grid layout: title, day columns, hourly
//! gridlines, and one labeled rectangle per task box.

use std::fmt::Write;

use crate::layout::GridLayout;
use crate::models::{day_label, WEEK};

pub const WIDTH: u32 = 1800;
pub const HEIGHT: u32 = 900;

const MARGIN_LEFT: f32 = 70.0;
const MARGIN_RIGHT: f32 = 30.0;
const MARGIN_TOP: f32 = 60.0;
const MARGIN_BOTTOM: f32 = 30.0;

/// Fraction of a day column that boxes occupy, leaving a gutter between days.
const COLUMN_FILL: f32 = 0.96;

pub fn document(layout: &GridLayout) -> String {
    let mut svg = String::new();
    let grid_w = WIDTH as f32 - MARGIN_LEFT - MARGIN_RIGHT;
    let grid_h = HEIGHT as f32 - MARGIN_TOP - MARGIN_BOTTOM;
    let col_w = grid_w / WEEK.len() as f32;
    let hour_span = (layout.last_hour - layout.first_hour).max(1) as f32;
    let y_of = |hours: f32| MARGIN_TOP + (hours - layout.first_hour as f32) / hour_span * grid_h;

    let _ = writeln!(
        svg,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{WIDTH}" height="{HEIGHT}" viewBox="0 0 {WIDTH} {HEIGHT}" font-family="sans-serif">"#
    );
    let _ = writeln!(
        svg,
        r##"<rect width="{WIDTH}" height="{HEIGHT}" fill="#ffffff"/>"##
    );
    let _ = writeln!(
        svg,
        r##"<text x="{:.1}" y="28" text-anchor="middle" font-size="20" fill="#000000">Weekly Schedule</text>"##,
        WIDTH as f32 / 2.0
    );

    // day columns and their labels
    for (i, day) in WEEK.iter().enumerate() {
        let x = MARGIN_LEFT + i as f32 * col_w;
        let _ = writeln!(
            svg,
            r##"<line x1="{x:.1}" y1="{MARGIN_TOP:.1}" x2="{x:.1}" y2="{:.1}" stroke="#dddddd" stroke-width="1"/>"##,
            MARGIN_TOP + grid_h
        );
        let _ = writeln!(
            svg,
            r##"<text x="{:.1}" y="{:.1}" text-anchor="middle" font-size="16" fill="#000000">{}</text>"##,
            x + col_w / 2.0,
            MARGIN_TOP - 12.0,
            day_label(*day)
        );
    }
    let right_edge = MARGIN_LEFT + grid_w;
    let _ = writeln!(
        svg,
        r##"<line x1="{right_edge:.1}" y1="{MARGIN_TOP:.1}" x2="{right_edge:.1}" y2="{:.1}" stroke="#dddddd" stroke-width="1"/>"##,
        MARGIN_TOP + grid_h
    );

    // hourly gridlines with time labels down the left edge
    for hour in layout.first_hour..=layout.last_hour {
        let y = y_of(hour as f32);
        let _ = writeln!(
            svg,
            r##"<line x1="{MARGIN_LEFT:.1}" y1="{y:.1}" x2="{right_edge:.1}" y2="{y:.1}" stroke="#cccccc" stroke-width="0.5" stroke-dasharray="4 3"/>"##
        );
        let _ = writeln!(
            svg,
            r##"<text x="{:.1}" y="{:.1}" text-anchor="end" font-size="12" fill="#000000">{hour}:00</text>"##,
            MARGIN_LEFT - 8.0,
            y + 4.0
        );
    }

    // task boxes
    for b in &layout.boxes {
        let inner_x = MARGIN_LEFT + b.day as f32 * col_w + col_w * (1.0 - COLUMN_FILL) / 2.0;
        let lane_w = col_w * COLUMN_FILL / b.lanes as f32;
        let x = inner_x + b.lane as f32 * lane_w;
        let y = y_of(b.start_hours);
        let h = y_of(b.end_hours) - y;
        let text_fill = if b.color.is_dark() { "#ffffff" } else { "#000000" };

        let _ = writeln!(
            svg,
            r#"<rect x="{x:.1}" y="{y:.1}" width="{lane_w:.1}" height="{h:.1}" fill="{}"/>"#,
            b.color.hex()
        );
        // tiny boxes keep only the centered name
        if h >= 28.0 {
            let _ = writeln!(
                svg,
                r#"<text x="{:.1}" y="{:.1}" font-size="11" fill="{text_fill}">{}</text>"#,
                x + 4.0,
                y + 13.0,
                escape(&b.time_label)
            );
        }
        let _ = writeln!(
            svg,
            r#"<text x="{:.1}" y="{:.1}" text-anchor="middle" font-size="13" fill="{text_fill}">{}</text>"#,
            x + lane_w / 2.0,
            y + h / 2.0 + 4.0,
            escape(&b.label)
        );
    }

    svg.push_str("</svg>\n");
    svg
}

fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}
