//! Paged view demo.
//!
//! Simulates a five-page carousel: a drag gesture scrolls through the pages
//! while the indicator follows the finger, then the view settles on the
//! nearest page and the indicator animates the rest of the way. Every
//! variant is shown in both orientations, drawn as text.
//!
//! Run with: cargo run -p dotpager --example pager
//! Set `RUST_LOG=dotpager=debug` to see the indicator's own logging.

use std::time::{Duration, Instant};

use dotpager::prelude::*;
use dotpager::render::{DrawCommand, FrameStats};
use tracing_subscriber::EnvFilter;

const CONFIG: &str = r##"
count = 5
gap = 4
size = 4
color = "white"
active_color = "#574ae2"
opacity = 0.4
duration_ms = 300
"##;

const PAGES: [(&str, &str); 5] = [
    ("Welcome", "#f4f1de"),
    ("Discover", "#e07a5f"),
    ("Connect", "#3d405b"),
    ("Share", "#81b29a"),
    ("Start", "#f2cc8f"),
];

/// Logical units covered by one character cell.
const CELL: f32 = 2.0;

/// A renderer that rasterizes into a grid of characters.
struct TextCanvas {
    recording: RecordingRenderer,
    columns: usize,
    rows: usize,
    cells: Vec<f32>,
}

impl TextCanvas {
    fn new() -> Self {
        Self {
            recording: RecordingRenderer::new(),
            columns: 0,
            rows: 0,
            cells: Vec::new(),
        }
    }

    fn rasterize(&mut self, command: &DrawCommand) {
        let shape = command.shape();
        let color = command.effective_color();
        let [r, g, b, _] = color.to_rgba8();
        let luma = (0.2126 * r as f32 + 0.7152 * g as f32 + 0.0722 * b as f32) / 255.0;
        let ink = color.a * (0.35 + 0.65 * luma);

        for row in 0..self.rows {
            for column in 0..self.columns {
                let x = (column as f32 + 0.5) * CELL;
                let y = (row as f32 + 0.5) * CELL;
                if contains(shape, x, y) {
                    let cell = &mut self.cells[row * self.columns + column];
                    *cell = *cell * (1.0 - color.a) + ink;
                }
            }
        }
    }

    fn to_text(&self) -> String {
        const RAMP: &[u8] = b" .:-=+*#%@";
        let mut text = String::with_capacity((self.columns + 1) * self.rows);
        for row in self.cells.chunks(self.columns.max(1)) {
            for &ink in row {
                let level = (ink.clamp(0.0, 1.0) * (RAMP.len() - 1) as f32).round() as usize;
                text.push(RAMP[level] as char);
            }
            text.push('\n');
        }
        text
    }
}

/// Whether `(x, y)` lies inside a rounded rectangle.
fn contains(shape: &RoundedRect, x: f32, y: f32) -> bool {
    let rect = shape.rect;
    if !rect.contains(Point::new(x, y)) {
        return false;
    }
    let corners = [
        (shape.radii.top_left, rect.left(), rect.top(), 1.0, 1.0),
        (shape.radii.top_right, rect.right(), rect.top(), -1.0, 1.0),
        (shape.radii.bottom_right, rect.right(), rect.bottom(), -1.0, -1.0),
        (shape.radii.bottom_left, rect.left(), rect.bottom(), 1.0, -1.0),
    ];
    corners.iter().all(|&(radius, cx, cy, sx, sy)| {
        let center_x = cx + sx * radius;
        let center_y = cy + sy * radius;
        let in_corner = (x - center_x) * sx < 0.0 && (y - center_y) * sy < 0.0;
        !in_corner || (x - center_x).powi(2) + (y - center_y).powi(2) <= radius * radius
    })
}

impl Renderer for TextCanvas {
    fn begin_frame(&mut self, viewport_size: Size) {
        self.columns = (viewport_size.width / CELL).ceil() as usize;
        self.rows = (viewport_size.height / CELL).ceil() as usize;
        self.cells = vec![0.0; self.columns * self.rows];
        self.recording.begin_frame(viewport_size);
    }

    fn end_frame(&mut self) -> FrameStats {
        let stats = self.recording.end_frame();
        for command in self.recording.take_commands() {
            self.rasterize(&command);
        }
        stats
    }

    fn save(&mut self) {
        self.recording.save();
    }

    fn restore(&mut self) {
        self.recording.restore();
    }

    fn translate(&mut self, tx: f32, ty: f32) {
        self.recording.translate(tx, ty);
    }

    fn scale(&mut self, sx: f32, sy: f32) {
        self.recording.scale(sx, sy);
    }

    fn set_opacity(&mut self, opacity: f32) {
        self.recording.set_opacity(opacity);
    }

    fn opacity(&self) -> f32 {
        self.recording.opacity()
    }

    fn clip_rect(&mut self, rect: Rect) {
        self.recording.clip_rect(rect);
    }

    fn clip_rounded_rect(&mut self, rect: RoundedRect) {
        self.recording.clip_rounded_rect(rect);
    }

    fn fill_rounded_rect(&mut self, rect: RoundedRect, color: Color) {
        self.recording.fill_rounded_rect(rect, color);
    }
}

fn draw(indicator: &PageIndicator, viewport: Size, caption: &str) {
    let mut canvas = TextCanvas::new();
    canvas.begin_frame(viewport);
    indicator.paint(&mut canvas, Rect::from_origin_size(Point::ZERO, viewport));
    let stats = canvas.end_frame();
    println!(
        "-- {caption} (progress {:.2}, {} fills)",
        indicator.progress(),
        stats.draw_calls
    );
    print!("{}", canvas.to_text());
}

/// Drag from page 0 towards page 2, release past the middle, and settle.
fn run_gesture(indicator: &mut PageIndicator, viewport: Size) {
    let page_length = 320.0;
    let scroll = ScrollProgress::new(page_length);
    indicator.set_external_progress(Some(scroll.handle()));

    // A little overscroll before the first page, then a drag to 1.75 pages.
    let release = 560.0;
    for step in -1..=14 {
        let offset = step as f32 * 40.0;
        scroll.on_scroll(offset);
        if step % 5 == 0 || step < 0 {
            draw(indicator, viewport, &format!("dragging, offset {offset}"));
        }
    }

    let page = scroll.page_for_offset(release, indicator.count());
    let (title, background) = PAGES[page];
    tracing::info!(page, title, background, "gesture ended, settling");

    indicator.set_external_progress(None);
    let start = Instant::now();
    indicator.set_current_at(page, start);
    let mut elapsed = Duration::ZERO;
    while indicator.tick_at(start + elapsed) {
        elapsed += Duration::from_millis(50);
        if elapsed.as_millis() % 150 == 0 {
            draw(indicator, viewport, &format!("settling on '{title}'"));
        }
    }
    draw(indicator, viewport, &format!("resting on '{title}'"));
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = IndicatorConfig::from_toml_str(CONFIG)?;
    let mut indicator = PageIndicator::from_config(config)?;
    indicator.current_changed.connect(|&page| {
        tracing::info!(page, "current page changed");
    });

    for variant in Variant::ALL {
        for orientation in [Orientation::Horizontal, Orientation::Vertical] {
            indicator.set_variant(variant);
            indicator.set_orientation(orientation);
            let viewport = match orientation {
                Orientation::Horizontal => Size::new(96.0, 8.0),
                Orientation::Vertical => Size::new(8.0, 96.0),
            };
            indicator.handle_layout(viewport);

            println!("==== {variant} / {orientation:?} ====");
            run_gesture(&mut indicator, viewport);
        }
    }

    Ok(())
}
