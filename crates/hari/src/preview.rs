//! Terminal render target: draws a [`Scene`] onto a ratatui canvas.

use std::str::FromStr;

use hari_render::{Layer, Scene, geometry::Point};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    symbols::Marker,
    text::Span,
    widgets::{
        Widget,
        canvas::{Canvas, Circle, Context, Line as CanvasLine},
    },
};

/// Parse a CSS-style color, falling back to the terminal default.
pub fn parse_color(color: &str) -> Color {
    Color::from_str(color.trim()).unwrap_or(Color::Reset)
}

/// Largest area inside `area` that shows up roughly square on screen.
///
/// Terminal cells are about twice as tall as they are wide.
pub fn square_area(area: Rect) -> Rect {
    let height = area.height.min(area.width / 2);
    let width = height * 2;
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

/// Draws the clock scene. Hand widths are not representable and are ignored.
pub struct ClockPreview<'a> {
    scene: &'a Scene,
}

impl<'a> ClockPreview<'a> {
    pub fn new(scene: &'a Scene) -> Self {
        Self { scene }
    }
}

impl Widget for ClockPreview<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let area = square_area(area);
        if area.is_empty() {
            return;
        }

        let scene = self.scene;
        let size = scene.size;
        // Canvas y grows upward, scene y grows downward
        let flip = |p: Point| (p.x, size - p.y);
        let fill_step = size / f64::from(area.width.max(1)) / 2.0;

        // A canvas prints its labels after every layer, so the hands get a
        // second canvas on top to keep them over the numerals.
        canvas(scene, |ctx| {
            let dial = scene.layers().filter(|layer| !matches!(layer, Layer::Hand(_)));
            draw_layers(ctx, dial, &flip, fill_step);
        })
        .render(area, buf);
        canvas(scene, |ctx| {
            let hands = scene.layers().filter(|layer| matches!(layer, Layer::Hand(_)));
            draw_layers(ctx, hands, &flip, fill_step);
        })
        .render(area, buf);
    }
}

fn canvas<'a, F>(scene: &Scene, paint: F) -> Canvas<'a, F>
where
    F: Fn(&mut Context),
{
    Canvas::default()
        .marker(Marker::Braille)
        .background_color(parse_color(&scene.background_color))
        .x_bounds([0.0, scene.size])
        .y_bounds([0.0, scene.size])
        .paint(paint)
}

/// Draw layers in order, starting a new canvas layer whenever the kind changes.
fn draw_layers<'a>(
    ctx: &mut Context<'_>,
    layers: impl Iterator<Item = Layer<'a>>,
    flip: &impl Fn(Point) -> (f64, f64),
    fill_step: f64,
) {
    let mut previous = None;
    for layer in layers {
        let group = std::mem::discriminant(&layer);
        if previous.is_some_and(|p| p != group) {
            ctx.layer();
        }
        previous = Some(group);
        draw_layer(ctx, layer, flip, fill_step);
    }
}

fn draw_layer(
    ctx: &mut Context<'_>,
    layer: Layer<'_>,
    flip: &impl Fn(Point) -> (f64, f64),
    fill_step: f64,
) {
    match layer {
        Layer::Face(face) => {
            let (x, y) = flip(face.center);
            let fill = parse_color(&face.fill);
            let mut radius = face.radius;
            while fill_step > 0.0 && radius > 0.0 {
                ctx.draw(&Circle {
                    x,
                    y,
                    radius,
                    color: fill,
                });
                radius -= fill_step;
            }
            if let Some(stroke) = &face.stroke {
                ctx.draw(&Circle {
                    x,
                    y,
                    radius: face.radius,
                    color: parse_color(&stroke.color),
                });
            }
        }
        Layer::Mark(mark) => {
            let (x1, y1) = flip(mark.mark.start);
            let (x2, y2) = flip(mark.mark.end);
            ctx.draw(&CanvasLine::new(x1, y1, x2, y2, parse_color(&mark.color)));
        }
        Layer::Numeral(numeral) => {
            let (x, y) = flip(numeral.numeral.position);
            let style = Style::new()
                .fg(parse_color(&numeral.color))
                .add_modifier(Modifier::BOLD);
            ctx.print(x, y, Span::styled(numeral.numeral.value.to_string(), style));
        }
        Layer::Hand(hand) => {
            let (x1, y1) = flip(hand.pivot);
            let (x2, y2) = flip(hand.tip);
            ctx.draw(&CanvasLine::new(x1, y1, x2, y2, parse_color(&hand.color)));
        }
    }
}
