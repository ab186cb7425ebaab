//! SVG output for a composed scene.

use crate::scene::{Face, HandPrimitive, Layer, LineCap, MarkPrimitive, NumeralPrimitive, Scene};

const SVG_NS: &str = "http://www.w3.org/2000/svg";

/// Render the scene as a standalone `<svg>` element.
///
/// Elements are emitted in draw order, so later ones paint over earlier ones.
pub fn to_svg(scene: &Scene) -> String {
    let size = num(scene.size);
    let filter = scene
        .shadow
        .map(|shadow| shadow.css_filter())
        .unwrap_or_else(|| "none".to_string());

    let mut svg = format!(
        r#"<svg xmlns="{SVG_NS}" width="{size}" height="{size}" viewBox="0 0 {size} {size}" style="filter: {}">"#,
        escape(&filter)
    );
    svg.push('\n');

    for layer in scene.layers() {
        svg.push_str("  ");
        match layer {
            Layer::Face(face) => push_face(&mut svg, face),
            Layer::Mark(mark) => push_mark(&mut svg, mark),
            Layer::Numeral(numeral) => push_numeral(&mut svg, numeral),
            Layer::Hand(hand) => push_hand(&mut svg, hand),
        }
        svg.push('\n');
    }

    svg.push_str("</svg>\n");
    svg
}

/// Render the scene as a full SVG document painted over its background color.
pub fn to_svg_document(scene: &Scene) -> String {
    let size = num(scene.size);
    let mut doc = String::from("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
    doc.push_str(&format!(
        r#"<svg xmlns="{SVG_NS}" width="{size}" height="{size}" viewBox="0 0 {size} {size}">"#
    ));
    doc.push('\n');
    doc.push_str(&format!(
        r#"<rect width="100%" height="100%" fill="{}"/>"#,
        escape(&scene.background_color)
    ));
    doc.push('\n');
    doc.push_str(&to_svg(scene));
    doc.push_str("</svg>\n");
    doc
}

fn push_face(svg: &mut String, face: &Face) {
    let (stroke, width) = match &face.stroke {
        Some(stroke) => (escape(&stroke.color), num(stroke.width)),
        None => ("none".to_string(), "0".to_string()),
    };
    svg.push_str(&format!(
        r#"<circle cx="{}" cy="{}" r="{}" fill="{}" stroke="{stroke}" stroke-width="{width}"/>"#,
        num(face.center.x),
        num(face.center.y),
        num(face.radius),
        escape(&face.fill),
    ));
}

fn push_mark(svg: &mut String, mark: &MarkPrimitive) {
    svg.push_str(&format!(
        r#"<line x1="{}" y1="{}" x2="{}" y2="{}" stroke="{}" stroke-width="{}" stroke-linecap="{}"/>"#,
        num(mark.mark.start.x),
        num(mark.mark.start.y),
        num(mark.mark.end.x),
        num(mark.mark.end.y),
        escape(&mark.color),
        num(mark.mark.width),
        cap(mark.cap),
    ));
}

fn push_numeral(svg: &mut String, numeral: &NumeralPrimitive) {
    let n = &numeral.numeral;
    svg.push_str(&format!(
        r#"<text x="{}" y="{}" text-anchor="middle" dominant-baseline="middle" fill="{}" font-size="{}" font-weight="{}" font-family="{}">{}</text>"#,
        num(n.position.x),
        num(n.position.y),
        escape(&numeral.color),
        num(n.font_size),
        numeral.font_weight,
        escape(n.font_family),
        n.value,
    ));
}

fn push_hand(svg: &mut String, hand: &HandPrimitive) {
    let cx = num(hand.pivot.x);
    let cy = num(hand.pivot.y);
    svg.push_str(&format!(
        r#"<line x1="{cx}" y1="{cy}" x2="{cx}" y2="{}" stroke="{}" stroke-width="{}" stroke-linecap="{}" transform="rotate({} {cx} {cy})"/>"#,
        num(hand.pivot.y - hand.length),
        escape(&hand.color),
        num(hand.width),
        cap(hand.cap),
        num(hand.angle_deg),
    ));
}

fn cap(cap: LineCap) -> &'static str {
    match cap {
        LineCap::Round => "round",
    }
}

/// Format a coordinate with at most two decimals and no trailing zeros.
fn num(value: f64) -> String {
    let formatted = format!("{value:.2}");
    let trimmed = formatted.trim_end_matches('0').trim_end_matches('.');
    match trimmed {
        "-0" | "" => "0".to_string(),
        other => other.to_string(),
    }
}

/// Escape text for use inside a double-quoted attribute or element body.
fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(ch),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compose;
    use hari_core::{ClockConfig, ClockStyle, TimeSample};

    fn svg_at(config: &ClockConfig, h: u32, m: u32, s: u32) -> String {
        to_svg(&compose(config, &TimeSample::new(h, m, s)))
    }

    #[test]
    fn test_num_formatting() {
        assert_eq!(num(150.0), "150");
        assert_eq!(num(24.000000001), "24");
        assert_eq!(num(12.5), "12.5");
        assert_eq!(num(1.0 / 3.0), "0.33");
        assert_eq!(num(-0.0001), "0");
        assert_eq!(num(0.0), "0");
    }

    #[test]
    fn test_escape() {
        assert_eq!(escape("'Inter', sans-serif"), "'Inter', sans-serif");
        assert_eq!(escape(r#"a"<b>&"#), "a&quot;&lt;b&gt;&amp;");
    }

    #[test]
    fn test_element_counts() {
        let svg = svg_at(&ClockConfig::default(), 3, 0, 0);
        assert_eq!(svg.matches("<circle").count(), 1);
        assert_eq!(svg.matches("<text").count(), 12);
        // 60 marks + 3 hands
        assert_eq!(svg.matches("<line").count(), 63);
        assert!(svg.starts_with(r#"<svg xmlns="http://www.w3.org/2000/svg" width="300" height="300""#));
    }

    #[test]
    fn test_hands_rotate_around_center() {
        let svg = svg_at(&ClockConfig::default(), 3, 0, 0);
        assert!(svg.contains(
            r##"<line x1="150" y1="150" x2="150" y2="90" stroke="#333333" stroke-width="8" stroke-linecap="round" transform="rotate(90 150 150)"/>"##
        ));
    }

    #[test]
    fn test_hands_drawn_last() {
        let svg = svg_at(&ClockConfig::default(), 3, 0, 0);
        let last_text = svg.rfind("<text").unwrap();
        let first_rotate = svg.find("transform=\"rotate").unwrap();
        assert!(first_rotate > last_text);
    }

    #[test]
    fn test_minimal_has_no_filter() {
        let config = ClockConfig {
            clock_style: ClockStyle::Minimal,
            show_marks: false,
            show_numbers: false,
            show_second_hand: false,
            ..Default::default()
        };
        let svg = svg_at(&config, 0, 0, 0);
        assert!(svg.contains(r#"style="filter: none""#));
        assert_eq!(svg.matches("<line").count(), 2);
        assert_eq!(svg.matches("<text").count(), 0);
    }

    #[test]
    fn test_numeral_text() {
        let svg = svg_at(&ClockConfig::default(), 0, 0, 0);
        assert!(svg.contains(
            r##"<text x="150" y="45" text-anchor="middle" dominant-baseline="middle" fill="#333333" font-size="24" font-weight="300" font-family="'Inter', sans-serif">12</text>"##
        ));
    }

    #[test]
    fn test_document_paints_background() {
        let config = ClockConfig {
            background_color: "#202020".to_string(),
            ..Default::default()
        };
        let doc = to_svg_document(&compose(&config, &TimeSample::default()));
        assert!(doc.starts_with("<?xml"));
        assert!(doc.contains(r##"<rect width="100%" height="100%" fill="#202020"/>"##));
        assert_eq!(doc.matches("</svg>").count(), 2);
    }
}
