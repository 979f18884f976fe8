use crate::shape::Shape;

/// Fixed canvas edge; the viewBox spans 0 0 64 64.
pub const CANVAS_SIZE: u32 = 64;

pub const SVG_HEADER: &str = "<svg xmlns=\"http://www.w3.org/2000/svg\" xmlns:xlink=\"http://www.w3.org/1999/xlink\" width=\"64\" height=\"64\" viewBox=\"0 0 64 64\">";
pub const SVG_FOOTER: &str = "</svg>";

/// Renders the collection as SVG text. Pure function of its input: one
/// self-closing rect per shape, in storage order, byte-for-byte reproducible.
pub fn render(shapes: &[Shape]) -> String {
    let mut svg = String::new();
    svg.push_str(SVG_HEADER);
    for shape in shapes {
        svg.push_str(&format!(
            "<rect x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\" style=\"fill:rgb({},{},{})\" />",
            shape.x, shape.y, shape.width, shape.height, shape.r, shape.g, shape.b,
        ));
    }
    svg.push_str(SVG_FOOTER);
    svg
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::{AmbientContext, ShapeGenerator};

    fn sample_shape() -> Shape {
        Shape { x: 10, y: 20, width: 5, height: 8, r: 255, g: 0, b: 0 }
    }

    // Pulls the seven attribute values back out of one rect element.
    fn scan_rect(rect: &str) -> (u32, u32, u32, u32, u32, u32, u32) {
        let mut quoted = rect.split('"').skip(1).step_by(2);
        let x = quoted.next().unwrap().parse().unwrap();
        let y = quoted.next().unwrap().parse().unwrap();
        let width = quoted.next().unwrap().parse().unwrap();
        let height = quoted.next().unwrap().parse().unwrap();
        let style = quoted.next().unwrap();
        let rgb = style
            .strip_prefix("fill:rgb(")
            .unwrap()
            .strip_suffix(')')
            .unwrap();
        let mut channels = rgb.split(',');
        let r = channels.next().unwrap().parse().unwrap();
        let g = channels.next().unwrap().parse().unwrap();
        let b = channels.next().unwrap().parse().unwrap();
        (x, y, width, height, r, g, b)
    }

    #[test]
    fn renders_the_documented_rect_element() {
        let svg = render(&[sample_shape()]);
        let expected = format!(
            "{SVG_HEADER}<rect x=\"10\" y=\"20\" width=\"5\" height=\"8\" style=\"fill:rgb(255,0,0)\" />{SVG_FOOTER}"
        );
        assert_eq!(svg, expected);
    }

    #[test]
    fn header_footer_and_rect_count() {
        let ctx = AmbientContext { timestamp: 42, minter_id: 99 };
        let shapes = ShapeGenerator::new(3, ctx).generate();
        let svg = render(&shapes);
        assert!(svg.starts_with(SVG_HEADER));
        assert!(svg.ends_with(SVG_FOOTER));
        assert_eq!(svg.matches("<rect ").count(), shapes.len());
    }

    #[test]
    fn render_is_byte_identical_across_calls() {
        let ctx = AmbientContext { timestamp: 42, minter_id: 99 };
        let shapes = ShapeGenerator::new(3, ctx).generate();
        assert_eq!(render(&shapes), render(&shapes));
    }

    #[test]
    fn max_channel_renders_as_255() {
        let shape = Shape { x: 0, y: 0, width: 0, height: 0, r: 255, g: 255, b: 255 };
        let svg = render(&[shape]);
        assert!(svg.contains("fill:rgb(255,255,255)"));
        assert!(!svg.contains("256"));
    }

    #[test]
    fn scanning_rects_recovers_the_collection() {
        let ctx = AmbientContext { timestamp: 1_700_000_000, minter_id: 7 };
        let shapes = ShapeGenerator::new(11, ctx).generate();
        let svg = render(&shapes);

        let body = svg
            .strip_prefix(SVG_HEADER)
            .unwrap()
            .strip_suffix(SVG_FOOTER)
            .unwrap();
        let rects: Vec<&str> = body
            .split(" />")
            .filter(|part| !part.is_empty())
            .collect();
        assert_eq!(rects.len(), shapes.len());

        for (rect, shape) in rects.iter().zip(&shapes) {
            let scanned = scan_rect(rect);
            let original = (
                shape.x, shape.y, shape.width, shape.height, shape.r, shape.g, shape.b,
            );
            assert_eq!(scanned, original);
        }
    }
}
