mod color;
mod geometry;

pub use color::*;
pub use geometry::*;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn point_arithmetic() {
        let a = Point::new(150, 80);
        let b = Point::new(10, 5);
        assert_eq!(a - b, Point::new(140, 75));
        assert_eq!(a + b, Point::new(160, 85));
    }

    #[test]
    fn point_subtraction_goes_negative() {
        let pointer = Point::new(3, 2);
        let anchor = Point::new(10, 4);
        assert_eq!(pointer - anchor, Point::new(-7, -2));
    }

    #[test]
    fn rect_contains_interior() {
        let r = Rect::new(10, 5, 20, 10);
        assert!(r.contains(10, 5));
        assert!(r.contains(29, 14));
        assert!(!r.contains(30, 5));
        assert!(!r.contains(10, 15));
        assert!(!r.contains(9, 5));
    }

    #[test]
    fn rect_contains_negative_origin() {
        let r = Rect::new(-5, -3, 10, 6);
        assert!(r.contains(-5, -3));
        assert!(r.contains(4, 2));
        assert!(!r.contains(5, 2));
    }

    #[test]
    fn rect_from_parts_roundtrip() {
        let r = Rect::from_parts(Point::new(2, 3), Size::new(40, 12));
        assert_eq!(r.origin(), Point::new(2, 3));
        assert_eq!(r.size(), Size::new(40, 12));
        assert_eq!(r.right(), 42);
        assert_eq!(r.bottom(), 15);
    }

    #[test]
    fn rect_serialization() {
        let r = Rect::new(0, 0, 80, 24);
        let json = serde_json::to_string(&r).unwrap();
        let deserialized: Rect = serde_json::from_str(&json).unwrap();
        assert_eq!(r, deserialized);
    }

    #[test]
    fn color_from_hex() {
        let c = Color::from_hex("#ff8800").unwrap();
        assert_eq!(c, Color::rgb(255, 136, 0));
    }

    #[test]
    fn color_from_hex_no_hash() {
        let c = Color::from_hex("00ff00").unwrap();
        assert_eq!(c, Color::rgb(0, 255, 0));
    }

    #[test]
    fn color_from_hex_invalid() {
        assert!(Color::from_hex("zzzzzz").is_none());
        assert!(Color::from_hex("#abc").is_none());
        assert!(Color::from_hex("").is_none());
    }

    #[test]
    fn color_roundtrip_hex() {
        let original = Color::rgb(171, 205, 239);
        let parsed = Color::from_hex(&original.to_hex()).unwrap();
        assert_eq!(original, parsed);
    }
}
