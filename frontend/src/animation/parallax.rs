/// Vertical translation for a scroll-linked layer, clamped to `±max_px`.
pub fn parallax_offset(scroll_y: f64, factor: f64, max_px: f64) -> f64 {
    let limit = max_px.abs();
    let offset = scroll_y * factor;
    if offset.is_nan() {
        return 0.0;
    }
    offset.clamp(-limit, limit)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scales_with_scroll() {
        assert_eq!(parallax_offset(200.0, 0.3, 500.0), 60.0);
        assert_eq!(parallax_offset(200.0, -0.5, 500.0), -100.0);
    }

    #[test]
    fn clamps_to_limit() {
        assert_eq!(parallax_offset(10_000.0, 0.4, 120.0), 120.0);
        assert_eq!(parallax_offset(10_000.0, -0.4, 120.0), -120.0);
        assert_eq!(parallax_offset(10_000.0, 0.4, -120.0), 120.0);
    }

    #[test]
    fn top_of_page_is_neutral() {
        assert_eq!(parallax_offset(0.0, 0.8, 300.0), 0.0);
    }
}
