/// Pointer position relative to the card's top-left corner.
pub fn pointer_offset(client_x: f64, client_y: f64, rect_left: f64, rect_top: f64) -> (f64, f64) {
    (client_x - rect_left, client_y - rect_top)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pointer_offset() {
        assert_eq!(pointer_offset(320.0, 240.0, 300.0, 200.0), (20.0, 40.0));
        assert_eq!(pointer_offset(10.0, 10.0, 20.0, 5.0), (-10.0, 5.0));
    }
}
