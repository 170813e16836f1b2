use mazepath::format_number;
use mazepath::utils::format_path_flow;
use mazepath_core::Coord;

#[test]
fn test_format_number() {
    assert_eq!(format_number(0), "0");
    assert_eq!(format_number(999), "999");
    assert_eq!(format_number(1000), "1,000");
    assert_eq!(format_number(1234567), "1,234,567");
}

#[test]
fn test_format_path_flow() {
    let path = vec![Coord::new(0, 0), Coord::new(0, 1)];
    assert_eq!(format_path_flow(&path), "(0, 0) → (0, 1)");
    assert_eq!(format_path_flow(&[]), "");
}
