use jigcut::geom::point;
use jigcut::{CutParams, GridSize, Path, Strategy, SubPath};

#[test]
fn path_data_uses_absolute_commands() {
    let mut sub = SubPath::new(point(0.0, 0.0));
    sub.line_to(point(10.0, 0.0));
    sub.quad_to(point(15.0, 5.0), point(20.0, 0.0));
    sub.cubic_to(point(25.0, 4.126), point(30.0, -4.0), point(35.5, 0.0));
    sub.close();
    let mut path = Path::new();
    path.push(sub);

    assert_eq!(
        path.to_svg_data(),
        "M0,0 L10,0 Q15,5 20,0 C25,4.13 30,-4 35.5,0 Z"
    );
}

#[test]
fn disjoint_subpaths_each_start_with_a_move() {
    let mut path = Path::new();
    let mut a = SubPath::new(point(0.0, 10.0));
    a.line_to(point(5.0, 10.0));
    let mut b = SubPath::new(point(7.0, 0.0));
    b.line_to(point(7.0, 5.0));
    path.push(a);
    path.push(b);
    assert_eq!(path.to_svg_data(), "M0,10 L5,10 M7,0 L7,5");
    assert_eq!(Path::new().to_svg_data(), "");
}

#[test]
fn puzzle_paths_serialize_for_external_renderers() {
    let grid = GridSize::new(3, 3).unwrap();
    let puzzle = jigcut::cut(300.0, 300.0, grid, Strategy::Laser, &CutParams::default()).unwrap();

    let overlay = puzzle.overlay.to_svg_data();
    assert_eq!(overlay.matches('M').count(), 12);
    assert!(!overlay.contains('Z'));
    assert!(!overlay.contains('C') && !overlay.contains('Q'));

    for piece in &puzzle.pieces {
        let d = piece.path.to_svg_data();
        assert!(d.starts_with('M'));
        assert!(d.ends_with(" Z"));
    }

    let json = serde_json::to_value(&puzzle.pieces[0]).unwrap();
    assert_eq!(json["index"], 0);
    let first = &json["path"]["subpaths"][0]["segments"][0];
    assert!(first["kind"].is_string());
}

#[test]
fn control_bounds_cover_every_point() {
    let mut sub = SubPath::new(point(10.0, 10.0));
    sub.quad_to(point(50.0, -30.0), point(90.0, 10.0));
    let mut path = Path::new();
    path.push(sub);
    let bounds = path.control_bounds().unwrap();
    assert_eq!(bounds.min_x(), 10.0);
    assert_eq!(bounds.min_y(), -30.0);
    assert_eq!(bounds.max_x(), 90.0);
    assert_eq!(bounds.max_y(), 10.0);
    assert!(Path::new().control_bounds().is_none());
}
