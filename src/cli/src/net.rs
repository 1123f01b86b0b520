use cube_core::{Color, ColorScheme, FaceCube};
use owo_colors::OwoColorize;

/// The background for a color name such as `"Y"` or `"yellow"`.
fn rgb(name: &str) -> Option<(u8, u8, u8)> {
    let rgb = match name.to_ascii_lowercase().as_str() {
        "w" | "white" => (0xff, 0xff, 0xff),
        "y" | "yellow" => (0xff, 0xd5, 0x00),
        "r" | "red" => (0xc4, 0x1e, 0x3a),
        "o" | "orange" => (0xff, 0x58, 0x00),
        "b" | "blue" => (0x00, 0x51, 0xba),
        "g" | "green" => (0x00, 0x9e, 0x60),
        _ => return None,
    };
    Some(rgb)
}

/// The unfolded cube, each facelet printed with the color it has in `scheme`.
/// Names that are not recognizable colors are printed as plain letters.
pub fn paint(cube: &FaceCube, scheme: &ColorScheme) -> String {
    let mut out = String::new();
    for c in cube.to_2d_string().chars() {
        match Color::from_char(c).and_then(|color| rgb(scheme.name(color))) {
            Some((r, g, b)) => out.push_str(&c.black().on_truecolor(r, g, b).to_string()),
            None => out.push(c),
        }
    }
    out
}
