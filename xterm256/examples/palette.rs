//! Print the named colors and the whole 6x6x6 cube.
use env_logger::Env;
use xterm256::{Color, xprint, xprintln};

const NAMED: [(&str, Color); 17] = [
    ("Black", Color::BLACK),
    ("DarkRed", Color::DARK_RED),
    ("DarkGreen", Color::DARK_GREEN),
    ("DarkYellow", Color::DARK_YELLOW),
    ("DarkBlue", Color::DARK_BLUE),
    ("DarkMagenta", Color::DARK_MAGENTA),
    ("DarkCyan", Color::DARK_CYAN),
    ("LightGray", Color::LIGHT_GRAY),
    ("DarkGray", Color::DARK_GRAY),
    ("Red", Color::RED),
    ("Green", Color::GREEN),
    ("Yellow", Color::YELLOW),
    ("Blue", Color::BLUE),
    ("Magenta", Color::MAGENTA),
    ("Cyan", Color::CYAN),
    ("White", Color::WHITE),
    ("Orange", Color::ORANGE),
];

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info"))
        .init();

    xterm256::println(Color::RED, "Foo")?;

    let mut orange = Color::new(3, 1, 0)?;
    xterm256::println(orange, "Bar")?;

    orange.set_background(5, 5, 5)?;
    xterm256::println(orange, "Bar")?;

    println!();
    for (name, color) in NAMED {
        xprintln!(color, "{name:<12} {:>3}", color.foreground().unwrap_or(0))?;
    }

    println!();
    for r in 0..6 {
        for g in 0..6 {
            for b in 0..6 {
                let mut cell = Color::default();
                cell.set_background(r, g, b)?;
                xprint!(cell, "{:>4}", xterm256::rgb_to_code(r, g, b)?)?;
            }
            println!();
        }
    }

    // Out-of-palette triples are rejected, not clamped.
    if let Err(err) = Color::new(42, 42, 42) {
        log::warn!("{err}");
    }

    Ok(())
}
