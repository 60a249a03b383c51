//! Greet the world in a random color from the 6x6x6 cube.
use env_logger::Env;
use rand::Rng;
use xterm256::Color;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info"))
        .init();

    let mut rng = rand::rng();
    let (r, g, b) = (
        rng.random_range(0..6),
        rng.random_range(0..6),
        rng.random_range(0..6),
    );

    let color = Color::new(r, g, b)?;
    log::info!("rgb ({r}, {g}, {b}) -> {:?}", color.foreground());

    xterm256::println(color, "Hello, World!")?;
    Ok(())
}
