/// An RGB color as drawn on the surface
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb(pub u8, pub u8, pub u8);

pub const BACKGROUND: Rgb = Rgb(0, 0, 0);
/// Flash color of a dying apple or rock
pub const BLINK: Rgb = Rgb(255, 255, 255);
/// Accent drawn around every occupied cell
pub const BORDER: Rgb = Rgb(93, 216, 228);
pub const ROCK: Rgb = Rgb(100, 100, 100);
pub const APPLE: Rgb = Rgb(255, 0, 0);
pub const SNAKE: Rgb = Rgb(0, 255, 0);
