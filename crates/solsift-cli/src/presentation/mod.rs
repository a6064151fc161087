mod palette;
mod views;

pub use palette::Palette;
pub use views::EmissionView;
