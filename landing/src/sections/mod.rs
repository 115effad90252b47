// Landing page sections
// Developed by the BITA Team (c)2025

mod backdrop;
mod card;
mod download;
mod hero;

pub use backdrop::Backdrop;
pub use card::{FeatureList, InfoColumn};
pub use download::DownloadSection;
pub use hero::Hero;
