pub mod nav;
pub mod preferences;
pub mod theme;
