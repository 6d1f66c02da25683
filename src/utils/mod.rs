pub mod colors;
pub mod time;
