mod news;
mod prices;
pub mod util;
