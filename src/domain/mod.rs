pub mod game;
pub mod player;
pub mod query;
pub mod season;
pub mod standings;

pub use game::*;
pub use player::*;
pub use query::*;
pub use season::*;
pub use standings::*;
