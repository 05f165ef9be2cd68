//! Player and team directories passed explicitly to resolvers and commands.

pub mod players;
pub mod teams;

pub use players::PlayerDirectory;
pub use teams::TeamDirectory;
