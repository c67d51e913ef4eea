mod game;
mod status;

pub use game::{EventOutcome, GameModel, Interaction, PendingPromotion};
pub use status::GameStatus;
