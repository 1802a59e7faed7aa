pub mod card;
pub mod deck;
pub mod rank;
pub mod score;
pub mod suit;
pub mod trump;
