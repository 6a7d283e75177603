pub mod card;
pub mod dialog;
pub mod hints;
pub mod money;
