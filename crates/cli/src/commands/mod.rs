pub mod dump;
pub mod inspect;
pub mod search;
pub mod verify;
