pub mod avatar;
pub mod badge;
pub mod button;
pub mod card;
pub mod checkbox;

pub use avatar::Avatar;
pub use badge::StatusPill;
pub use button::IconButton;
pub use card::Card;
pub use checkbox::RowCheckbox;
