pub mod room;
pub mod seat;

pub use room::Room;
pub use seat::{SeatRecord, SeatSnapshot};
