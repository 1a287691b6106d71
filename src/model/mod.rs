//! Pure data structures for the order desk: money, menu, orders and the session log.

pub mod menu;
pub mod money;
pub mod order;
pub mod order_log;
pub mod shop;

pub use menu::*;
pub use money::*;
pub use order::*;
pub use order_log::*;
pub use shop::*;
