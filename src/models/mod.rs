pub mod ack;
pub mod activity;
pub mod challenge;
pub mod statistics;
pub mod user;

pub use ack::*;
pub use activity::*;
pub use challenge::*;
pub use statistics::*;
pub use user::*;
