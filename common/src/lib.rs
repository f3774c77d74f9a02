//! Wire vocabulary shared between the host controller and the belt firmware.

pub mod packet;
pub mod physical;
pub mod servo;
