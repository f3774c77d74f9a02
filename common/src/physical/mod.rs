mod pwm;

pub use pwm::*;
