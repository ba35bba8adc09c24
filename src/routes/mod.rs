pub mod health_check;
pub mod home;
pub mod workouts;

pub use health_check::*;
pub use home::*;
pub use workouts::*;
