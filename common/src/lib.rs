pub mod place;
pub mod services;
pub mod shapes;

pub use place::Place;
pub use services::{ServiceBit, ServiceMask, ServiceTag, ServiceType};
pub use shapes::{Circle, Rectangle, Shape};
