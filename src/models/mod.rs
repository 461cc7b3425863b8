pub mod booking;
pub mod guest;
pub mod room;
pub mod service;
pub mod staff;
