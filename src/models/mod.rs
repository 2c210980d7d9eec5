pub mod fcm;
pub mod notification;
pub mod sample;
pub mod validation;
