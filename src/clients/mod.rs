pub mod fcm;
