mod config_tests;
mod fcm_client_tests;
