pub mod log_capture;
