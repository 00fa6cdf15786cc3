pub mod encoder_test;
pub mod patterns_test;
