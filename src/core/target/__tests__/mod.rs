pub mod pattern_test;
