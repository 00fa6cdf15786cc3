pub mod codec_test;
