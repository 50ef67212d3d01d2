pub mod fastlibm;
