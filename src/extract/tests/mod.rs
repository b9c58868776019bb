mod entities_tests;
mod property_tests;
