mod date_input_tests;
mod derive_tests;
mod mock;
mod roster_tests;
