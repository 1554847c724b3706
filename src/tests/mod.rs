pub mod utils;

mod debounce_tests;
