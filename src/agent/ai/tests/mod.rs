mod evaluation_tests;
mod move_ordering_tests;
