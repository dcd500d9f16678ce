use super::*;

mod starting_position;
