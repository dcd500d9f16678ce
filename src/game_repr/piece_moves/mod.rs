mod king;
mod man;
