mod test_console;
mod test_invariants;
mod test_path_search;
