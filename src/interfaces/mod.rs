pub mod console;
pub mod flat_file;
pub mod numbered_lines;
pub mod script;
