use std::fs::File;
use std::io::{Error, Write};
use std::path::Path;

/// Writes a script that adds `rows` uniquely named basic items.
pub fn generate_add_script(path: &Path, rows: usize) -> Result<(), Error> {
    let mut file = File::create(path)?;
    for i in 1..=rows {
        writeln!(file, "add,Basic,Item {},{},1.00", i, i)?;
    }
    file.flush()?;
    Ok(())
}

/// Writes an inventory file in the flat `type,name,quantity,price` format.
pub fn write_inventory(path: &Path, lines: &[&str]) -> Result<(), Error> {
    let mut file = File::create(path)?;
    for line in lines {
        writeln!(file, "{}", line)?;
    }
    file.flush()?;
    Ok(())
}
