use anyhow::Result;

pub fn execute() -> Result<()> {
    println!("pimon version {}", env!("CARGO_PKG_VERSION"));
    Ok(())
}
