use anyhow::Result;

pub fn run_version() -> Result<()> {
    println!("url2anki {}", env!("CARGO_PKG_VERSION"));
    Ok(())
}
