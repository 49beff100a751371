pub fn run() -> anyhow::Result<()> {
    println!("minirag {}", env!("CARGO_PKG_VERSION"));
    println!("Local TF-IDF retrieval for prompt grounding");
    Ok(())
}
