//! Format discovery command

use anyhow::Result;
use vidstore_statements::RendererRegistry;

pub fn run() -> Result<()> {
    let registry = RendererRegistry::with_defaults();

    println!("{:<10} {:<6} {}", "FORMAT", "EXT", "MIME TYPE");
    println!("{}", "-".repeat(40));
    for name in registry.formats() {
        let renderer = registry.resolve(name);
        println!(
            "{:<10} {:<6} {}",
            name,
            renderer.extension(),
            renderer.mime_type()
        );
    }

    Ok(())
}
