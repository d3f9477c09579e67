//! Layouts command implementation.

use crate::discovery::Manifest;
use crate::error::Result;
use crate::output::{plural, Printer};

pub fn run(manifest: &Manifest, printer: &Printer) -> Result<()> {
    for layout in manifest.layout_registry().iter() {
        let marker = if layout.name == manifest.layout { " (default)" } else { "" };
        printer.info(
            &layout.name,
            &format!("{}{}", plural(layout.slot_count(), "slot", "slots"), printer.dim(marker)),
        );
    }
    Ok(())
}
