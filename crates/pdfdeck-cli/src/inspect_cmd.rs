use std::path::Path;

use pdfdeck::units::pt_to_inches;
use pdfdeck::{SourceDocument, SourcePage};

use crate::shared::open_dump;

pub fn run(input: &Path) -> Result<(), i32> {
    let doc = open_dump(input)?;
    println!("pages: {}", doc.page_count());

    for index in 0..doc.page_count() {
        let page = doc.page(index).map_err(|e| {
            eprintln!("Error reading page {}: {e}", index + 1);
            1
        })?;

        let size = page.size();
        println!(
            "\npage {}: {} x {} pt ({:.2} x {:.2} in)",
            index + 1,
            size.width,
            size.height,
            pt_to_inches(size.width),
            pt_to_inches(size.height)
        );

        let blocks = page.text_blocks().map_err(|e| {
            eprintln!("Error reading page {} text: {e}", index + 1);
            1
        })?;
        println!("  text blocks: {}", blocks.len());
        for (block_index, block) in blocks.iter().enumerate() {
            println!(
                "  block {}: ({:.1}, {:.1}, {:.1}, {:.1})",
                block_index, block.bbox.x0, block.bbox.top, block.bbox.x1, block.bbox.bottom
            );
            for line in &block.lines {
                for span in &line.spans {
                    println!(
                        "    '{}' font: {} size: {}",
                        span.text,
                        span.font.as_deref().unwrap_or("unknown"),
                        span.size
                            .map(|s| format!("{s}pt"))
                            .unwrap_or_else(|| "unknown".to_string())
                    );
                }
            }
        }

        let images = page.image_placements().map_err(|e| {
            eprintln!("Error reading page {} images: {e}", index + 1);
            1
        })?;
        println!("  images: {}", images.len());
        for (image_index, image) in images.iter().enumerate() {
            match image.rects.first() {
                Some(rect) => println!(
                    "  image {}: xref {} at ({:.1}, {:.1}) - ({:.1}, {:.1}), {:.1} x {:.1} pt",
                    image_index + 1,
                    image.xref,
                    rect.x0,
                    rect.top,
                    rect.x1,
                    rect.bottom,
                    rect.width(),
                    rect.height()
                ),
                None => println!(
                    "  image {}: xref {} (no placement)",
                    image_index + 1,
                    image.xref
                ),
            }
        }
    }

    Ok(())
}
