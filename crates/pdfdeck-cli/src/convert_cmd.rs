use std::path::Path;

use pdfdeck::{ConvertOptions, ShadowOptions, WorkerOutcome, spawn_conversion};

use crate::shared::{BusyIndicator, open_dump};

pub fn run(input: &Path, output: &Path, shadow_tolerance: f64, quiet: bool) -> Result<(), i32> {
    let source = open_dump(input)?;

    let options = ConvertOptions {
        shadow: ShadowOptions {
            tolerance: shadow_tolerance,
            ..ShadowOptions::default()
        },
    };

    let busy = BusyIndicator::start(quiet);
    let rx = spawn_conversion(source, output.to_path_buf(), options);
    let outcome = rx.recv().map_err(|_| {
        eprintln!("Error: conversion worker terminated without a result");
        1
    });
    busy.finish();

    match outcome? {
        WorkerOutcome::Completed { report, output } => {
            println!(
                "{} page(s) -> {} slide(s): {}",
                report.page_count,
                report.slides_emitted,
                output.display()
            );
            if !report.skipped_pages.is_empty() {
                eprintln!(
                    "Warning: {} page(s) skipped; see log for details",
                    report.skipped_pages.len()
                );
            }
            Ok(())
        }
        WorkerOutcome::Failed { message } => {
            eprintln!("Error: {message}");
            Err(1)
        }
    }
}
