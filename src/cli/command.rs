use colored::*;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::{Path, PathBuf};

use crate::{
    config::BuildConfig,
    image::{self, AssemblyReport, ImageReport, ASSEMBLY_STEPS},
    logging,
    utils::human_size,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Build { config: BuildConfig, quiet: bool },
    Inspect(PathBuf),
}

pub fn execute_command(cmd: &Command) -> image::Result<()> {
    match cmd {
        Command::Build { config, quiet } => {
            let pb = if *quiet {
                ProgressBar::hidden()
            } else {
                logging::step(&format!(
                    "🔧 Building {}",
                    config.output.display().to_string().cyan()
                ));
                progress_bar()
            };

            let result = image::assemble(config, &pb);
            match &result {
                Ok(_) => pb.finish_and_clear(),
                Err(_) => pb.abandon(),
            }
            let report = result?;

            if !quiet {
                print_build_summary(config, &report);
            }
        }
        Command::Inspect(path) => {
            let report = image::inspect(path)?;
            print_image_report(path, &report);
        }
    }

    Ok(())
}

fn progress_bar() -> ProgressBar {
    let pb = ProgressBar::new(ASSEMBLY_STEPS);
    pb.set_style(
        ProgressStyle::with_template("[{bar:40.cyan/blue}] {pos}/{len} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("=> "),
    );
    pb
}

fn print_build_summary(config: &BuildConfig, report: &AssemblyReport) {
    let ramdisk = if report.header.length == 0 {
        "none".bright_black().to_string()
    } else {
        format!(
            "{} @ {:#x} ({} sectors with header)",
            human_size(report.header.payload_len()),
            report.layout.payload().start,
            report.header.sectors
        )
    };
    let kernel_note = if report.kernel_truncated {
        " truncated".yellow().to_string()
    } else {
        String::new()
    };

    println!(
        "{}: {} ({}){}",
        "Kernel".blue(),
        config.kernel.display(),
        human_size(report.kernel_len),
        kernel_note
    );
    println!("{}: {}", "Ramdisk".blue(), ramdisk);
    println!("{}: {} bytes", "Image".blue(), report.image_len);
    logging::success(&format!("✅ Wrote {}", config.output.display()));
}

fn print_image_report(path: &Path, report: &ImageReport) {
    let kernel = report.layout.kernel();
    let payload = report.layout.payload();

    println!("{}", "📊 Image Info".bright_yellow().bold());
    println!("{}: {}", "File".blue(), path.display());
    println!("{}: {} bytes", "Size".blue(), report.file_len);
    println!(
        "{}: {:#010x} - {:#010x}",
        "Kernel".blue(),
        kernel.start,
        kernel.end
    );
    println!("{}: {}", "Header".blue(), report.header);
    if payload.is_empty() {
        println!("{}: {}", "Ramdisk".blue(), "none".bright_black());
    } else {
        println!(
            "{}: {:#010x} - {:#010x} ({})",
            "Ramdisk".blue(),
            payload.start,
            payload.end,
            human_size(report.header.payload_len())
        );
    }

    if report.is_padded() {
        logging::success(&format!("✅ Padded with {}", human_size(report.trailing_len)));
    } else {
        logging::warn(&format!(
            "only {} after the ramdisk, some BIOSes reject images this small",
            human_size(report.trailing_len)
        ));
    }
}
