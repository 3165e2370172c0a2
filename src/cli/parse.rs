use clap::{crate_version, value_parser, Arg, ArgAction, ArgMatches};
use std::path::PathBuf;

use crate::{
    cli::command::Command,
    config::{BuildConfig, IMAGE_PATH, KERNEL_PATH, RAMDISK_PATH},
};

fn build_args() -> [Arg; 4] {
    [
        Arg::new("kernel")
            .short('k')
            .long("kernel")
            .value_name("KERNEL")
            .value_parser(value_parser!(PathBuf))
            .help(format!("Kernel image to place in the first 512 KB [default: {}]", KERNEL_PATH)),
        Arg::new("ramdisk")
            .short('r')
            .long("ramdisk")
            .value_name("RAMDISK")
            .value_parser(value_parser!(PathBuf))
            .help(format!("Ramdisk image, skipped if missing [default: {}]", RAMDISK_PATH)),
        Arg::new("output")
            .short('o')
            .long("output")
            .value_name("IMAGE")
            .value_parser(value_parser!(PathBuf))
            .help(format!("Disk image to write [default: {}]", IMAGE_PATH)),
        Arg::new("quiet")
            .short('q')
            .long("quiet")
            .action(ArgAction::SetTrue)
            .help("Only print errors"),
    ]
}

pub fn build_cli() -> clap::Command {
    clap::Command::new("cute-hdimage")
        .version(crate_version!())
        .about("Build the Cute kernel hard-disk image")
        .args_conflicts_with_subcommands(true)
        .args(build_args())
        .subcommand(
            clap::Command::new("build")
                .about("Assemble kernel, ramdisk header, ramdisk and padding (default)")
                .args(build_args()),
        )
        .subcommand(
            clap::Command::new("inspect")
                .about("Check the ramdisk header of an existing image")
                .arg(
                    Arg::new("image")
                        .value_name("IMAGE")
                        .value_parser(value_parser!(PathBuf))
                        .default_value(IMAGE_PATH),
                ),
        )
}

pub fn parse_command(matches: &ArgMatches) -> Command {
    match matches.subcommand() {
        Some(("inspect", sub)) => Command::Inspect(
            sub.get_one::<PathBuf>("image")
                .cloned()
                .unwrap_or_else(|| PathBuf::from(IMAGE_PATH)),
        ),
        Some(("build", sub)) => parse_build(sub),
        _ => parse_build(matches),
    }
}

fn parse_build(matches: &ArgMatches) -> Command {
    let path = |name: &str| matches.get_one::<PathBuf>(name).cloned();

    Command::Build {
        config: BuildConfig::with_overrides(path("kernel"), path("ramdisk"), path("output")),
        quiet: matches.get_flag("quiet"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Command {
        let matches = build_cli().try_get_matches_from(args).unwrap();
        parse_command(&matches)
    }

    #[test]
    fn no_arguments_builds_with_defaults() {
        assert_eq!(
            parse(&["cute-hdimage"]),
            Command::Build {
                config: BuildConfig::default(),
                quiet: false
            }
        );
    }

    #[test]
    fn top_level_flags_override_paths() {
        let cmd = parse(&["cute-hdimage", "-k", "vmlinux", "--output", "disk.img", "-q"]);
        assert_eq!(
            cmd,
            Command::Build {
                config: BuildConfig {
                    kernel: PathBuf::from("vmlinux"),
                    ramdisk: PathBuf::from(RAMDISK_PATH),
                    output: PathBuf::from("disk.img"),
                },
                quiet: true
            }
        );
    }

    #[test]
    fn build_subcommand_accepts_same_flags() {
        let cmd = parse(&["cute-hdimage", "build", "--ramdisk", "rd.img"]);
        match cmd {
            Command::Build { config, quiet } => {
                assert_eq!(config.ramdisk, PathBuf::from("rd.img"));
                assert!(!quiet);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn inspect_defaults_to_conventional_image() {
        assert_eq!(
            parse(&["cute-hdimage", "inspect"]),
            Command::Inspect(PathBuf::from(IMAGE_PATH))
        );
        assert_eq!(
            parse(&["cute-hdimage", "inspect", "other.img"]),
            Command::Inspect(PathBuf::from("other.img"))
        );
    }

    #[test]
    fn unknown_flag_is_rejected() {
        assert!(build_cli()
            .try_get_matches_from(["cute-hdimage", "--bogus"])
            .is_err());
    }

    #[test]
    fn cli_definition_is_consistent() {
        build_cli().debug_assert();
    }
}
