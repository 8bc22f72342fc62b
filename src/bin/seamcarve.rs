use std::process::ExitCode;

use clap::{Arg, ArgAction, ArgMatches, Command};
use log::error;

use seamcarve::{energy_map, energy_to_image, seamcarve, Picture};

fn main() -> ExitCode {
    let matches = Command::new("seamcarve")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Content-aware image resizing by seam carving")
        .arg(
            Arg::new("input")
                .help("The image to carve")
                .required(true)
                .index(1),
        )
        .arg(
            Arg::new("output")
                .short('o')
                .long("output")
                .help("Where to write the result")
                .required(true),
        )
        .arg(
            Arg::new("width")
                .short('w')
                .long("width")
                .value_parser(clap::value_parser!(usize))
                .help("Target width in pixels (default: unchanged)"),
        )
        .arg(
            Arg::new("height")
                .short('H')
                .long("height")
                .value_parser(clap::value_parser!(usize))
                .help("Target height in pixels (default: unchanged)"),
        )
        .arg(
            Arg::new("energy")
                .long("energy")
                .action(ArgAction::SetTrue)
                .help("Write the energy map as a grayscale image instead of carving"),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .action(ArgAction::SetTrue)
                .help("Log each removed seam"),
        )
        .get_matches();

    env_logger::Builder::new()
        .filter_level(if matches.get_flag("verbose") {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Warn
        })
        .init();

    if let Err(err) = run(&matches) {
        error!("{err}");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}

fn run(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    let input = matches.get_one::<String>("input").unwrap();
    let output = matches.get_one::<String>("output").unwrap();

    let source = image::open(input)?.to_rgb8();
    let mut picture = Picture::from(&source);

    if matches.get_flag("energy") {
        energy_to_image(&energy_map(&picture)).save(output)?;
        return Ok(());
    }

    let new_width = matches
        .get_one::<usize>("width")
        .copied()
        .unwrap_or_else(|| picture.width());
    let new_height = matches
        .get_one::<usize>("height")
        .copied()
        .unwrap_or_else(|| picture.height());

    seamcarve(&mut picture, new_width, new_height)?;
    picture.to_image().save(output)?;
    Ok(())
}
