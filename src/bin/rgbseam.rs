use clap::{App, Arg, ArgMatches};
use failure::{format_err, Error, ResultExt};
use log::info;
use rgbseam::{compute_energy, energy_to_image, load_image, save_image, SeamCarver, SeamError};
use std::process;

// The number of seams removed when neither --seams nor --width is given.
const DEFAULT_SEAMS: usize = 200;

fn init_logging(verbosity: u64) {
    let level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}

fn parse_count(matches: &ArgMatches, name: &str) -> Result<Option<usize>, Error> {
    match matches.value_of(name) {
        None => Ok(None),
        Some(v) => v
            .parse::<usize>()
            .map(Some)
            .map_err(|_| format_err!("--{} expects a non-negative integer, got {:?}", name, v)),
    }
}

fn run(matches: &ArgMatches) -> Result<(), Error> {
    let input = matches.value_of("input").unwrap_or_default();
    let output = matches.value_of("output").unwrap_or_default();

    let image = load_image(input).with_context(|_| format!("reading {}", input))?;
    info!("{}: {}x{}", input, image.width(), image.height());

    if let Some(path) = matches.value_of("energy") {
        energy_to_image(&compute_energy(&image)?)?
            .save(path)
            .map_err(SeamError::from)
            .with_context(|_| format!("writing {}", path))?;
        info!("energy map written to {}", path);
    }

    let mut carver = SeamCarver::new(image);
    match parse_count(matches, "width")? {
        Some(width) => carver.carve_to_width(width)?,
        None => {
            let seams = parse_count(matches, "seams")?.unwrap_or(DEFAULT_SEAMS);
            carver.carve_seams(seams)?
        }
    };

    save_image(carver.image(), output).with_context(|_| format!("writing {}", output))?;
    Ok(())
}

fn main() {
    let matches = App::new("rgbseam")
        .version("0.1.0")
        .author("Elf M. Sternberg <elf.sternberg@gmail.com>")
        .about("Narrow an image by removing its lowest-energy vertical seams")
        .arg(
            Arg::with_name("input")
                .help("The image to carve (.bin for a bare RGB raster)")
                .required(true)
                .index(1),
        )
        .arg(
            Arg::with_name("output")
                .help("Where to write the carved image")
                .required(true)
                .index(2),
        )
        .arg(
            Arg::with_name("seams")
                .short("n")
                .long("seams")
                .takes_value(true)
                .help("Number of vertical seams to remove [default: 200]"),
        )
        .arg(
            Arg::with_name("width")
                .short("w")
                .long("width")
                .takes_value(true)
                .conflicts_with("seams")
                .help("Carve until the image is this many columns wide"),
        )
        .arg(
            Arg::with_name("energy")
                .long("energy")
                .takes_value(true)
                .value_name("PATH")
                .help("Also write the input's energy map as a greyscale image"),
        )
        .arg(
            Arg::with_name("verbose")
                .short("v")
                .multiple(true)
                .help("More logging; repeat for more detail"),
        )
        .get_matches();

    init_logging(matches.occurrences_of("verbose"));

    if let Err(err) = run(&matches) {
        let causes: Vec<String> = err.iter_chain().map(|c| c.to_string()).collect();
        eprintln!("rgbseam: {}", causes.join(": "));
        process::exit(1);
    }
}
