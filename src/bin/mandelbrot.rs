use std::time::Instant;

use clap::{App, Arg, ArgMatches};
use log::info;

use mandelbrot::output::{home_dir, resolve_output, write_png};
use mandelbrot::{RenderConfig, Renderer};

const OUTPUT: &str = "output";

fn args<'a>() -> ArgMatches<'a> {
    App::new("mandelbrot")
        .version("0.1.0")
        .author("Elf M. Sternberg <elf.sternberg@gmail.com>")
        .about("Supersampled Mandelbrot renderer")
        .arg(
            Arg::with_name(OUTPUT)
                .required(false)
                .index(1)
                .help("Output file, relative to your home directory [default: fractal.png]"),
        )
        .get_matches()
}

fn run(matches: &ArgMatches) -> Result<(), failure::Error> {
    let home = home_dir()?;
    let filename = resolve_output(&home, matches.value_of(OUTPUT));

    let start = Instant::now();
    let renderer = Renderer::new(RenderConfig::default())?;
    let frame = renderer.render()?;
    write_png(&filename, &frame)?;
    info!("Done! in {:?}", start.elapsed());
    Ok(())
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let matches = args();
    if let Err(e) = run(&matches) {
        eprintln!("Render failure: {}", e);
        std::process::exit(1);
    }
}
