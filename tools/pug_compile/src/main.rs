use flash_pug::{compile_with_settings, Dialect, GpioPin, Readings, Settings, StdFileSystem};
use getopts::{Matches, Options};
use log::LevelFilter;
use std::env::args;
use std::process::ExitCode;

const PIN_OPTIONS: [(&str, GpioPin); 6] = [
    ("led", GpioPin::Led),
    ("button", GpioPin::Button),
    ("rotate", GpioPin::Rotate),
    ("temp", GpioPin::Temp),
    ("humidity", GpioPin::Humidity),
    ("analog", GpioPin::Analog),
];

fn parse_options() -> Option<Matches> {
    let mut opts = Options::new();

    for (name, pin) in PIN_OPTIONS {
        opts.optopt(
            "",
            name,
            &format!("Reading of {}", pin.identifier()),
            "VALUE",
        );
    }

    opts.optopt("o", "output", "Output path (default: INPUT.html)", "PATH");
    opts.optopt("d", "dialect", "Initial dialect", "html|xml|none");
    opts.optflag("", "no-cycle-check", "Only reject templates including themselves");
    opts.optflag("v", "verbose", "Log compile steps");
    opts.optflag("h", "help", "Show this help");

    let matches = match opts.parse(args().skip(1)) {
        Ok(matches) => {
            if matches.opt_present("h") {
                None
            } else if matches.free.is_empty() {
                eprintln!("Missing template input");
                None
            } else {
                Some(matches)
            }
        }
        Err(e) => {
            eprintln!("{e}");
            None
        }
    };

    if matches.is_none() {
        eprintln!("{}", opts.usage("Usage: pug_compile [options] INPUT"));
    }

    matches
}

fn readings(matches: &Matches) -> Result<Readings, String> {
    let mut readings = Readings::default();

    for (name, pin) in PIN_OPTIONS {
        let value = matches
            .opt_get::<u32>(name)
            .map_err(|e| format!("Invalid --{name} reading: {e}"))?;

        if let Some(value) = value {
            readings.set(pin, value);
        }
    }

    Ok(readings)
}

fn settings(matches: &Matches) -> Result<Settings, String> {
    let dialect = match matches.opt_str("d") {
        Some(dialect) => dialect.parse::<Dialect>()?,
        None => Dialect::Unspecified,
    };

    Ok(Settings {
        dialect,
        detect_include_cycles: !matches.opt_present("no-cycle-check"),
        ..Settings::default()
    })
}

fn main() -> ExitCode {
    let Some(matches) = parse_options() else {
        return ExitCode::FAILURE;
    };

    let mut logger = env_logger::Builder::from_default_env();

    if matches.opt_present("v") {
        logger.filter_level(LevelFilter::Debug);
    }

    logger.init();

    let (readings, settings) = match readings(&matches).and_then(|r| Ok((r, settings(&matches)?))) {
        Ok(config) => config,
        Err(e) => {
            log::error!("{e}");
            return ExitCode::FAILURE;
        }
    };

    let input = &matches.free[0];
    let output = matches.opt_str("o");

    match compile_with_settings(
        &StdFileSystem,
        &readings,
        input,
        output.as_deref(),
        &settings,
    ) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e}");
            ExitCode::FAILURE
        }
    }
}
