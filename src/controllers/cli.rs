use crate::controllers::ports::FilePresenterPort;
use crate::core::colour_map::{ColourMap, OutputMode};
use crate::core::data::colour::{Colour, NamedColour};
use crate::core::data::complex::Complex;
use crate::core::data::resolution::Resolution;
use crate::core::data::viewport::Viewport;
use crate::core::engine::parallel::generate_parallel;
use crate::core::engine::params::{FractalKind, FractalParameters};
use crate::core::sampler::sample;
use crate::core::viewport_controller::ViewportController;
use std::error::Error;
use std::fmt;
use std::io::{BufRead, Write};
use std::path::PathBuf;
use std::time::Instant;

/// Default view: the square `[-2, 2] × [-2, 2]` of the complex plane.
const DEFAULT_VIEW: (f64, f64, f64, f64) = (-2.0, -2.0, 4.0, 4.0);
const DEFAULT_ITERATIONS: u32 = 100;
const DEFAULT_DENSITY: u32 = 128;
const DEFAULT_OUTPUT: &str = "output/fractal.ppm";

#[derive(Debug, Clone, PartialEq)]
pub enum CliError {
    UnknownColourName { name: String },
    UnknownFlag { flag: String },
    MissingValue { flag: String },
    InvalidNumber { flag: String, value: String },
    InvalidComplex { value: String },
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownColourName { name } => {
                write!(f, "unknown colour name '{}'", name)
            }
            Self::UnknownFlag { flag } => write!(f, "unknown flag '{}'", flag),
            Self::MissingValue { flag } => write!(f, "flag '{}' expects a value", flag),
            Self::InvalidNumber { flag, value } => {
                write!(f, "flag '{}' expects a positive integer, got '{}'", flag, value)
            }
            Self::InvalidComplex { value } => {
                write!(f, "expected a complex parameter as RE,IM, got '{}'", value)
            }
        }
    }
}

impl Error for CliError {}

#[derive(Debug, Clone, PartialEq)]
pub struct CliOptions {
    pub kind: FractalKind,
    pub max_iterations: u32,
    pub density: u32,
    pub smoothing: bool,
    pub colours: Option<Vec<Colour>>,
    pub output_path: PathBuf,
}

impl Default for CliOptions {
    fn default() -> Self {
        Self {
            kind: FractalKind::Mandelbrot,
            max_iterations: DEFAULT_ITERATIONS,
            density: DEFAULT_DENSITY,
            smoothing: false,
            colours: None,
            output_path: PathBuf::from(DEFAULT_OUTPUT),
        }
    }
}

pub fn parse_args(args: &[String]) -> Result<CliOptions, CliError> {
    let mut options = CliOptions::default();
    let mut iter = args.iter();

    while let Some(flag) = iter.next() {
        match flag.as_str() {
            "--julia" => {
                let value = iter.next().ok_or(CliError::MissingValue {
                    flag: flag.clone(),
                })?;
                options.kind = FractalKind::Julia {
                    c: parse_complex(value)?,
                };
            }
            "--iterations" => {
                options.max_iterations = parse_positive(flag, iter.next())?;
            }
            "--density" => {
                options.density = parse_positive(flag, iter.next())?;
            }
            "--smooth" => {
                options.smoothing = true;
            }
            "--colours" => {
                let value = iter.next().ok_or(CliError::MissingValue {
                    flag: flag.clone(),
                })?;
                options.colours = Some(parse_colour_list(value)?);
            }
            "--out" => {
                let value = iter.next().ok_or(CliError::MissingValue {
                    flag: flag.clone(),
                })?;
                options.output_path = PathBuf::from(value);
            }
            unknown => {
                return Err(CliError::UnknownFlag {
                    flag: unknown.to_string(),
                });
            }
        }
    }

    Ok(options)
}

fn parse_positive(flag: &str, value: Option<&String>) -> Result<u32, CliError> {
    let value = value.ok_or(CliError::MissingValue {
        flag: flag.to_string(),
    })?;

    match value.parse::<u32>() {
        Ok(parsed) if parsed > 0 => Ok(parsed),
        _ => Err(CliError::InvalidNumber {
            flag: flag.to_string(),
            value: value.clone(),
        }),
    }
}

fn parse_complex(value: &str) -> Result<Complex, CliError> {
    let invalid = || CliError::InvalidComplex {
        value: value.to_string(),
    };

    let (real, imag) = value.split_once(',').ok_or_else(invalid)?;
    let real = real.trim().parse::<f64>().map_err(|_| invalid())?;
    let imag = imag.trim().parse::<f64>().map_err(|_| invalid())?;

    Ok(Complex { real, imag })
}

/// Parses a comma-separated list of palette colour names.
pub fn parse_colour_list(input: &str) -> Result<Vec<Colour>, CliError> {
    input
        .split(',')
        .map(|name| {
            NamedColour::from_name(name)
                .map(|colour| colour.rgb())
                .ok_or_else(|| CliError::UnknownColourName {
                    name: name.trim().to_string(),
                })
        })
        .collect()
}

/// Prompts for anchor colours until the input parses.
///
/// An unknown name or a too-short list reports the problem and asks
/// again; the session is never aborted over bad colour input.
pub fn prompt_colours<R: BufRead, W: Write>(
    reader: &mut R,
    writer: &mut W,
) -> std::io::Result<Vec<Colour>> {
    let palette: Vec<&str> = NamedColour::ALL.iter().map(|c| c.name()).collect();

    loop {
        write!(
            writer,
            "anchor colours, at least two, comma-separated ({}): ",
            palette.join(", ")
        )?;
        writer.flush()?;

        let mut line = String::new();
        if reader.read_line(&mut line)? == 0 {
            return Err(std::io::Error::new(
                std::io::ErrorKind::UnexpectedEof,
                "no colour input",
            ));
        }

        match parse_colour_list(line.trim()) {
            Ok(colours) if colours.len() >= 2 => return Ok(colours),
            Ok(_) => {
                writeln!(writer, "need at least two colours")?;
            }
            Err(err) => {
                writeln!(writer, "{}", err)?;
            }
        }
    }
}

/// One-shot render to a PPM file, the CLI collaborator's whole job.
pub struct CliController<P: FilePresenterPort> {
    presenter: P,
}

impl<P: FilePresenterPort> CliController<P> {
    pub fn new(presenter: P) -> Self {
        Self { presenter }
    }

    pub fn run(&self, options: &CliOptions, colours: &[Colour]) -> Result<(), Box<dyn Error>> {
        let (left, top, width, height) = DEFAULT_VIEW;
        let viewport = Viewport::new(left, top, width, height)?;
        let resolution = Resolution::new(
            (width * f64::from(options.density)) as u32,
            (height * f64::from(options.density)) as u32,
        )?;
        let controller = ViewportController::new(viewport, resolution)?;

        let params = FractalParameters::new(options.kind, options.max_iterations, options.smoothing)?;
        let colour_map = ColourMap::build(colours, OutputMode::RawByteTriple)?;

        println!("Rendering {:?}...", options.kind);
        println!(
            "Image size: {}x{}",
            resolution.pixels_x(),
            resolution.pixels_y()
        );
        println!("Max iterations: {}", options.max_iterations);

        let start = Instant::now();
        let grid = sample(&controller.viewport(), controller.resolution());
        let field = generate_parallel(grid, &params);
        let buffer = colour_map.evaluate_field(&field);
        let duration = start.elapsed();

        println!("Duration:   {:?}", duration);

        if let Some(parent) = options.output_path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        self.presenter.present(&buffer, &options.output_path)?;
        println!("Saved to {}", options.output_path.display());

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presenters::ppm::PpmFilePresenter;
    use std::io::Cursor;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| (*s).to_string()).collect()
    }

    #[test]
    fn test_parse_args_defaults() {
        let options = parse_args(&[]).unwrap();

        assert_eq!(options, CliOptions::default());
    }

    #[test]
    fn test_parse_args_full() {
        let options = parse_args(&args(&[
            "--julia",
            "-0.7,0.27",
            "--iterations",
            "200",
            "--density",
            "64",
            "--smooth",
            "--colours",
            "red,black",
            "--out",
            "render.ppm",
        ]))
        .unwrap();

        assert_eq!(
            options.kind,
            FractalKind::Julia {
                c: Complex {
                    real: -0.7,
                    imag: 0.27
                }
            }
        );
        assert_eq!(options.max_iterations, 200);
        assert_eq!(options.density, 64);
        assert!(options.smoothing);
        assert_eq!(
            options.colours,
            Some(vec![NamedColour::Red.rgb(), NamedColour::Black.rgb()])
        );
        assert_eq!(options.output_path, PathBuf::from("render.ppm"));
    }

    #[test]
    fn test_parse_args_rejects_unknown_flags() {
        let result = parse_args(&args(&["--wat"]));

        assert_eq!(
            result,
            Err(CliError::UnknownFlag {
                flag: "--wat".to_string()
            })
        );
    }

    #[test]
    fn test_parse_args_rejects_zero_iterations() {
        let result = parse_args(&args(&["--iterations", "0"]));

        assert_eq!(
            result,
            Err(CliError::InvalidNumber {
                flag: "--iterations".to_string(),
                value: "0".to_string()
            })
        );
    }

    #[test]
    fn test_parse_complex_rejects_malformed_input() {
        assert!(parse_complex("1.0").is_err());
        assert!(parse_complex("a,b").is_err());
        assert!(parse_complex("0.3,-0.01").is_ok());
    }

    #[test]
    fn test_parse_colour_list_names_the_offending_colour() {
        let result = parse_colour_list("red,chartreuse,black");

        assert_eq!(
            result,
            Err(CliError::UnknownColourName {
                name: "chartreuse".to_string()
            })
        );
    }

    #[test]
    fn test_prompt_colours_retries_after_unknown_name() {
        let mut input = Cursor::new("red,chartreuse\nred, black\n");
        let mut output = Vec::new();

        let colours = prompt_colours(&mut input, &mut output).unwrap();

        assert_eq!(colours, vec![NamedColour::Red.rgb(), NamedColour::Black.rgb()]);

        let transcript = String::from_utf8(output).unwrap();
        assert!(transcript.contains("unknown colour name 'chartreuse'"));
    }

    #[test]
    fn test_prompt_colours_retries_after_single_colour() {
        let mut input = Cursor::new("red\nblue,white\n");
        let mut output = Vec::new();

        let colours = prompt_colours(&mut input, &mut output).unwrap();

        assert_eq!(colours, vec![NamedColour::Blue.rgb(), NamedColour::White.rgb()]);
    }

    #[test]
    fn test_prompt_colours_reports_eof() {
        let mut input = Cursor::new("");
        let mut output = Vec::new();

        let result = prompt_colours(&mut input, &mut output);

        assert!(result.is_err());
    }

    #[test]
    fn test_run_writes_a_ppm_file() {
        let path = std::env::temp_dir().join("fractal_visualiser_cli_test.ppm");
        let options = CliOptions {
            max_iterations: 20,
            density: 8,
            output_path: path.clone(),
            ..CliOptions::default()
        };
        let colours = [NamedColour::Red.rgb(), NamedColour::Black.rgb()];

        let controller = CliController::new(PpmFilePresenter::new());
        controller.run(&options, &colours).unwrap();

        let contents = std::fs::read(&path).unwrap();
        std::fs::remove_file(&path).unwrap();

        // 32x32 pixels at 3 bytes each, after the header
        assert!(contents.starts_with(b"P6\n32 32\n255\n"));
        assert_eq!(contents.len(), b"P6\n32 32\n255\n".len() + 32 * 32 * 3);
    }
}
