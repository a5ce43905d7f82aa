use std::io::BufReader;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let options = fractal_visualiser::parse_args(&args)?;

    let colours = match &options.colours {
        Some(colours) => colours.clone(),
        None => {
            let mut stdin = BufReader::new(std::io::stdin());
            let mut stdout = std::io::stdout();
            fractal_visualiser::prompt_colours(&mut stdin, &mut stdout)?
        }
    };

    let presenter = fractal_visualiser::PpmFilePresenter::new();
    let controller = fractal_visualiser::CliController::new(presenter);

    controller.run(&options, &colours)?;

    Ok(())
}
