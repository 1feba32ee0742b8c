use clap::Parser;
use employerscreen::cli::commands::Cli;
use employerscreen::EmployerScreen;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let screen = match EmployerScreen::new(cli.config()) {
        Ok(screen) => screen,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    };

    match screen.run().await {
        Ok(summary) => {
            println!("{}", serde_json::to_string_pretty(&summary).unwrap());
        }
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    }
}
