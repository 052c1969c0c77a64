use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Fetch a gender prediction for a name
    Predict { name: Vec<String> },

    /// Persist a gender for a name
    Save {
        name: Vec<String>,

        #[arg(long)]
        male: bool,

        #[arg(long)]
        female: bool,
    },

    /// Delete the saved record for a name
    Clear { name: Vec<String> },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    match args.command {
        None => namecast::interactive().await,
        Some(Command::Predict { name }) => namecast::predict_once(name.join(" ")).await,
        Some(Command::Save { name, male, female }) => {
            namecast::save_once(name.join(" "), male, female)
        }
        Some(Command::Clear { name }) => namecast::clear_once(name.join(" ")),
    }
}
