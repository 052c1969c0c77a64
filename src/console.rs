//! Interactive console session: set the form fields with `name`, `male` and
//! `female`, then fire actions with `submit`, `save` and `clear`.
use std::io::{self, Write};

use crate::{models::Selection, predict::Predict, render::Regions, state::Session};

pub async fn run<P: Predict>(session: &mut Session<P>) -> io::Result<()> {
    println!("namecast - gender prediction for names");
    println!("Commands: name <text>, male, female, submit, save, clear, show, quit");

    let mut name = String::new();
    let mut selection = Selection::default();

    loop {
        print!("> ");
        io::stdout().flush()?;

        let mut line = String::new();
        if io::stdin().read_line(&mut line)? == 0 {
            break;
        }

        let input = line.trim();
        let (command, rest) = match input.split_once(char::is_whitespace) {
            Some((head, tail)) => (head, tail.trim()),
            None => (input, ""),
        };

        match command {
            "" => continue,
            "quit" | "exit" => break,
            "name" => {
                name = rest.to_string();
                println!("name: {name}");
                continue;
            }
            "male" => {
                selection.male = !selection.male;
                println!("male: {}", selection.male);
                continue;
            }
            "female" => {
                selection.female = !selection.female;
                println!("female: {}", selection.female);
                continue;
            }
            "submit" => session.submit(&name).await,
            "save" => session.save(&name, selection),
            "clear" => session.clear(&name),
            "show" => {}
            _ => {
                println!("Unknown command: {command}");
                continue;
            }
        }

        print_regions(&session.regions);
    }

    Ok(())
}

pub fn print_regions(regions: &Regions) {
    if !regions.error.is_empty() {
        println!("! {}", regions.error);
    }

    if !regions.result.is_empty() {
        println!("{}", regions.result);
    }

    if !regions.saved.is_empty() {
        println!("{}", regions.saved);
    }

    if regions.error.is_empty() && regions.result.is_empty() && regions.saved.is_empty() {
        println!("(nothing to show)");
    }
}
