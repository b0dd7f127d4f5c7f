mod fetcher;

use std::io::{self, Write};

use fetcher::{FetchError, Fetcher, Saved, DEFAULT_SAVE_DIR};

fn main() {
    println!("Welcome to the Ubuntu Image Fetcher");
    println!("A tool for mindfully collecting images from the web\n");

    print!("Please enter image URL(s) (comma-separated for multiple): ");
    let _ = io::stdout().flush();

    let mut line = String::new();
    let _ = io::stdin().read_line(&mut line);

    let fetcher = Fetcher::new(DEFAULT_SAVE_DIR);

    for url in line.trim_end_matches(['\r', '\n']).split(',') {
        let url = url.trim();

        report(url, fetcher.fetch(url));
    }

    println!("\nConnection strengthened. Community enriched.");
}

fn report(url: &str, result: Result<Saved, FetchError>) {
    match result {
        Ok(saved) => {
            println!("✓ Successfully fetched: {}", saved.file_name);
            println!("✓ Image saved to {}", saved.path.display());
        }

        Err(FetchError::NotImage) => println!("✗ Skipping URL (not an image): {url}"),

        Err(FetchError::Duplicate(file_name)) => {
            println!("⚠️ Duplicate detected, skipping: {file_name}")
        }

        Err(err @ (FetchError::Connection(_) | FetchError::InvalidUrl)) => {
            println!("✗ Connection error: {err}")
        }

        Err(err) => println!("✗ An error occurred: {err}"),
    }
}
