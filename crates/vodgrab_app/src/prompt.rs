//! Interactive episode selection.

use std::io::{self, BufRead, Write};

use vodgrab_core::parse_selection;
use vodgrab_engine::Episode;

const SEPARATOR: &str = "----------------------------------------";

/// Lists the harvested episodes and reads selections from stdin until
/// at least one episode is chosen. Returns `None` when the input stream
/// closes (operator cancelled), before any download has started.
pub fn choose_episodes(episodes: &[Episode]) -> Option<Vec<Episode>> {
    println!("{SEPARATOR}\nEpisodes found:\n{SEPARATOR}");
    for (index, episode) in episodes.iter().enumerate() {
        println!("{:>3}.   {}", index + 1, episode.title);
    }
    println!("{SEPARATOR}\nEnter episode/s to download:");
    println!("Examples:  all | 1 | 1,3,5 | 2-8 | 1,4-6,10\n{SEPARATOR}");

    let stdin = io::stdin();
    loop {
        print!("\n>> Selection: ");
        let _ = io::stdout().flush();

        let mut line = String::new();
        match stdin.lock().read_line(&mut line) {
            Ok(0) | Err(_) => {
                println!();
                return None;
            }
            Ok(_) => {}
        }

        let picked = parse_selection(&line, episodes.len());
        if picked.is_empty() {
            println!("Invalid selection, try again.");
            continue;
        }

        let listed = picked
            .iter()
            .map(|index| (index + 1).to_string())
            .collect::<Vec<_>>()
            .join(", ");
        println!("{} episode/s selected: {listed}\n", picked.len());
        return Some(picked.into_iter().map(|index| episodes[index].clone()).collect());
    }
}
