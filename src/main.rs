use std::process;

use clap::Parser;

use oktavistika::audio;
use oktavistika::candidates;
use oktavistika::cli::Args;
use oktavistika::config::SearchConfig;
use oktavistika::fretboard;
use oktavistika::instrument::note_name;
use oktavistika::patterns::{self, SearchResult, EAGER_CAP};
use oktavistika::plot;

fn main() {
    let args = Args::parse();

    let config = match SearchConfig::from_args(&args) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Bad configuration: {e}");
            process::exit(1);
        }
    };

    let area = fretboard::map_area(&config.instrument, config.range);
    let combos = candidates::step_candidates(config.start_note, config.direction, &area);

    println!(
        "Area of activity: frets {} to {}, {}ing chromatically from {}",
        config.range.start,
        config.range.stop,
        config.direction,
        note_name(config.start_note)
    );
    println!(
        "There are {} different patterns",
        patterns::combination_count(&combos)
    );

    if args.dump {
        match patterns::collect_patterns(&combos, EAGER_CAP) {
            Ok(all) => {
                for (index, pattern) in all.iter().enumerate() {
                    let spots: Vec<String> = pattern.iter().map(|s| s.to_string()).collect();
                    println!("{index}: {}", spots.join(" "));
                }
            }
            Err(e) => {
                eprintln!("{e}");
                process::exit(1);
            }
        }
        return;
    }

    let (index, pattern) = match patterns::find_pattern(&combos, &config.target) {
        SearchResult::Found { index, pattern } => (index, pattern),
        SearchResult::NotFound => {
            println!("The target pattern is not playable in this area");
            return;
        }
        SearchResult::NoPatterns { step } => {
            println!(
                "No spot in the area sounds the note of step {}, there are no patterns at all",
                step + 1
            );
            return;
        }
    };

    println!("The target pattern is at index {index}");

    plot::draw_pattern(&args.plot_name, &pattern, &config.instrument, config.range)
        .expect("Unable to write the plot, make sure the output dir exists");

    let buffer = audio::render_pattern(
        &pattern,
        &config.instrument,
        args.fs,
        args.note_duration,
        args.cycles,
        config.direction,
    );

    if let Some(wav_name) = &args.wav_name {
        audio::write_wav(wav_name, &buffer, args.fs).expect("Can't write the wav file");
        println!("Pattern audio saved to {wav_name}");
    }

    if !args.mute {
        audio::play(buffer, args.fs).expect("Can't open the audio output");
    }
}
