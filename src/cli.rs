use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
///Chromatic scale pattern finder
pub struct Args {
    #[arg(short = 'a', long, default_value_t = 2)]
    ///First fret of the area of activity
    pub fret_start: i32,

    #[arg(short = 'b', long, default_value_t = 5)]
    ///Last fret of the area of activity
    pub fret_stop: i32,

    #[arg(short, long, default_value_t = 11)]
    ///Starting note, 0 is C and 11 is B
    pub start_note: i32,

    #[arg(short, long, default_value = "ascend")]
    ///Direction of the scale: ascend, descend
    pub direction: String,

    ///Reference pattern to look for, as string,fret pairs
    #[arg(
        short,
        long,
        default_value = "5,2 3,5 5,4 2,3 2,4 4,2 4,3 1,2 1,3 6,4 6,5 3,3 3,4"
    )]
    pub target: String,

    #[arg(short, long, default_value_t = 44100)]
    ///Sampling frequency in Hz
    pub fs: u32,

    #[arg(short, long, default_value_t = 0.2)]
    ///Duration of each note in seconds
    pub note_duration: f32,

    #[arg(short, long, default_value_t = 5)]
    ///Times to repeat the pattern, every repeat a half step further
    pub cycles: usize,

    #[arg(short, long, default_value = "pattern.png")]
    ///Output file for the fretboard plot
    pub plot_name: String,

    #[arg(short, long)]
    ///Write the rendered pattern to this wav file
    pub wav_name: Option<String>,

    #[arg(short, long)]
    ///Skip audio playback
    pub mute: bool,

    #[arg(long)]
    ///Print every possible pattern instead of searching for one
    pub dump: bool,
}
