use std::error::Error;
use std::f32::consts::PI;
use std::fs::File;
use std::path::Path;

use rodio::buffer::SamplesBuffer;
use rodio::{OutputStream, Sink};

use crate::candidates::StringFret;
use crate::config::Direction;
use crate::instrument::Instrument;

pub fn hann_window(n: usize) -> Vec<f32> {
    let mut out: Vec<f32> = Vec::with_capacity(n);
    for i in 0..n {
        out.push(0.5 - 0.5 * (2.0 * PI * i as f32 / n as f32).cos());
    }
    out
}

/// Frequency of a string stopped at a fret, equal temperament.
pub fn spot_frequency(instrument: &Instrument, spot: StringFret) -> f32 {
    instrument.string(spot.string).open_freq * 2.0f32.powf(spot.fret as f32 / 12.0)
}

/// Render the matched pattern as one windowed sine per step. Every cycle
/// plays the whole pattern again with the frets shifted one more half step
/// up (ascend) or down (descend), sliding the area along the neck.
pub fn render_pattern(
    pattern: &[StringFret],
    instrument: &Instrument,
    fs: u32,
    note_duration: f32,
    cycles: usize,
    direction: Direction,
) -> Vec<i16> {
    let note_len = (note_duration * fs as f32) as usize;
    let window = hann_window(note_len);
    let mut buffer: Vec<i16> = Vec::with_capacity(note_len * pattern.len() * cycles);

    for cycle in 0..cycles {
        let shift = direction.step() * cycle as i32;
        for spot in pattern {
            let shifted = StringFret::new(spot.string, spot.fret + shift);
            let freq = spot_frequency(instrument, shifted);
            for t in 0..note_len {
                let angle = 2.0 * PI * t as f32 * freq / fs as f32;
                buffer.push((angle.sin() * window[t] * i16::MAX as f32) as i16);
            }
        }
    }

    buffer
}

pub fn play(buffer: Vec<i16>, fs: u32) -> Result<(), Box<dyn Error>> {
    let (_stream, handle) = OutputStream::try_default()?;
    let sink = Sink::try_new(&handle)?;
    sink.append(SamplesBuffer::new(1, fs, buffer));
    sink.sleep_until_end();
    Ok(())
}

pub fn write_wav(wav_name: &str, buffer: &[i16], fs: u32) -> Result<(), Box<dyn Error>> {
    let header = wav::Header::new(wav::WAV_FORMAT_PCM, 1, fs, 16);
    let mut file = File::create(Path::new(wav_name))?;
    wav::write(header, &wav::BitDepth::Sixteen(buffer.to_vec()), &mut file)?;
    Ok(())
}
