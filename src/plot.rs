use std::error::Error;

use plotters::prelude::*;

use crate::candidates::StringFret;
use crate::fretboard::FretRange;
use crate::instrument::Instrument;

/// Label drawn next to a spot, 1-based step number. A pattern whose last
/// spot lands back exactly on its first one closes the cycle on a single
/// point, that point carries both numbers.
pub fn step_label(step: usize, pattern: &[StringFret]) -> String {
    if step == pattern.len() - 1 && pattern[step] == pattern[0] {
        format!("1, {}", step + 1)
    } else {
        format!("{}", step + 1)
    }
}

/// X axis runs two frets past the area on both sides, clamped at the nut.
pub fn plot_fret_bounds(range: FretRange) -> (i32, i32) {
    let start = if range.start - 2 < 0 { 0 } else { range.start - 2 };
    (start, range.stop + 2)
}

pub fn draw_pattern(
    plot_name: &str,
    pattern: &[StringFret],
    instrument: &Instrument,
    range: FretRange,
) -> Result<(), Box<dyn Error>> {
    let root = BitMapBackend::new(plot_name, (1024, 768)).into_drawing_area();
    root.fill(&WHITE)?;

    let (x_start, x_stop) = plot_fret_bounds(range);
    let num_strings = instrument.strings.len() as i32;

    let mut chart = ChartBuilder::on(&root)
        .set_label_area_size(LabelAreaPosition::Left, 60)
        .set_label_area_size(LabelAreaPosition::Bottom, 60)
        .caption("Area of activity", ("sans-serif", 40))
        .build_cartesian_2d(x_start..x_stop + 1, -(num_strings + 1)..0)?;

    chart
        .configure_mesh()
        .x_label_formatter(&|x| x.to_string())
        .y_label_formatter(&|y| {
            let string = -*y;
            if string >= 1 && string <= num_strings {
                instrument.string(string as usize).name.to_string()
            } else {
                String::new()
            }
        })
        .draw()?;

    chart.draw_series(pattern.iter().enumerate().map(|(step, spot)| {
        EmptyElement::at((spot.fret, -(spot.string as i32)))
            + Circle::new((0, 0), 6, BLUE.filled())
            + Text::new(
                step_label(step, pattern),
                (8, -16),
                ("sans-serif", 18.0).into_font(),
            )
    }))?;

    // To avoid the IO failure being ignored silently, we manually call the present function
    root.present()?;
    println!("Pattern plot saved to {plot_name}");
    Ok(())
}
