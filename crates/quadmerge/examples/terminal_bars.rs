//! Animated terminal rendering of a paced four-way parallel sort.
//!
//! Each observer notification redraws the array as one row of bar heights,
//! with the two elements currently being compared marked. Run with:
//!
//! ```text
//! cargo run --example terminal_bars
//! ```

use std::io::{self, Write};
use std::sync::Mutex;
use std::time::Duration;

use quadmerge::prelude::*;
use rand::seq::SliceRandom;
use rand::SeedableRng;

/// Observer that redraws the array as vertical bars on every notification.
struct BarObserver {
    // Serializes frames from the four workers so rows never interleave.
    out: Mutex<io::Stdout>,
    max: u32,
}

impl ProgressObserver<u32> for BarObserver {
    fn report(&self, values: &[u32], first: Option<u32>, second: Option<u32>) {
        let mut out = match self.out.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        let mut line = String::with_capacity(values.len() * 3);
        for &v in values {
            let marked = Some(v) == first || Some(v) == second;
            let glyph = bar_glyph(v, self.max);
            if marked {
                line.push('[');
                line.push(glyph);
                line.push(']');
            } else {
                line.push(' ');
                line.push(glyph);
                line.push(' ');
            }
        }
        let phase = if first.is_none() && second.is_none() {
            "merge"
        } else {
            "cmp  "
        };
        let _ = writeln!(out, "{phase} |{line}|");
    }
}

/// Map a value to one of eight block glyphs by relative height.
fn bar_glyph(value: u32, max: u32) -> char {
    const BLOCKS: [char; 8] = ['▁', '▂', '▃', '▄', '▅', '▆', '▇', '█'];
    let bucket = ((value.saturating_sub(1)) * 8 / max.max(1)).min(7) as usize;
    BLOCKS[bucket]
}

fn main() -> Result<(), SortError> {
    env_logger::init();

    let mut rng = rand::rngs::StdRng::seed_from_u64(7);
    let mut values: Vec<u32> = (1..=30).collect();
    values.shuffle(&mut rng);

    let observer = BarObserver {
        out: Mutex::new(io::stdout()),
        max: 30,
    };

    let report = Sorter::new()
        .delay(Duration::from_millis(25))
        .build()?
        .sort(&mut values, &observer)?;

    println!("{report}");
    assert!(values.windows(2).all(|w| w[0] <= w[1]));
    Ok(())
}
