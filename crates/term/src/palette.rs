//! Colour classes to terminal styles.

use crate::fb::{CellStyle, Rgb};
use crate::types::ColorClass;

const BLACK: Rgb = Rgb::new(0, 0, 0);
const RED: Rgb = Rgb::new(220, 60, 60);
const GREEN: Rgb = Rgb::new(80, 200, 100);
const YELLOW: Rgb = Rgb::new(235, 210, 80);
const BLUE: Rgb = Rgb::new(70, 110, 230);
const MAGENTA: Rgb = Rgb::new(200, 100, 210);
const CYAN: Rgb = Rgb::new(80, 210, 220);
const WHITE: Rgb = Rgb::new(230, 230, 230);
const GREY: Rgb = Rgb::new(170, 170, 170);

/// Style for a colour class. Unknown classes fall back to the default style.
pub fn style_for(class: ColorClass) -> CellStyle {
    match class.value() {
        1 => CellStyle::new(GREEN, BLACK),
        2 => CellStyle::new(YELLOW, BLACK),
        3 => CellStyle::new(BLUE, BLACK),
        4 => CellStyle::new(MAGENTA, BLACK),
        5 => CellStyle::new(CYAN, BLACK),
        6 => CellStyle::new(WHITE, BLACK),
        7 => CellStyle::new(RED, BLACK),
        // Inverted pairs for the two highest food values.
        8 => CellStyle::new(WHITE, BLUE),
        9 => CellStyle::new(BLACK, GREEN),
        10 => CellStyle::new(RED, BLACK).bold(),
        11 => CellStyle::new(YELLOW, BLACK),
        0 => CellStyle::new(GREY, BLACK),
        _ => CellStyle::default(),
    }
}
