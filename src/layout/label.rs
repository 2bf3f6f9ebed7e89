//! Label placement: the label box spans the bounding box of the arrow's endpoints

use super::types::{LabelBox, Vector2};

pub fn label_box(start: Vector2, end: Vector2) -> LabelBox {
    LabelBox {
        label_width: (end.x - start.x).abs(),
        label_height: (end.y - start.y).abs(),
        x_label: nan_min(start.x, end.x),
        y_label: nan_min(start.y, end.y),
    }
}

// f64::min drops a NaN operand; a NaN coordinate has to reach the output
fn nan_min(a: f64, b: f64) -> f64 {
    if a.is_nan() || b.is_nan() {
        f64::NAN
    } else {
        a.min(b)
    }
}
