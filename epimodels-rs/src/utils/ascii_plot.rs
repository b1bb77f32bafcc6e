use crate::prelude::{Real, INF};

/// ASCII plot of a sequence of positive values.
///
/// Draw each point as a column filled with '*'s up to the maximum height.
pub fn render_vbars(values: &[Real], height: usize) -> String {
    if values.is_empty() || height == 0 {
        return String::new();
    }
    let max = values.iter().cloned().fold(-INF, |x, y| x.max(y));
    let step = max / height as Real;
    let mut out = String::with_capacity((values.len() + 1) * (height + 1));

    for i in 0..height + 1 {
        let h = (height - i) as Real * step;
        for &x in values {
            out.push(if x >= h { '*' } else { ' ' });
        }
        out.push('\n');
    }
    return out;
}

/// Print the output of render_vbars() to stdout.
pub fn plot_vbars(values: &[Real], height: usize) {
    print!("{}", render_vbars(values, height));
}

/// Shrink a series to at most `width` points, keeping the maximum of each
/// bucket so that peaks survive.
pub fn downsample(values: &[Real], width: usize) -> Vec<Real> {
    if width == 0 || values.len() <= width {
        return values.to_vec();
    }
    let size = (values.len() + width - 1) / width;
    values
        .chunks(size)
        .map(|chunk| chunk.iter().cloned().fold(-INF, |x, y| x.max(y)))
        .collect()
}
