//! ASCII plots for terminal output.

/// Plot a series of values as ASCII art.
pub fn plot_series(values: &[f32], title: &str, width: usize, height: usize) -> String {
    if values.is_empty() || width < 10 || height < 5 {
        return format!("{}: no data or dimensions too small", title);
    }

    let min_val = values.iter().copied().fold(f32::INFINITY, f32::min);
    let max_val = values.iter().copied().fold(f32::NEG_INFINITY, f32::max);

    if (max_val - min_val).abs() < f32::EPSILON {
        return format!("{}: all values are {:.4}", title, min_val);
    }

    let mut plot = vec![vec![' '; width]; height];

    for row in plot.iter_mut() {
        row[0] = '|';
    }
    for j in 0..width {
        plot[height - 1][j] = '-';
    }
    plot[height - 1][0] = '+';

    let x_scale = (values.len().max(2) - 1) as f32 / (width - 3) as f32;
    let y_scale = (height - 3) as f32 / (max_val - min_val);

    for (i, &value) in values.iter().enumerate() {
        let x = ((i as f32 / x_scale) as usize + 2).min(width - 1);
        let y = (height - 3).saturating_sub(((value - min_val) * y_scale) as usize).min(height - 2);
        plot[y][x] = '*';
    }

    let mut output = format!("{}\n", title);
    output.push_str(&format!("max: {:.4}\n", max_val));
    for row in plot.iter() {
        output.push_str(&row.iter().collect::<String>());
        output.push('\n');
    }
    output.push_str(&format!("min: {:.4}  points: {}\n", min_val, values.len()));

    output
}

/// Horizontal bar chart of MSE per lambda.
pub fn plot_lambda_sweep(points: &[(f32, f32)], title: &str, width: usize) -> String {
    if points.is_empty() {
        return format!("{}: no data", title);
    }

    let max_mse = points.iter().map(|&(_, mse)| mse).fold(f32::NEG_INFINITY, f32::max);
    let scale = if max_mse > 0.0 { width as f32 / max_mse } else { 0.0 };

    let mut output = format!("{}\n", title);
    for &(lambda, mse) in points {
        let bar_len = (mse * scale) as usize;
        output.push_str(&format!(
            "lambda {:.1} | {} {:.4}\n",
            lambda,
            "*".repeat(bar_len),
            mse
        ));
    }
    output
}
