//! Standalone SVG rendering of a palette: one labelled block per colour,
//! stacked top to bottom.

use crate::config::SvgConfig;
use crate::palette::Color;

fn block_step(cfg: &SvgConfig) -> u32 {
    cfg.block_height.saturating_add(cfg.spacing)
}

pub fn total_height(count: usize, cfg: &SvgConfig) -> u32 {
    u32::try_from(count)
        .unwrap_or(u32::MAX)
        .saturating_mul(block_step(cfg))
}

fn block(index: usize, color: Color, cfg: &SvgConfig) -> String {
    let width = cfg.width;
    let y = u32::try_from(index)
        .unwrap_or(u32::MAX)
        .saturating_mul(block_step(cfg));
    let fg = color.text_color().color();
    format!(
        concat!(
            "  <g transform=\"translate(0, {y})\">\n",
            "    <rect width=\"{width}\" height=\"{height}\" fill=\"{color}\"/>\n",
            "    <text x=\"{x}\" y=\"{label_y}\" dy=\"0.35em\" text-anchor=\"middle\" fill=\"{fg}\" ",
            "font-family=\"monospace\" font-size=\"14px\" font-weight=\"bold\">{color}</text>\n",
            "  </g>\n",
        ),
        y = y,
        width = width,
        height = cfg.block_height,
        color = color,
        x = f64::from(width) / 2.0,
        label_y = f64::from(cfg.block_height) / 2.0,
        fg = fg,
    )
}

pub fn render(palette: &[Color], cfg: &SvgConfig) -> String {
    let width = cfg.width;
    let height = total_height(palette.len(), cfg);

    let mut out = format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{width}" height="{height}" viewBox="0 0 {width} {height}">"#
    );
    out.push('\n');
    for (i, color) in palette.iter().enumerate() {
        out.push_str(&block(i, *color, cfg));
    }
    out.push_str("</svg>\n");
    out
}
