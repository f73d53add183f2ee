//! Terminal stand-in for the dashboard's line chart: one sparkline row per
//! monthly series, all on a shared scale.

use itertools::Itertools;

use crate::{
    core::month::{Month, Monthly},
    quantity::energy::MegawattHours,
};

const BLOCKS: [char; 8] = ['▁', '▂', '▃', '▄', '▅', '▆', '▇', '█'];

/// Width of one month cell; matches the three-letter month labels.
const CELL: usize = 3;

pub fn render(series: &[(&str, &Monthly<MegawattHours>)]) -> String {
    let scale = series
        .iter()
        .flat_map(|(_, monthly)| monthly.iter())
        .copied()
        .max()
        .unwrap_or(MegawattHours::ZERO);

    let label_width = series.iter().map(|(name, _)| name.len()).max().unwrap_or(0) + 2;
    let mut lines = Vec::with_capacity(series.len() + 3);

    let axis = Month::ALL.iter().map(|month| month.label()).join(" ");
    lines.push(format!("{:label_width$}{axis}", ""));
    for (name, monthly) in series {
        let row = monthly
            .iter()
            .map(|value| glyph(*value, scale).to_string().repeat(CELL))
            .join(" ");
        lines.push(format!("{name:<label_width$}{row}"));
    }
    lines.push(String::new());
    lines.push(format!("{:label_width$}full bar ≈ {scale}", ""));
    lines.join("\n")
}

fn glyph(value: MegawattHours, scale: MegawattHours) -> char {
    if value <= MegawattHours::ZERO || scale <= MegawattHours::ZERO {
        return ' ';
    }
    let ratio = (value / scale).into_inner();

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let index = ((ratio * 7.0).round() as usize).min(7);
    BLOCKS[index]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_glyph_scales() {
        let scale = MegawattHours::new(400.0);
        assert_eq!(glyph(MegawattHours::ZERO, scale), ' ');
        assert_eq!(glyph(MegawattHours::new(1.0), scale), '▁');
        assert_eq!(glyph(scale, scale), '█');
    }

    #[test]
    fn test_render_layout() {
        let production = Monthly::from_fn(|month| {
            if month == Month::Jul { MegawattHours::ZERO } else { MegawattHours::new(225.0) }
        });
        let chart = render(&[("Production", &production)]);

        assert!(chart.contains("Jan Feb Mar"));
        assert!(chart.contains("Production"));
        assert!(chart.contains("full bar ≈ 225 MWh"));
        // July's cell stays blank: Jun, a blank cell, Aug.
        assert!(chart.contains("███     ███"));
    }
}
