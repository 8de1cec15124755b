use crate::Color;
use serde::{Deserialize, Serialize};

/// Gradient stop
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct GradientStop {
    pub offset: f32,
    pub color: Color,
}

impl GradientStop {
    pub fn new(offset: f32, color: Color) -> Self {
        Self { offset, color }
    }
}

/// Ordered list of color stops; geometry is left to the renderer
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Gradient {
    pub stops: Vec<GradientStop>,
}

impl Gradient {
    pub fn new(stops: Vec<GradientStop>) -> Self {
        Self { stops }
    }

    /// Spread `colors` evenly from offset 0.0 to 1.0
    pub fn from_colors(colors: impl IntoIterator<Item = Color>) -> Self {
        let colors: Vec<Color> = colors.into_iter().collect();
        let last = colors.len().saturating_sub(1);
        let stops = colors
            .into_iter()
            .enumerate()
            .map(|(i, color)| {
                let offset = if last == 0 {
                    0.0
                } else {
                    i as f32 / last as f32
                };
                GradientStop::new(offset, color)
            })
            .collect();
        Self { stops }
    }

    pub fn colors(&self) -> impl Iterator<Item = Color> + '_ {
        self.stops.iter().map(|s| s.color)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn evenly_spaced_stops() {
        let g = Gradient::from_colors([Color::WHITE, Color::BLACK, Color::WHITE]);
        let offsets: Vec<f32> = g.stops.iter().map(|s| s.offset).collect();
        assert_eq!(offsets, vec![0.0, 0.5, 1.0]);
    }

    #[test]
    fn single_color_sits_at_zero() {
        let g = Gradient::from_colors([Color::WHITE]);
        assert_eq!(g.stops, vec![GradientStop::new(0.0, Color::WHITE)]);
        assert!(Gradient::from_colors([]).stops.is_empty());
    }
}
