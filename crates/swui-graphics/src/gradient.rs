//! Multi-stop gradients.

use std::fmt;

use crate::color::Color;
use crate::unit::{deg, format_f32};

/// A color at an optional position along the gradient line, as a fraction in `0.0..=1.0`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ColorStop {
    pub color: Color,
    pub position: Option<f32>,
}

impl fmt::Display for ColorStop {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.position {
            Some(position) => write!(
                f,
                "{} {}%",
                self.color,
                format_f32(position * 100.0)
            ),
            None => write!(f, "{}", self.color),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum GradientKind {
    /// Linear gradient along `angle` degrees (0 points up, 90 points right).
    Linear { angle: f64 },
    /// Circular gradient from the center outwards.
    Radial,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Gradient {
    kind: GradientKind,
    stops: Vec<ColorStop>,
}

impl Gradient {
    pub fn linear(angle: f64, colors: impl IntoIterator<Item = Color>) -> Self {
        Self::with_kind(GradientKind::Linear { angle }, colors)
    }

    pub fn radial(colors: impl IntoIterator<Item = Color>) -> Self {
        Self::with_kind(GradientKind::Radial, colors)
    }

    fn with_kind(kind: GradientKind, colors: impl IntoIterator<Item = Color>) -> Self {
        Self {
            kind,
            stops: colors
                .into_iter()
                .map(|color| ColorStop {
                    color,
                    position: None,
                })
                .collect(),
        }
    }

    /// Appends a stop pinned at `position`.
    pub fn stop(mut self, color: Color, position: f32) -> Self {
        self.stops.push(ColorStop {
            color,
            position: Some(position),
        });
        self
    }

    pub fn kind(&self) -> GradientKind {
        self.kind
    }

    pub fn stops(&self) -> &[ColorStop] {
        &self.stops
    }
}

impl fmt::Display for Gradient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            GradientKind::Linear { angle } => {
                write!(f, "linear-gradient({}", deg(angle))?
            }
            GradientKind::Radial => write!(f, "radial-gradient(circle")?,
        }
        for stop in &self.stops {
            write!(f, ", {stop}")?;
        }
        write!(f, ")")
    }
}
