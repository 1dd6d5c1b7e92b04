//! Stack widget implementation

#![allow(non_snake_case)]

use swui_core::{create_view, AnyView, RenderStrategy, View, ViewKind, ViewOverrides};
use swui_foundation::LayoutBundle;
use swui_graphics::px;
use swui_layout::{Axis, CrossAlignment, Distribution};

use crate::adapters;

pub struct StackContent {
    pub children: Vec<AnyView>,
}

impl ViewKind for StackContent {
    const NAME: &'static str = "Stack";
}

/// Specification for stack layout behavior.
///
/// Unset fields are left out of the style so the host's flexbox defaults
/// apply.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StackSpec {
    pub axis: Axis,
    pub spacing: Option<f64>,
    pub align_items: Option<&'static str>,
    pub distribution: Option<Distribution>,
}

impl StackSpec {
    pub fn new(axis: Axis) -> Self {
        Self {
            axis,
            spacing: None,
            align_items: None,
            distribution: None,
        }
    }

    /// Column with children centered across.
    pub fn vertical() -> Self {
        Self {
            align_items: Some("center"),
            ..Self::new(Axis::Vertical)
        }
    }

    /// Row with children centered along.
    pub fn horizontal() -> Self {
        Self {
            distribution: Some(Distribution::Center),
            ..Self::new(Axis::Horizontal)
        }
    }

    pub fn spacing(mut self, spacing: f64) -> Self {
        self.spacing = Some(spacing);
        self
    }

    pub fn alignment(mut self, alignment: impl CrossAlignment) -> Self {
        self.align_items = Some(alignment.align_items());
        self
    }

    pub fn distribution(mut self, distribution: Distribution) -> Self {
        self.distribution = Some(distribution);
        self
    }

    fn overrides(&self) -> ViewOverrides {
        let mut overrides = ViewOverrides::new()
            .style("display", "flex")
            .style("flex-direction", self.axis.flex_direction());
        if let Some(spacing) = self.spacing {
            overrides = overrides.style("gap", px(spacing));
        }
        if let Some(align_items) = self.align_items {
            overrides = overrides.style("align-items", align_items);
        }
        if let Some(distribution) = self.distribution {
            overrides = overrides.style("justify-content", distribution.justify_content());
        }
        overrides
    }
}

impl Default for StackSpec {
    fn default() -> Self {
        Self::vertical()
    }
}

pub fn Stack(spec: StackSpec, children: Vec<AnyView>) -> View<StackContent, LayoutBundle> {
    create_view(
        RenderStrategy::new(adapters::render_stack),
        StackContent { children },
        spec.overrides(),
        LayoutBundle,
    )
}

pub fn VStack(children: Vec<AnyView>) -> View<StackContent, LayoutBundle> {
    Stack(StackSpec::vertical(), children)
}

pub fn HStack(children: Vec<AnyView>) -> View<StackContent, LayoutBundle> {
    Stack(StackSpec::horizontal(), children)
}

/// `vstack![a, b, c]` builds a [`VStack`] from views of any kind.
#[macro_export]
macro_rules! vstack {
    ($($child:expr),* $(,)?) => {
        $crate::VStack(::std::vec![$($crate::AnyView::from($child)),*])
    };
}

/// `hstack![a, b, c]` builds an [`HStack`] from views of any kind.
#[macro_export]
macro_rules! hstack {
    ($($child:expr),* $(,)?) => {
        $crate::HStack(::std::vec![$($crate::AnyView::from($child)),*])
    };
}
