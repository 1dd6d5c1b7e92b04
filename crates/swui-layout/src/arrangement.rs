//! Main-axis distribution of children.

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Distribution {
    Start,
    #[default]
    Center,
    End,
    SpaceBetween,
    SpaceAround,
    SpaceEvenly,
}

impl Distribution {
    /// The `justify-content` token for this distribution.
    pub fn justify_content(self) -> &'static str {
        match self {
            Distribution::Start => "flex-start",
            Distribution::Center => "center",
            Distribution::End => "flex-end",
            Distribution::SpaceBetween => "space-between",
            Distribution::SpaceAround => "space-around",
            Distribution::SpaceEvenly => "space-evenly",
        }
    }
}
