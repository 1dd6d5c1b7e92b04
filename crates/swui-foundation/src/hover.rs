use swui_core::StyleMap;

/// Style preset applied while the pointer is over a view.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum HoverEffect {
    #[default]
    Default,
    Lift,
    Highlight,
    Scale,
}

impl HoverEffect {
    pub(crate) fn apply(self, style: &mut StyleMap) {
        match self {
            HoverEffect::Default => {
                style.insert("transform".into(), "translateY(-2px)".into());
                style.insert("box-shadow".into(), "0 4px 6px rgba(0, 0, 0, 0.1)".into());
            }
            HoverEffect::Lift => {
                style.insert("transform".into(), "translateY(-5px)".into());
                style.insert("box-shadow".into(), "0 10px 20px rgba(0, 0, 0, 0.2)".into());
            }
            HoverEffect::Highlight => {
                style.insert("transform".into(), "scale(1.05)".into());
            }
            HoverEffect::Scale => {
                style.insert("transform".into(), "scale(1.1)".into());
            }
        }
    }

    pub(crate) fn revert(style: &mut StyleMap) {
        style.insert("transform".into(), "none".into());
        style.insert("box-shadow".into(), "none".into());
    }
}
