//! Card hover styles.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CardKind {
    Project,
    Skill,
}

impl CardKind {
    pub const ALL: [CardKind; 2] = [CardKind::Project, CardKind::Skill];

    pub fn selector(self) -> &'static str {
        match self {
            CardKind::Project => ".project-card",
            CardKind::Skill => ".skill-card",
        }
    }
}

/// Inline `transform` / `box-shadow` values. Empty strings clear the inline
/// style so the stylesheet takes over again.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CardStyle {
    pub transform: &'static str,
    pub box_shadow: &'static str,
}

pub fn card_hover_style(kind: CardKind, hovered: bool) -> CardStyle {
    match (kind, hovered) {
        (_, false) => CardStyle {
            transform: "",
            box_shadow: "",
        },
        (CardKind::Project, true) => CardStyle {
            transform: "translateY(-10px)",
            box_shadow: "0 20px 40px rgba(0,0,0,0.1)",
        },
        (CardKind::Skill, true) => CardStyle {
            transform: "translateY(-5px) scale(1.02)",
            box_shadow: "0 10px 30px rgba(0,0,0,0.08)",
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn leave_clears_inline_style() {
        for kind in CardKind::ALL {
            let style = card_hover_style(kind, false);
            assert!(style.transform.is_empty());
            assert!(style.box_shadow.is_empty());
            assert!(!card_hover_style(kind, true).transform.is_empty());
        }
    }

    #[test]
    fn project_cards_lift_further() {
        let project = card_hover_style(CardKind::Project, true);
        let skill = card_hover_style(CardKind::Skill, true);
        assert_ne!(project, skill);
        assert!(skill.transform.contains("scale"));
    }
}
