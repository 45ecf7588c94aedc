//! Card hover effects.

use crate::dom::{self, Elements};
use crate::events::listen;
use pf_core::{CardKind, card_hover_style};
use web_sys::Element;

pub fn bind(els: &Elements) {
    for kind in CardKind::ALL {
        let cards = match kind {
            CardKind::Project => &els.project_cards,
            CardKind::Skill => &els.skill_cards,
        };
        for card in cards {
            for (event, hovered) in [("mouseenter", true), ("mouseleave", false)] {
                let target = card.clone();
                listen(card, event, move |_| apply(&target, kind, hovered));
            }
        }
    }
}

fn apply(card: &Element, kind: CardKind, hovered: bool) {
    let style = card_hover_style(kind, hovered);
    dom::set_style(card, "transform", style.transform);
    dom::set_style(card, "box-shadow", style.box_shadow);
}
