//! Named color palettes and the page-wide theme state.

use std::rc::Rc;

use yew::prelude::*;

use crate::dom;
use crate::error::DomError;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Palette {
    pub name: &'static str,
    pub primary: &'static str,
    pub bg: &'static str,
    pub text: &'static str,
}

pub const PALETTES: [Palette; 4] = [
    Palette {
        name: "Volcano",
        primary: "#E1522F",
        bg: "#222222",
        text: "#ffffff",
    },
    Palette {
        name: "Neon",
        primary: "#CCFF00",
        bg: "#0a0a0a",
        text: "#ffffff",
    },
    Palette {
        name: "Ocean",
        primary: "#00F0FF",
        bg: "#051a24",
        text: "#ffffff",
    },
    Palette {
        name: "Crimson",
        primary: "#FF003C",
        bg: "#1a0505",
        text: "#ffffff",
    },
];

/// Every variable a palette owns. All of them are written on each change.
pub fn css_variables(palette: &Palette) -> [(&'static str, String); 4] {
    [
        ("--primary", palette.primary.to_string()),
        ("--bg-color", palette.bg.to_string()),
        ("--text-color", palette.text.to_string()),
        ("--primary-dim", format!("{}40", palette.primary)),
    ]
}

pub fn apply(palette: &Palette) -> Result<(), DomError> {
    for (name, value) in css_variables(palette) {
        dom::set_root_variable(name, &value)?;
    }
    Ok(())
}

pub enum ThemeAction {
    Select(usize),
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ThemeState {
    active: usize,
}

impl ThemeState {
    pub fn active_index(&self) -> usize {
        self.active
    }

    pub fn palette(&self) -> &'static Palette {
        &PALETTES[self.active]
    }
}

impl Reducible for ThemeState {
    type Action = ThemeAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            ThemeAction::Select(index) if index < PALETTES.len() && index != self.active => {
                Rc::new(ThemeState { active: index })
            }
            ThemeAction::Select(_) => self,
        }
    }
}

pub type ThemeContext = UseReducerHandle<ThemeState>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn applied(states: &[&Palette]) -> HashMap<&'static str, String> {
        let mut root = HashMap::new();
        for palette in states {
            root.extend(css_variables(palette));
        }
        root
    }

    #[test]
    fn default_is_first_palette() {
        assert_eq!(ThemeState::default().palette().name, "Volcano");
    }

    #[test]
    fn select_switches_palette() {
        let state = Rc::new(ThemeState::default()).reduce(ThemeAction::Select(2));
        assert_eq!(state.palette().name, "Ocean");
    }

    #[test]
    fn out_of_range_selection_is_ignored() {
        let state = Rc::new(ThemeState::default()).reduce(ThemeAction::Select(9));
        assert_eq!(state.active_index(), 0);
    }

    #[test]
    fn later_palette_replaces_every_variable() {
        let root = applied(&[&PALETTES[1], &PALETTES[3]]);
        assert_eq!(root, applied(&[&PALETTES[3]]));
        assert_eq!(root["--primary-dim"], "#FF003C40");
        assert_eq!(root["--bg-color"], "#1a0505");
    }

    #[test]
    fn dim_variant_appends_alpha() {
        let vars = css_variables(&PALETTES[0]);
        assert!(vars.contains(&("--primary-dim", "#E1522F40".to_string())));
    }
}
