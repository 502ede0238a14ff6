//! Product option button groups.
//!
//! Each group is a set of mutually exclusive buttons; selecting one
//! deactivates its siblings and updates the group's label. The board tracks
//! selections only: it does not resolve the chosen combination to a
//! purchasable variant, and price/availability stay untouched. That mapping
//! needs the product's variant catalog, which lives outside this layer.

/// One selectable value within a group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionButton {
    pub value: String,
    pub disabled: bool,
}

/// A group of mutually exclusive buttons; at most one is active.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OptionGroup {
    pub buttons: Vec<OptionButton>,
    active: Option<usize>,
}

impl OptionGroup {
    pub fn new(buttons: Vec<OptionButton>, active: Option<usize>) -> Self {
        let active = active.filter(|&i| i < buttons.len());
        Self { buttons, active }
    }

    pub fn active(&self) -> Option<usize> {
        self.active
    }

    pub fn selected_value(&self) -> Option<&str> {
        self.active.map(|i| self.buttons[i].value.as_str())
    }

    /// Label text shown next to the group name, parenthesized.
    pub fn label(&self) -> Option<String> {
        self.selected_value().map(|v| format!("({v})"))
    }
}

/// All option groups on the product page, in markup order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OptionBoard {
    pub groups: Vec<OptionGroup>,
}

impl OptionBoard {
    pub fn new(groups: Vec<OptionGroup>) -> Self {
        Self { groups }
    }

    /// Activate `button` in `group`, deactivating its siblings. Disabled
    /// buttons and out-of-range indices leave the board unchanged; the
    /// return value says whether anything moved.
    pub fn select(&mut self, group: usize, button: usize) -> bool {
        let Some(g) = self.groups.get_mut(group) else {
            return false;
        };
        let Some(b) = g.buttons.get(button) else {
            return false;
        };
        if b.disabled {
            return false;
        }
        g.active = Some(button);
        true
    }

    /// The chosen value per group, in group order; `None` where nothing is
    /// selected yet.
    pub fn selected_values(&self) -> Vec<Option<&str>> {
        self.groups.iter().map(OptionGroup::selected_value).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn button(value: &str) -> OptionButton {
        OptionButton {
            value: value.into(),
            disabled: false,
        }
    }

    fn disabled(value: &str) -> OptionButton {
        OptionButton {
            value: value.into(),
            disabled: true,
        }
    }

    fn board() -> OptionBoard {
        OptionBoard::new(vec![
            OptionGroup::new(vec![button("S"), button("M"), disabled("L")], None),
            OptionGroup::new(vec![button("Red"), button("Blue")], Some(0)),
        ])
    }

    #[test]
    fn selection_is_mutually_exclusive_within_a_group() {
        let mut b = board();
        assert!(b.select(0, 0));
        assert!(b.select(0, 1));
        assert_eq!(b.groups[0].active(), Some(1));
        // Only ever one active index per group, by construction.
        assert_eq!(b.selected_values(), vec![Some("M"), Some("Red")]);
    }

    #[test]
    fn disabled_button_is_a_no_op() {
        let mut b = board();
        b.select(0, 1);
        assert!(!b.select(0, 2));
        assert_eq!(b.groups[0].active(), Some(1));
    }

    #[test]
    fn out_of_range_indices_are_no_ops() {
        let mut b = board();
        assert!(!b.select(5, 0));
        assert!(!b.select(0, 9));
        assert_eq!(b, board());
    }

    #[test]
    fn label_wraps_value_in_parens() {
        let mut b = board();
        assert_eq!(b.groups[0].label(), None);
        b.select(0, 0);
        assert_eq!(b.groups[0].label().as_deref(), Some("(S)"));
        assert_eq!(b.groups[1].label().as_deref(), Some("(Red)"));
    }

    #[test]
    fn initial_active_out_of_range_is_discarded() {
        let g = OptionGroup::new(vec![button("S")], Some(3));
        assert_eq!(g.active(), None);
    }

    #[test]
    fn selections_stay_exclusive_over_any_click_sequence() {
        let mut b = board();
        for (group, button) in [(0, 0), (0, 2), (1, 1), (0, 1), (1, 0), (0, 9)] {
            b.select(group, button);
            for g in &b.groups {
                // active is a single Option<usize>: zero or one marker.
                if let Some(i) = g.active() {
                    assert!(i < g.buttons.len());
                    assert!(!g.buttons[i].disabled);
                }
            }
        }
        assert_eq!(b.selected_values(), vec![Some("M"), Some("Red")]);
    }
}
