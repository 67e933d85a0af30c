//! Pricing screen - View Model

use leptos::prelude::*;

/// Fixed one-tap budget shortcuts.
pub const QUICK_PRICES: [&str; 3] = ["500", "1000", "1500"];

/// Keypad entry is capped at this many digits.
pub const MAX_PRICE_DIGITS: usize = 6;

/// Keypad entry state.
#[derive(Clone, Copy)]
pub struct PricingVm {
    pub entered: RwSignal<String>,
}

impl PricingVm {
    pub fn new() -> Self {
        Self {
            entered: RwSignal::new(String::new()),
        }
    }

    /// Append a digit; input past the cap is dropped.
    pub fn push_digit(&self, digit: char) {
        self.entered.update(|entered| {
            if entered.len() < MAX_PRICE_DIGITS {
                entered.push(digit);
            }
        });
    }

    pub fn backspace(&self) {
        self.entered.update(|entered| {
            entered.pop();
        });
    }

    pub fn clear(&self) {
        self.entered.set(String::new());
    }

    /// Confirm the entry: returns the price and resets, `None` while empty.
    pub fn take(&self) -> Option<String> {
        let entered = self.entered.get_untracked();
        if entered.is_empty() {
            return None;
        }
        self.entered.set(String::new());
        Some(entered)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use leptos::prelude::Owner;

    #[test]
    fn test_digits_cap_at_six() {
        let owner = Owner::new();
        owner.set();

        let vm = PricingVm::new();
        for digit in "12345678".chars() {
            vm.push_digit(digit);
        }
        assert_eq!(vm.entered.get_untracked(), "123456");
    }

    #[test]
    fn test_backspace_and_clear() {
        let owner = Owner::new();
        owner.set();

        let vm = PricingVm::new();
        vm.push_digit('7');
        vm.push_digit('5');
        vm.push_digit('0');
        vm.backspace();
        assert_eq!(vm.entered.get_untracked(), "75");

        vm.clear();
        assert_eq!(vm.entered.get_untracked(), "");
        // Backspace on empty entry stays a no-op.
        vm.backspace();
        assert_eq!(vm.entered.get_untracked(), "");
    }

    #[test]
    fn test_take_requires_a_non_empty_entry() {
        let owner = Owner::new();
        owner.set();

        let vm = PricingVm::new();
        assert_eq!(vm.take(), None);

        vm.push_digit('7');
        vm.push_digit('5');
        vm.push_digit('0');
        assert_eq!(vm.take(), Some("750".to_string()));
        assert_eq!(vm.entered.get_untracked(), "");
    }
}
