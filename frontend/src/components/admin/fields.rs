//! Input bindings shared by the admin forms.

use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

pub fn bind_input(state: &UseStateHandle<String>) -> Callback<InputEvent> {
    let state = state.clone();
    Callback::from(move |e: InputEvent| {
        let input: HtmlInputElement = e.target_unchecked_into();
        state.set(input.value());
    })
}

pub fn bind_textarea(state: &UseStateHandle<String>) -> Callback<InputEvent> {
    let state = state.clone();
    Callback::from(move |e: InputEvent| {
        let input: HtmlTextAreaElement = e.target_unchecked_into();
        state.set(input.value());
    })
}

pub fn select_value(e: &Event) -> String {
    let select: HtmlSelectElement = e.target_unchecked_into();
    select.value()
}

/// Map a `<select>` value back to the option it was rendered from
pub fn pick<T: Copy>(options: &[T], value: &str, name: fn(&T) -> &'static str) -> Option<T> {
    options.iter().copied().find(|option| name(option) == value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::BorderRadius;

    #[test]
    fn test_pick() {
        assert_eq!(
            pick(&BorderRadius::ALL, "rounded-xl", BorderRadius::as_str),
            Some(BorderRadius::Rounded)
        );
        assert_eq!(pick(&BorderRadius::ALL, "rounded-full", BorderRadius::as_str), None);
    }
}
