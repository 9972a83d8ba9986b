use crate::utils::parse_field;
use web_sys::HtmlInputElement;
use yew::prelude::*;

/// Holds the state and callbacks for one duration input field.
#[derive(Clone)]
pub struct DurationField {
    /// The current text content of the input field.
    pub text: String,
    /// The field coerced to a number; malformed input reads as 0.
    pub value: u32,
    /// Callback for the input's `oninput` event.
    pub oninput: Callback<InputEvent>,
}

/// Custom hook backing the minutes/seconds fields of the settings modal.
///
/// Unlike a validating input there is no error state to manage: whatever
/// the user types is kept as text, and the committed value is the lenient
/// numeric reading of it (empty or non-numeric input counts as 0).
#[hook]
pub fn use_duration_field(initial: u32) -> DurationField {
    let text_handle: UseStateHandle<String> = use_state(|| initial.to_string());

    let oninput = {
        let text_setter = text_handle.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            text_setter.set(input.value());
        })
    };

    DurationField {
        value: parse_field(text_handle.as_str()),
        text: (*text_handle).clone(),
        oninput,
    }
}
