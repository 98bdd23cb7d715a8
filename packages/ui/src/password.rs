use dioxus::prelude::*;

use crate::{icons, Icon};

/// Show/hide state of a password field.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PasswordVisibility {
    #[default]
    Hidden,
    Shown,
}

impl PasswordVisibility {
    pub fn toggled(self) -> Self {
        match self {
            Self::Hidden => Self::Shown,
            Self::Shown => Self::Hidden,
        }
    }

    /// `type` attribute of the input.
    pub fn input_type(self) -> &'static str {
        match self {
            Self::Hidden => "password",
            Self::Shown => "text",
        }
    }

    /// Font Awesome class of the toggle icon.
    pub fn icon_class(self) -> &'static str {
        match self {
            Self::Hidden => "fa-eye",
            Self::Shown => "fa-eye-slash",
        }
    }
}

/// Password input with an eye toggle.
#[component]
pub fn PasswordField(
    id: String,
    label: String,
    value: String,
    on_input: EventHandler<String>,
    #[props(default = "current-password".to_string())] autocomplete: String,
) -> Element {
    let mut visibility = use_signal(PasswordVisibility::default);
    let shown = visibility() == PasswordVisibility::Shown;
    let input_type = visibility().input_type();
    let icon_class = visibility().icon_class();

    rsx! {
        div {
            class: "form-field",
            label { r#for: "{id}", "{label}" }
            div {
                class: "password-wrapper",
                input {
                    id: "{id}",
                    r#type: input_type,
                    autocomplete: "{autocomplete}",
                    required: true,
                    value: "{value}",
                    oninput: move |evt: FormEvent| on_input.call(evt.value()),
                }
                button {
                    class: "toggle-password {icon_class}",
                    r#type: "button",
                    title: if shown { "Hide password" } else { "Show password" },
                    onclick: move |_| visibility.set(visibility().toggled()),
                    if shown {
                        Icon { icon: icons::FaEyeSlash, width: 16, height: 16 }
                    } else {
                        Icon { icon: icons::FaEye, width: 16, height: 16 }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_flips_type_and_icon() {
        let hidden = PasswordVisibility::default();
        assert_eq!((hidden.input_type(), hidden.icon_class()), ("password", "fa-eye"));

        let shown = hidden.toggled();
        assert_eq!((shown.input_type(), shown.icon_class()), ("text", "fa-eye-slash"));
        assert_eq!(shown.toggled(), hidden);
    }
}
