use dioxus::prelude::*;

/// A labeled amount row: a decimal text input followed by its currency picker.
///
/// The text is passed through untouched; partial or non-numeric input is
/// allowed and handled by the converter. Without `on_input` the field is
/// read-only.
#[component]
pub fn AmountField(
    label: String,
    value: String,
    placeholder: String,
    on_input: Option<EventHandler<String>>,
    children: Element,
) -> Element {
    let read_only = on_input.is_none();

    let focus_css = r#"
        input.hide-placeholder-focus:focus::placeholder {
            color: transparent;
            opacity: 0;
        }
    "#;

    rsx! {
        style { "{focus_css}" }
        label {
            style: "font-size: 0.875rem; color: var(--pico-muted-color);",
            "{label}"
            div {
                style: "
                    display: flex;
                    align-items: center;
                    gap: 0.75rem;
                    border: 1px solid var(--pico-muted-border-color);
                    border-radius: 1rem;
                    padding: 0.5rem 0.75rem;
                    margin-top: 0.5rem;
                ",
                input {
                    r#type: "text",
                    class: "hide-placeholder-focus",
                    style: "margin-bottom: 0; flex-grow: 1; border: 0; box-shadow: none;",
                    inputmode: "decimal",
                    placeholder: "{placeholder}",
                    value: "{value}",
                    readonly: read_only,
                    oninput: move |event| {
                        if let Some(handler) = &on_input {
                            handler.call(event.value());
                        }
                    },
                }
                {children}
            }
        }
    }
}
